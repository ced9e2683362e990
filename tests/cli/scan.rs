use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_group_and_all() -> Result<()> {
    let test = CliTest::new()?;
    test.write_executable("bin/app", "")?;
    test.write_file("share/readme.txt", "not scanned")?;

    let mut cmd = test.scan_command();
    cmd.arg("-g").arg("-a");
    let base = test.base_pattern();

    insta::with_settings!({filters => vec![(base.as_str(), "[BASE]")]}, {
        assert_cmd_snapshot!(cmd, @r"
success: true
exit_code: 0
----- stdout -----

dependencies for [BASE]/root/bin/app: ================================>
    libc.so.6 => /lib/libc.so.6
    libfoo.so => not found

all dependencies: ================================>
    libc.so.6
    libfoo.so

not found dependencies for [BASE]/root/bin/app: ================================>
    libfoo.so => not found

no external libs found...

no useless libs found...

----- stderr -----
");
    });

    Ok(())
}

#[test]
fn test_library_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_executable("bin/app", "")?;
    test.write_outside("lib/libc.so.6", "")?;
    test.write_outside("lib/libunused.so", "")?;
    test.write_outside("lib/README", "")?;

    let mut cmd = test.scan_command();
    cmd.arg("--lpath").arg(test.path("lib"));
    let base = test.base_pattern();

    insta::with_settings!({filters => vec![(base.as_str(), "[BASE]")]}, {
        assert_cmd_snapshot!(cmd, @r"
success: true
exit_code: 0
----- stdout -----

not found dependencies for [BASE]/root/bin/app: ================================>
    libfoo.so => not found

external dependencies: ================================>
    libfoo.so

useless dependencies: ================================>
    libunused.so

----- stderr -----
");
    });

    Ok(())
}

#[test]
fn test_shared_library_without_exec_bit() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lib/libbar.so", "")?;

    let mut cmd = test.scan_command();
    cmd.arg("--all");

    assert_cmd_snapshot!(cmd, @r"
success: true
exit_code: 0
----- stdout -----

all dependencies: ================================>
    libc.so.6
    linux-vdso.so.1

no missing libs found...

no external libs found...

no useless libs found...

----- stderr -----
");

    Ok(())
}

#[test]
fn test_resolver_failure_is_not_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("data.so", "")?;
    test.write_executable("run.sh", "#!/bin/sh\n")?;

    let mut cmd = test.scan_command();
    cmd.arg("-g").arg("-a");

    assert_cmd_snapshot!(cmd, @r"
success: true
exit_code: 0
----- stdout -----

all dependencies: ================================>

no missing libs found...

no external libs found...

no useless libs found...

----- stderr -----
");

    Ok(())
}

#[test]
fn test_empty_root() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.scan_command(), @r"
success: true
exit_code: 0
----- stdout -----

no missing libs found...

no external libs found...

no useless libs found...

----- stderr -----
");

    Ok(())
}

#[test]
fn test_ignore_pattern() -> Result<()> {
    let test = CliTest::new()?;
    test.write_executable("bin/app", "")?;
    test.write_executable("vendor/app", "")?;

    let mut cmd = test.scan_command();
    cmd.arg("-g").arg("--ignore").arg("**/vendor/**");
    let base = test.base_pattern();

    insta::with_settings!({filters => vec![(base.as_str(), "[BASE]")]}, {
        assert_cmd_snapshot!(cmd, @r"
success: true
exit_code: 0
----- stdout -----

dependencies for [BASE]/root/bin/app: ================================>
    libc.so.6 => /lib/libc.so.6
    libfoo.so => not found

not found dependencies for [BASE]/root/bin/app: ================================>
    libfoo.so => not found

no external libs found...

no useless libs found...

----- stderr -----
");
    });

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::new()?;
    test.write_executable("bin/app", "")?;
    test.write_outside("lib/libc.so.6", "")?;

    let (output, stdout, stderr) = run(test
        .scan_command()
        .arg("--format")
        .arg("json")
        .arg("-l")
        .arg(test.path("lib")))?;
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    let app = test.root().join("bin").join("app").display().to_string();

    assert!(output.status.success());
    assert_eq!(stderr, "");
    assert_eq!(value["unique"], serde_json::json!(["libc.so.6", "libfoo.so"]));
    assert_eq!(
        value["notFound"][app.as_str()],
        serde_json::json!(["libfoo.so => not found"])
    );
    assert_eq!(value["external"], serde_json::json!(["libfoo.so"]));
    assert_eq!(value["useless"], serde_json::json!([]));

    Ok(())
}

#[test]
fn test_prints_execution_time() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.scan_command();
    cmd.env_remove("LDW_DISABLE_TIMING");

    let (_, stdout, _) = run(&mut cmd)?;
    let last = stdout.lines().last().unwrap_or_default();

    assert!(last.starts_with("script execution: "), "{stdout}");
    assert!(last.ends_with(" ms"), "{stdout}");

    Ok(())
}

#[test]
fn test_json_execution_time_on_stderr() -> Result<()> {
    let test = CliTest::new()?;
    test.write_executable("bin/app", "")?;
    let mut cmd = test.scan_command();
    cmd.arg("--format").arg("json").env_remove("LDW_DISABLE_TIMING");

    let (output, stdout, stderr) = run(&mut cmd)?;
    let value: serde_json::Value = serde_json::from_str(&stdout)?;

    assert!(output.status.success());
    assert_eq!(value["unique"], serde_json::json!(["libc.so.6", "libfoo.so"]));
    assert!(!stdout.contains("script execution"), "{stdout}");
    assert!(stderr.starts_with("script execution: "), "{stderr}");
    assert!(stderr.trim_end().ends_with(" ms"), "{stderr}");

    Ok(())
}

#[test]
fn test_verbose_summary() -> Result<()> {
    let test = CliTest::new()?;
    test.write_executable("bin/app", "")?;
    test.write_file("notes.txt", "")?;

    let (_, _, stderr) = run(test.scan_command().arg("-v"))?;

    assert!(stderr.contains("info: 1 file scanned, 0 entries skipped"), "{stderr}");

    Ok(())
}

#[test]
fn test_invalid_root() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.arg(test.path("missing"));

    let (output, stdout, stderr) = run(&mut cmd)?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout, "");
    assert!(stderr.starts_with("Error: "), "{stderr}");
    assert!(stderr.contains("Invalid root directory"), "{stderr}");

    Ok(())
}

#[test]
fn test_missing_library_path() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.scan_command();
    cmd.arg("-l").arg(test.path("nope"));

    let (output, _, stderr) = run(&mut cmd)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Cannot read library directory"), "{stderr}");

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let (output, stdout, _) = run(test.command().arg("--help"))?;

    assert!(output.status.success());
    assert!(stdout.contains("--lpath <DIR>"));
    assert!(stdout.contains("--group"));
    assert!(stdout.contains("--all"));

    Ok(())
}
