use std::process::{Command, Output};

use fetch_sizes::MAX_CONCURRENCY_ENV;

const UNREACHABLE: &str = "http://127.0.0.1:1/unreachable";

fn fetch_sizes(args: &[&str], envs: &[(&str, &str)]) -> anyhow::Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_fetch-sizes"))
        .args(args)
        .env_remove(MAX_CONCURRENCY_ENV)
        .env("RUST_LOG", "warn")
        .env("NO_COLOR", "1")
        .envs(envs.iter().copied())
        .output()?;
    Ok(output)
}

#[test]
fn test_no_urls_prints_nothing() -> anyhow::Result<()> {
    let output = fetch_sizes(&[], &[])?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_failed_fetch_still_exits_zero() -> anyhow::Result<()> {
    let output = fetch_sizes(&[UNREACHABLE, "not a url"], &[])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(2, lines.len());
    assert!(lines.contains(&"not a url error: invalid url: not a url"));
    assert!(lines
        .iter()
        .any(|line| line.starts_with(&format!("{UNREACHABLE} error: "))));

    // Logs go to stderr only.
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("fetch failed"));
    assert!(!stdout.contains("fetch failed"));
    Ok(())
}

#[test]
fn test_invalid_concurrency_env_is_ignored() -> anyhow::Result<()> {
    let output = fetch_sizes(
        &[UNREACHABLE],
        &[(MAX_CONCURRENCY_ENV, "2305843009213693952")],
    )?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(1, stdout.lines().count());
    assert!(String::from_utf8(output.stderr)?.contains(MAX_CONCURRENCY_ENV));
    Ok(())
}
