//! Integration tests for the stdin-to-CSV pipeline
//!
//! These tests spawn the built binary and exercise the full workflow:
//! - Reading JSON from stdin
//! - Resolving OUTPUT_DIRECTORY from the environment
//! - Writing result.csv, or exiting with the documented error codes

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

fn run_jsontab(input: &str, output_dir: Option<&Path>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jsontab"));
    cmd.env_remove("OUTPUT_DIRECTORY");
    if let Some(dir) = output_dir {
        cmd.env("OUTPUT_DIRECTORY", dir);
    }
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn().expect("failed to spawn jsontab");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for jsontab")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    /// Happy path: nested document in, result.csv out, nothing on stdout
    #[test]
    fn test_success_writes_result_csv() {
        let dir = tempdir().unwrap();
        let output = run_jsontab(r#"{"x": {"y": 1}, "z": [true, false]}"#, Some(dir.path()));

        assert!(output.status.success(), "stderr: {}", stderr_of(&output));
        assert!(output.stdout.is_empty(), "stdout should carry no data");

        let written = std::fs::read_to_string(dir.path().join("result.csv")).unwrap();
        assert_eq!(written, "x.y,z.0,z.1\n1,true,false\n");
    }

    /// Records with uneven shapes come out as one row each, null-padded
    #[test]
    fn test_success_with_record_array() {
        let dir = tempdir().unwrap();
        let input = r#"[{"id": 1, "name": "Alice"}, {"id": 2, "extra": "x"}]"#;
        let output = run_jsontab(input, Some(dir.path()));

        assert!(output.status.success(), "stderr: {}", stderr_of(&output));

        let written = std::fs::read_to_string(dir.path().join("result.csv")).unwrap();
        assert_eq!(written, "id,name,extra\n1,Alice,\n2,,x\n");
    }

    /// An existing result file is overwritten
    #[test]
    fn test_success_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("result.csv");
        std::fs::write(&target, "stale").unwrap();

        let output = run_jsontab(r#"{"a": 1}"#, Some(dir.path()));

        assert!(output.status.success(), "stderr: {}", stderr_of(&output));
        assert_eq!(std::fs::read_to_string(target).unwrap(), "a\n1\n");
    }

    /// Missing OUTPUT_DIRECTORY is a configuration error: exit code 1
    #[test]
    fn test_missing_output_directory_variable() {
        let output = run_jsontab(r#"{"a": 1}"#, None);

        assert_eq!(output.status.code(), Some(1));
        assert!(
            stderr_of(&output).contains("OUTPUT_DIRECTORY"),
            "stderr should name the variable: {}",
            stderr_of(&output)
        );
    }

    /// Malformed JSON is an input error: exit code 2, no file written
    #[test]
    fn test_invalid_json_input() {
        let dir = tempdir().unwrap();
        let output = run_jsontab(r#"{"a": }"#, Some(dir.path()));

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr_of(&output).contains("invalid JSON"));
        assert!(!dir.path().join("result.csv").exists());
    }

    /// Empty stdin is an input error as well
    #[test]
    fn test_empty_input() {
        let dir = tempdir().unwrap();
        let output = run_jsontab("", Some(dir.path()));

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr_of(&output).contains("empty"));
        assert!(!dir.path().join("result.csv").exists());
    }

    /// An array of scalars is a shape error: exit code 3, no file written
    #[test]
    fn test_array_of_scalars_input() {
        let dir = tempdir().unwrap();
        let output = run_jsontab("[1, 2, 3]", Some(dir.path()));

        assert_eq!(output.status.code(), Some(3));
        assert!(stderr_of(&output).contains("not an object"));
        assert!(!dir.path().join("result.csv").exists());
    }

    /// A bare scalar document is a shape error too
    #[test]
    fn test_scalar_input() {
        let dir = tempdir().unwrap();
        let output = run_jsontab("42", Some(dir.path()));

        assert_eq!(output.status.code(), Some(3));
        assert!(stderr_of(&output).contains("unsupported top-level"));
        assert!(!dir.path().join("result.csv").exists());
    }

    /// A nonexistent output directory surfaces as a write error: exit code 4
    #[test]
    fn test_missing_output_directory_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");
        let output = run_jsontab(r#"{"a": 1}"#, Some(missing.as_path()));

        assert_eq!(output.status.code(), Some(4));
        assert!(!missing.exists());
    }

    /// An empty top-level array still succeeds with an empty result file
    #[test]
    fn test_empty_record_array() {
        let dir = tempdir().unwrap();
        let output = run_jsontab("[]", Some(dir.path()));

        assert!(output.status.success(), "stderr: {}", stderr_of(&output));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("result.csv")).unwrap(),
            ""
        );
    }
}
