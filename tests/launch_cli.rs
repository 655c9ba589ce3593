use std::process::Command;

/// The test binary directory has no virtualenv next to the launcher
#[test]
fn test_missing_interpreter_exits_one() {
    let cwd = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(cwd.path().join("venv/bin")).unwrap();
    std::fs::write(cwd.path().join("venv/bin/python"), "").unwrap();
    std::fs::write(cwd.path().join("youtube_download.py"), "").unwrap();

    // A venv in the working directory must not be picked up
    let output = Command::new(env!("CARGO_BIN_EXE_launch"))
        .current_dir(cwd.path())
        .env_remove("CLIP_TOOLS_CONFIG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Python interpreter not found"));
}
