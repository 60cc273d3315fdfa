// tests/common.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn promptctx_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("promptctx"));
    cmd.env_remove("PROMPTCTX_PROJECT_ROOT")
        .env_remove("PROMPTCTX_DATA_DIR");
    cmd
}

/// A command scanning `root` as its own project root, writing to `<root>/out`,
/// with the clipboard disabled.
#[allow(dead_code)]
pub fn pack_cmd(root: &Path) -> Command {
    let mut cmd = promptctx_cmd();
    cmd.arg(root)
        .arg("--no-clipboard")
        .arg("--project-root")
        .arg(root)
        .arg("--data-dir")
        .arg(out_dir(root));
    cmd
}

#[allow(dead_code)]
pub fn out_dir(root: &Path) -> PathBuf {
    root.join("out")
}

/// Reads an artifact written by [`pack_cmd`].
#[allow(dead_code)]
pub fn read_artifact(root: &Path, file_name: &str) -> Result<String, Box<dyn std::error::Error>> {
    Ok(fs::read_to_string(out_dir(root).join(file_name))?)
}

#[allow(dead_code)]
pub fn create_file(
    dir_path: &Path,
    relative_path: &str,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = dir_path.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(())
}
