mod common; // Declare the common module

use assert_cmd::prelude::*;
use common::{create_file, pack_cmd, promptctx_cmd, read_artifact};
use predicates::prelude::*;
use tempfile::tempdir;

const PY_ARTIFACT: &str = "all_project_code_no_notebooks_no_empty_py.txt";

#[test]
fn test_gitignored_file_is_left_out() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path();
    create_file(root, ".gitignore", "b.py\n")?;
    create_file(root, "a.py", "print('a')\n")?;
    create_file(root, "b.py", "print('b')\n")?;

    pack_cmd(root).args(["-e", "py"]).assert().success();

    let text = read_artifact(root, PY_ARTIFACT)?;
    assert_eq!(text, "a.py\n```py\nprint('a')\n```\n\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_success_message_names_output_and_history() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path();
    create_file(root, "a.py", "x = 1\n")?;

    pack_cmd(root)
        .args(["-e", "py"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "All specified files have been written to",
        ))
        .stdout(predicate::str::contains(PY_ARTIFACT))
        .stdout(predicate::str::contains("(clipboard unavailable)"))
        .stdout(predicate::str::contains("Historical version saved as"))
        .stdout(predicate::str::contains("all_project_code_no_notebooks_no_empty_py_"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_default_extension_set() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path();
    create_file(root, "a.py", "a\n")?;
    create_file(root, "b.yaml", "k: v\n")?;
    create_file(root, "c.rs", "fn main() {}\n")?;

    pack_cmd(root).assert().success();

    let text = read_artifact(
        root,
        "all_project_code_with_notebooks_no_empty_py_md_ipynb_js_html_css_json_yaml.txt",
    )?;
    assert!(text.contains("a.py\n```py\na\n```\n\n"));
    assert!(text.contains("b.yaml\n```plaintext\nk: v\n```\n\n"));
    assert!(!text.contains("c.rs"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_target_below_project_root_names_artifact() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path();
    create_file(root, "src/pkg/m.py", "m\n")?;

    promptctx_cmd()
        .arg(root.join("src/pkg"))
        .arg("--no-clipboard")
        .arg("--project-root")
        .arg(root)
        .arg("--data-dir")
        .arg(root.join("out"))
        .args(["--ext", "py"])
        .assert()
        .success();

    let text = read_artifact(root, "src_pkg_code_no_notebooks_no_empty_py.txt")?;
    assert_eq!(text, "m.py\n```py\nm\n```\n\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_data_dir_defaults_below_project_root() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path();
    create_file(root, "a.py", "a\n")?;

    promptctx_cmd()
        .arg(root)
        .arg("--no-clipboard")
        .args(["-e", "py"])
        .env("PROMPTCTX_PROJECT_ROOT", root)
        .assert()
        .success();

    assert!(root.join("data").join(PY_ARTIFACT).exists());
    assert!(root.join("data/history").is_dir());

    temp.close()?;
    Ok(())
}
