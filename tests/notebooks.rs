mod common;

use assert_cmd::prelude::*;
use common::{create_file, pack_cmd, read_artifact};
use predicates::prelude::*;
use tempfile::tempdir;

const NB_ARTIFACT: &str = "all_project_code_with_notebooks_no_empty_ipynb_py.txt";

#[test]
fn test_failed_conversion_leaves_marker_and_run_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path();
    create_file(root, "analysis.ipynb", "{\"cells\": []}")?;
    create_file(root, "z.py", "z\n")?;

    pack_cmd(root)
        .args(["-e", "ipynb,py"])
        .args(["--converter", "promptctx-missing-converter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All specified files have been written"));

    let text = read_artifact(root, NB_ARTIFACT)?;
    assert!(text.starts_with("analysis.ipynb\n```ipynb\n[notebook conversion failed: "));
    assert!(text.contains("promptctx-missing-converter"));
    assert!(text.ends_with("z.py\n```py\nz\n```\n\n"));

    temp.close()?;
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_converted_script_is_embedded() -> Result<(), Box<dyn std::error::Error>> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir()?;
    let root = temp.path();
    let tools = tempdir()?;
    let fake = tools.path().join("fake-jupyter");
    fs::write(
        &fake,
        "#!/bin/sh\nfor a in \"$@\"; do case \"$a\" in --output=*) out=\"${a#--output=}\";; esac; done\nprintf '# converted\\nprint(1)\\n' > \"$out.py\"\n",
    )?;
    fs::set_permissions(&fake, fs::Permissions::from_mode(0o755))?;
    create_file(root, "nb/analysis.ipynb", "{}")?;

    pack_cmd(root)
        .args(["-e", "ipynb"])
        .arg("--converter")
        .arg(&fake)
        .assert()
        .success();

    let text = read_artifact(root, "all_project_code_with_notebooks_no_empty_ipynb.txt")?;
    assert_eq!(text, "nb/analysis.ipynb\n```ipynb\n# converted\nprint(1)\n```\n\n");
    assert!(root.join("out/notebooks/analysis.py").exists());

    temp.close()?;
    tools.close()?;
    Ok(())
}
