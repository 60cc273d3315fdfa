// src/rendering/notebook.rs

//! Notebook conversion through an external `nbconvert`-compatible program.

use crate::config::ConverterOptions;
use crate::errors::{Error, Result};
use log::{debug, trace, warn};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Converts a notebook into script text.
pub trait NotebookConverter {
    /// Converts the notebook at `notebook`, writing any intermediate files below `scratch_dir`.
    ///
    /// # Errors
    /// Returns `Error::Converter` when no script text could be produced.
    fn convert(&self, notebook: &Path, scratch_dir: &Path) -> Result<String>;
}

/// Runs `<program> nbconvert --to script --no-prompt <notebook> --output=<scratch>/<stem>`
/// and reads back `<scratch>/<stem>.py`.
#[derive(Debug, Clone)]
pub struct NbconvertConverter {
    program: String,
    timeout: Duration,
}

impl NbconvertConverter {
    /// Creates a converter that runs `program` and kills it after `timeout`.
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// Creates a converter from the run's converter options.
    pub fn from_options(options: &ConverterOptions) -> Self {
        Self::new(options.program.clone(), options.timeout)
    }

    fn failure(notebook: &Path, reason: impl Into<String>) -> Error {
        Error::Converter {
            path: notebook.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Waits for the child, killing it once the timeout has passed.
    fn wait_with_timeout(&self, child: &mut Child, notebook: &Path) -> Result<ExitStatus> {
        let started = Instant::now();
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) if started.elapsed() >= self.timeout => {
                    warn!(
                        "Converter timed out after {:?} on {}, killing it",
                        self.timeout,
                        notebook.display()
                    );
                    if let Err(e) = child.kill() {
                        debug!("Failed to kill converter: {}", e);
                    }
                    let _ = child.wait();
                    return Err(Self::failure(
                        notebook,
                        format!("timed out after {}s", self.timeout.as_secs()),
                    ));
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    return Err(Self::failure(notebook, format!("failed to wait: {}", e)));
                }
            }
        }
    }
}

impl NotebookConverter for NbconvertConverter {
    fn convert(&self, notebook: &Path, scratch_dir: &Path) -> Result<String> {
        let stem = notebook
            .file_stem()
            .ok_or_else(|| Self::failure(notebook, "notebook has no file name"))?;
        fs::create_dir_all(scratch_dir).map_err(|e| {
            Self::failure(
                notebook,
                format!("cannot create {}: {}", scratch_dir.display(), e),
            )
        })?;
        let output_base = scratch_dir.join(stem);
        let script_path = scratch_dir.join(format!("{}.py", stem.to_string_lossy()));
        // A leftover script from an earlier run or a same-named notebook must not be read back.
        match fs::remove_file(&script_path) {
            Ok(()) => trace!("Removed stale script {}", script_path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(Self::failure(
                    notebook,
                    format!("cannot remove stale {}: {}", script_path.display(), e),
                ))
            }
        }

        debug!(
            "Converting notebook {} to {}",
            notebook.display(),
            script_path.display()
        );
        let mut child = Command::new(&self.program)
            .args(["nbconvert", "--to", "script", "--no-prompt"])
            .arg(notebook)
            .arg(format!("--output={}", output_base.display()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Self::failure(notebook, format!("cannot run '{}': {}", self.program, e)))?;

        // Drained on a separate thread so a chatty converter cannot block on a full pipe.
        let stderr_reader = child.stderr.take().map(|mut stderr| {
            thread::spawn(move || {
                let mut buf = String::new();
                let _ = stderr.read_to_string(&mut buf);
                buf
            })
        });

        let status = self.wait_with_timeout(&mut child, notebook)?;
        let stderr = stderr_reader
            .and_then(|handle| handle.join().ok())
            .unwrap_or_default();
        trace!("Converter stderr: {}", stderr.trim());

        if !status.success() {
            let mut reason = format!("'{}' exited with {}", self.program, status);
            if let Some(last) = stderr.lines().rev().find(|l| !l.trim().is_empty()) {
                reason.push_str(": ");
                reason.push_str(last.trim());
            }
            return Err(Self::failure(notebook, reason));
        }

        fs::read_to_string(&script_path).map_err(|e| {
            Self::failure(
                notebook,
                format!("cannot read {}: {}", script_path.display(), e),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_program_is_a_converter_error() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let notebook = temp.path().join("analysis.ipynb");
        fs::write(&notebook, "{}")?;
        let converter = NbconvertConverter::new(
            "promptctx-no-such-converter",
            Duration::from_secs(5),
        );

        let err = converter
            .convert(&notebook, &temp.path().join("scratch"))
            .unwrap_err();
        assert!(matches!(err, Error::Converter { .. }));
        assert!(err.to_string().contains("promptctx-no-such-converter"));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_script_output_is_read_back() -> anyhow::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir()?;
        // A stand-in converter that writes "<output>.py" like nbconvert does.
        let fake = temp.path().join("fake-jupyter");
        fs::write(
            &fake,
            "#!/bin/sh\nfor a in \"$@\"; do case \"$a\" in --output=*) out=\"${a#--output=}\";; esac; done\nprintf 'print(1)\\n' > \"$out.py\"\n",
        )?;
        fs::set_permissions(&fake, fs::Permissions::from_mode(0o755))?;
        let notebook = temp.path().join("nb.ipynb");
        fs::write(&notebook, "{}")?;

        let converter = NbconvertConverter::new(fake.to_string_lossy(), Duration::from_secs(10));
        let scratch = temp.path().join("scratch");
        let script = converter.convert(&notebook, &scratch)?;

        assert_eq!(script, "print(1)\n");
        assert!(scratch.join("nb.py").exists());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_script_output_is_not_replaced_by_stale_file() -> anyhow::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir()?;
        // Succeeds without writing anything, like nbconvert on a non-Python kernel.
        let fake = temp.path().join("silent-jupyter");
        fs::write(&fake, "#!/bin/sh\nexit 0\n")?;
        fs::set_permissions(&fake, fs::Permissions::from_mode(0o755))?;
        let notebook = temp.path().join("nb.ipynb");
        fs::write(&notebook, "{}")?;
        let scratch = temp.path().join("scratch");
        fs::create_dir_all(&scratch)?;
        fs::write(scratch.join("nb.py"), "print('other notebook')\n")?;

        let converter = NbconvertConverter::new(fake.to_string_lossy(), Duration::from_secs(10));
        let err = converter.convert(&notebook, &scratch).unwrap_err();

        assert!(matches!(err, Error::Converter { .. }));
        assert!(err.to_string().contains("cannot read"));
        assert!(!scratch.join("nb.py").exists());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_slow_converter_is_killed() -> anyhow::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir()?;
        let fake = temp.path().join("slow-jupyter");
        fs::write(&fake, "#!/bin/sh\nexec sleep 30\n")?;
        fs::set_permissions(&fake, fs::Permissions::from_mode(0o755))?;
        let notebook = temp.path().join("nb.ipynb");
        fs::write(&notebook, "{}")?;

        let converter = NbconvertConverter::new(fake.to_string_lossy(), Duration::from_millis(200));
        let started = Instant::now();
        let err = converter
            .convert(&notebook, &temp.path().join("scratch"))
            .unwrap_err();

        assert!(err.to_string().contains("timed out"));
        assert!(started.elapsed() < Duration::from_secs(10));
        Ok(())
    }
}
