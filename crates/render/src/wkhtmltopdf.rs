use crate::error::{ErrorKind, Result};
use crate::options::RenderOptions;
use crate::source::Source;
use exn::ResultExt;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub(crate) const EXECUTABLE: &str = "wkhtmltopdf";

/// Represents a wkhtmltopdf executable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wkhtmltopdf {
    path: PathBuf,
}
impl Wkhtmltopdf {
    /// Locates the renderer, preferring `preferred` over the default executable
    /// name. A preferred value is a path when it has more than one component
    /// or exists, and a name to look up on `PATH` otherwise. When it can't be
    /// found, `wkhtmltopdf` on `PATH` is used instead.
    pub fn discover(preferred: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::discover_in(preferred, std::env::var_os("PATH"), &cwd)
    }

    pub(crate) fn discover_in(preferred: Option<&Path>, paths: Option<OsString>, cwd: &Path) -> Result<Self> {
        if let Some(preferred) = preferred {
            let candidate = cwd.join(preferred);
            if preferred.components().count() > 1 || candidate.exists() {
                if candidate.is_file() {
                    return Ok(Self { path: candidate });
                }
                tracing::warn!(path = %preferred.display(), "Configured renderer does not exist; falling back to PATH");
            } else if let Ok(path) = which::which_in(preferred, paths.as_ref(), cwd) {
                return Ok(Self { path });
            } else {
                tracing::warn!(name = %preferred.display(), "Configured renderer not found in PATH; falling back to default");
            }
        }
        match which::which_in(EXECUTABLE, paths.as_ref(), cwd) {
            Ok(path) => Ok(Self { path }),
            Err(_) => {
                tracing::info!("wkhtmltopdf executable not found in PATH");
                exn::bail!(ErrorKind::RendererNotFound);
            },
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Output of `wkhtmltopdf --version`, e.g. `wkhtmltopdf 0.12.6 (with patched qt)`.
    pub fn version(&self) -> Result<String> {
        let output = Command::new(&self.path)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .or_raise(|| ErrorKind::Spawn(self.path.clone()))?;
        if !output.status.success() {
            exn::bail!(match output.status.code() {
                Some(code) => ErrorKind::RendererFailed(code),
                None => ErrorKind::RendererKilled,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    #[tracing::instrument(skip_all, fields(renderer = %self.path.display(), source = %source, delay_ms = options.delay_ms()))]
    pub(crate) fn execute(&self, source: &Source, save_to: &Path, options: &RenderOptions) -> Result<()> {
        let output = Command::new(&self.path)
            .args(options.to_args())
            .arg(source.as_arg())
            .arg(save_to)
            .stdin(Stdio::null())
            .output()
            .or_raise(|| ErrorKind::Spawn(self.path.clone()))?;
        let stderr = String::from_utf8_lossy(&output.stderr);
        match output.status.code() {
            Some(0) => {
                tracing::debug!(stderr = %stderr.trim(), "wkhtmltopdf finished");
                Ok(())
            },
            Some(code) => {
                tracing::warn!(code, stderr = %stderr.trim(), "wkhtmltopdf reported an error");
                exn::bail!(ErrorKind::RendererFailed(code));
            },
            None => {
                tracing::warn!(stderr = %stderr.trim(), "wkhtmltopdf terminated by signal");
                exn::bail!(ErrorKind::RendererKilled);
            },
        }
    }
}

/// Whether a `--version` string advertises the patched Qt build, which supports
/// the full option set and runs without an X server.
pub(crate) fn has_patched_qt(version: &str) -> bool {
    version.to_ascii_lowercase().contains("patched qt")
}
