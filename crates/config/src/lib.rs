//! Layered configuration for webpdf.
//!
//! Values are merged from (lowest to highest precedence):
//!
//! 1. Built-in defaults,
//! 2. the per-user `config.toml` in the platform configuration directory,
//! 3. a file passed explicitly on the command-line, and
//! 4. `WEBPDF_`-prefixed environment variables, using `__` to reach nested
//!    keys (e.g. `WEBPDF_PROBE__TIMEOUT_SECS=2`).
//!
//! ```toml
//! output_dir = "~/Downloads/WebPDFs"
//!
//! [renderer]
//! binary = "/opt/wkhtmltox/bin/wkhtmltopdf"
//! script_delay_ms = 10000
//! scripted_delay_ms = 15000
//!
//! [probe]
//! enabled = true
//! timeout_secs = 5
//! ```

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::{ProjectDirs, UserDirs};
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::instrument;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "WEBPDF_";
/// Name of the directory created inside the downloads folder by default.
pub const DEFAULT_FOLDER_NAME: &str = "WebPDFs";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory that generated PDFs are written to, unless the command-line
    /// names a different destination.
    pub output_dir: PathBuf,
    pub renderer: RendererConfig,
    pub probe: ProbeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Explicit renderer executable; either a path or a name looked up on `PATH`.
    pub binary: Option<PathBuf>,
    /// JavaScript delay for pages without a detected script marker.
    pub script_delay_ms: u64,
    /// JavaScript delay for pages where a script marker was detected.
    pub scripted_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub enabled: bool,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self { output_dir: default_output_dir(), renderer: RendererConfig::default(), probe: ProbeConfig::default() }
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self { binary: None, script_delay_ms: 10_000, scripted_delay_ms: 15_000 }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self { enabled: true, timeout_secs: 5 }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Location of the per-user configuration file, if the platform has a
    /// notion of one.
    pub fn user_config_file() -> Option<PathBuf> {
        ProjectDirs::from("", "", "webpdf").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads configuration from every layer, including the per-user file.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(Self::user_config_file(), explicit)
    }

    /// Loads configuration with an explicit per-user file location. A missing
    /// per-user file is skipped silently; a missing `explicit` file is an error.
    #[instrument(skip_all, fields(user = ?user, explicit = ?explicit))]
    pub fn load_from(user: Option<PathBuf>, explicit: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(user) = user {
            if user.is_file() {
                tracing::debug!(path = %user.display(), "Merging user configuration file");
                figment = figment.merge(Toml::file_exact(user));
            }
        }
        if let Some(explicit) = explicit {
            if !explicit.is_file() {
                exn::bail!(ErrorKind::NotFound(explicit.to_path_buf()));
            }
            figment = figment.merge(Toml::file_exact(explicit));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let mut config: Config = match figment.extract() {
            Ok(config) => config,
            Err(e) => {
                let message = e.to_string();
                return Err(e).or_raise(move || ErrorKind::Parse(message));
            },
        };
        config.output_dir = expand_home(&config.output_dir);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.probe.timeout_secs == 0 {
            exn::bail!(ErrorKind::Invalid("probe.timeout_secs must be greater than zero".to_string()));
        }
        Ok(())
    }
}

/// `<Downloads>/WebPDFs`, falling back to `<home>/Downloads/WebPDFs` when the
/// platform doesn't advertise a downloads folder.
fn default_output_dir() -> PathBuf {
    let downloads = UserDirs::new().and_then(|dirs| {
        dirs.download_dir().map(Path::to_path_buf).or_else(|| Some(dirs.home_dir().join("Downloads")))
    });
    match downloads {
        Some(downloads) => downloads.join(DEFAULT_FOLDER_NAME),
        None => {
            tracing::warn!("Could not determine home directory; defaulting to the working directory");
            PathBuf::from(DEFAULT_FOLDER_NAME)
        },
    }
}

/// Expands a leading `~` component to the user's home directory.
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match UserDirs::new() {
            Some(dirs) => dirs.home_dir().join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = Config::load_from(None, None).unwrap();
            assert_eq!(config.renderer.script_delay_ms, 10_000);
            assert_eq!(config.renderer.scripted_delay_ms, 15_000);
            assert_eq!(config.renderer.binary, None);
            assert!(config.probe.enabled);
            assert_eq!(config.probe.timeout(), Duration::from_secs(5));
            assert!(config.output_dir.ends_with(DEFAULT_FOLDER_NAME));
            Ok(())
        });
    }

    #[test]
    fn test_user_file_then_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file("user.toml", "output_dir = \"/srv/pdfs\"\n[probe]\ntimeout_secs = 9\n")?;
            jail.create_file("explicit.toml", "[probe]\ntimeout_secs = 3\n")?;
            let user = jail.directory().join("user.toml");
            let explicit = jail.directory().join("explicit.toml");
            let config = Config::load_from(Some(user), Some(&explicit)).unwrap();
            assert_eq!(config.output_dir, PathBuf::from("/srv/pdfs"));
            assert_eq!(config.probe.timeout_secs, 3);
            Ok(())
        });
    }

    #[test]
    fn test_missing_user_file_is_skipped() {
        Jail::expect_with(|jail| {
            let user = jail.directory().join("does-not-exist.toml");
            assert!(Config::load_from(Some(user), None).is_ok());
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        Jail::expect_with(|jail| {
            let explicit = jail.directory().join("does-not-exist.toml");
            let err = Config::load_from(None, Some(&explicit)).unwrap_err();
            assert_eq!(*err, ErrorKind::NotFound(explicit));
            Ok(())
        });
    }

    #[test]
    fn test_environment_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("explicit.toml", "[renderer]\nscripted_delay_ms = 20000\n")?;
            jail.set_env("WEBPDF_RENDERER__SCRIPTED_DELAY_MS", "25000");
            jail.set_env("WEBPDF_RENDERER__BINARY", "/opt/wkhtmltox/bin/wkhtmltopdf");
            jail.set_env("WEBPDF_PROBE__ENABLED", "false");
            let explicit = jail.directory().join("explicit.toml");
            let config = Config::load_from(None, Some(&explicit)).unwrap();
            assert_eq!(config.renderer.scripted_delay_ms, 25_000);
            assert_eq!(config.renderer.binary, Some(PathBuf::from("/opt/wkhtmltox/bin/wkhtmltopdf")));
            assert!(!config.probe.enabled);
            Ok(())
        });
    }

    #[test]
    fn test_zero_timeout_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("WEBPDF_PROBE__TIMEOUT_SECS", "0");
            let err = Config::load_from(None, None).unwrap_err();
            assert!(matches!(&*err, ErrorKind::Invalid(_)));
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file() {
        Jail::expect_with(|jail| {
            jail.create_file("explicit.toml", "[probe]\ntimeout_secs = \"soon\"\n")?;
            let explicit = jail.directory().join("explicit.toml");
            let err = Config::load_from(None, Some(&explicit)).unwrap_err();
            assert!(matches!(&*err, ErrorKind::Parse(message) if message.contains("timeout_secs")));
            Ok(())
        });
    }

    #[test]
    fn test_expand_home() {
        let expanded = expand_home(Path::new("~/Documents/pdf"));
        if let Some(dirs) = UserDirs::new() {
            assert_eq!(expanded, dirs.home_dir().join("Documents/pdf"));
        }
        assert_eq!(expand_home(Path::new("/abs/path")), PathBuf::from("/abs/path"));
        assert_eq!(expand_home(Path::new("rel/~/path")), PathBuf::from("rel/~/path"));
    }
}
