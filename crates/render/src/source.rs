use crate::error::{Error, ErrorKind, Result};
use exn::ResultExt;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use url::Url;

const URL_SCHEMES: [&str; 2] = ["http://", "https://"];

/// What gets rendered: a remote page, or an HTML file on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(Url),
    File(PathBuf),
}

impl Source {
    /// Checks that a local file source can actually be read by the renderer.
    /// URLs are not checked here; the renderer performs the authoritative fetch.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Url(_) => Ok(()),
            Self::File(path) if path.is_file() => Ok(()),
            Self::File(path) => exn::bail!(ErrorKind::InvalidSource(path.clone())),
        }
    }

    /// The argument handed to the renderer on its command-line.
    pub(crate) fn as_arg(&self) -> OsString {
        match self {
            Self::Url(url) => OsString::from(url.as_str()),
            Self::File(path) => path.as_os_str().to_os_string(),
        }
    }
}

fn looks_like_url(input: &str) -> bool {
    URL_SCHEMES
        .iter()
        .any(|scheme| input.get(..scheme.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme)))
}

impl FromStr for Source {
    type Err = Error;
    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        // Surrounding whitespace only matters for URLs; file names keep it.
        let trimmed = input.trim();
        if looks_like_url(trimmed) {
            let url = Url::parse(trimmed).or_raise(|| ErrorKind::InvalidUrl(trimmed.to_string()))?;
            return Ok(Self::Url(url));
        }
        Ok(Self::File(PathBuf::from(input)))
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
