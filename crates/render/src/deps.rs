//! Dependency verification.
//!
//! Everything webpdf needs besides itself lives outside the binary: the
//! renderer executable and, to a lesser degree, the flavour of Qt it was built
//! against. [`verify`] inspects the host and produces a [`DependencyReport`]
//! that the caller prints before deciding whether to continue.

use crate::wkhtmltopdf::{EXECUTABLE, Wkhtmltopdf, has_patched_qt};
use derive_more::Display;
use std::path::Path;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Status {
    #[display("available")]
    Available,
    #[display("missing")]
    Missing,
    /// Usable, but degraded.
    #[display("warning")]
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dependency {
    pub name: &'static str,
    pub status: Status,
    pub detail: Option<String>,
}

#[derive(Debug)]
pub struct DependencyReport {
    dependencies: Vec<Dependency>,
    renderer: Option<Wkhtmltopdf>,
}
impl DependencyReport {
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// `true` when nothing required is missing. Warnings don't count.
    pub fn is_satisfied(&self) -> bool {
        self.renderer.is_some() && self.dependencies.iter().all(|d| d.status != Status::Missing)
    }

    pub fn missing(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies.iter().filter(|d| d.status == Status::Missing)
    }

    /// Hands over the discovered renderer, if there was one.
    pub fn into_renderer(self) -> Option<Wkhtmltopdf> {
        self.renderer
    }
}

/// Checks the host for the renderer (see [`Wkhtmltopdf::discover`]) and the
/// capabilities of the build that was found.
#[tracing::instrument]
pub fn verify(preferred: Option<&Path>) -> DependencyReport {
    report(Wkhtmltopdf::discover(preferred).ok())
}

fn report(renderer: Option<Wkhtmltopdf>) -> DependencyReport {
    let mut dependencies = Vec::with_capacity(2);
    match &renderer {
        None => dependencies.push(Dependency { name: EXECUTABLE, status: Status::Missing, detail: None }),
        Some(renderer) => {
            dependencies.push(Dependency {
                name: EXECUTABLE,
                status: Status::Available,
                detail: Some(renderer.path().display().to_string()),
            });
            dependencies.push(qt_dependency(renderer));
        },
    }
    DependencyReport { dependencies, renderer }
}

fn qt_dependency(renderer: &Wkhtmltopdf) -> Dependency {
    const NAME: &str = "patched qt";
    match renderer.version() {
        Ok(version) if has_patched_qt(&version) => Dependency { name: NAME, status: Status::Available, detail: Some(version) },
        Ok(version) => {
            tracing::debug!(version = %version, "wkhtmltopdf built against unpatched Qt");
            Dependency {
                name: NAME,
                status: Status::Warning,
                detail: Some(format!("{version}: some options are unsupported and an X server may be required")),
            }
        },
        Err(err) => {
            tracing::debug!(error = ?err, "Could not query wkhtmltopdf version");
            Dependency { name: NAME, status: Status::Warning, detail: Some(format!("could not determine version: {}", &*err)) }
        },
    }
}

/// Operating system families with distinct installation instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    MacOs,
    Linux,
}
impl OsFamily {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a [`std::env::consts::OS`] value onto a family. Anything that isn't
    /// Windows or macOS gets the Debian-style instructions.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            _ => Self::Linux,
        }
    }

    pub fn install_renderer(&self) -> &'static str {
        match self {
            Self::Windows => "Download from: https://wkhtmltopdf.org/downloads.html",
            Self::MacOs => "Run: brew install wkhtmltopdf",
            Self::Linux => "Run: sudo apt-get install wkhtmltopdf",
        }
    }
}

/// Installation guidance for every missing dependency, one `(name, hint)` per entry.
pub fn installation_guide(report: &DependencyReport, family: OsFamily) -> Vec<(&'static str, &'static str)> {
    report
        .missing()
        // The renderer is the only dependency that can go missing.
        .map(|dependency| (dependency.name, family.install_renderer()))
        .collect()
}
