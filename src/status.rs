//! User-facing status lines on stdout.

use std::borrow::Cow;
use std::io::IsTerminal;
use std::path::Path;
use webpdf_probe::{Probe, Reachability};
use webpdf_render::deps::{Dependency, DependencyReport, Status};

const GREEN: &str = "92";
const RED: &str = "91";
const YELLOW: &str = "93";

#[derive(Clone, Copy, Debug)]
pub struct Console {
    color: bool,
}
impl Console {
    /// Colours are only used when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self { color }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint<'a>(&self, code: &str, text: &'a str) -> Cow<'a, str> {
        match self.color {
            true => Cow::Owned(format!("\x1b[{code}m{text}\x1b[0m")),
            false => Cow::Borrowed(text),
        }
    }

    fn symbol(&self, status: Status) -> Cow<'static, str> {
        match status {
            Status::Available => self.paint(GREEN, "✓"),
            Status::Missing => self.paint(RED, "✗"),
            Status::Warning => self.paint(YELLOW, "!"),
        }
    }

    pub fn success_mark(&self) -> Cow<'static, str> {
        self.paint(GREEN, "✔")
    }

    pub fn failure_mark(&self) -> Cow<'static, str> {
        self.paint(RED, "✘")
    }

    pub fn dependency_line(&self, dependency: &Dependency) -> String {
        match &dependency.detail {
            Some(detail) => format!("{}: {} ({detail})", dependency.name, self.symbol(dependency.status)),
            None => format!("{}: {}", dependency.name, self.symbol(dependency.status)),
        }
    }

    pub fn probe_lines(&self, probe: &Probe) -> Vec<String> {
        match &probe.reachability {
            Reachability::Reachable { .. } => {
                vec![format!("Connection Test: URL is reachable {}", self.success_mark())]
            },
            Reachability::Unreachable(warning) => vec![
                format!("Connection Test: Warning - {warning} {}", self.failure_mark()),
                "Proceeding with the conversion. Ensure the URL is valid.".to_string(),
            ],
        }
    }

    pub fn dependencies(&self, report: &DependencyReport) {
        println!("\nDependency Check:");
        for dependency in report.dependencies() {
            println!("{}", self.dependency_line(dependency));
        }
    }

    pub fn installation_guide(&self, guide: &[(&str, &str)]) {
        println!("\nMissing Dependencies:");
        for (name, hint) in guide {
            println!("\n{} Install {name}:", self.symbol(Status::Warning));
            println!("  {hint}");
        }
    }

    pub fn probe(&self, probe: &Probe) {
        for line in self.probe_lines(probe) {
            println!("{line}");
        }
    }

    pub fn message(&self, message: impl AsRef<str>) {
        println!("{}", message.as_ref());
    }

    pub fn success(&self, path: &Path) {
        println!("Success! PDF saved to: {} {}", path.display(), self.success_mark());
    }

    pub fn failure(&self, message: impl AsRef<str>) {
        println!("Error: {} {}", message.as_ref(), self.failure_mark());
    }
}
