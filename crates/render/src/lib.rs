pub mod deps;
pub mod error;
mod options;
mod render;
mod source;
mod wkhtmltopdf;

pub use crate::options::{RenderOptions, ScriptDelays};
pub use crate::source::Source;
pub use crate::wkhtmltopdf::Wkhtmltopdf;

/// Converts [`Source`]s into PDF files using a discovered [`Wkhtmltopdf`].
pub struct Renderer {
    wkhtmltopdf: Wkhtmltopdf,
}
impl Renderer {
    pub fn new(wkhtmltopdf: Wkhtmltopdf) -> Self {
        Self { wkhtmltopdf }
    }

    pub fn executable(&self) -> &std::path::Path {
        self.wkhtmltopdf.path()
    }
}
