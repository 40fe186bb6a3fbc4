use crate::error::{ErrorKind, Result};
use crate::{RenderOptions, Renderer, Source};
use std::path::{Path, PathBuf};
use tracing::instrument;

impl Renderer {
    /// Renders `source` into a PDF at `save_to`, returning the written path.
    ///
    /// Local sources are checked before the renderer is started. A render only
    /// counts as successful when the renderer exits cleanly *and* a non-empty
    /// file was left behind at `save_to`.
    #[instrument(skip_all, fields(source = %source, save_to = %save_to.as_ref().display()))]
    pub fn render_to(&self, source: &Source, options: &RenderOptions, save_to: impl AsRef<Path>) -> Result<PathBuf> {
        let save_to = save_to.as_ref();
        source.validate()?;
        self.wkhtmltopdf.execute(source, save_to, options)?;
        match std::fs::metadata(save_to) {
            Ok(metadata) if metadata.is_file() && metadata.len() > 0 => {
                tracing::info!(bytes = metadata.len(), "PDF written");
                Ok(save_to.to_path_buf())
            },
            _ => exn::bail!(ErrorKind::MissingOutput(save_to.to_path_buf())),
        }
    }
}
