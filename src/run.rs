//! The conversion pipeline: dependency check, probe, output path, render.

use crate::cli::Cli;
use crate::error::{ErrorKind, Result, wrap};
use crate::status::Console;
use exn::OptionExt;
use std::path::PathBuf;
use tracing::instrument;
use webpdf_config::Config;
use webpdf_output::error::ErrorKind as OutputErrorKind;
use webpdf_output::{Destination, OutputResolver};
use webpdf_probe::{Prober, marker};
use webpdf_render::deps::{self, OsFamily};
use webpdf_render::{RenderOptions, Renderer, ScriptDelays, Source};

/// Runs a single conversion, returning where the PDF was written.
#[instrument(skip_all, fields(input = %cli.input))]
pub fn run(cli: &Cli, console: &Console) -> Result<PathBuf> {
    let config = Config::load(cli.config.as_deref()).map_err(|e| wrap(e, ErrorKind::Config))?;
    tracing::debug!(?config, "Configuration loaded");

    let report = deps::verify(config.renderer.binary.as_deref());
    console.dependencies(&report);
    if !report.is_satisfied() {
        console.installation_guide(&deps::installation_guide(&report, OsFamily::current()));
        exn::bail!(ErrorKind::MissingDependency);
    }
    let renderer = Renderer::new(report.into_renderer().ok_or_raise(|| ErrorKind::MissingDependency)?);
    tracing::info!(renderer = %renderer.executable().display(), "Dependencies satisfied");

    let source = cli.input.parse::<Source>().map_err(|e| wrap(e, ErrorKind::InvalidInput))?;
    source.validate().map_err(|e| wrap(e, ErrorKind::InvalidInput))?;
    let scripted = detect_scripts(&source, &config, cli.no_probe, console);

    let destination = cli.output.as_deref().map(Destination::from_flag);
    let resolved = OutputResolver::new(&config.output_dir).resolve(&source, destination.as_ref()).map_err(|e| {
        let invalid_filename = matches!(&*e, OutputErrorKind::InvalidFilename(_));
        match invalid_filename {
            true => wrap(e, ErrorKind::InvalidFilename),
            false => wrap(e, ErrorKind::DirectoryCreation),
        }
    })?;
    if let Some(directory) = &resolved.created_directory {
        console.message(format!("Directory created: {}", directory.display()));
    }
    console.message(format!("Generated output path: {}", resolved.path.display()));

    let delays = ScriptDelays::from_millis(config.renderer.script_delay_ms, config.renderer.scripted_delay_ms);
    let options = RenderOptions::select(scripted, delays);
    if scripted {
        console.message(format!("JavaScript detected. Increasing delay to {} ms.", options.delay_ms()));
    }
    console.message("Converting to PDF...");
    let written = renderer.render_to(&source, &options, &resolved.path).map_err(|e| wrap(e, ErrorKind::Render))?;
    console.success(&written);
    Ok(written)
}

/// Decides whether the page uses scripts. URLs are probed over the network
/// (unless disabled), local files are scanned directly. Never fails: anything
/// that goes wrong is reported and treated as "no scripts".
fn detect_scripts(source: &Source, config: &Config, no_probe: bool, console: &Console) -> bool {
    match source {
        Source::Url(_) if no_probe || !config.probe.enabled => {
            tracing::info!("Probe disabled; assuming page has no scripts");
            false
        },
        Source::Url(url) => match Prober::new(config.probe.timeout()) {
            Ok(prober) => {
                let probe = prober.probe(url);
                console.probe(&probe);
                probe.scripted
            },
            Err(e) => {
                tracing::warn!(error = ?e, "Could not set up probe; skipping");
                false
            },
        },
        Source::File(path) => match marker::scan_file(path) {
            Ok(scripted) => scripted,
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "Could not scan input file for scripts");
                false
            },
        },
    }
}
