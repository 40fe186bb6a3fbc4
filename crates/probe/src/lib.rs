//! Best-effort probing of a URL before it's handed to the renderer.
//!
//! The probe is advisory: the renderer performs the authoritative fetch, so
//! nothing that happens here stops a conversion. A single `GET` tells us both
//! whether the page is reachable and whether its markup uses scripts.

pub mod error;
pub mod marker;

use crate::error::{ErrorKind, Result};
use derive_more::Display;
use exn::ResultExt;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::instrument;
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Why a probe couldn't confirm the page is reachable.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Warning {
    #[display("Received HTTP {_0} from the server.")]
    Status(u16),
    #[display("{_0}")]
    Network(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reachability {
    Reachable { status: u16 },
    Unreachable(Warning),
}

/// Outcome of probing a single URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Probe {
    pub reachability: Reachability,
    /// Whether a script marker was found in whatever body was received.
    pub scripted: bool,
}

pub struct Prober {
    client: Client,
}
impl Prober {
    /// Builds a prober whose requests (connect and body) give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).user_agent(USER_AGENT).build().or_raise(|| ErrorKind::Client)?;
        Ok(Self { client })
    }

    #[instrument(skip_all, fields(url = %url))]
    pub fn probe(&self, url: &Url) -> Probe {
        let response = match self.client.get(url.clone()).send() {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Probe request failed");
                return Probe { reachability: Reachability::Unreachable(Warning::Network(describe(&e))), scripted: false };
            },
        };
        let status = response.status();
        // Error pages are scanned too; the renderer will be loading the same page.
        let scripted = match marker::scan(response) {
            Ok(scripted) => scripted,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read probe response body");
                false
            },
        };
        tracing::debug!(status = status.as_u16(), scripted, "Probe finished");
        let reachability = match status.is_client_error() || status.is_server_error() {
            true => Reachability::Unreachable(Warning::Status(status.as_u16())),
            false => Reachability::Reachable { status: status.as_u16() },
        };
        Probe { reachability, scripted }
    }
}

fn describe(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        "could not connect to the server".to_string()
    } else {
        e.to_string()
    }
}
