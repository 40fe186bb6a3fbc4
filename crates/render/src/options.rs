use std::ffi::OsString;
use std::time::Duration;

/// JavaScript delays used when choosing a [`RenderOptions`] for a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptDelays {
    /// Delay for pages with no detected script usage.
    pub plain: Duration,
    /// Delay for pages where a `<script` marker was detected.
    pub scripted: Duration,
}
impl Default for ScriptDelays {
    fn default() -> Self {
        Self { plain: Duration::from_millis(10_000), scripted: Duration::from_millis(15_000) }
    }
}
impl ScriptDelays {
    pub fn from_millis(plain: u64, scripted: u64) -> Self {
        Self { plain: Duration::from_millis(plain), scripted: Duration::from_millis(scripted) }
    }
}

/// Flags passed to wkhtmltopdf for a single render. JavaScript is always
/// enabled and long-running scripts are allowed to finish; only the delay
/// varies between pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub javascript_delay: Duration,
}
impl RenderOptions {
    /// Selects the option set for a page, giving scripted pages the longer delay.
    pub fn select(scripted: bool, delays: ScriptDelays) -> Self {
        let javascript_delay = if scripted { delays.scripted } else { delays.plain };
        Self { javascript_delay }
    }

    pub fn delay_ms(&self) -> u128 {
        self.javascript_delay.as_millis()
    }

    pub(crate) fn to_args(&self) -> Vec<OsString> {
        vec![
            "--enable-javascript".into(),
            "--javascript-delay".into(),
            self.delay_ms().to_string().into(),
            "--no-stop-slow-scripts".into(),
        ]
    }
}
