//! Launch dispatcher
//!
//! Opens tool URLs in a popup-style browser window so the user keeps
//! their current context. The preferred path probes the PATH for an
//! app-mode capable browser and spawns it with a fixed window size; when
//! none is found the platform default opener takes over. Both paths sit
//! behind the `UrlOpener` seam, and everything is gated on the master
//! switch.

use std::process::Command;

use anyhow::{Context, Result};

use crate::catalog::all_tools;
use crate::settings::Settings;

/// Popup window geometry
pub const POPUP_WIDTH: u32 = 1000;
pub const POPUP_HEIGHT: u32 = 800;

/// Browsers that accept `--app=<url>` for a chromeless popup window,
/// in probe order
const APP_MODE_BROWSERS: &[&str] = &[
    "chromium",
    "chromium-browser",
    "google-chrome",
    "google-chrome-stable",
    "brave",
    "brave-browser",
    "microsoft-edge",
    "vivaldi",
];

/// Seam over the host's window-opening facilities
pub trait UrlOpener {
    /// Open `url` in a focused popup-style window at the given size
    fn open_popup(&self, url: &str, width: u32, height: u32) -> Result<()>;
    /// Open `url` in the default browser
    fn open_default(&self, url: &str) -> Result<()>;
}

/// Opener backed by the real system: `which`-probed app-mode browser,
/// `open` crate fallback
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open_popup(&self, url: &str, width: u32, height: u32) -> Result<()> {
        // Probe on every call; the host environment can change under us.
        let browser = APP_MODE_BROWSERS
            .iter()
            .find_map(|name| which::which(name).ok())
            .context("no app-mode capable browser on PATH")?;

        Command::new(&browser)
            .arg(format!("--app={url}"))
            .arg(format!("--window-size={width},{height}"))
            .spawn()
            .with_context(|| format!("failed to launch {}", browser.display()))?;
        Ok(())
    }

    fn open_default(&self, url: &str) -> Result<()> {
        open::that_detached(url).with_context(|| format!("failed to open {url}"))
    }
}

/// Opens tool URLs, honoring the master switch
pub struct LaunchDispatcher {
    opener: Box<dyn UrlOpener>,
}

impl LaunchDispatcher {
    pub fn new() -> Self {
        Self::with_opener(Box::new(SystemOpener))
    }

    pub fn with_opener(opener: Box<dyn UrlOpener>) -> Self {
        Self { opener }
    }

    /// Open one URL. No-op while the master switch is off. Open failures
    /// degrade: popup path first, default browser second, then a log line.
    pub fn launch(&self, settings: &Settings, url: &str) {
        if !settings.is_extension_enabled {
            return;
        }
        if let Err(popup_err) = self.opener.open_popup(url, POPUP_WIDTH, POPUP_HEIGHT) {
            log::debug!("popup window unavailable ({popup_err:#}), using default browser");
            if let Err(e) = self.opener.open_default(url) {
                log::warn!("could not open {url}: {e:#}");
            }
        }
    }

    /// Open every enabled tool, one independent request per tool, in
    /// catalog declaration order. No-op while the master switch is off.
    pub fn launch_all(&self, settings: &Settings) {
        if !settings.is_extension_enabled {
            return;
        }
        for tool in all_tools() {
            if settings.is_enabled(tool.id) {
                self.launch(settings, tool.url);
            }
        }
    }
}

impl Default for LaunchDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records every open request instead of touching the system
    struct RecordingOpener {
        popup_supported: bool,
        popups: Arc<Mutex<Vec<String>>>,
        defaults: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingOpener {
        fn new(popup_supported: bool) -> (Self, Arc<Mutex<Vec<String>>>, Arc<Mutex<Vec<String>>>) {
            let popups = Arc::new(Mutex::new(Vec::new()));
            let defaults = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    popup_supported,
                    popups: popups.clone(),
                    defaults: defaults.clone(),
                },
                popups,
                defaults,
            )
        }
    }

    impl UrlOpener for RecordingOpener {
        fn open_popup(&self, url: &str, width: u32, height: u32) -> Result<()> {
            assert_eq!((width, height), (POPUP_WIDTH, POPUP_HEIGHT));
            if !self.popup_supported {
                anyhow::bail!("popup mode not supported");
            }
            self.popups.lock().unwrap().push(url.to_string());
            Ok(())
        }

        fn open_default(&self, url: &str) -> Result<()> {
            self.defaults.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_master_gate_blocks_all_opens() {
        let (opener, popups, defaults) = RecordingOpener::new(true);
        let dispatcher = LaunchDispatcher::with_opener(Box::new(opener));

        let mut settings = Settings::default();
        settings.select_all();
        settings.toggle_master();

        dispatcher.launch(&settings, "https://claude.ai");
        dispatcher.launch_all(&settings);

        assert!(popups.lock().unwrap().is_empty());
        assert!(defaults.lock().unwrap().is_empty());
    }

    #[test]
    fn test_launch_all_follows_catalog_order() {
        let (opener, popups, _) = RecordingOpener::new(true);
        let dispatcher = LaunchDispatcher::with_opener(Box::new(opener));

        let mut settings = Settings::default();
        settings.toggle_tool("notion");
        settings.toggle_tool("chatgpt");
        // Visual order differs from catalog order; launches must not.
        settings.apply_reorder("notion", "chatgpt");

        dispatcher.launch_all(&settings);
        let opened = popups.lock().unwrap();
        assert_eq!(
            *opened,
            vec!["https://chatgpt.com".to_string(), "https://notion.ai".to_string()]
        );
    }

    #[test]
    fn test_fallback_when_popup_unsupported() {
        let (opener, popups, defaults) = RecordingOpener::new(false);
        let dispatcher = LaunchDispatcher::with_opener(Box::new(opener));

        let settings = Settings::default();
        dispatcher.launch(&settings, "https://grok.com");

        assert!(popups.lock().unwrap().is_empty());
        assert_eq!(*defaults.lock().unwrap(), vec!["https://grok.com".to_string()]);
    }

    #[test]
    fn test_launch_all_skips_disabled_tools() {
        let (opener, popups, _) = RecordingOpener::new(true);
        let dispatcher = LaunchDispatcher::with_opener(Box::new(opener));

        let mut settings = Settings::default();
        settings.toggle_tool("runway");
        dispatcher.launch_all(&settings);

        assert_eq!(*popups.lock().unwrap(), vec!["https://runwayml.com".to_string()]);
    }
}
