use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoaderPhase {
    Loading,
    Ready,
    Hidden,
}

/// Splash overlay shown until the page has loaded.
///
/// `Loading → Ready` on the load event or the fallback timer, whichever is
/// first; `Ready → Hidden` after the exit delay.
#[derive(Debug, Clone)]
pub struct Loader {
    phase: LoaderPhase,
}

impl Loader {
    pub fn new() -> Self {
        Self { phase: LoaderPhase::Loading }
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase != LoaderPhase::Hidden
    }

    /// Returns true only on the transition out of `Loading`.
    pub fn mark_ready(&mut self) -> bool {
        if self.phase != LoaderPhase::Loading {
            return false;
        }
        tracing::debug!("page ready");
        self.phase = LoaderPhase::Ready;
        true
    }

    pub fn hide(&mut self) -> bool {
        if self.phase != LoaderPhase::Ready {
            return false;
        }
        tracing::debug!("loader hidden");
        self.phase = LoaderPhase::Hidden;
        true
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Modal open/closed flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dialog {
    open: bool,
}

impl Dialog {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
