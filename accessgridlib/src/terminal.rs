//! Terminal detection, computed once per destination.
//!
//! A [`TerminalDetection`] is created once at startup for the stream the
//! program writes to and passed into every render call. The probe runs the
//! first time a render asks for it; later renders reuse the cached answer.

use std::fmt;
use std::sync::OnceLock;

use console::Term;

/// Lazily evaluated "is this destination an interactive terminal?".
pub struct TerminalDetection {
    probe: fn() -> bool,
    cached: OnceLock<bool>,
}

impl TerminalDetection {
    /// Detect with a custom probe
    pub fn with_probe(probe: fn() -> bool) -> Self {
        TerminalDetection {
            probe,
            cached: OnceLock::new(),
        }
    }

    /// Probe standard output
    pub fn stdout() -> Self {
        Self::with_probe(|| Term::stdout().is_term())
    }

    /// Skip probing and use a fixed answer.
    pub fn assume(is_terminal: bool) -> Self {
        TerminalDetection {
            probe: || false,
            cached: OnceLock::from(is_terminal),
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self.cached.get_or_init(|| {
            let is_terminal = (self.probe)();
            tracing::debug!(is_terminal, "probed output destination");
            is_terminal
        })
    }
}

impl Default for TerminalDetection {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for TerminalDetection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalDetection")
            .field("cached", &self.cached.get())
            .finish()
    }
}
