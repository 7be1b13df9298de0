//! Best survival time
//!
//! One record persisted to LocalStorage: the longest run in milliseconds.
//! A missing, unreadable or corrupt stored value degrades to zero; storage
//! faults never reach the game loop.

use serde::{Deserialize, Serialize};

/// Longest survival duration achieved in this browser, in milliseconds.
///
/// Zero means no run has been recorded yet, so any finite run beats it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BestTime {
    pub millis: u64,
}

impl BestTime {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "astro_dodge_best_time";

    pub fn new() -> Self {
        Self { millis: 0 }
    }

    /// True if no run has been recorded yet
    pub fn is_unset(&self) -> bool {
        self.millis == 0
    }

    /// Fold a finished run into the record. Returns true iff the run beat
    /// the stored time; the record never decreases.
    pub fn record(&mut self, elapsed_ms: u64) -> bool {
        if elapsed_ms > self.millis {
            self.millis = elapsed_ms;
            true
        } else {
            false
        }
    }

    /// Load the record from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(best) = serde_json::from_str::<BestTime>(&json) {
                    log::info!("Loaded best time: {}", format_time(best.millis));
                    return best;
                }
            }
        }

        log::info!("No best time found, starting fresh");
        Self::new()
    }

    /// Save the record to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Best time saved ({})", format_time(self.millis));
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Format a duration as zero-padded `HH:MM:SS`, hours wrapping at 24
pub fn format_time(millis: u64) -> String {
    let seconds = millis / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    format!("{:02}:{:02}:{:02}", hours % 24, minutes % 60, seconds % 60)
}
