use std::time::Duration;

use crate::Palette;
use crate::output::ProgressBar;

/// Presentation settings for a session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub palette: Palette,
    /// `None` skips the closing animation.
    pub closing: Option<ProgressBar>,
}

impl Config {
    pub fn new(plain: bool, animate: bool, blocks: usize, frame_delay_ms: u64) -> Self {
        Self {
            palette: if plain { Palette::Plain } else { Palette::Colored },
            closing: animate.then(|| ProgressBar {
                blocks,
                frame_delay: Duration::from_millis(frame_delay_ms),
            }),
        }
    }

    /// No colors and no animation.
    pub fn plain() -> Self {
        Self {
            palette: Palette::Plain,
            closing: None,
        }
    }
}
