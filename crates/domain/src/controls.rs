//! Well-known control identifiers of the target player application.

use serde::{Deserialize, Serialize};

use crate::node::ViewId;

/// The two stable view ids the automation relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlIds {
    /// The combined play/pause/replay button. Its description ("Play
    /// video" / "Pause video") tells the current playback state.
    pub play_pause: ViewId,
    /// The video surface; tapping it reveals auto-hidden controls.
    pub surface: ViewId,
}

impl Default for ControlIds {
    fn default() -> Self {
        Self {
            play_pause: ViewId::new("player/control_play_pause"),
            surface: ViewId::new("player/surface"),
        }
    }
}
