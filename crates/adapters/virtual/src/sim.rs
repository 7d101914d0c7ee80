//! Pure player simulation — no channels, no locking.

use playloop_domain::controls::ControlIds;
use playloop_domain::node::UiNode;

/// Ticks without interaction before the on-screen controls auto-hide.
const HIDE_AFTER_TICKS: u32 = 5;

/// Simulated state of the target video application.
///
/// The player opens with the video autoplaying and its controls visible,
/// mirroring the behaviour the automation is written against. Controls
/// auto-hide after a few idle ticks and reappear on a surface tap.
#[derive(Debug, Clone)]
pub struct PlayerSim {
    playing: bool,
    controls_visible: bool,
    position: u64,
    idle_ticks: u32,
}

impl PlayerSim {
    /// A freshly opened player: autoplaying at position zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            playing: true,
            controls_visible: true,
            position: 0,
            idle_ticks: 0,
        }
    }

    /// Re-open the player for a new cycle.
    pub fn reopen(&mut self) {
        *self = Self::new();
    }

    /// Advance the simulation by one second.
    pub fn tick(&mut self) {
        if self.playing {
            self.position += 1;
        }
        if self.controls_visible {
            self.idle_ticks += 1;
            if self.idle_ticks >= HIDE_AFTER_TICKS {
                self.controls_visible = false;
            }
        }
    }

    /// Tap on the video surface: reveal the controls.
    pub fn tap_surface(&mut self) {
        self.controls_visible = true;
        self.idle_ticks = 0;
    }

    /// Tap on the play/pause control. Ignored while the controls are hidden.
    pub fn tap_play_pause(&mut self) {
        if self.controls_visible {
            self.playing = !self.playing;
            self.idle_ticks = 0;
        }
    }

    /// Whether the video is currently advancing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current playback position in seconds.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Whether the on-screen controls are visible.
    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Render the current UI tree.
    ///
    /// The surface is always present; the play/pause control and the
    /// elapsed counter only exist while the controls are visible.
    #[must_use]
    pub fn tree(&self, controls: &ControlIds) -> UiNode {
        let mut root = UiNode::new().with_child(
            UiNode::new()
                .with_view_id(controls.surface.clone())
                .with_description("Video surface"),
        );

        if self.controls_visible {
            let label = if self.playing {
                "Pause video"
            } else {
                "Play video"
            };
            root = root
                .with_child(
                    UiNode::new()
                        .with_view_id(controls.play_pause.clone())
                        .with_description(label),
                )
                .with_child(
                    UiNode::new()
                        .with_description(format!("{} elapsed", elapsed_text(self.position))),
                );
        }
        root
    }
}

impl Default for PlayerSim {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a position as the phrase the target application would show.
fn elapsed_text(position: u64) -> String {
    let hours = position / 3600;
    let minutes = (position % 3600) / 60;
    let seconds = position % 60;
    if hours > 0 {
        format!(
            "{hours} {} {minutes} {} {seconds} seconds",
            plural(hours, "hour"),
            plural(minutes, "minute"),
        )
    } else if minutes > 0 {
        format!("{minutes} {} {seconds} seconds", plural(minutes, "minute"))
    } else {
        format!("{seconds} seconds")
    }
}

fn plural(count: u64, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
