//! Panel slot types for the fixed three-act composition plan.

use serde::{Deserialize, Serialize};

/// Number of panels in every generated strip.
///
/// The three-act shape (setup, action, payoff) is a deliberate narrative
/// constraint baked into prompt composition, event ordering, and
/// validation. Every component assumes exactly this many positions.
pub const PANELS_PER_SEQUENCE: u8 = 3;

/// Shot type assigned to a panel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotType {
    /// Wide shot establishing setting and characters (position 1).
    Establishing,
    /// Medium shot focusing on the main action (position 2).
    Action,
    /// Close-up showing consequence or reaction (position 3).
    Reaction,
}

impl ShotType {
    /// Framing label used in prompt text.
    pub fn label(&self) -> &'static str {
        match self {
            ShotType::Establishing => "establishing shot",
            ShotType::Action => "action shot",
            ShotType::Reaction => "reaction shot",
        }
    }
}

/// One slot in the fixed three-panel composition plan.
///
/// Position is the sole ordering key and is never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelSlot {
    /// Panel position, 1-3
    pub position: u8,
    /// Shot type for this position
    pub shot_type: ShotType,
    /// What the shot should accomplish
    pub description: &'static str,
    /// Camera angle guidance
    pub camera_angle: &'static str,
}
