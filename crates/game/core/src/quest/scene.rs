use super::ResolutionSpec;

/// Declarative description of one quest scene.
///
/// Each variant determines the controller the runtime builds and the ordered
/// resolutions it produces. The position of a resolution in that order is
/// the key of the graph edge taken when it resolves.
#[derive(Clone, Debug, PartialEq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SceneSpec {
    /// A level played in real time; resolutions as authored.
    Dungeon {
        level: String,
        resolutions: Vec<ResolutionSpec>,
    },

    /// A menu; one decision per option.
    Decision { prompt: String, options: Vec<String> },

    /// A text screen with a single "continue" decision.
    Transition { text: String },

    /// A die roll against the player's skill; resolves to success (0) or
    /// failure (1).
    SkillCheck {
        prompt: String,
        skill: String,
        difficulty: u32,
    },

    /// An exchange-of-blows fight; resolves to victory (0) or defeat (1).
    TurnBased { enemies: Vec<String> },
}

impl SceneSpec {
    pub const CONTINUE: &'static str = "continue";

    /// Number of resolutions the scene produces, which is also the number of
    /// outgoing edges it must have.
    pub fn resolution_count(&self) -> usize {
        match self {
            Self::Dungeon { resolutions, .. } => resolutions.len(),
            Self::Decision { options, .. } => options.len(),
            Self::Transition { .. } => 1,
            Self::SkillCheck { .. } | Self::TurnBased { .. } => 2,
        }
    }

    /// `true` for scenes with no way out; reaching one ends the quest.
    pub fn is_terminal(&self) -> bool {
        self.resolution_count() == 0
    }
}
