//! Builds the controller and bound resolutions for a scene.

use std::sync::Arc;

use game_core::{HumanoidData, QuestError, Resolution, SceneSpec};

use crate::controller::{
    Controller, DecisionController, DungeonController, SkillCheckController, TurnBasedController,
};
use crate::{ContentBundle, Result};

/// Decision labels of a skill check, in outcome order.
pub const SKILL_CHECK_OUTCOMES: [&str; 2] = ["success", "failure"];
/// Decision labels of a turn-based fight, in outcome order.
pub const TURN_BASED_OUTCOMES: [&str; 2] = ["victory", "defeat"];

/// Creates the controller for `scene` and its resolutions, in edge-key
/// order.
///
/// Dungeon resolutions are bound against the freshly populated world; every
/// other scene kind produces one decision per outcome.
pub fn make_controller_and_resolutions(
    label: &str,
    scene: &SceneSpec,
    content: &Arc<ContentBundle>,
    player_data: HumanoidData,
) -> Result<(Box<dyn Controller>, Vec<Resolution>)> {
    let made: (Box<dyn Controller>, Vec<Resolution>) = match scene {
        SceneSpec::Dungeon { level, resolutions } => {
            let controller =
                DungeonController::new(label, level, Arc::clone(content), player_data)?;
            let world = controller.level_world();
            let bound = resolutions
                .iter()
                .map(|spec| spec.bind(world))
                .collect::<std::result::Result<Vec<_>, QuestError>>()?;
            (Box::new(controller), bound)
        }
        SceneSpec::Decision { prompt, options } => (
            Box::new(DecisionController::new(prompt.as_str(), options.clone(), player_data)),
            options.iter().map(Resolution::decision).collect(),
        ),
        SceneSpec::Transition { text } => (
            Box::new(DecisionController::transition(text.as_str(), player_data)),
            decisions(&[SceneSpec::CONTINUE]),
        ),
        SceneSpec::SkillCheck {
            prompt,
            skill,
            difficulty,
        } => (
            Box::new(SkillCheckController::new(
                prompt.as_str(),
                skill.as_str(),
                *difficulty,
                player_data,
            )),
            decisions(&SKILL_CHECK_OUTCOMES),
        ),
        SceneSpec::TurnBased { enemies } => (
            Box::new(TurnBasedController::new(enemies, content, player_data)?),
            decisions(&TURN_BASED_OUTCOMES),
        ),
    };

    debug_assert_eq!(made.1.len(), scene.resolution_count());
    Ok(made)
}

fn decisions(options: &[&str]) -> Vec<Resolution> {
    options.iter().copied().map(Resolution::decision).collect()
}
