//! Loads the sample content shipped with the client.

use std::path::PathBuf;

use game_content::ContentFactory;
use game_core::{AbilityKind, SceneSpec};

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../client/data"))
}

#[test]
fn every_sample_file_parses() {
    let factory = factory();

    let config = factory.load_config().unwrap();
    assert_eq!(config.rng_seed, Some(1337));

    let behaviors = factory.load_behaviors().unwrap();
    let names: Vec<_> = behaviors.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["autopilot", "walker", "brute"]);

    let actors = factory.load_actors().unwrap();
    assert!(actors.iter().any(|(name, _)| name == "player"));

    let mods = factory.load_mods().unwrap();
    let shotgun = mods.iter().find(|m| m.label == "shotgun").unwrap();
    assert!(matches!(shotgun.kind, AbilityKind::Shoot { count: 5, .. }));

    let items = factory.load_items().unwrap();
    assert_eq!(items.get("medkit").and_then(|i| i.grants_mod.as_deref()), Some("medkit"));

    let mall = factory.load_level("mall").unwrap();
    assert_eq!(mall.actor_templates().filter(|t| *t == "walker").count(), 3);
}

#[test]
fn sample_quest_is_a_valid_graph() {
    let graph = factory().load_quest().unwrap();

    assert!(matches!(graph.root(), SceneSpec::Transition { .. }));
    assert_eq!(graph.successors("mall"), &["escape", "escape", "dead_end"]);
    assert!(graph.scene("ending").unwrap().is_terminal());
}
