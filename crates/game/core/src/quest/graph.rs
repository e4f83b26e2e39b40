use std::collections::BTreeMap;

use super::{QuestError, SceneSpec};

/// Label of the scene every quest starts from.
pub const ROOT: &str = "root";

/// Directed edge between two scenes.
///
/// `key` is the position, within the origin scene's resolutions, of the
/// resolution that selects this edge.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub key: usize,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, key: usize) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            key,
        }
    }
}

/// Validated quest graph.
///
/// A directed multigraph over scene labels: two edges may join the same
/// pair of scenes as long as their keys differ.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestGraph {
    scenes: BTreeMap<String, SceneSpec>,
    /// Outgoing targets per scene, indexed by edge key.
    successors: BTreeMap<String, Vec<String>>,
}

impl QuestGraph {
    /// Builds the graph.
    ///
    /// # Errors
    ///
    /// - [`QuestError::DuplicateScene`] if a label repeats
    /// - [`QuestError::MissingRoot`] if no scene is labelled [`ROOT`]
    /// - [`QuestError::UnknownScene`] if an edge names an undeclared scene
    /// - [`QuestError::DuplicateEdge`] if a scene has two edges with one key
    /// - [`QuestError::EdgeKeysMismatch`] unless each scene's keys are exactly
    ///   `0..n` for its `n` resolutions
    pub fn new(
        scene_list: Vec<(String, SceneSpec)>,
        edges: Vec<Edge>,
    ) -> Result<Self, QuestError> {
        let mut scenes = BTreeMap::new();
        for (label, scene) in scene_list {
            if scenes.contains_key(&label) {
                return Err(QuestError::DuplicateScene { label });
            }
            scenes.insert(label, scene);
        }
        if !scenes.contains_key(ROOT) {
            return Err(QuestError::MissingRoot);
        }

        let mut keyed: BTreeMap<&str, BTreeMap<usize, String>> = BTreeMap::new();
        for edge in &edges {
            if !scenes.contains_key(&edge.from) || !scenes.contains_key(&edge.to) {
                return Err(QuestError::UnknownScene {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                });
            }
            let outgoing = keyed.entry(edge.from.as_str()).or_default();
            if outgoing.insert(edge.key, edge.to.clone()).is_some() {
                return Err(QuestError::DuplicateEdge {
                    scene: edge.from.clone(),
                    key: edge.key,
                });
            }
        }

        let mut successors = BTreeMap::new();
        for (label, scene) in &scenes {
            let outgoing = keyed.remove(label.as_str()).unwrap_or_default();
            let resolutions = scene.resolution_count();
            if !outgoing.keys().copied().eq(0..resolutions) {
                return Err(QuestError::EdgeKeysMismatch {
                    scene: label.clone(),
                    resolutions,
                    keys: outgoing.into_keys().collect(),
                });
            }
            successors.insert(label.clone(), outgoing.into_values().collect());
        }

        Ok(Self { scenes, successors })
    }

    pub fn root(&self) -> &SceneSpec {
        &self.scenes[ROOT]
    }

    pub fn scene(&self, label: &str) -> Option<&SceneSpec> {
        self.scenes.get(label)
    }

    /// Scene labels in lexical order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.scenes.keys().map(String::as_str)
    }

    /// Scene reached from `from` when its resolution at `key` resolves.
    pub fn next_scene(&self, from: &str, key: usize) -> Option<&str> {
        self.successors
            .get(from)
            .and_then(|targets| targets.get(key))
            .map(String::as_str)
    }

    /// Targets of `from`, indexed by edge key.
    pub fn successors(&self, from: &str) -> &[String] {
        self.successors.get(from).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    use super::*;
    use crate::quest::ResolutionSpec;

    fn decision(options: &[&str]) -> SceneSpec {
        SceneSpec::Decision {
            prompt: String::new(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    fn scenes() -> Vec<(String, SceneSpec)> {
        vec![
            ("root".into(), decision(&["fight", "sneak", "flee"])),
            (
                "mall".into(),
                SceneSpec::Dungeon {
                    level: "mall".into(),
                    resolutions: vec![ResolutionSpec::KillGroup("horde".into())],
                },
            ),
            ("vents".into(), SceneSpec::Transition { text: String::new() }),
            ("end".into(), decision(&[])),
        ]
    }

    fn edges() -> Vec<Edge> {
        vec![
            Edge::new("root", "mall", 0),
            Edge::new("root", "vents", 1),
            Edge::new("root", "end", 2),
            Edge::new("mall", "end", 0),
            Edge::new("vents", "mall", 0),
        ]
    }

    #[test]
    fn edge_mapping_ignores_insertion_order() {
        let expected = QuestGraph::new(scenes(), edges()).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            let mut shuffled = edges();
            shuffled.shuffle(&mut rng);
            let graph = QuestGraph::new(scenes(), shuffled).unwrap();
            assert_eq!(graph, expected);
            assert_eq!(graph.next_scene("root", 0), Some("mall"));
            assert_eq!(graph.next_scene("root", 1), Some("vents"));
            assert_eq!(graph.next_scene("root", 2), Some("end"));
        }
        assert_eq!(expected.successors("end"), &[] as &[String]);
        assert_eq!(expected.next_scene("end", 0), None);
    }

    #[test]
    fn parallel_edges_are_allowed() {
        let scenes = vec![
            ("root".into(), decision(&["left", "right"])),
            ("hall".into(), decision(&[])),
        ];
        let graph = QuestGraph::new(
            scenes,
            vec![Edge::new("root", "hall", 1), Edge::new("root", "hall", 0)],
        )
        .unwrap();
        assert_eq!(graph.successors("root"), &["hall", "hall"]);
    }

    #[test]
    fn rejects_missing_root_and_duplicates() {
        let mut without_root = scenes();
        without_root.remove(0);
        assert_eq!(
            QuestGraph::new(without_root, vec![]),
            Err(QuestError::MissingRoot)
        );

        let mut doubled = scenes();
        doubled.push(("end".into(), decision(&[])));
        assert_eq!(
            QuestGraph::new(doubled, edges()),
            Err(QuestError::DuplicateScene { label: "end".into() })
        );

        let mut edges = edges();
        edges.push(Edge::new("root", "vents", 0));
        assert_eq!(
            QuestGraph::new(scenes(), edges),
            Err(QuestError::DuplicateEdge {
                scene: "root".into(),
                key: 0
            })
        );
    }

    #[test]
    fn edge_keys_must_match_resolution_count() {
        let mut missing = edges();
        missing.retain(|edge| !(edge.from == "root" && edge.key == 1));
        assert_eq!(
            QuestGraph::new(scenes(), missing),
            Err(QuestError::EdgeKeysMismatch {
                scene: "root".into(),
                resolutions: 3,
                keys: vec![0, 2],
            })
        );

        let mut extra = edges();
        extra.push(Edge::new("end", "root", 0));
        assert!(matches!(
            QuestGraph::new(scenes(), extra),
            Err(QuestError::EdgeKeysMismatch { scene, .. }) if scene == "end"
        ));

        let mut dangling = edges();
        dangling.push(Edge::new("mall", "roof", 1));
        assert!(matches!(
            QuestGraph::new(scenes(), dangling),
            Err(QuestError::UnknownScene { .. })
        ));
    }
}
