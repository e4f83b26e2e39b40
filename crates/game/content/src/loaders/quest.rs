//! Quest graph loader.

use std::path::Path;

use game_core::{Edge, QuestGraph, SceneSpec};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Quest file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestSpec {
    pub scenes: Vec<(String, SceneSpec)>,
    pub edges: Vec<Edge>,
}

/// Loader for the quest graph from RON files.
pub struct QuestLoader;

impl QuestLoader {
    /// Load and validate a quest graph from a RON file.
    pub fn load(path: &Path) -> LoadResult<QuestGraph> {
        let content = read_file(path)?;
        let spec: QuestSpec = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse quest RON: {}", e))?;

        QuestGraph::new(spec.scenes, spec.edges)
            .map_err(|e| anyhow::anyhow!("Invalid quest graph in {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_valid_graph() {
        let file = write(
            r#"(
                scenes: [
                    ("root", Decision(prompt: "Go?", options: ["yes", "no"])),
                    ("mall", Dungeon(level: "mall", resolutions: [KillGroup("horde")])),
                    ("end", Transition(text: "Fin.")),
                    ("credits", Decision(prompt: "", options: [])),
                ],
                edges: [
                    (from: "root", to: "mall", key: 0),
                    (from: "root", to: "end", key: 1),
                    (from: "mall", to: "end", key: 0),
                    (from: "end", to: "credits", key: 0),
                ],
            )"#,
        );
        let graph = QuestLoader::load(file.path()).unwrap();
        assert_eq!(graph.next_scene("root", 0), Some("mall"));
        assert!(graph.scene("credits").unwrap().is_terminal());
    }

    #[test]
    fn reports_graph_errors_with_the_path() {
        let file = write(
            r#"(
                scenes: [("root", Decision(prompt: "", options: ["a", "b"]))],
                edges: [],
            )"#,
        );
        let err = QuestLoader::load(file.path()).unwrap_err().to_string();
        assert!(err.contains("Invalid quest graph"));
        assert!(err.contains("edge keys"));
    }
}
