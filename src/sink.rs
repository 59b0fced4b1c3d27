use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::roadmap::Roadmap;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize roadmap {id}: {source}")]
    Serialize {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Destination for parsed roadmaps, keyed by a caller-chosen id.
pub trait PlanSink {
    fn save(&mut self, id: &str, roadmap: &Roadmap) -> Result<(), SinkError>;
}

/// Writes each roadmap to `<dir>/<id>.json`.
pub struct JsonDirSink {
    dir: PathBuf,
    pretty: bool,
}

impl JsonDirSink {
    pub fn new(dir: impl Into<PathBuf>, pretty: bool) -> Result<Self, SinkError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| SinkError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir, pretty })
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PlanSink for JsonDirSink {
    fn save(&mut self, id: &str, roadmap: &Roadmap) -> Result<(), SinkError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(roadmap)
        } else {
            serde_json::to_string(roadmap)
        }
        .map_err(|source| SinkError::Serialize {
            id: id.to_string(),
            source,
        })?;

        let path = self.path_for(id);
        fs::write(&path, json).map_err(|source| SinkError::Io { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_roadmap;

    #[test]
    fn writes_json_per_id() {
        let tmp = tempfile::tempdir().unwrap();
        let mut sink = JsonDirSink::new(tmp.path().join("out"), false).unwrap();
        let roadmap = parse_roadmap("## Learning Path\nWeek 1: Basics\n- Item");
        sink.save("plan-a", &roadmap).unwrap();

        let written = std::fs::read_to_string(sink.path_for("plan-a")).unwrap();
        let back: Roadmap = serde_json::from_str(&written).unwrap();
        assert_eq!(back, roadmap);
    }

    #[test]
    fn unwritable_dir_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();
        assert!(matches!(
            JsonDirSink::new(&file, true),
            Err(SinkError::Io { .. })
        ));
    }
}
