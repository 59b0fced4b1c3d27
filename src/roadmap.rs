use serde::{Deserialize, Serialize};

/// One weekly module of a learning roadmap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekEntry {
    pub week: u64,
    pub theme: String,
    pub items: Vec<String>,
    pub task: String,
}

/// Structured form of a model-generated learning roadmap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub skills: Vec<String>,
    pub weeks: Vec<WeekEntry>,
    pub accessibility: String,
    pub assessment: String,
    pub localization: String,
}

impl Roadmap {
    /// False when no week could be extracted; callers should show the raw text instead.
    pub fn has_weeks(&self) -> bool {
        !self.weeks.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.weeks.iter().map(|w| w.items.len()).sum()
    }
}

/// Raw completion text paired with its parsed plan, as handed back to a request handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResponse {
    pub text: String,
    pub plan: Roadmap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape() {
        let roadmap = Roadmap {
            skills: vec!["Rust: systems language".into()],
            weeks: vec![WeekEntry {
                week: 1,
                theme: "Basics".into(),
                items: vec!["Ownership: moves and borrows".into()],
                task: "Build a CLI".into(),
            }],
            ..Default::default()
        };
        let value = serde_json::to_value(&roadmap).unwrap();
        assert_eq!(value["weeks"][0]["week"], 1);
        assert_eq!(value["weeks"][0]["task"], "Build a CLI");
        assert_eq!(value["accessibility"], "");
        assert_eq!(value["skills"][0], "Rust: systems language");
    }

    #[test]
    fn empty_roadmap_has_no_weeks() {
        let roadmap = Roadmap::default();
        assert!(!roadmap.has_weeks());
        assert_eq!(roadmap.item_count(), 0);
    }
}
