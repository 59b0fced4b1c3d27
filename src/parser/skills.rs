use std::sync::LazyLock;

use regex::Regex;

static SKILL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+\.|-|\*)\s*\*{0,2}([^:*]+?)\*{0,2}:\*{0,2}\s*(.+)$").unwrap()
});

/// `Name: Description` from a numbered or bulleted skill line.
pub fn parse_skill(line: &str) -> Option<String> {
    let caps = SKILL_RE.captures(line)?;
    Some(format!("{}: {}", caps[1].trim(), caps[2].trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_bold() {
        assert_eq!(
            parse_skill("1. **SQL**: querying relational data").as_deref(),
            Some("SQL: querying relational data")
        );
    }

    #[test]
    fn dash_plain() {
        assert_eq!(
            parse_skill("- Data Visualization: charts that tell a story").as_deref(),
            Some("Data Visualization: charts that tell a story")
        );
    }

    #[test]
    fn asterisk_bold() {
        assert_eq!(
            parse_skill("* **Statistics**: hypothesis testing").as_deref(),
            Some("Statistics: hypothesis testing")
        );
    }

    #[test]
    fn bold_colon_inside() {
        assert_eq!(
            parse_skill("2. **Python:** pandas and numpy").as_deref(),
            Some("Python: pandas and numpy")
        );
    }

    #[test]
    fn no_colon_is_dropped() {
        assert_eq!(parse_skill("1. Communication"), None);
        assert_eq!(parse_skill("Skills you will build:"), None);
    }
}
