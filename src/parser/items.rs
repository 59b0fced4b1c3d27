use std::sync::LazyLock;

use regex::Regex;

use super::lines::{strip_bold, task_text};

static QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^["“”](.+?)["“”]:\s*(.+)$"#).unwrap());
static BOLD_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*(.+?)(?::\*\*|\*\*:)\s*(.+)$").unwrap());
static COLON_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([^:]+):\s*(.+)$").unwrap());

/// Titles this long are sentences that happen to contain a colon, not titles.
const MAX_TITLE_CHARS: usize = 80;

/// Normalize one bullet's text (marker already removed) into `Title: Description`.
/// Returns `None` for empty text and for stray hands-on task lines.
pub fn extract_item(text: &str) -> Option<String> {
    let text = text.trim();

    if let Some(caps) = QUOTED_RE.captures(text) {
        return Some(format!("{}: {}", &caps[1], &caps[2]));
    }

    if let Some(caps) = BOLD_TITLE_RE.captures(text) {
        return Some(format!("{}: {}", &caps[1], &caps[2]));
    }

    if let Some(caps) = COLON_RE.captures(text) {
        if caps[1].chars().count() < MAX_TITLE_CHARS {
            return Some(format!("{}: {}", &caps[1], &caps[2]));
        }
    }

    if text.is_empty() || task_text(text).is_some() {
        return None;
    }
    Some(strip_bold(text))
}
