use std::sync::LazyLock;

use regex::Regex;

static OPEN_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\A```(?:markdown|md)?[ \t]*(?:\r?\n)?").unwrap());
static CLOSE_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n)?```\s*\z").unwrap());

/// Remove one leading and one trailing code fence around the whole completion.
/// Fences in the middle of the text are left alone.
pub fn strip_fence(raw: &str) -> &str {
    let text = raw.trim();
    let text = match OPEN_FENCE_RE.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    let text = match CLOSE_FENCE_RE.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    };
    text.trim()
}
