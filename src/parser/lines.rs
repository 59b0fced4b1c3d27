use std::sync::LazyLock;

use regex::Regex;

use super::sections::{section_for_heading, Section};

static WEEK_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:#{1,4}\s*)?\*{0,2}Week\s*([0-9]+)[:\s-]*(.+?)?\*{0,2}$").unwrap()
});
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,4}").unwrap());
static THEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:Theme|Focus)[:\s][:\s]*(.*)$").unwrap());
static BOLD_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*([^*]+)\*\*$").unwrap());
static TASK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[*\-•]\s*)?(?:\*\*)?Hands?-?on\s*Task:?\*{0,2}:?\s*(.*)$").unwrap()
});
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[*\-•]\s+(.*)$").unwrap());

/// What a single trimmed, non-empty line looks like, before any section context is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    SectionHeading(Section),
    WeekHeading { week: u64, theme: String },
    /// Any other `#` heading.
    Heading,
    /// `Theme: ...` / `Focus: ...`
    Theme(String),
    /// A line that is nothing but `**bold text**`.
    BoldLine(String),
    Task(String),
    /// Bullet text with the marker removed.
    Bullet(&'a str),
    Prose,
}

type Rule = for<'a> fn(&'a str) -> Option<LineKind<'a>>;

// Evaluated top to bottom, first hit wins.
const RULES: &[Rule] = &[
    section_heading,
    week_heading,
    other_heading,
    theme_line,
    bold_line,
    task_line,
    bullet_line,
];

pub fn classify_line(line: &str) -> LineKind<'_> {
    RULES
        .iter()
        .find_map(|rule| rule(line))
        .unwrap_or(LineKind::Prose)
}

/// Task text if the line is a hands-on task line, with markers stripped.
pub fn task_text(line: &str) -> Option<String> {
    TASK_RE.captures(line).map(|caps| strip_bold(&caps[1]))
}

/// Marker-stripped text if the line is a bullet.
pub fn bullet_text(line: &str) -> Option<&str> {
    BULLET_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

pub fn is_heading(line: &str) -> bool {
    HEADING_RE.is_match(line)
}

/// Drop every `*`, which removes bold and italic markers alike.
pub fn strip_bold(text: &str) -> String {
    text.replace('*', "").trim().to_string()
}

fn section_heading(line: &str) -> Option<LineKind<'_>> {
    section_for_heading(line).map(LineKind::SectionHeading)
}

fn week_heading(line: &str) -> Option<LineKind<'_>> {
    let caps = WEEK_HEADING_RE.captures(line)?;
    // Out-of-range numbers saturate so the heading still opens a week.
    let week = caps[1].parse().unwrap_or(u64::MAX);
    let theme = caps.get(2).map(|m| strip_bold(m.as_str())).unwrap_or_default();
    Some(LineKind::WeekHeading { week, theme })
}

fn other_heading(line: &str) -> Option<LineKind<'_>> {
    is_heading(line).then_some(LineKind::Heading)
}

fn theme_line(line: &str) -> Option<LineKind<'_>> {
    THEME_RE
        .captures(line)
        .map(|caps| LineKind::Theme(strip_bold(&caps[1])))
}

fn bold_line(line: &str) -> Option<LineKind<'_>> {
    BOLD_LINE_RE
        .captures(line)
        .map(|caps| LineKind::BoldLine(caps[1].trim().to_string()))
}

fn task_line(line: &str) -> Option<LineKind<'_>> {
    task_text(line).map(LineKind::Task)
}

fn bullet_line(line: &str) -> Option<LineKind<'_>> {
    bullet_text(line).map(LineKind::Bullet)
}
