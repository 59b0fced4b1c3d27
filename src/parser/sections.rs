use std::sync::LazyLock;

use regex::Regex;

/// Logical region of a roadmap, switched by recognized headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Skills,
    Weeks,
    Accessibility,
    Assessment,
    Localization,
}

impl Section {
    pub fn is_free_text(self) -> bool {
        matches!(
            self,
            Section::Accessibility | Section::Assessment | Section::Localization
        )
    }
}

// Matched as prefixes of the heading text, first family wins.
static SECTION_RULES: LazyLock<Vec<(Section, Regex)>> = LazyLock::new(|| {
    [
        (
            Section::Skills,
            r"(?i)^#{1,4}\s*(?:Top\s*[0-9]*\s*Skills?|Skills?[\s/]*(?:Competencies)?|Key\s*Skills?)",
        ),
        (
            Section::Weeks,
            r"(?i)^#{1,4}\s*(?:Learning\s*Path|4-Week\s*Plan|Weekly\s*Breakdown)",
        ),
        (Section::Accessibility, r"(?i)^#{1,4}\s*Accessibility"),
        (Section::Assessment, r"(?i)^#{1,4}\s*Assessment"),
        (Section::Localization, r"(?i)^#{1,4}\s*Localization"),
    ]
    .into_iter()
    .map(|(section, pattern)| (section, Regex::new(pattern).unwrap()))
    .collect()
});

/// Section named by a heading line, if it belongs to one of the known families.
pub fn section_for_heading(line: &str) -> Option<Section> {
    SECTION_RULES
        .iter()
        .find(|(_, re)| re.is_match(line))
        .map(|(section, _)| *section)
}
