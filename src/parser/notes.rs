use super::lines::{bullet_text, is_heading};
use super::sections::Section;

/// Running text for the accessibility, assessment and localization sections.
#[derive(Debug, Default)]
pub struct Notes {
    pub accessibility: String,
    pub assessment: String,
    pub localization: String,
}

impl Notes {
    /// Append a line to the section's text. Headings and non-note sections are ignored.
    pub fn push(&mut self, section: Section, line: &str) {
        let target = match section {
            Section::Accessibility => &mut self.accessibility,
            Section::Assessment => &mut self.assessment,
            Section::Localization => &mut self.localization,
            Section::Skills | Section::Weeks => return,
        };
        if is_heading(line) {
            return;
        }
        let text = bullet_text(line).unwrap_or(line).replace('*', "");
        if !target.is_empty() {
            target.push(' ');
        }
        target.push_str(&text);
    }

    /// Trimmed `(accessibility, assessment, localization)`.
    pub fn finish(self) -> (String, String, String) {
        (
            self.accessibility.trim().to_string(),
            self.assessment.trim().to_string(),
            self.localization.trim().to_string(),
        )
    }
}
