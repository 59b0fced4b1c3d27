pub mod fence;
pub mod items;
pub mod lines;
pub mod notes;
pub mod sections;
pub mod skills;
pub mod weeks;

use tracing::{debug, trace};

use crate::roadmap::Roadmap;
use lines::LineKind;
use notes::Notes;
use sections::Section;
use weeks::WeekBlocks;

/// Knobs for [`parse_roadmap_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Only let an open week take lines while the current section is the weekly plan.
    /// Off by default: an open week keeps absorbing bullets from later sections.
    pub strict_weeks: bool,
}

/// Parse a model completion into a [`Roadmap`]. Never fails; unrecognized lines are dropped.
pub fn parse_roadmap(markdown: &str) -> Roadmap {
    parse_roadmap_with(markdown, ParseOptions::default())
}

/// Single pass: fence → lines → classify → route to skills / weeks / notes.
pub fn parse_roadmap_with(markdown: &str, options: ParseOptions) -> Roadmap {
    let text = fence::strip_fence(markdown);

    let mut section: Option<Section> = None;
    let mut skills = Vec::new();
    let mut weeks = WeekBlocks::default();
    let mut notes = Notes::default();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let kind = lines::classify_line(line);
        match kind {
            LineKind::SectionHeading(next) => {
                section = Some(next);
                continue;
            }
            LineKind::Heading => continue,
            _ => {}
        }

        if section == Some(Section::Skills) {
            if let Some(skill) = skills::parse_skill(line) {
                skills.push(skill);
                continue;
            }
            trace!(line, "skill line dropped");
        }

        let in_weeks = section == Some(Section::Weeks);
        let week_sees_line = in_weeks || (weeks.is_open() && !options.strict_weeks);
        if week_sees_line {
            weeks.feed(line, &kind);
        }

        if let Some(s) = section.filter(|s| s.is_free_text()) {
            notes.push(s, line);
        }
    }

    let weeks = weeks.finish();
    let (accessibility, assessment, localization) = notes.finish();
    let roadmap = Roadmap {
        skills,
        weeks,
        accessibility,
        assessment,
        localization,
    };

    debug!(
        skills = roadmap.skills.len(),
        weeks = roadmap.weeks.len(),
        items = roadmap.item_count(),
        "parsed roadmap"
    );
    for w in &roadmap.weeks {
        debug!(
            week = w.week,
            theme = %w.theme,
            items = w.items.len(),
            has_task = !w.task.is_empty(),
            "week"
        );
    }

    roadmap
}
