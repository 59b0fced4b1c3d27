use tracing::trace;

use super::items::extract_item;
use super::lines::{task_text, LineKind};
use crate::roadmap::WeekEntry;

/// Tracks the week block currently being filled.
///
/// The open week does not care which section the classifier is in: once opened it
/// keeps taking lines until the next week heading or until [`WeekBlocks::finish`].
#[derive(Debug, Default)]
pub struct WeekBlocks {
    open: Option<WeekEntry>,
    done: Vec<WeekEntry>,
}

impl WeekBlocks {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Feed one classified line. Lines arriving before the first week heading are ignored.
    pub fn feed(&mut self, line: &str, kind: &LineKind<'_>) {
        if let LineKind::WeekHeading { week, theme } = kind {
            self.start_week(*week, theme.clone());
            return;
        }

        let Some(current) = self.open.as_mut() else {
            return;
        };

        match kind {
            LineKind::Theme(theme) if current.theme.is_empty() => {
                current.theme = theme.clone();
            }
            LineKind::BoldLine(text) if current.theme.is_empty() => {
                current.theme = text.clone();
            }
            LineKind::BoldLine(_) => {
                if let Some(task) = task_text(line) {
                    current.task = task;
                }
            }
            LineKind::Task(task) => {
                current.task = task.clone();
            }
            LineKind::Bullet(text) => {
                if let Some(item) = extract_item(text) {
                    current.items.push(item);
                }
            }
            _ => {}
        }
    }

    fn start_week(&mut self, week: u64, theme: String) {
        self.flush();
        trace!(week, theme = %theme, "week opened");
        self.open = Some(WeekEntry {
            week,
            theme,
            ..Default::default()
        });
    }

    fn flush(&mut self) {
        if let Some(entry) = self.open.take() {
            self.done.push(entry);
        }
    }

    /// Close any open week and hand back all weeks in encounter order.
    pub fn finish(mut self) -> Vec<WeekEntry> {
        self.flush();
        self.done
    }
}
