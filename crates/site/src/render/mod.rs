//! Route renderers: pure functions from the content document to a detached node tree.

mod about;
mod schedule;

pub use about::render_about;
pub use schedule::render_schedule_results;

/// Class of the outer `section` every renderer produces.
pub(crate) const SECTION_CLASS: &str = "content-section";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Fixed strings used by the renderers.
pub struct Labels {
    /// Heading above the principles list.
    pub principles: &'static str,
    /// Heading of the history block.
    pub history: &'static str,
    /// Prefix of the "last updated" paragraph.
    pub updated_prefix: &'static str,
    /// Appended to each season year heading.
    pub season_suffix: &'static str,
    /// Schedule table header cells, in column order.
    pub table_headers: [&'static str; 5],
}

impl Labels {
    /// English labels.
    pub const fn english() -> Self {
        Self {
            principles: "Principles",
            history: "History",
            updated_prefix: "Updated: ",
            season_suffix: "",
            table_headers: ["Date", "Event", "Venue", "Result", "Notes"],
        }
    }

    /// Japanese labels.
    pub const fn japanese() -> Self {
        Self {
            principles: "理念の柱",
            history: "沿革",
            updated_prefix: "更新日: ",
            season_suffix: "年",
            table_headers: ["日付", "大会名", "会場", "結果", "備考"],
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::english()
    }
}
