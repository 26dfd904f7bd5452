//! Driver configuration and the text snapshot shown on the panel.
//!
//! This module defines [`DisplayConfig`], the immutable [`StatusLines`]
//! snapshot and the [`StatusChanges`] diff used to skip redundant redraws.

use core::fmt::Write;

use heapless::{String, Vec};

// ── DisplayConfig ────────────────────────────────────────────────────────

/// Configuration for bring-up timing and the update task.
///
/// [`DisplayConfig::default()`] reproduces the datasheet-safe timings and a
/// 30 Hz redraw ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Maximum redraw rate in Hz for the update task. Default: 30.
    pub update_frequency_hz: u32,
    /// Length of the RST low pulse in µs (datasheet minimum 3). Default: 10.
    pub reset_pulse_us: u32,
    /// Wait after releasing RST before the first command, in ms. Default: 100.
    pub reset_settle_ms: u32,
    /// Contrast applied after the configuration sequence. `None` keeps the
    /// controller's power-on level. Default: `None`.
    pub contrast: Option<u8>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            update_frequency_hz: 30,
            reset_pulse_us: 10,
            reset_settle_ms: 100,
            contrast: None,
        }
    }
}

impl DisplayConfig {
    /// Convert the configured frequency to a timer period in milliseconds.
    ///
    /// Formula: `1000 / update_frequency_hz`. A frequency of 0 disables
    /// rate limiting (period 0).
    pub fn update_period_ms(&self) -> u64 {
        1000u64.checked_div(self.update_frequency_hz as u64).unwrap_or(0)
    }
}

// ── StatusLines ──────────────────────────────────────────────────────────

/// Text rows that fit on the panel with the 16 px font.
pub const MAX_LINES: usize = 4;

/// Bytes kept per line. 128 px holds at most 21 of the narrowest glyphs.
pub const LINE_CAPACITY: usize = 21;

/// One line of status text.
pub type Line = String<LINE_CAPACITY>;

/// Immutable snapshot of the text to show, one entry per text row.
///
/// Fixed capacity, no heap. Longer input is truncated on a character
/// boundary; lines past [`MAX_LINES`] are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLines {
    lines: Vec<Line, MAX_LINES>,
}

impl StatusLines {
    /// No lines; renders as a blank panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy up to [`MAX_LINES`] lines.
    pub fn from_lines(lines: &[&str]) -> Self {
        let mut status = Self::new();
        for line in lines {
            if !status.push(line) {
                break;
            }
        }
        status
    }

    /// Format an inference result as `label` over `NN.N%`.
    ///
    /// `confidence` is a probability in `0.0..=1.0`; values outside are
    /// clamped and NaN is shown as `--`.
    ///
    /// ```
    /// use lumen_oled_display_rs::StatusLines;
    ///
    /// let status = StatusLines::from_classification("cat", 0.875);
    /// let lines: Vec<&str> = status.lines().collect();
    /// assert_eq!(lines, ["cat", "87.5%"]);
    /// ```
    pub fn from_classification(label: &str, confidence: f32) -> Self {
        let mut status = Self::new();
        status.push(label);

        let mut pct = Line::new();
        if confidence.is_nan() {
            let _ = pct.push_str("--");
        } else {
            let _ = write!(pct, "{:.1}%", confidence.clamp(0.0, 1.0) * 100.0);
        }
        let _ = status.lines.push(pct);
        status
    }

    /// Append a line. Returns `false` (and drops the line) when full.
    pub fn push(&mut self, text: &str) -> bool {
        self.lines.push(truncate(text)).is_ok()
    }

    /// The lines, top row first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.as_str())
    }

    /// Line `row`, if present.
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|l| l.as_str())
    }

    /// Number of lines held.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// `true` if there are no lines (a blank panel).
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Copy as many whole characters of `text` as fit.
fn truncate(text: &str) -> Line {
    let mut line = Line::new();
    for ch in text.chars() {
        if line.push(ch).is_err() {
            break;
        }
    }
    line
}

// ── StatusChanges ────────────────────────────────────────────────────────

/// Identifies which rows changed between two [`StatusLines`] snapshots.
///
/// A row that exists in only one snapshot counts as changed.
pub struct StatusChanges {
    /// Per-row flag: `true` if the text differs.
    pub line_changed: [bool; MAX_LINES],
}

impl StatusChanges {
    /// Diff two snapshots row by row.
    pub fn detect(old: &StatusLines, new: &StatusLines) -> Self {
        let mut line_changed = [false; MAX_LINES];
        for (row, changed) in line_changed.iter_mut().enumerate() {
            *changed = old.line(row) != new.line(row);
        }
        Self { line_changed }
    }

    /// Returns `true` if any row changed.
    pub fn any_changed(&self) -> bool {
        self.line_changed.iter().any(|&c| c)
    }
}

/// Returns `true` if the two snapshots differ in any row.
pub fn status_changed(old: &StatusLines, new: &StatusLines) -> bool {
    old != new
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let c = DisplayConfig::default();
        assert_eq!(c.update_frequency_hz, 30);
        assert_eq!(c.reset_pulse_us, 10);
        assert_eq!(c.reset_settle_ms, 100);
        assert_eq!(c.contrast, None);
    }

    #[test]
    fn update_period_30hz() {
        let c = DisplayConfig::default();
        assert_eq!(c.update_period_ms(), 33);
    }

    #[test]
    fn update_period_60hz() {
        let c = DisplayConfig {
            update_frequency_hz: 60,
            ..DisplayConfig::default()
        };
        assert_eq!(c.update_period_ms(), 16);
    }

    #[test]
    fn update_period_zero_hz_is_unthrottled() {
        let c = DisplayConfig {
            update_frequency_hz: 0,
            ..DisplayConfig::default()
        };
        assert_eq!(c.update_period_ms(), 0);
    }

    #[test]
    fn default_status_is_empty() {
        let status = StatusLines::default();
        assert!(status.is_empty());
        assert_eq!(status.lines().count(), 0);
    }

    #[test]
    fn from_lines_copies_strings() {
        let status = StatusLines::from_lines(&["Ready", "", "cam ok"]);
        assert_eq!(status.len(), 3);
        assert_eq!(status.line(0), Some("Ready"));
        assert_eq!(status.line(1), Some(""));
        assert_eq!(status.line(2), Some("cam ok"));
        assert_eq!(status.line(3), None);
    }

    #[test]
    fn from_lines_drops_extra_rows() {
        let status = StatusLines::from_lines(&["a", "b", "c", "d", "e"]);
        assert_eq!(status.len(), MAX_LINES);
        assert_eq!(status.line(3), Some("d"));
    }

    #[test]
    fn long_lines_truncate_on_char_boundary() {
        let status = StatusLines::from_lines(&["ABCDEFGHIJKLMNOPQRSTUVWXYZ"]);
        assert_eq!(status.line(0), Some("ABCDEFGHIJKLMNOPQRSTU"));

        // 20 ASCII bytes + a 2-byte char does not fit in 21 bytes.
        let status = StatusLines::from_lines(&["ABCDEFGHIJKLMNOPQRSTé"]);
        assert_eq!(status.line(0), Some("ABCDEFGHIJKLMNOPQRST"));
    }

    #[test]
    fn classification_formats_percentage() {
        let status = StatusLines::from_classification("dog", 0.5);
        assert_eq!(status.line(0), Some("dog"));
        assert_eq!(status.line(1), Some("50.0%"));
    }

    #[test]
    fn classification_clamps_confidence() {
        assert_eq!(
            StatusLines::from_classification("x", 1.7).line(1),
            Some("100.0%")
        );
        assert_eq!(
            StatusLines::from_classification("x", -0.2).line(1),
            Some("0.0%")
        );
        assert_eq!(
            StatusLines::from_classification("x", f32::NAN).line(1),
            Some("--")
        );
    }

    #[test]
    fn status_changed_detects_differences() {
        let a = StatusLines::default();
        let b = StatusLines::from_lines(&["X"]);
        assert!(status_changed(&a, &b));
        assert!(!status_changed(&a, &a));
    }

    #[test]
    fn status_changes_per_row() {
        let a = StatusLines::from_classification("cat", 0.9);
        let b = StatusLines::from_classification("cat", 0.8);
        let changes = StatusChanges::detect(&a, &b);
        assert!(!changes.line_changed[0]);
        assert!(changes.line_changed[1]);
        assert!(!changes.line_changed[2]);
        assert!(changes.any_changed());
    }

    #[test]
    fn status_changes_none() {
        let s = StatusLines::from_lines(&["same"]);
        assert!(!StatusChanges::detect(&s, &s).any_changed());
    }

    #[test]
    fn added_row_counts_as_changed() {
        let a = StatusLines::from_lines(&["one"]);
        let b = StatusLines::from_lines(&["one", "two"]);
        let changes = StatusChanges::detect(&a, &b);
        assert!(!changes.line_changed[0]);
        assert!(changes.line_changed[1]);
    }
}
