//! Overlay text model for the rendering boundary
//!
//! The display layer itself is out of scope; this module only prepares
//! the header and wrapped description lines it draws over a frame.

use crate::frame::Frame;
use crate::session::DisplayState;

/// Visual treatment hint for the overlay text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTone {
    /// Confirmed detection.
    Found,
    /// Below threshold or failed inference.
    Miss,
    /// Still waiting for the first result.
    Pending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub header: String,
    pub lines: Vec<String>,
    pub tone: OverlayTone,
}

impl Overlay {
    /// Build the overlay for a display state.
    pub fn from_state(state: &DisplayState, wrap_width: usize) -> Self {
        match state {
            DisplayState::Found {
                label,
                confidence,
                description,
            } => Self {
                header: format!("{}  [{:.1}]", label, confidence),
                lines: wrap_text(description, wrap_width),
                tone: OverlayTone::Found,
            },
            DisplayState::NoLandmark => Self {
                header: "No landmark detected".to_string(),
                lines: Vec::new(),
                tone: OverlayTone::Miss,
            },
            DisplayState::Processing => Self {
                header: "Processing...".to_string(),
                lines: Vec::new(),
                tone: OverlayTone::Pending,
            },
        }
    }
}

/// Greedy word wrap at the given column width, counted in characters so
/// multi-byte scripts wrap at the same point as ASCII. Words longer than
/// the width get their own line rather than being split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;
    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_chars = word_chars;
        } else if current_chars + 1 + word_chars <= width {
            current.push(' ');
            current.push_str(word);
            current_chars += 1 + word_chars;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_chars = word_chars;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Display boundary: receives the frame plus overlay text and owns how
/// they are drawn.
pub trait RenderSink: Send + Sync {
    fn render(&self, frame: &Frame, overlay: &Overlay);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_basic() {
        let lines = wrap_text("a white marble mausoleum on the bank of the Yamuna", 20);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        assert_eq!(lines.join(" "), "a white marble mausoleum on the bank of the Yamuna");
    }

    #[test]
    fn test_wrap_text_counts_chars_not_bytes() {
        // Each Devanagari word here is three characters but nine bytes;
        // both fit on one seven-column line.
        assert_eq!(wrap_text("ताज महल", 7), vec!["ताज महल"]);

        let text = "ताज महल आगरा में है";
        let lines = wrap_text(text, 8);
        assert!(lines.iter().all(|l| l.chars().count() <= 8));
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_text_long_word() {
        let lines = wrap_text("short Mahabalipuram end", 6);
        assert_eq!(lines, vec!["short", "Mahabalipuram", "end"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 40).is_empty());
        assert!(wrap_text("   ", 40).is_empty());
    }

    #[test]
    fn test_found_overlay_header_format() {
        let state = DisplayState::Found {
            label: "Taj Mahal".to_string(),
            confidence: 35.0,
            description: "A mausoleum.".to_string(),
        };
        let overlay = Overlay::from_state(&state, 40);
        assert_eq!(overlay.header, "Taj Mahal  [35.0]");
        assert_eq!(overlay.tone, OverlayTone::Found);
        assert_eq!(overlay.lines, vec!["A mausoleum.".to_string()]);
    }

    #[test]
    fn test_miss_and_pending_overlays() {
        let miss = Overlay::from_state(&DisplayState::NoLandmark, 40);
        assert_eq!(miss.header, "No landmark detected");
        assert_eq!(miss.tone, OverlayTone::Miss);
        assert!(miss.lines.is_empty());

        let pending = Overlay::from_state(&DisplayState::Processing, 40);
        assert_eq!(pending.header, "Processing...");
        assert_eq!(pending.tone, OverlayTone::Pending);
    }
}
