//! Text normalization ahead of speech synthesis

use regex::Regex;
use std::sync::OnceLock;

/// Strip markdown markers, emoji, and symbol runs so the synthesizer
/// reads only words and punctuation.
pub fn clean_text_for_audio(text: &str) -> String {
    static MARKERS: OnceLock<Regex> = OnceLock::new();
    static SYMBOLS: OnceLock<Regex> = OnceLock::new();
    static SPACES: OnceLock<Regex> = OnceLock::new();

    let markers = MARKERS.get_or_init(|| Regex::new(r"[*#\n]").expect("static regex"));
    let symbols = SYMBOLS.get_or_init(|| Regex::new(r"[^\w\s.,!?]").expect("static regex"));
    let spaces = SPACES.get_or_init(|| Regex::new(r"\s+").expect("static regex"));

    let text = markers.replace_all(text, " ");
    let text = symbols.replace_all(&text, "");
    let text = spaces.replace_all(&text, " ");
    text.trim().to_string()
}
