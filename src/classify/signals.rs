// src/classify/signals.rs
//! Closed-phrase matching over noisy free text.

/// Phrases that signal a funding call is no longer open (Finnish + English).
/// Extend, never remove. Matching is substring containment on purpose:
/// it catches the phrase with surrounding punctuation and inflected tails.
pub static CLOSED_SIGNALS: &[&str] = &[
    // Finnish
    "haku päättynyt",
    "haku on päättynyt",
    "ei haettavissa",
    "hakuaika päättyi",
    "suljettu",
    // English
    "closed",
    "application period ended",
    "no longer accepting applications",
    "deadline passed",
];

/// True when any built-in closed phrase occurs in `text`, case-insensitively.
/// Short-circuits on the first hit; which phrase matched is not reported.
pub fn has_closed_signal(text: &str) -> bool {
    has_closed_signal_with(text, &[])
}

/// Like [`has_closed_signal`], with caller-supplied phrases checked after
/// the built-in set.
pub fn has_closed_signal_with(text: &str, extra: &[String]) -> bool {
    let lowered = text.to_lowercase();
    CLOSED_SIGNALS.iter().any(|p| lowered.contains(p))
        || extra
            .iter()
            .filter(|p| !p.is_empty())
            .any(|p| lowered.contains(&p.to_lowercase()))
}
