//! Deterministic placeholder translations
//!
//! When no live provider answers, the user still gets text back: the
//! original input prefixed with a marker naming the target, e.g.
//! `[mock:hi] good morning`. No I/O, no randomness, same input same output.

use crate::data::TranslationRequest;
use crate::language::LanguageCode;

/// Marker used for targets without a dedicated one
pub const GENERIC_MARKER: &str = "mock";

fn marker(target: &LanguageCode) -> &'static str {
    match target {
        LanguageCode::English => "mock:en",
        LanguageCode::Hindi => "mock:hi",
        LanguageCode::Urdu => "mock:ur",
        LanguageCode::Telugu => "mock:te",
        LanguageCode::Tamil => "mock:ta",
        LanguageCode::Malayalam => "mock:ml",
        LanguageCode::Marathi => "mock:mr",
        LanguageCode::Bengali => "mock:bn",
        LanguageCode::Gujarati => "mock:gu",
        LanguageCode::Kannada => "mock:kn",
        LanguageCode::Hinglish => "mock:hinglish",
        LanguageCode::Hyderabadi => "mock:hyderabadi",
        LanguageCode::Other(_) => GENERIC_MARKER,
    }
}

/// Placeholder translation for a request
pub fn generate(request: &TranslationRequest) -> String {
    format!("[{}] {}", marker(request.target()), request.input_text())
}
