//! Tone presets offered by the form.
//!
//! Tone stays a free-form label at the network boundary: the prompt embeds
//! whatever the client sends. Presets only feed the selector in the page.

use serde::Serialize;

/// Preset the page starts on. Served by `GET /api/tones`.
pub const DEFAULT_TONE: &str = "professional";

/// A selectable tone with a short description of its register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TonePreset {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const TONE_PRESETS: &[TonePreset] = &[
    TonePreset {
        value: "professional",
        label: "Professional",
        description: "Formal, corporate-friendly tone",
    },
    TonePreset {
        value: "friendly",
        label: "Friendly",
        description: "Warm, approachable tone",
    },
    TonePreset {
        value: "persuasive",
        label: "Persuasive",
        description: "Confident, compelling tone",
    },
    TonePreset {
        value: "bold",
        label: "Bold",
        description: "Direct, standout tone",
    },
];

/// Body of `GET /api/tones`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToneList {
    pub default: &'static str,
    pub presets: &'static [TonePreset],
}

impl ToneList {
    pub fn current() -> Self {
        Self {
            default: DEFAULT_TONE,
            presets: TONE_PRESETS,
        }
    }
}

/// Looks up a preset by value, ignoring case and surrounding whitespace.
pub fn find_preset(tone: &str) -> Option<&'static TonePreset> {
    let tone = tone.trim();
    TONE_PRESETS
        .iter()
        .find(|p| p.value.eq_ignore_ascii_case(tone))
}
