//! Voice catalog.
//!
//! Voices are plain labels grouped by gender. The same label can appear under
//! both genders; selection is by label within the active gender.

use aw_protocol::VoiceGender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceOption {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: &'static str,
}

pub const FEMALE_VOICES: &[VoiceOption] = &[
    VoiceOption { id: "Voice 1", name: "Voice 1", provider: "ElevenLabs" },
    VoiceOption { id: "Voice 3", name: "Voice 3", provider: "Cartesia" },
    VoiceOption { id: "Voice 4", name: "Voice 4", provider: "Cartesia" },
];

pub const MALE_VOICES: &[VoiceOption] = &[
    VoiceOption { id: "Voice 1", name: "Voice 1", provider: "ElevenLabs" },
    VoiceOption { id: "Voice 2", name: "Voice 2", provider: "ElevenLabs" },
    VoiceOption { id: "Voice 3", name: "Voice 3", provider: "Cartesia" },
    VoiceOption { id: "Voice 4", name: "Voice 4", provider: "Cartesia" },
];

/// Voice selected when a session starts with a preselected voice.
pub const DEFAULT_VOICE_ID: &str = "Voice 1";

pub fn voices_for(gender: VoiceGender) -> &'static [VoiceOption] {
    match gender {
        VoiceGender::Female => FEMALE_VOICES,
        VoiceGender::Male => MALE_VOICES,
    }
}

/// Whether `voice_id` is offered for `gender`.
pub fn is_offered(gender: VoiceGender, voice_id: &str) -> bool {
    voices_for(gender).iter().any(|v| v.id == voice_id)
}
