//! Speech request parsing and parameter normalisation.
//!
//! Unknown voices and out-of-range speeds are never errors: they are
//! replaced with the default voice or clamped into the supported range.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;

pub const MIN_SPEED: f64 = 0.25;
pub const MAX_SPEED: f64 = 4.0;
pub const DEFAULT_SPEED: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Voice {
    #[default]
    Alloy,
    Echo,
    Fable,
    Onyx,
    Nova,
    Shimmer,
}

impl Voice {
    pub const ALL: [Voice; 6] = [
        Voice::Alloy,
        Voice::Echo,
        Voice::Fable,
        Voice::Onyx,
        Voice::Nova,
        Voice::Shimmer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Alloy => "alloy",
            Voice::Echo => "echo",
            Voice::Fable => "fable",
            Voice::Onyx => "onyx",
            Voice::Nova => "nova",
            Voice::Shimmer => "shimmer",
        }
    }

    /// Parse a voice name, substituting the default for anything unknown.
    pub fn sanitize(name: Option<&str>) -> Voice {
        name.and_then(|n| n.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownVoice;

impl FromStr for Voice {
    type Err = UnknownVoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Voice::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or(UnknownVoice)
    }
}

/// Constrain a playback speed to `[MIN_SPEED, MAX_SPEED]`.
pub fn clamp_speed(speed: Option<f64>) -> f64 {
    match speed {
        Some(s) if s.is_nan() => DEFAULT_SPEED,
        Some(s) => s.clamp(MIN_SPEED, MAX_SPEED),
        None => DEFAULT_SPEED,
    }
}

/// Body of `POST /tts`.
#[derive(Debug, Default, Deserialize)]
pub struct SpeechParams {
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub voice: Option<String>,

    #[serde(default, deserialize_with = "lenient_speed")]
    pub speed: Option<f64>,
}

/// Validated and normalised speech parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechInput {
    pub text: String,
    pub voice: Voice,
    pub speed: f64,
}

impl SpeechParams {
    /// `None` when there is no usable text.
    pub fn normalize(self) -> Option<SpeechInput> {
        let text = self.text.filter(|t| !t.is_empty())?;
        Some(SpeechInput {
            text,
            voice: Voice::sanitize(self.voice.as_deref()),
            speed: clamp_speed(self.speed),
        })
    }
}

/// Deserialize an optional field, treating a value of the wrong type as absent.
///
/// The value is captured as raw text, so a literal that `T` cannot
/// represent never fails the whole body.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let raw = Box::<RawValue>::deserialize(deserializer)?;
    Ok(serde_json::from_str(raw.get()).ok())
}

/// Like [`lenient`], but reads number literals beyond `f64` range as
/// infinities and `null` as zero, so both end up on a clamp bound.
fn lenient_speed<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Box::<RawValue>::deserialize(deserializer)?;
    Ok(match raw.get().trim() {
        "null" => Some(0.0),
        literal => literal.parse().ok(),
    })
}
