//! Track descriptions, one per auxiliary stream of a media item.
//!
//! Kind and subtype names are matched case-insensitively; anything
//! unrecognised becomes `Unknown` rather than an error.

use serde::Serialize;
use serde_json::{Map, Value};

/// What the track carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrackKind {
    Unknown,
    Text,
    Audio,
    Video,
}

impl TrackKind {
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "text" => Self::Text,
            "audio" => Self::Audio,
            "video" => Self::Video,
            _ => Self::Unknown,
        }
    }

    pub fn sdk_code(self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::Text => 1,
            Self::Audio => 2,
            Self::Video => 3,
        }
    }
}

/// Role of a text track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrackSubtype {
    Unknown,
    None,
    Subtitles,
    Captions,
    Descriptions,
    Chapters,
    Metadata,
}

impl TrackSubtype {
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "none" => Self::None,
            "subtitles" => Self::Subtitles,
            "captions" => Self::Captions,
            "descriptions" => Self::Descriptions,
            "chapters" => Self::Chapters,
            "metadata" => Self::Metadata,
            _ => Self::Unknown,
        }
    }

    pub fn sdk_code(self) -> i32 {
        match self {
            Self::Unknown => -1,
            Self::None => 0,
            Self::Subtitles => 1,
            Self::Captions => 2,
            Self::Descriptions => 3,
            Self::Chapters => 4,
            Self::Metadata => 5,
        }
    }
}

/// Metadata for one audio, video or text stream attached to a media item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDescription {
    pub(crate) track_id: i64,
    #[serde(rename = "type")]
    pub(crate) kind: TrackKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(rename = "trackContentId", skip_serializing_if = "Option::is_none")]
    pub(crate) content_id: Option<String>,
    #[serde(rename = "trackContentType", skip_serializing_if = "Option::is_none")]
    pub(crate) content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) subtype: Option<TrackSubtype>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) custom_data: Option<Map<String, Value>>,
}

impl TrackDescription {
    pub fn id(&self) -> i64 {
        self.track_id
    }

    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn content_id(&self) -> Option<&str> {
        self.content_id.as_deref()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn subtype(&self) -> Option<TrackSubtype> {
        self.subtype
    }

    pub fn custom_data(&self) -> Option<&Map<String, Value>> {
        self.custom_data.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_ignores_case() {
        for name in ["Video", "VIDEO", "video", "vIdEo"] {
            assert_eq!(TrackKind::parse(name), TrackKind::Video);
        }
        assert_eq!(TrackKind::parse("TEXT"), TrackKind::Text);
        assert_eq!(TrackKind::parse("Audio"), TrackKind::Audio);
    }

    #[test]
    fn unknown_kind_is_not_an_error() {
        assert_eq!(TrackKind::parse("bogus"), TrackKind::Unknown);
        assert_eq!(TrackKind::parse(""), TrackKind::Unknown);
    }

    #[test]
    fn subtype_ignores_case() {
        assert_eq!(TrackSubtype::parse("CAPTIONS"), TrackSubtype::Captions);
        assert_eq!(TrackSubtype::parse("Subtitles"), TrackSubtype::Subtitles);
        assert_eq!(TrackSubtype::parse("none"), TrackSubtype::None);
        assert_eq!(TrackSubtype::parse("karaoke"), TrackSubtype::Unknown);
    }

    #[test]
    fn sdk_codes() {
        assert_eq!(TrackKind::Unknown.sdk_code(), 0);
        assert_eq!(TrackKind::Video.sdk_code(), 3);
        assert_eq!(TrackSubtype::Unknown.sdk_code(), -1);
        assert_eq!(TrackSubtype::Metadata.sdk_code(), 5);
    }
}
