//! Media descriptions: what gets handed to the casting SDK.
//!
//! Values are built once by [`crate::builder`] and never mutated. Fields
//! are crate-private; read them through the accessors. Serialization
//! produces the receiver's MediaInformation JSON.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::style::TextStyleDescription;
use super::track::TrackDescription;

/// Content type used when the app layer does not name one.
pub const DEFAULT_CONTENT_TYPE: &str = "video/mp4";

/// Live stream or finite buffered asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StreamType {
    None,
    #[default]
    Buffered,
    Live,
}

impl StreamType {
    /// `Live` only for an explicit `true`.
    pub fn from_live_flag(is_live: Option<bool>) -> Self {
        match is_live {
            Some(true) => Self::Live,
            _ => Self::Buffered,
        }
    }

    pub fn sdk_code(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Buffered => 1,
            Self::Live => 2,
        }
    }
}

/// Display metadata. Always of the movie metadata type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaMetadata {
    pub(crate) title: Option<String>,
    pub(crate) subtitle: Option<String>,
    pub(crate) studio: Option<String>,
    pub(crate) image_url: Option<String>,
    pub(crate) poster_url: Option<String>,
}

impl MediaMetadata {
    /// SDK constant for movie metadata.
    pub const MEDIA_TYPE_MOVIE: i32 = 1;

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn studio(&self) -> Option<&str> {
        self.studio.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn poster_url(&self) -> Option<&str> {
        self.poster_url.as_deref()
    }

    /// Image URLs in SDK order: cover first, then poster.
    pub fn images(&self) -> impl Iterator<Item = &str> {
        self.image_url
            .as_deref()
            .into_iter()
            .chain(self.poster_url.as_deref())
    }
}

impl Serialize for MediaMetadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct WebImage<'a> {
            url: &'a str,
        }

        let images: Vec<WebImage<'_>> = self.images().map(|url| WebImage { url }).collect();

        let mut s = serializer.serialize_struct("MediaMetadata", 5)?;
        s.serialize_field("metadataType", &Self::MEDIA_TYPE_MOVIE)?;
        if let Some(title) = &self.title {
            s.serialize_field("title", title)?;
        }
        if let Some(subtitle) = &self.subtitle {
            s.serialize_field("subtitle", subtitle)?;
        }
        if let Some(studio) = &self.studio {
            s.serialize_field("studio", studio)?;
        }
        if !images.is_empty() {
            s.serialize_field("images", &images)?;
        }
        s.end()
    }
}

/// Complete description of one piece of content to cast.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDescription {
    pub(crate) content_id: String,
    pub(crate) content_type: String,
    pub(crate) stream_type: StreamType,
    pub(crate) metadata: MediaMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) custom_data: Option<Map<String, Value>>,
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none")]
    pub(crate) stream_duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) text_track_style: Option<TextStyleDescription>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) tracks: Vec<TrackDescription>,
}

impl MediaDescription {
    /// The content URL, exactly as supplied.
    pub fn content_url(&self) -> &str {
        &self.content_id
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn stream_type(&self) -> StreamType {
        self.stream_type
    }

    pub fn metadata(&self) -> &MediaMetadata {
        &self.metadata
    }

    pub fn custom_data(&self) -> Option<&Map<String, Value>> {
        self.custom_data.as_ref()
    }

    /// Duration in seconds.
    pub fn stream_duration(&self) -> Option<i64> {
        self.stream_duration
    }

    pub fn text_track_style(&self) -> Option<&TextStyleDescription> {
        self.text_track_style.as_ref()
    }

    pub fn tracks(&self) -> &[TrackDescription] {
        &self.tracks
    }
}

/// A media description plus the load parameters sent with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadRequest {
    pub(crate) media: MediaDescription,
    pub(crate) autoplay: bool,
    #[serde(rename = "currentTime", skip_serializing_if = "Option::is_none")]
    pub(crate) play_position: Option<f64>,
}

impl LoadRequest {
    pub fn media(&self) -> &MediaDescription {
        &self.media
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Start position in seconds.
    pub fn play_position(&self) -> Option<f64> {
        self.play_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_flag_only_true_is_live() {
        assert_eq!(StreamType::from_live_flag(Some(true)), StreamType::Live);
        assert_eq!(StreamType::from_live_flag(Some(false)), StreamType::Buffered);
        assert_eq!(StreamType::from_live_flag(None), StreamType::Buffered);
    }

    #[test]
    fn images_keep_cover_before_poster() {
        let meta = MediaMetadata {
            image_url: Some("https://x/cover.jpg".into()),
            poster_url: Some("https://x/poster.jpg".into()),
            ..Default::default()
        };
        let urls: Vec<&str> = meta.images().collect();
        assert_eq!(urls, vec!["https://x/cover.jpg", "https://x/poster.jpg"]);

        let poster_only = MediaMetadata {
            poster_url: Some("https://x/poster.jpg".into()),
            ..Default::default()
        };
        assert_eq!(poster_only.images().count(), 1);
        assert_eq!(poster_only.image_url(), None);
    }

    #[test]
    fn metadata_json_shape() {
        let meta = MediaMetadata {
            title: Some("Big Buck Bunny".into()),
            image_url: Some("https://x/cover.jpg".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "metadataType": 1,
                "title": "Big Buck Bunny",
                "images": [{ "url": "https://x/cover.jpg" }]
            })
        );
    }
}
