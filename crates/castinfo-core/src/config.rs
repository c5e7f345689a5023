//! Decode step: loose app-layer JSON into typed options.
//!
//! All "is this key present, and is it the right type" logic lives here.
//! A key holding the wrong JSON type is treated as absent. The builder
//! only ever sees the typed structs below.

use serde_json::{Map, Value};

use crate::color;
use crate::error::{Error, Result};

/// Typed lenses over a JSON object. Wrong-typed values read as `None`.
pub trait ConfigExt {
    fn str_field(&self, key: &str) -> Option<&str>;
    fn bool_field(&self, key: &str) -> Option<bool>;
    fn int_field(&self, key: &str) -> Option<i64>;
    fn f64_field(&self, key: &str) -> Option<f64>;
    fn object_field(&self, key: &str) -> Option<&Map<String, Value>>;
    fn array_field(&self, key: &str) -> Option<&Vec<Value>>;
    fn color_field(&self, key: &str) -> Option<u32>;

    fn string_field(&self, key: &str) -> Option<String> {
        self.str_field(key).map(String::from)
    }
}

impl ConfigExt for Value {
    fn str_field(&self, key: &str) -> Option<&str> {
        let v = present(self, key)?;
        v.as_str().or_else(|| wrong_type(key, "string"))
    }

    fn bool_field(&self, key: &str) -> Option<bool> {
        let v = present(self, key)?;
        v.as_bool().or_else(|| wrong_type(key, "boolean"))
    }

    /// JS numbers arrive as doubles; whole-valued floats are accepted and
    /// fractional ones truncated.
    fn int_field(&self, key: &str) -> Option<i64> {
        let v = present(self, key)?;
        v.as_i64()
            .or_else(|| v.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .or_else(|| wrong_type(key, "integer"))
    }

    fn f64_field(&self, key: &str) -> Option<f64> {
        let v = present(self, key)?;
        v.as_f64().or_else(|| wrong_type(key, "number"))
    }

    fn object_field(&self, key: &str) -> Option<&Map<String, Value>> {
        let v = present(self, key)?;
        v.as_object().or_else(|| wrong_type(key, "object"))
    }

    fn array_field(&self, key: &str) -> Option<&Vec<Value>> {
        let v = present(self, key)?;
        v.as_array().or_else(|| wrong_type(key, "array"))
    }

    fn color_field(&self, key: &str) -> Option<u32> {
        let v = present(self, key)?;
        let parsed = color::from_value(v);
        if parsed.is_none() {
            log::warn!("castinfo: ignoring malformed color {}={}", key, v);
        }
        parsed
    }
}

/// A present, non-null value. `null` counts as absent.
fn present<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !v.is_null())
}

fn wrong_type<T>(key: &str, expected: &str) -> Option<T> {
    log::debug!("castinfo: ignoring {}: expected {}", key, expected);
    None
}

// ---------------------------------------------------------------------------
// Media options
// ---------------------------------------------------------------------------

/// Everything the app layer may send to describe one media item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CastOptions {
    pub media_url: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub studio: Option<String>,
    pub image_url: Option<String>,
    pub poster_url: Option<String>,
    pub content_type: Option<String>,
    pub is_live: Option<bool>,
    pub custom_data: Option<Map<String, Value>>,
    pub stream_duration: Option<i64>,
    pub text_track_style: Option<TextStyleOptions>,
    pub media_tracks: Option<Vec<TrackOptions>>,
    pub play_position: Option<f64>,
    pub autoplay: Option<bool>,
}

impl CastOptions {
    /// Decode from a JSON object. Fails only on structural problems:
    /// a non-object root or a malformed track entry.
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::invalid("media options must be an object"));
        }

        let media_tracks = match value.array_field("mediaTracks") {
            Some(entries) => Some(TrackOptions::from_values(entries)?),
            None => None,
        };

        Ok(Self {
            media_url: value.string_field("mediaUrl"),
            title: value.string_field("title"),
            subtitle: value.string_field("subtitle"),
            studio: value.string_field("studio"),
            image_url: value.string_field("imageUrl"),
            poster_url: value.string_field("posterUrl"),
            content_type: value.string_field("contentType"),
            is_live: value.bool_field("isLive"),
            custom_data: value.object_field("customData").cloned(),
            stream_duration: value.int_field("streamDuration"),
            text_track_style: value
                .get("textTrackStyle")
                .filter(|v| v.is_object())
                .map(TextStyleOptions::from_value),
            media_tracks,
            play_position: value.f64_field("playPosition"),
            autoplay: value.bool_field("autoplay"),
        })
    }

    /// Parse JSON text and decode.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }
}

// ---------------------------------------------------------------------------
// Track options
// ---------------------------------------------------------------------------

/// One entry of `mediaTracks`. `id` and `type` are required.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackOptions {
    pub id: i64,
    pub kind: String,
    pub name: Option<String>,
    pub content_id: Option<String>,
    pub content_type: Option<String>,
    pub language_code: Option<String>,
    pub subtype: Option<String>,
    pub custom_data: Option<Map<String, Value>>,
}

impl TrackOptions {
    /// Decode the track at `index`. `index` only feeds error messages.
    pub fn from_value(value: &Value, index: usize) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::invalid(format!("media track {} must be an object", index)));
        }
        let id = value
            .int_field("id")
            .ok_or(Error::MissingTrackField { index, field: "id" })?;
        let kind = value
            .string_field("type")
            .ok_or(Error::MissingTrackField { index, field: "type" })?;

        Ok(Self {
            id,
            kind,
            name: value.string_field("name"),
            content_id: value.string_field("contentId"),
            content_type: value.string_field("contentType"),
            language_code: value.string_field("languageCode"),
            subtype: value.string_field("subtype"),
            custom_data: value.object_field("customData").cloned(),
        })
    }

    /// Decode a whole track list, keeping order.
    pub fn from_values(values: &[Value]) -> Result<Vec<Self>> {
        values
            .iter()
            .enumerate()
            .map(|(index, v)| Self::from_value(v, index))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Text style options
// ---------------------------------------------------------------------------

/// Raw text track style. Enum-valued fields stay as names; the builder
/// resolves them against the lookup tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyleOptions {
    pub background_color: Option<u32>,
    pub edge_color: Option<u32>,
    pub edge_type: Option<String>,
    pub font_family: Option<String>,
    pub font_generic_family: Option<String>,
    pub font_scale: Option<f32>,
    pub font_style: Option<String>,
    pub foreground_color: Option<u32>,
    pub window_color: Option<u32>,
    pub window_corner_radius: Option<i32>,
    pub window_type: Option<String>,
}

impl TextStyleOptions {
    /// Never fails. Anything that is not an object yields an empty style.
    pub fn from_value(value: &Value) -> Self {
        Self {
            background_color: value.color_field("backgroundColor"),
            edge_color: value.color_field("edgeColor"),
            edge_type: value.string_field("edgeType"),
            font_family: value.string_field("fontFamily"),
            font_generic_family: value.string_field("fontGenericFamily"),
            font_scale: value
                .f64_field("fontScale")
                .map(|f| f as f32)
                .filter(|f| f.is_finite()),
            font_style: value.string_field("fontStyle"),
            foreground_color: value.color_field("foregroundColor"),
            window_color: value.color_field("windowColor"),
            window_corner_radius: value
                .int_field("windowCornerRadius")
                .and_then(|r| i32::try_from(r).ok()),
            window_type: value.string_field("windowType"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lenses_skip_wrong_types_and_null() {
        let v = json!({ "s": "x", "b": "true", "n": null, "i": 3.0, "f": 2.7 });
        assert_eq!(v.str_field("s"), Some("x"));
        assert_eq!(v.bool_field("b"), None);
        assert_eq!(v.str_field("n"), None);
        assert_eq!(v.int_field("i"), Some(3));
        assert_eq!(v.int_field("f"), Some(2));
        assert_eq!(v.int_field("s"), None);
        assert_eq!(v.str_field("missing"), None);
    }

    #[test]
    fn decodes_every_media_key() {
        let v = json!({
            "mediaUrl": "https://x/a.mp4",
            "title": "T",
            "subtitle": "S",
            "studio": "Blender",
            "imageUrl": "https://x/i.jpg",
            "posterUrl": "https://x/p.jpg",
            "contentType": "application/x-mpegURL",
            "isLive": true,
            "customData": { "k": [1, 2] },
            "streamDuration": 596,
            "playPosition": 12.5,
            "autoplay": false
        });
        let opts = CastOptions::from_value(&v).unwrap();
        assert_eq!(opts.media_url.as_deref(), Some("https://x/a.mp4"));
        assert_eq!(opts.studio.as_deref(), Some("Blender"));
        assert_eq!(opts.is_live, Some(true));
        assert_eq!(opts.custom_data.unwrap()["k"], json!([1, 2]));
        assert_eq!(opts.stream_duration, Some(596));
        assert_eq!(opts.play_position, Some(12.5));
        assert_eq!(opts.autoplay, Some(false));
        assert!(opts.media_tracks.is_none());
        assert!(opts.text_track_style.is_none());
    }

    #[test]
    fn non_object_root_is_invalid() {
        let err = CastOptions::from_value(&json!(["mediaUrl"])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn custom_data_must_be_object() {
        let opts = CastOptions::from_value(&json!({ "customData": "nope" })).unwrap();
        assert!(opts.custom_data.is_none());
    }

    #[test]
    fn track_requires_id_and_type() {
        let err = TrackOptions::from_value(&json!({ "type": "text" }), 4).unwrap_err();
        assert!(matches!(err, Error::MissingTrackField { index: 4, field: "id" }));

        let err = TrackOptions::from_value(&json!({ "id": 1 }), 0).unwrap_err();
        assert!(matches!(err, Error::MissingTrackField { index: 0, field: "type" }));
    }

    #[test]
    fn track_list_rejects_non_objects() {
        let entries = vec![json!({ "id": 1, "type": "text" }), json!(7)];
        let err = TrackOptions::from_values(&entries).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn style_skips_scale_outside_f32_range() {
        let style = TextStyleOptions::from_value(&json!({ "fontScale": 1e300 }));
        assert_eq!(style.font_scale, None);

        let style = TextStyleOptions::from_value(&json!({ "fontScale": -1e300 }));
        assert_eq!(style.font_scale, None);
    }

    #[test]
    fn style_decodes_colors_and_radius() {
        let style = TextStyleOptions::from_value(&json!({
            "backgroundColor": "#000000FF",
            "edgeColor": "not-a-color",
            "fontScale": 1.5,
            "windowCornerRadius": 4,
            "edgeType": "outline"
        }));
        assert_eq!(style.background_color, Some(0xFF00_0000));
        assert_eq!(style.edge_color, None);
        assert_eq!(style.font_scale, Some(1.5));
        assert_eq!(style.window_corner_radius, Some(4));
        assert_eq!(style.edge_type.as_deref(), Some("outline"));
    }
}
