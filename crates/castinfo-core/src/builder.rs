//! Media description builder.
//!
//! Pure functions from decoded options to immutable descriptions.
//! Optional fields are copied when present; unknown style names are
//! skipped; the only hard failure is a missing content URL.

use serde_json::Value;

use crate::config::{CastOptions, TextStyleOptions, TrackOptions};
use crate::error::{Error, Result};
use crate::models::{
    EdgeType, FontGenericFamily, FontStyle, LoadRequest, MediaDescription, MediaMetadata,
    StreamType, TextStyleDescription, TrackDescription, TrackKind, TrackSubtype, WindowType,
    DEFAULT_CONTENT_TYPE,
};

/// Build the media description. Fails if `mediaUrl` is absent or empty.
pub fn build(options: &CastOptions) -> Result<MediaDescription> {
    let content_id = match options.media_url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => return Err(Error::MissingRequiredField("mediaUrl")),
    };

    let metadata = MediaMetadata {
        title: options.title.clone(),
        subtitle: options.subtitle.clone(),
        studio: options.studio.clone(),
        image_url: options.image_url.clone(),
        poster_url: options.poster_url.clone(),
    };

    let tracks = options
        .media_tracks
        .as_deref()
        .map(build_tracks)
        .unwrap_or_default();

    Ok(MediaDescription {
        content_id,
        content_type: options
            .content_type
            .clone()
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
        stream_type: StreamType::from_live_flag(options.is_live),
        metadata,
        custom_data: options.custom_data.clone(),
        stream_duration: options.stream_duration,
        text_track_style: options.text_track_style.as_ref().map(build_text_style),
        tracks,
    })
}

/// One description per input entry, in input order. Duplicate ids pass through.
pub fn build_tracks(tracks: &[TrackOptions]) -> Vec<TrackDescription> {
    tracks.iter().map(build_track).collect()
}

fn build_track(track: &TrackOptions) -> TrackDescription {
    TrackDescription {
        track_id: track.id,
        kind: TrackKind::parse(&track.kind),
        name: track.name.clone(),
        content_id: track.content_id.clone(),
        content_type: track.content_type.clone(),
        language: track.language_code.clone(),
        subtype: track.subtype.as_deref().map(TrackSubtype::parse),
        custom_data: track.custom_data.clone(),
    }
}

/// Build a text style. Never fails; unrecognised names leave attributes unset.
pub fn build_text_style(style: &TextStyleOptions) -> TextStyleDescription {
    TextStyleDescription {
        background_color: style.background_color,
        edge_color: style.edge_color,
        edge_type: lookup("edgeType", style.edge_type.as_deref(), EdgeType::from_name),
        font_family: style.font_family.clone(),
        font_generic_family: lookup(
            "fontGenericFamily",
            style.font_generic_family.as_deref(),
            FontGenericFamily::from_name,
        ),
        font_scale: style.font_scale,
        font_style: lookup("fontStyle", style.font_style.as_deref(), FontStyle::from_name),
        foreground_color: style.foreground_color,
        window_color: style.window_color,
        window_rounded_corner_radius: style.window_corner_radius,
        window_type: lookup("windowType", style.window_type.as_deref(), WindowType::from_name),
    }
}

fn lookup<T>(field: &str, name: Option<&str>, resolve: fn(&str) -> Option<T>) -> Option<T> {
    let name = name?;
    let resolved = resolve(name);
    if resolved.is_none() {
        log::debug!("castinfo: unrecognised {} name {:?}, leaving unset", field, name);
    }
    resolved
}

/// Build the media description plus its load parameters.
/// `autoplay` defaults to true.
pub fn build_load_request(options: &CastOptions) -> Result<LoadRequest> {
    Ok(LoadRequest {
        media: build(options)?,
        autoplay: options.autoplay.unwrap_or(true),
        play_position: options.play_position,
    })
}

/// Decode and build in one step.
pub fn build_from_value(value: &Value) -> Result<MediaDescription> {
    build(&CastOptions::from_value(value)?)
}

/// Parse, decode and build in one step.
pub fn build_from_json(json: &str) -> Result<MediaDescription> {
    build(&CastOptions::from_json(json)?)
}
