//! Description models.
//!
//! Immutable values built from a decoded config. Enums carry both the
//! SDK integer constant (`sdk_code`) and the receiver wire name (serde).

pub mod media;
pub mod style;
pub mod track;

pub use media::{LoadRequest, MediaDescription, MediaMetadata, StreamType, DEFAULT_CONTENT_TYPE};
pub use style::{EdgeType, FontGenericFamily, FontStyle, TextStyleDescription, WindowType};
pub use track::{TrackDescription, TrackKind, TrackSubtype};
