//! Text track style description and its name tables.
//!
//! Style names from the app layer are matched exactly (case-sensitive).
//! A name outside the table leaves the attribute unspecified.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Outline drawn around caption glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeType {
    None,
    Outline,
    DropShadow,
    Raised,
    Depressed,
}

/// Generic font family, used when the named family is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FontGenericFamily {
    SansSerif,
    MonospacedSansSerif,
    Serif,
    MonospacedSerif,
    Casual,
    Cursive,
    SmallCapitals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

/// Caption window shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WindowType {
    None,
    Normal,
    #[serde(rename = "ROUNDED_CORNERS")]
    Rounded,
}

/// SDK value for an unset style enum.
pub const UNSPECIFIED: i32 = -1;

static EDGE_TYPES: Lazy<HashMap<&'static str, EdgeType>> = Lazy::new(|| {
    HashMap::from([
        ("depressed", EdgeType::Depressed),
        ("dropShadow", EdgeType::DropShadow),
        ("none", EdgeType::None),
        ("outline", EdgeType::Outline),
        ("raised", EdgeType::Raised),
    ])
});

static GENERIC_FONT_FAMILIES: Lazy<HashMap<&'static str, FontGenericFamily>> = Lazy::new(|| {
    HashMap::from([
        ("casual", FontGenericFamily::Casual),
        ("cursive", FontGenericFamily::Cursive),
        ("monoSansSerif", FontGenericFamily::MonospacedSansSerif),
        ("monoSerif", FontGenericFamily::MonospacedSerif),
        ("sansSerif", FontGenericFamily::SansSerif),
        ("serif", FontGenericFamily::Serif),
        ("smallCaps", FontGenericFamily::SmallCapitals),
    ])
});

static FONT_STYLES: Lazy<HashMap<&'static str, FontStyle>> = Lazy::new(|| {
    HashMap::from([
        ("bold", FontStyle::Bold),
        ("boldItalic", FontStyle::BoldItalic),
        ("italic", FontStyle::Italic),
        ("normal", FontStyle::Normal),
    ])
});

static WINDOW_TYPES: Lazy<HashMap<&'static str, WindowType>> = Lazy::new(|| {
    HashMap::from([
        ("none", WindowType::None),
        ("normal", WindowType::Normal),
        ("rounded", WindowType::Rounded),
    ])
});

impl EdgeType {
    pub fn from_name(name: &str) -> Option<Self> {
        EDGE_TYPES.get(name).copied()
    }

    pub fn sdk_code(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Outline => 1,
            Self::DropShadow => 2,
            Self::Raised => 3,
            Self::Depressed => 4,
        }
    }
}

impl FontGenericFamily {
    pub fn from_name(name: &str) -> Option<Self> {
        GENERIC_FONT_FAMILIES.get(name).copied()
    }

    pub fn sdk_code(self) -> i32 {
        match self {
            Self::SansSerif => 0,
            Self::MonospacedSansSerif => 1,
            Self::Serif => 2,
            Self::MonospacedSerif => 3,
            Self::Casual => 4,
            Self::Cursive => 5,
            Self::SmallCapitals => 6,
        }
    }
}

impl FontStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        FONT_STYLES.get(name).copied()
    }

    pub fn sdk_code(self) -> i32 {
        match self {
            Self::Normal => 0,
            Self::Bold => 1,
            Self::Italic => 2,
            Self::BoldItalic => 3,
        }
    }
}

impl WindowType {
    pub fn from_name(name: &str) -> Option<Self> {
        WINDOW_TYPES.get(name).copied()
    }

    pub fn sdk_code(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Normal => 1,
            Self::Rounded => 2,
        }
    }
}

/// Visual styling for rendered caption/subtitle text.
///
/// Every attribute is optional; `None` means the receiver's default.
/// Colors are packed ARGB.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyleDescription {
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::color::rgba_hex")]
    pub(crate) background_color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::color::rgba_hex")]
    pub(crate) edge_color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) edge_type: Option<EdgeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) font_generic_family: Option<FontGenericFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) font_scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::color::rgba_hex")]
    pub(crate) foreground_color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::color::rgba_hex")]
    pub(crate) window_color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) window_rounded_corner_radius: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) window_type: Option<WindowType>,
}

impl TextStyleDescription {
    pub fn background_color(&self) -> Option<u32> {
        self.background_color
    }

    pub fn edge_color(&self) -> Option<u32> {
        self.edge_color
    }

    pub fn edge_type(&self) -> Option<EdgeType> {
        self.edge_type
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn font_generic_family(&self) -> Option<FontGenericFamily> {
        self.font_generic_family
    }

    pub fn font_scale(&self) -> Option<f32> {
        self.font_scale
    }

    pub fn font_style(&self) -> Option<FontStyle> {
        self.font_style
    }

    pub fn foreground_color(&self) -> Option<u32> {
        self.foreground_color
    }

    pub fn window_color(&self) -> Option<u32> {
        self.window_color
    }

    pub fn window_corner_radius(&self) -> Option<i32> {
        self.window_rounded_corner_radius
    }

    pub fn window_type(&self) -> Option<WindowType> {
        self.window_type
    }

    /// SDK constant for the edge type, `UNSPECIFIED` when unset.
    pub fn edge_type_code(&self) -> i32 {
        self.edge_type.map_or(UNSPECIFIED, EdgeType::sdk_code)
    }

    pub fn font_generic_family_code(&self) -> i32 {
        self.font_generic_family
            .map_or(UNSPECIFIED, FontGenericFamily::sdk_code)
    }

    pub fn font_style_code(&self) -> i32 {
        self.font_style.map_or(UNSPECIFIED, FontStyle::sdk_code)
    }

    pub fn window_type_code(&self) -> i32 {
        self.window_type.map_or(UNSPECIFIED, WindowType::sdk_code)
    }
}
