//! Color values for text track styles.
//!
//! The app layer sends CSS-style strings with alpha last (`#RRGGBB` or
//! `#RRGGBBAA`). The SDK wants packed ARGB integers. Receiver JSON wants
//! `#RRGGBBAA` again, so both directions live here.

use serde_json::Value;

/// Parse a color from a config value. Returns `None` for anything malformed.
///
/// Integers are taken as already-packed ARGB. Negative integers are accepted
/// as the signed 32-bit form of the same bits.
pub fn from_value(value: &Value) -> Option<u32> {
    match value {
        Value::String(s) => parse_hex(s),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u32::try_from(u).ok()
            } else {
                n.as_i64()
                    .and_then(|i| i32::try_from(i).ok())
                    .map(|i| i as u32)
            }
        }
        _ => None,
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into ARGB.
pub fn parse_hex(s: &str) -> Option<u32> {
    let hex = s.strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let raw = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        6 => Some(0xFF00_0000 | raw),
        8 => Some((raw >> 8) | ((raw & 0xFF) << 24)),
        _ => None,
    }
}

/// Render ARGB as `#RRGGBBAA`.
pub fn to_rgba_hex(argb: u32) -> String {
    format!("#{:06X}{:02X}", argb & 0x00FF_FFFF, argb >> 24)
}

/// Serde adapter for `Option<u32>` ARGB fields rendered as `#RRGGBBAA`.
pub mod rgba_hex {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(argb) => serializer.serialize_str(&super::to_rgba_hex(*argb)),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn six_digit_is_opaque() {
        assert_eq!(parse_hex("#FF0000"), Some(0xFFFF_0000));
        assert_eq!(parse_hex("#00ff00"), Some(0xFF00_FF00));
    }

    #[test]
    fn eight_digit_moves_alpha_first() {
        assert_eq!(parse_hex("#11223380"), Some(0x8011_2233));
        assert_eq!(parse_hex("#00000000"), Some(0));
    }

    #[test]
    fn malformed_strings_rejected() {
        assert_eq!(parse_hex("FF0000"), None);
        assert_eq!(parse_hex("#FF00"), None);
        assert_eq!(parse_hex("#GG0000"), None);
        assert_eq!(parse_hex("#+F0000"), None);
        assert_eq!(parse_hex("red"), None);
    }

    #[test]
    fn integers_are_packed_argb() {
        assert_eq!(from_value(&json!(0x80FF_FFFFu32)), Some(0x80FF_FFFF));
        assert_eq!(from_value(&json!(-1)), Some(0xFFFF_FFFF));
        assert_eq!(from_value(&json!(1u64 << 40)), None);
        assert_eq!(from_value(&json!(true)), None);
    }

    #[test]
    fn hex_rendering_puts_alpha_last() {
        assert_eq!(to_rgba_hex(0x8011_2233), "#11223380");
        assert_eq!(to_rgba_hex(0xFFFF_0000), "#FF0000FF");
        assert_eq!(parse_hex(&to_rgba_hex(0x0A0B_0C0D)), Some(0x0A0B_0C0D));
    }
}
