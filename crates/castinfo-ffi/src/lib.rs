//! C FFI surface for castinfo.
//!
//! Pattern: C strings in, JSON C strings out, thread-local last error.
//! No handles: every call is a pure transformation.
//!
//! React Native (JSI), Flutter (`dart:ffi`), Swift and Kotlin can all call
//! these. Returned strings are owned by the caller and freed with
//! `castinfo_string_free`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use castinfo_core::{CastOptions, TextStyleOptions, TrackOptions};

// ---------------------------------------------------------------------------
// Error handling (thread-local last error)
// ---------------------------------------------------------------------------

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn set_error(msg: String) {
    LAST_ERROR.with(|cell| *cell.borrow_mut() = Some(msg));
}

fn clear_error() {
    LAST_ERROR.with(|cell| *cell.borrow_mut() = None);
}

/// Returns the last error message (caller frees with `castinfo_string_free`).
#[no_mangle]
pub extern "C" fn castinfo_last_error() -> *mut c_char {
    LAST_ERROR.with(|cell| {
        cell.borrow_mut()
            .take()
            .and_then(|s| CString::new(s).ok())
            .map(|s| s.into_raw())
            .unwrap_or(ptr::null_mut())
    })
}

/// Frees a string returned from castinfo FFI.
///
/// # Safety
/// Must be a pointer returned from this FFI and not already freed.
#[no_mangle]
pub unsafe extern "C" fn castinfo_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        let _ = CString::from_raw(ptr);
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Build a media description from cast options JSON.
/// Returns MediaInformation JSON (caller frees), or NULL on error.
///
/// # Safety
/// `json` must be a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn castinfo_build_media_info(json: *const c_char) -> *mut c_char {
    clear_error();
    let options = match read_options(json) {
        Ok(o) => o,
        Err(e) => return err_null(e),
    };
    match castinfo_core::build(&options) {
        Ok(media) => json_to_cstr(&media),
        Err(e) => err_null(e.to_string()),
    }
}

/// Build a load request (media + autoplay + start position).
/// Returns JSON (caller frees), or NULL on error.
///
/// # Safety
/// `json` must be a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn castinfo_build_load_request(json: *const c_char) -> *mut c_char {
    clear_error();
    let options = match read_options(json) {
        Ok(o) => o,
        Err(e) => return err_null(e),
    };
    match castinfo_core::build_load_request(&options) {
        Ok(req) => json_to_cstr(&req),
        Err(e) => err_null(e.to_string()),
    }
}

/// Build track descriptions from a JSON array of tracks.
/// Returns a JSON array (caller frees), or NULL on error.
///
/// # Safety
/// `json` must be a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn castinfo_build_tracks(json: *const c_char) -> *mut c_char {
    clear_error();
    let value = match read_json(json) {
        Ok(v) => v,
        Err(e) => return err_null(e),
    };
    let entries = match value.as_array() {
        Some(a) => a,
        None => return err_null("tracks must be a JSON array".into()),
    };
    match TrackOptions::from_values(entries) {
        Ok(tracks) => json_to_cstr(&castinfo_core::build_tracks(&tracks)),
        Err(e) => err_null(e.to_string()),
    }
}

/// Build a text track style. Unknown names are skipped, so this only
/// fails on unreadable input. Returns JSON (caller frees), or NULL on error.
///
/// # Safety
/// `json` must be a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn castinfo_build_text_style(json: *const c_char) -> *mut c_char {
    clear_error();
    let value = match read_json(json) {
        Ok(v) => v,
        Err(e) => return err_null(e),
    };
    let style = castinfo_core::build_text_style(&TextStyleOptions::from_value(&value));
    json_to_cstr(&style)
}

// ---------------------------------------------------------------------------
// Version
// ---------------------------------------------------------------------------

/// Returns the FFI API version.
#[no_mangle]
pub extern "C" fn castinfo_version() -> u32 {
    1
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_options(ptr: *const c_char) -> Result<CastOptions, String> {
    let value = read_json(ptr)?;
    CastOptions::from_value(&value).map_err(|e| e.to_string())
}

fn read_json(ptr: *const c_char) -> Result<serde_json::Value, String> {
    let s = read_cstr(ptr)?;
    serde_json::from_str(&s).map_err(|e| e.to_string())
}

fn read_cstr(ptr: *const c_char) -> Result<String, String> {
    if ptr.is_null() {
        return Err("null string pointer".into());
    }
    unsafe {
        CStr::from_ptr(ptr)
            .to_str()
            .map(String::from)
            .map_err(|_| "invalid utf-8".into())
    }
}

fn json_to_cstr<T: serde::Serialize>(value: &T) -> *mut c_char {
    match serde_json::to_string(value) {
        Ok(json) => to_cstr(json),
        Err(e) => err_null(e.to_string()),
    }
}

fn to_cstr(s: String) -> *mut c_char {
    CString::new(s)
        .map(|c| c.into_raw())
        .unwrap_or(ptr::null_mut())
}

fn err_null(msg: String) -> *mut c_char {
    set_error(msg);
    ptr::null_mut()
}

// ---------------------------------------------------------------------------
// FFI Integration Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    /// Read a *mut c_char into a String and free it.
    fn read_ffi_string(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null(), "FFI returned null string");
        let s = unsafe { CStr::from_ptr(ptr).to_str().unwrap().to_string() };
        unsafe { castinfo_string_free(ptr) };
        s
    }

    fn read_ffi_json(ptr: *mut c_char) -> Value {
        serde_json::from_str(&read_ffi_string(ptr)).unwrap()
    }

    fn last_error() -> String {
        read_ffi_string(castinfo_last_error())
    }

    fn c(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    #[test]
    fn ffi_version() {
        assert_eq!(castinfo_version(), 1);
    }

    #[test]
    fn ffi_null_input_sets_error() {
        let ptr = unsafe { castinfo_build_media_info(ptr::null()) };
        assert!(ptr.is_null());
        assert!(last_error().contains("null"));
    }

    #[test]
    fn ffi_last_error_is_taken_once() {
        let ptr = unsafe { castinfo_build_media_info(ptr::null()) };
        assert!(ptr.is_null());
        let _ = last_error();
        assert!(castinfo_last_error().is_null());
    }

    #[test]
    fn ffi_media_info_roundtrip() {
        let json = c(r#"{"mediaUrl":"https://x/a.mp4","isLive":true,"title":"Live",
            "mediaTracks":[{"id":1,"type":"text","subtype":"captions"}]}"#);
        let media = read_ffi_json(unsafe { castinfo_build_media_info(json.as_ptr()) });
        assert_eq!(media["contentId"], "https://x/a.mp4");
        assert_eq!(media["streamType"], "LIVE");
        assert_eq!(media["contentType"], "video/mp4");
        assert_eq!(media["metadata"]["title"], "Live");
        assert_eq!(media["tracks"][0]["subtype"], "CAPTIONS");
    }

    #[test]
    fn ffi_missing_media_url() {
        let json = c(r#"{"title":"No URL"}"#);
        let ptr = unsafe { castinfo_build_media_info(json.as_ptr()) };
        assert!(ptr.is_null());
        assert_eq!(last_error(), "mediaUrl option is required");
    }

    #[test]
    fn ffi_invalid_json() {
        let json = c("{not json");
        let ptr = unsafe { castinfo_build_media_info(json.as_ptr()) };
        assert!(ptr.is_null());
        assert!(!last_error().is_empty());
    }

    #[test]
    fn ffi_load_request() {
        let json = c(r#"{"mediaUrl":"u","playPosition":42.5}"#);
        let req = read_ffi_json(unsafe { castinfo_build_load_request(json.as_ptr()) });
        assert_eq!(req["autoplay"], true);
        assert_eq!(req["currentTime"], 42.5);
        assert_eq!(req["media"]["contentId"], "u");
    }

    #[test]
    fn ffi_tracks_keep_order() {
        let json = c(r#"[{"id":9,"type":"VIDEO"},{"id":4,"type":"bogus"},{"id":9,"type":"Audio"}]"#);
        let tracks = read_ffi_json(unsafe { castinfo_build_tracks(json.as_ptr()) });
        let ids: Vec<i64> = tracks
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["trackId"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![9, 4, 9]);
        assert_eq!(tracks[1]["type"], "UNKNOWN");
        assert_eq!(tracks[2]["type"], "AUDIO");
    }

    #[test]
    fn ffi_tracks_require_array() {
        let json = c(r#"{"id":1,"type":"text"}"#);
        let ptr = unsafe { castinfo_build_tracks(json.as_ptr()) };
        assert!(ptr.is_null());
        assert!(last_error().contains("array"));
    }

    #[test]
    fn ffi_text_style_skips_unknown_names() {
        let json = c(r##"{"edgeType":"DropShadow","fontStyle":"italic","windowColor":"#00000080"}"##);
        let style = read_ffi_json(unsafe { castinfo_build_text_style(json.as_ptr()) });
        assert!(style.get("edgeType").is_none());
        assert_eq!(style["fontStyle"], "ITALIC");
        assert_eq!(style["windowColor"], "#00000080");
    }
}
