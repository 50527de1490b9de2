//! jianpulib — numbered-notation (Jianpu) glyph layout and beam rendering.
//!
//! Lays out one beamed group of duration events in numbered notation:
//! each pitch becomes a scale-degree digit 1–7 with octave dots above or
//! below, long durations grow dash runs, and short durations are grouped
//! by horizontal beam bars drawn underneath the digit row.
//!
//! # Example
//! ```
//! use jianpulib::{GroupEvent, Duration, Key, Pitch, Step, render_group_to_svg};
//!
//! let events = vec![
//!     GroupEvent::note(vec![Pitch::new(Step::C, 4, 0)], Duration::Eighth),
//!     GroupEvent::note(vec![Pitch::new(Step::D, 4, 0)], Duration::Eighth),
//! ];
//! let svg = render_group_to_svg(&events, Key::C);
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod geom;
pub mod model;
pub mod renderer;

pub use geom::{Point, Rect, Size};
pub use model::*;
pub use renderer::paint::PaintOp;
pub use renderer::{layout_group, render_group_to_ops, render_group_to_svg};

/// Parse a JSON group request (key context plus events).
/// This is the payload format used across FFI boundaries.
pub fn parse_group_request(json: &str) -> Result<GroupRequest, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid group request JSON: {e}"))
}

/// Convert a paint-command list to a JSON string.
/// Useful for passing draw commands across FFI boundaries.
pub fn ops_to_json(ops: &[PaintOp]) -> Result<String, String> {
    serde_json::to_string_pretty(ops).map_err(|e| format!("JSON serialization error: {e}"))
}

/// Parse a JSON group request and render it directly to SVG.
/// Convenience function combining parsing, layout, and painting.
pub fn render_request_to_svg(json: &str) -> Result<String, String> {
    let request = parse_group_request(json)?;
    Ok(render_group_to_svg(&request.events, request.key))
}

/// Parse a JSON group request and return the paint commands as JSON.
pub fn render_request_to_ops_json(json: &str) -> Result<String, String> {
    let request = parse_group_request(json)?;
    ops_to_json(&render_group_to_ops(&request.events, request.key))
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for embedding in a C/C++ notation host
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render a JSON group request to SVG and return it as a C string.
/// The caller must free the returned string with `jianpu_free_string`.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn jianpu_render_group_svg(json: *const c_char) -> *mut c_char {
    if json.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(json) };
    let json_str = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match render_request_to_svg(json_str) {
        Ok(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render a JSON group request to the paint-command list, JSON-encoded.
/// The caller must free the returned string with `jianpu_free_string`.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn jianpu_render_group_ops(json: *const c_char) -> *mut c_char {
    if json.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(json) };
    let json_str = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match render_request_to_ops_json(json_str) {
        Ok(ops) => CString::new(ops).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by jianpulib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a jianpulib function, or null.
#[no_mangle]
pub unsafe extern "C" fn jianpu_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
