use std::ffi::{CStr, CString};

use nidaqmx_sys::{bool32, FALSE, TRUE};

use crate::error::Result;

/// Converts a Rust string to a C string, rejecting interior NUL bytes.
pub fn to_cstring(s: &str) -> Result<CString> {
    Ok(CString::new(s)?)
}

/// Optional string arguments (custom scale names, channel names) are passed
/// as empty strings when absent.
pub fn opt_cstring(s: Option<&str>) -> Result<CString> {
    to_cstring(s.unwrap_or(""))
}

/// Reads a NUL-terminated string out of a driver-filled buffer. A buffer with
/// no terminator is taken whole.
pub fn buf_to_string(buf: &[u8]) -> String {
    match CStr::from_bytes_until_nul(buf) {
        Ok(cstr) => cstr.to_string_lossy().into_owned(),
        Err(_) => String::from_utf8_lossy(buf).into_owned(),
    }
}

/// Splits the comma-separated lists the driver returns for device names,
/// channel lists and terminals.
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

pub fn to_bool32(value: bool) -> bool32 {
    if value {
        TRUE
    } else {
        FALSE
    }
}
