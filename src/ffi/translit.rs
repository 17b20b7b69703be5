use std::ffi::{c_char, CString};
use std::ptr;

use tracing::warn;

use super::ffi_guard;
use tamil_core::translit::{RuleConfigError, RuleTable};

// --- Rule table FFI ---

/// Install a custom rule table (TOML) before the first transliteration.
///
/// Returns 0 on success, -1 for a null or non-UTF-8 argument, -2 if the
/// table is invalid and -3 if a table is already in use.
#[no_mangle]
pub extern "C" fn tamil_rules_init_custom(toml: *const c_char) -> i32 {
    ffi_guard!(-1;
        str: toml_str = toml,
    );
    match RuleTable::init_custom(toml_str.to_string()) {
        Ok(()) => 0,
        Err(RuleConfigError::AlreadyInitialized) => -3,
        Err(e) => {
            warn!(error = %e, "custom rule table rejected");
            -2
        }
    }
}

/// Transliterate `input` with the process-wide table.
///
/// Returns null if `input` is null or not valid UTF-8.
/// The caller must free the returned string with `tamil_string_free`.
#[no_mangle]
pub extern "C" fn tamil_transliterate(input: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: input_str = input,
    );
    match CString::new(RuleTable::global().transliterate(input_str)) {
        Ok(cs) => cs.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Free a string returned by this library. No-op if ptr is null.
#[no_mangle]
pub extern "C" fn tamil_string_free(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    unsafe {
        drop(CString::from_raw(ptr));
    }
}
