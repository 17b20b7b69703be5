use std::ffi::{c_char, CString};
use std::ptr;

use tamil_session::{FieldSession, KeyEvent, KeyResponse, Modifiers};

use super::mode::TamilModeSwitch;
use super::{cptr_to_str, ffi_close, ffi_guard, owned_new};

// --- FieldSession FFI ---

/// Opaque handle for one transliterating text field.
pub struct TamilSession {
    inner: FieldSession,
}

#[repr(C)]
pub struct TamilKeyResponse {
    /// 1 = prevent the native edit.
    pub consumed: u8,
    /// New field value; NULL = leave the field as it is.
    pub value: *const c_char,
    pub(crate) _owned: *mut CString,
}

impl TamilKeyResponse {
    pub(crate) fn empty() -> Self {
        Self {
            consumed: 0,
            value: ptr::null(),
            _owned: ptr::null_mut(),
        }
    }
}

pub(crate) fn pack_key_response(resp: KeyResponse) -> TamilKeyResponse {
    let Some(value) = resp.value.and_then(|v| CString::new(v).ok()) else {
        return TamilKeyResponse {
            consumed: resp.consumed as u8,
            ..TamilKeyResponse::empty()
        };
    };
    // The CString's heap buffer does not move when the CString itself is boxed.
    let value_ptr = value.as_ptr();
    TamilKeyResponse {
        consumed: resp.consumed as u8,
        value: value_ptr,
        _owned: Box::into_raw(Box::new(value)),
    }
}

/// Create a session bound to a shared mode switch.
/// Returns null if `mode` is null.
#[no_mangle]
pub extern "C" fn tamil_session_new(mode: *const TamilModeSwitch) -> *mut TamilSession {
    ffi_guard!(ptr::null_mut();
        ref: switch = mode,
    );
    owned_new(TamilSession {
        inner: FieldSession::new(switch.inner.clone()),
    })
}

ffi_close!(tamil_session_free, TamilSession);

/// Handle a key-down event. `key` is the DOM key name ("a", "Backspace",
/// "ArrowLeft"...); `flags` carries the modifier bits.
#[no_mangle]
pub extern "C" fn tamil_session_key(
    session: *mut TamilSession,
    key: *const c_char,
    flags: u8,
) -> TamilKeyResponse {
    ffi_guard!(TamilKeyResponse::empty();
        mut: session = session,
        str: key_str = key,
    );
    let event = KeyEvent::named(key_str).with_modifiers(Modifiers::from_flags(flags));
    pack_key_response(session.inner.handle_key(&event))
}

/// Handle a native change event carrying the field's current value.
#[no_mangle]
pub extern "C" fn tamil_session_change(
    session: *mut TamilSession,
    value: *const c_char,
) -> TamilKeyResponse {
    ffi_guard!(TamilKeyResponse::empty();
        mut: session = session,
        str: value_str = value,
    );
    pack_key_response(session.inner.handle_change(value_str))
}

/// Report the field's value after an outside change. A null or empty value
/// clears the hidden buffer.
#[no_mangle]
pub extern "C" fn tamil_session_sync_value(session: *mut TamilSession, value: *const c_char) {
    if session.is_null() {
        return;
    }
    let session = unsafe { &mut *session };
    let value_str = unsafe { cptr_to_str(value) };
    session.inner.sync_value(value_str);
}

#[no_mangle]
pub extern "C" fn tamil_key_response_free(response: TamilKeyResponse) {
    if !response._owned.is_null() {
        unsafe {
            drop(Box::from_raw(response._owned));
        }
    }
}
