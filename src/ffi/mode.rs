use tamil_session::{InputMode, ModeSwitch};

use super::{ffi_close, ffi_guard, owned_new};

// --- Mode switch FFI ---

/// Shared Tamil/English toggle handed to every session of a page.
pub struct TamilModeSwitch {
    pub(crate) inner: ModeSwitch,
}

/// mode: 0=English, 1=Tamil
fn mode_from_u8(mode: u8) -> InputMode {
    if mode == 0 {
        InputMode::English
    } else {
        InputMode::Tamil
    }
}

fn mode_to_u8(mode: InputMode) -> u8 {
    match mode {
        InputMode::English => 0,
        InputMode::Tamil => 1,
    }
}

#[no_mangle]
pub extern "C" fn tamil_mode_new(initial: u8) -> *mut TamilModeSwitch {
    owned_new(TamilModeSwitch {
        inner: ModeSwitch::new(mode_from_u8(initial)),
    })
}

ffi_close!(tamil_mode_free, TamilModeSwitch);

/// Set the mode. Returns 1 if it changed.
#[no_mangle]
pub extern "C" fn tamil_mode_set(mode: *const TamilModeSwitch, value: u8) -> u8 {
    ffi_guard!(0;
        ref: switch = mode,
    );
    switch.inner.set(mode_from_u8(value)) as u8
}

/// Current mode (0=English, 1=Tamil); English for a null switch.
#[no_mangle]
pub extern "C" fn tamil_mode_get(mode: *const TamilModeSwitch) -> u8 {
    ffi_guard!(0;
        ref: switch = mode,
    );
    mode_to_u8(switch.inner.mode())
}

/// Flip the mode and return the new one.
#[no_mangle]
pub extern "C" fn tamil_mode_toggle(mode: *const TamilModeSwitch) -> u8 {
    ffi_guard!(0;
        ref: switch = mode,
    );
    mode_to_u8(switch.inner.toggle())
}
