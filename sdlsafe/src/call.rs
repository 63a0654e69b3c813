// The checked call adapter. A pure call-and-check decorator: same side
// effects as calling the native function directly, plus uniform failure
// translation.

use std::ffi::CStr;

use crate::api;
use crate::error::{SdlError, SdlResult};

/// Invoke a native SDL function and translate its failure convention.
///
/// `call` performs the invocation and yields the raw return value; `failed`
/// decides whether that value means failure. On failure the thread-local SDL
/// error string is captured and cleared, and the result is
/// `Err(Native { func, message })` displaying as `"<func>: <message>"`. On
/// success the return value passes through untouched; in particular the SDL
/// error state is neither read nor cleared.
///
/// No retries, no locking, no ownership transfer. Adopting a returned handle
/// is a separate step (`Window::from_raw` and friends).
///
/// ```no_run
/// # #![allow(non_snake_case)]
/// # unsafe extern "C" fn SDL_GetWindowID(_: *mut sdlsafe_ffi::SDL_Window) -> u32 { 0 }
/// # fn demo(window: *mut sdlsafe_ffi::SDL_Window) -> sdlsafe::SdlResult<u32> {
/// use sdlsafe::{fail, sdl_call};
///
/// let id = sdl_call("SDL_GetWindowID", fail::on_zero, || unsafe {
///     SDL_GetWindowID(window)
/// })?;
/// # Ok(id) }
/// ```
pub fn sdl_call<R, C, P>(func: &'static str, failed: P, call: C) -> SdlResult<R>
where
    C: FnOnce() -> R,
    P: FnOnce(&R) -> bool,
{
    let ret = call();
    if !failed(&ret) {
        return Ok(ret);
    }
    Err(SdlError::native(func, take_last_error()?))
}

/// Capture and clear the thread-local SDL error string. Returns `None` when
/// no error was set. All five libraries share this one buffer (the satellite
/// `*_GetError` names are aliases of the core pair).
pub fn take_last_error() -> SdlResult<Option<String>> {
    let core = api::core()?;
    // SAFETY: get_error returns a NUL-terminated string owned by SDL's
    // thread-local buffer. Copy it out before clear_error overwrites it.
    let raw = unsafe { (core.get_error)() };
    let text = if raw.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned()
    };
    unsafe { (core.clear_error)() };
    Ok((!text.is_empty()).then_some(text))
}

/// Stock failure predicates for SDL's common return conventions.
///
/// Any `FnOnce(&R) -> bool` works as a predicate; these cover the shapes SDL
/// actually uses so call sites stay one-liners.
pub mod fail {
    use std::ffi::c_int;

    use sdlsafe_ffi::{SDL_FALSE, SDL_bool};

    /// Allocation-style calls: null means failure.
    pub fn on_null<T>(ret: &*mut T) -> bool {
        ret.is_null()
    }

    /// The common `int` convention: negative means failure.
    pub fn on_negative(ret: &c_int) -> bool {
        *ret < 0
    }

    /// SDL_net style: exactly -1 means failure.
    pub fn on_minus_one(ret: &c_int) -> bool {
        *ret == -1
    }

    /// Id-returning calls (`SDL_GetWindowID` etc.): zero means failure.
    pub fn on_zero<T: PartialEq + From<u8>>(ret: &T) -> bool {
        *ret == T::from(0)
    }

    /// `SDL_bool` returns: SDL_FALSE means failure.
    pub fn on_false(ret: &SDL_bool) -> bool {
        *ret == SDL_FALSE
    }
}
