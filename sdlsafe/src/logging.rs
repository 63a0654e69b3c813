// Bridge from SDL's logging to the `log` facade.

use std::ffi::{CStr, c_char, c_int, c_void};

use log::Level;
use sdlsafe_ffi::{
    SDL_LOG_PRIORITY_DEBUG, SDL_LOG_PRIORITY_INFO, SDL_LOG_PRIORITY_VERBOSE, SDL_LOG_PRIORITY_WARN,
};

use crate::api;
use crate::error::SdlResult;
use crate::guard::ffi_boundary;

/// Route SDL's log output to the `log` facade under target `"sdl"`.
///
/// Replaces any output function installed earlier; SDL keeps exactly one.
pub fn route_sdl_logs() -> SdlResult<()> {
    let core = api::core()?;
    // SAFETY: forward_to_log is alive for the whole process and needs no
    // userdata.
    unsafe { (core.log_set_output)(Some(forward_to_log), std::ptr::null_mut()) };
    Ok(())
}

fn priority_level(priority: c_int) -> Level {
    match priority {
        SDL_LOG_PRIORITY_VERBOSE => Level::Trace,
        SDL_LOG_PRIORITY_DEBUG => Level::Debug,
        SDL_LOG_PRIORITY_INFO => Level::Info,
        SDL_LOG_PRIORITY_WARN => Level::Warn,
        // ERROR, CRITICAL, and anything SDL invents later.
        _ => Level::Error,
    }
}

unsafe extern "C" fn forward_to_log(
    _userdata: *mut c_void,
    category: c_int,
    priority: c_int,
    message: *const c_char,
) {
    ffi_boundary("forward_to_log", (), || {
        if message.is_null() {
            return;
        }
        // SAFETY: SDL hands us a NUL-terminated string valid for this call.
        let text = unsafe { CStr::from_ptr(message) }.to_string_lossy();
        log::log!(target: "sdl", priority_level(priority), "[category {category}] {text}");
    });
}

#[cfg(test)]
mod tests {
    use sdlsafe_ffi::{SDL_LOG_PRIORITY_CRITICAL, SDL_LOG_PRIORITY_ERROR};

    use super::*;
    use crate::test_api;

    #[test]
    fn priorities_map_onto_log_levels() {
        assert_eq!(priority_level(SDL_LOG_PRIORITY_VERBOSE), Level::Trace);
        assert_eq!(priority_level(SDL_LOG_PRIORITY_DEBUG), Level::Debug);
        assert_eq!(priority_level(SDL_LOG_PRIORITY_INFO), Level::Info);
        assert_eq!(priority_level(SDL_LOG_PRIORITY_WARN), Level::Warn);
        assert_eq!(priority_level(SDL_LOG_PRIORITY_ERROR), Level::Error);
        assert_eq!(priority_level(SDL_LOG_PRIORITY_CRITICAL), Level::Error);
        assert_eq!(priority_level(0), Level::Error);
    }

    #[test]
    fn route_installs_an_output_function() {
        test_api::install();
        route_sdl_logs().unwrap();
        let callback = test_api::installed_log_output().expect("callback installed");

        // Drive the installed callback the way SDL would.
        let line = c"renderer: created";
        unsafe { callback(std::ptr::null_mut(), 1, SDL_LOG_PRIORITY_INFO, line.as_ptr()) };
        // A null message must be tolerated, not crash.
        unsafe { callback(std::ptr::null_mut(), 1, SDL_LOG_PRIORITY_INFO, std::ptr::null()) };
    }
}
