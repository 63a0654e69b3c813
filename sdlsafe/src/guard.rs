// FFI boundary guard: wraps Rust callbacks invoked by SDL so a panic cannot
// unwind across the C boundary (which is undefined behavior).

/// Execute `f` and catch any panic, returning `default` on failure.
///
/// Every `extern "C"` callback this crate hands to SDL wraps its body in this
/// guard. `callback` names the callback in the error report so a swallowed
/// panic can be traced back to the hook that raised it.
pub fn ffi_boundary<F, R>(callback: &'static str, default: R, f: F) -> R
where
    F: FnOnce() -> R + std::panic::UnwindSafe,
{
    match std::panic::catch_unwind(f) {
        Ok(value) => value,
        Err(payload) => {
            log::error!(target: "sdl", "{}", panic_message(callback, payload.as_ref()));
            default
        }
    }
}

fn panic_message(callback: &'static str, payload: &(dyn std::any::Any + Send)) -> String {
    // panic! hands over a &str for literals and a String for formatted text.
    if let Some(text) = payload.downcast_ref::<&str>() {
        format!("SDL callback {callback} panicked: {text}")
    } else if let Some(text) = payload.downcast_ref::<String>() {
        format!("SDL callback {callback} panicked: {text}")
    } else {
        format!("SDL callback {callback} panicked with a non-string payload")
    }
}
