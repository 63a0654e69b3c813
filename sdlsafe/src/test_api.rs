// In-process stand-in for the SDL library family. The fake reproduces the one
// piece of native semantics the adapter depends on (a thread-local last-error
// buffer) and records destructor calls instead of freeing anything, so tests
// run in parallel with no SDL installed.
//
// Handles passed to the fakes are dangling `NonNull` pointers; no fake ever
// dereferences one.

use std::cell::{Cell, RefCell};
use std::ffi::{CStr, CString, c_char, c_int, c_void};
use std::ptr::NonNull;
use std::sync::Once;

use sdlsafe_ffi::{
    Mix_Chunk, Mix_Music, RTF_Context, SDL_API_TABLE_VERSION, SDL_Cursor, SDL_LogOutputFunction,
    SDL_Palette, SDL_PixelFormat, SDL_Renderer, SDL_Surface, SDL_Texture, SDL_Window, SDL_cond,
    SDL_mutex, SDL_sem, SdlApiTable, SdlCoreApi, SdlMixerApi, SdlNetApi, SdlRtfApi, SdlTtfApi,
    TTF_Font, UDPpacket, _SDLNet_SocketSet, _TCPsocket, _UDPsocket,
};

thread_local! {
    static LAST_ERROR: RefCell<CString> = RefCell::new(CString::default());
    static LOG_OUTPUT: Cell<SDL_LogOutputFunction> = const { Cell::new(None) };
    static DESTROYED: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

/// Install the fake table. Idempotent; every test calls this first.
pub fn install() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        crate::api::install(table()).expect("fake table install");
    });
}

pub fn table() -> *const SdlApiTable {
    &TABLE
}

/// Seed the thread-local error buffer the way a failing SDL call would.
pub fn set_error(msg: &str) {
    let owned = CString::new(msg).expect("error text without NUL");
    LAST_ERROR.with(|e| *e.borrow_mut() = owned);
}

pub fn error_is_clear() -> bool {
    LAST_ERROR.with(|e| e.borrow().as_bytes().is_empty())
}

/// Destructor names recorded on this thread, in call order.
pub fn destroyed() -> Vec<&'static str> {
    DESTROYED.with(|d| d.borrow().clone())
}

pub fn reset_destroyed() {
    DESTROYED.with(|d| d.borrow_mut().clear());
}

pub fn installed_log_output() -> SDL_LogOutputFunction {
    LOG_OUTPUT.with(|c| c.get())
}

/// A non-null handle for the fakes. Never dereferenced.
pub fn dangling<T>() -> *mut T {
    NonNull::dangling().as_ptr()
}

unsafe extern "C" fn fake_get_error() -> *const c_char {
    // The pointer stays valid until the next set/clear, matching SDL.
    LAST_ERROR.with(|e| e.borrow().as_ptr())
}

unsafe extern "C" fn fake_clear_error() {
    LAST_ERROR.with(|e| *e.borrow_mut() = CString::default());
}

unsafe extern "C" fn fake_set_error(msg: *const c_char) -> c_int {
    let owned = unsafe { CStr::from_ptr(msg) }.to_owned();
    LAST_ERROR.with(|e| *e.borrow_mut() = owned);
    -1
}

unsafe extern "C" fn fake_log_set_output(callback: SDL_LogOutputFunction, _userdata: *mut c_void) {
    LOG_OUTPUT.with(|c| c.set(callback));
}

macro_rules! counting_destructor {
    ($fake:ident, $raw:ty, $label:literal) => {
        unsafe extern "C" fn $fake(_handle: *mut $raw) {
            DESTROYED.with(|d| d.borrow_mut().push($label));
        }
    };
}

counting_destructor!(fake_destroy_window, SDL_Window, "SDL_DestroyWindow");
counting_destructor!(fake_destroy_renderer, SDL_Renderer, "SDL_DestroyRenderer");
counting_destructor!(fake_destroy_texture, SDL_Texture, "SDL_DestroyTexture");
counting_destructor!(fake_free_surface, SDL_Surface, "SDL_FreeSurface");
counting_destructor!(fake_destroy_mutex, SDL_mutex, "SDL_DestroyMutex");
counting_destructor!(fake_destroy_semaphore, SDL_sem, "SDL_DestroySemaphore");
counting_destructor!(fake_destroy_cond, SDL_cond, "SDL_DestroyCond");
counting_destructor!(fake_free_cursor, SDL_Cursor, "SDL_FreeCursor");
counting_destructor!(fake_free_format, SDL_PixelFormat, "SDL_FreeFormat");
counting_destructor!(fake_free_palette, SDL_Palette, "SDL_FreePalette");
counting_destructor!(fake_close_font, TTF_Font, "TTF_CloseFont");
counting_destructor!(fake_free_chunk, Mix_Chunk, "Mix_FreeChunk");
counting_destructor!(fake_free_music, Mix_Music, "Mix_FreeMusic");
counting_destructor!(fake_tcp_close, _TCPsocket, "SDLNet_TCP_Close");
counting_destructor!(fake_udp_close, _UDPsocket, "SDLNet_UDP_Close");
counting_destructor!(fake_free_socket_set, _SDLNet_SocketSet, "SDLNet_FreeSocketSet");
counting_destructor!(fake_free_packet, UDPpacket, "SDLNet_FreePacket");
counting_destructor!(fake_free_context, RTF_Context, "RTF_FreeContext");

static CORE: SdlCoreApi = SdlCoreApi {
    get_error: fake_get_error,
    clear_error: fake_clear_error,
    set_error: fake_set_error,
    log_set_output: fake_log_set_output,
    destroy_window: fake_destroy_window,
    destroy_renderer: fake_destroy_renderer,
    destroy_texture: fake_destroy_texture,
    free_surface: fake_free_surface,
    destroy_mutex: fake_destroy_mutex,
    destroy_semaphore: fake_destroy_semaphore,
    destroy_cond: fake_destroy_cond,
    free_cursor: fake_free_cursor,
    free_format: fake_free_format,
    free_palette: fake_free_palette,
};

static TTF: SdlTtfApi = SdlTtfApi {
    close_font: fake_close_font,
};

static MIXER: SdlMixerApi = SdlMixerApi {
    free_chunk: fake_free_chunk,
    free_music: fake_free_music,
};

static NET: SdlNetApi = SdlNetApi {
    tcp_close: fake_tcp_close,
    udp_close: fake_udp_close,
    free_socket_set: fake_free_socket_set,
    free_packet: fake_free_packet,
};

static RTF: SdlRtfApi = SdlRtfApi {
    free_context: fake_free_context,
};

// The fake always carries all five sub-tables, features only gate the safe
// wrappers on top.
static TABLE: SdlApiTable = SdlApiTable {
    version: SDL_API_TABLE_VERSION,
    core: &CORE,
    ttf: &TTF,
    mixer: &MIXER,
    net: &NET,
    rtf: &RTF,
};
