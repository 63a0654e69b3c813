use std::ffi::{c_char, c_void};

use crate::native::*;

/// Bumped whenever a sub-table gains, loses, or reorders an entry.
pub const SDL_API_TABLE_VERSION: u32 = 2;

// ---------------------------------------------------------------------------
// SdlApiTable
// ---------------------------------------------------------------------------

/// The top-level table the safe layer calls SDL through.
///
/// `core` must be non-null. Satellite pointers are null when the matching
/// library is not part of the build; the safe layer turns that into a
/// `MissingApi` error instead of dereferencing.
#[repr(C)]
pub struct SdlApiTable {
    pub version: u32,

    pub core: *const SdlCoreApi,
    pub ttf: *const SdlTtfApi,
    pub mixer: *const SdlMixerApi,
    pub net: *const SdlNetApi,
    pub rtf: *const SdlRtfApi,
}

unsafe impl Send for SdlApiTable {}
unsafe impl Sync for SdlApiTable {}

// ---------------------------------------------------------------------------
// SdlCoreApi
// ---------------------------------------------------------------------------

/// Core SDL entry points the glue needs: the thread-local error triple, the
/// log output hook, and one destructor per core handle type.
///
/// SDL_net, SDL_ttf, SDL_mixer and SDL_rtf all report errors through the same
/// thread-local buffer (their `*_GetError` names are aliases), so the error
/// triple lives here and only here.
#[repr(C)]
pub struct SdlCoreApi {
    /// `SDL_GetError`. Never returns null; returns "" when no error is set.
    pub get_error: unsafe extern "C" fn() -> *const c_char,
    /// `SDL_ClearError`.
    pub clear_error: unsafe extern "C" fn(),
    /// `SDL_SetError`, restricted to a preformatted NUL-terminated string.
    pub set_error: unsafe extern "C" fn(msg: *const c_char) -> std::ffi::c_int,
    /// `SDL_LogSetOutputFunction`.
    pub log_set_output: unsafe extern "C" fn(callback: SDL_LogOutputFunction, userdata: *mut c_void),

    pub destroy_window: unsafe extern "C" fn(window: *mut SDL_Window),
    pub destroy_renderer: unsafe extern "C" fn(renderer: *mut SDL_Renderer),
    pub destroy_texture: unsafe extern "C" fn(texture: *mut SDL_Texture),
    pub free_surface: unsafe extern "C" fn(surface: *mut SDL_Surface),
    pub destroy_mutex: unsafe extern "C" fn(mutex: *mut SDL_mutex),
    pub destroy_semaphore: unsafe extern "C" fn(sem: *mut SDL_sem),
    pub destroy_cond: unsafe extern "C" fn(cond: *mut SDL_cond),
    pub free_cursor: unsafe extern "C" fn(cursor: *mut SDL_Cursor),
    pub free_format: unsafe extern "C" fn(format: *mut SDL_PixelFormat),
    pub free_palette: unsafe extern "C" fn(palette: *mut SDL_Palette),
}

// ---------------------------------------------------------------------------
// Satellite sub-tables
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug)]
pub struct SdlTtfApi {
    /// `TTF_CloseFont`.
    pub close_font: unsafe extern "C" fn(font: *mut TTF_Font),
}

#[repr(C)]
pub struct SdlMixerApi {
    /// `Mix_FreeChunk`.
    pub free_chunk: unsafe extern "C" fn(chunk: *mut Mix_Chunk),
    /// `Mix_FreeMusic`.
    pub free_music: unsafe extern "C" fn(music: *mut Mix_Music),
}

#[repr(C)]
pub struct SdlNetApi {
    /// `SDLNet_TCP_Close`.
    pub tcp_close: unsafe extern "C" fn(sock: TCPsocket),
    /// `SDLNet_UDP_Close`.
    pub udp_close: unsafe extern "C" fn(sock: UDPsocket),
    /// `SDLNet_FreeSocketSet`.
    pub free_socket_set: unsafe extern "C" fn(set: SDLNet_SocketSet),
    /// `SDLNet_FreePacket`.
    pub free_packet: unsafe extern "C" fn(packet: *mut UDPpacket),
}

#[repr(C)]
pub struct SdlRtfApi {
    /// `RTF_FreeContext`.
    pub free_context: unsafe extern "C" fn(ctx: *mut RTF_Context),
}
