// Real SDL linkage, behind the `link` feature. Hand-written declarations of
// exactly the symbols the tables carry; anything else a caller needs goes
// through its own extern block and the checked-call adapter.

#![allow(non_snake_case)]

use std::ffi::{c_char, c_int, c_void};

use crate::api_table::*;
use crate::native::*;

#[link(name = "SDL2")]
unsafe extern "C" {
    pub fn SDL_GetError() -> *const c_char;
    pub fn SDL_ClearError();
    pub fn SDL_SetError(fmt: *const c_char, ...) -> c_int;
    pub fn SDL_LogSetOutputFunction(callback: SDL_LogOutputFunction, userdata: *mut c_void);

    pub fn SDL_DestroyWindow(window: *mut SDL_Window);
    pub fn SDL_DestroyRenderer(renderer: *mut SDL_Renderer);
    pub fn SDL_DestroyTexture(texture: *mut SDL_Texture);
    pub fn SDL_FreeSurface(surface: *mut SDL_Surface);
    pub fn SDL_DestroyMutex(mutex: *mut SDL_mutex);
    pub fn SDL_DestroySemaphore(sem: *mut SDL_sem);
    pub fn SDL_DestroyCond(cond: *mut SDL_cond);
    pub fn SDL_FreeCursor(cursor: *mut SDL_Cursor);
    pub fn SDL_FreeFormat(format: *mut SDL_PixelFormat);
    pub fn SDL_FreePalette(palette: *mut SDL_Palette);
}

#[cfg(feature = "ttf")]
#[link(name = "SDL2_ttf")]
unsafe extern "C" {
    pub fn TTF_CloseFont(font: *mut TTF_Font);
}

#[cfg(feature = "mixer")]
#[link(name = "SDL2_mixer")]
unsafe extern "C" {
    pub fn Mix_FreeChunk(chunk: *mut Mix_Chunk);
    pub fn Mix_FreeMusic(music: *mut Mix_Music);
}

#[cfg(feature = "net")]
#[link(name = "SDL2_net")]
unsafe extern "C" {
    pub fn SDLNet_TCP_Close(sock: TCPsocket);
    pub fn SDLNet_UDP_Close(sock: UDPsocket);
    pub fn SDLNet_FreeSocketSet(set: SDLNet_SocketSet);
    pub fn SDLNet_FreePacket(packet: *mut UDPpacket);
}

#[cfg(feature = "rtf")]
#[link(name = "SDL2_rtf")]
unsafe extern "C" {
    pub fn RTF_FreeContext(ctx: *mut RTF_Context);
}

// SDL_SetError is variadic; the table slot is not. This shim pins the
// signature down to a preformatted string.
unsafe extern "C" fn set_error_preformatted(msg: *const c_char) -> c_int {
    static PASSTHROUGH: &core::ffi::CStr = c"%s";
    unsafe { SDL_SetError(PASSTHROUGH.as_ptr(), msg) }
}

const LINKED_CORE: SdlCoreApi = SdlCoreApi {
    get_error: SDL_GetError,
    clear_error: SDL_ClearError,
    set_error: set_error_preformatted,
    log_set_output: SDL_LogSetOutputFunction,
    destroy_window: SDL_DestroyWindow,
    destroy_renderer: SDL_DestroyRenderer,
    destroy_texture: SDL_DestroyTexture,
    free_surface: SDL_FreeSurface,
    destroy_mutex: SDL_DestroyMutex,
    destroy_semaphore: SDL_DestroySemaphore,
    destroy_cond: SDL_DestroyCond,
    free_cursor: SDL_FreeCursor,
    free_format: SDL_FreeFormat,
    free_palette: SDL_FreePalette,
};

#[cfg(feature = "ttf")]
const LINKED_TTF: SdlTtfApi = SdlTtfApi {
    close_font: TTF_CloseFont,
};

#[cfg(feature = "mixer")]
const LINKED_MIXER: SdlMixerApi = SdlMixerApi {
    free_chunk: Mix_FreeChunk,
    free_music: Mix_FreeMusic,
};

#[cfg(feature = "net")]
const LINKED_NET: SdlNetApi = SdlNetApi {
    tcp_close: SDLNet_TCP_Close,
    udp_close: SDLNet_UDP_Close,
    free_socket_set: SDLNet_FreeSocketSet,
    free_packet: SDLNet_FreePacket,
};

#[cfg(feature = "rtf")]
const LINKED_RTF: SdlRtfApi = SdlRtfApi {
    free_context: RTF_FreeContext,
};

#[cfg(feature = "ttf")]
const TTF_PTR: *const SdlTtfApi = &LINKED_TTF;
#[cfg(not(feature = "ttf"))]
const TTF_PTR: *const SdlTtfApi = std::ptr::null();

#[cfg(feature = "mixer")]
const MIXER_PTR: *const SdlMixerApi = &LINKED_MIXER;
#[cfg(not(feature = "mixer"))]
const MIXER_PTR: *const SdlMixerApi = std::ptr::null();

#[cfg(feature = "net")]
const NET_PTR: *const SdlNetApi = &LINKED_NET;
#[cfg(not(feature = "net"))]
const NET_PTR: *const SdlNetApi = std::ptr::null();

#[cfg(feature = "rtf")]
const RTF_PTR: *const SdlRtfApi = &LINKED_RTF;
#[cfg(not(feature = "rtf"))]
const RTF_PTR: *const SdlRtfApi = std::ptr::null();

static LINKED: SdlApiTable = SdlApiTable {
    version: SDL_API_TABLE_VERSION,
    core: &LINKED_CORE,
    ttf: TTF_PTR,
    mixer: MIXER_PTR,
    net: NET_PTR,
    rtf: RTF_PTR,
};

/// The table wired to the statically linked SDL symbols. Lives for the whole
/// process; satellite slots are null for features left disabled.
pub fn table() -> *const SdlApiTable {
    &LINKED
}
