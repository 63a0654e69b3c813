// Native SDL2 data types, kept under their C names as a `-sys` crate would.
// Handle types are opaque: Rust never looks inside them, it only moves the
// pointers between the library's own functions.

use std::ffi::{c_char, c_int, c_void};

macro_rules! opaque {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(C)]
        pub struct $name {
            _opaque: [u8; 0],
            _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
        }
    };
}

// -- SDL core --
opaque!(SDL_Window);
opaque!(SDL_Renderer);
opaque!(SDL_Texture);
opaque!(SDL_Surface);
opaque!(SDL_mutex);
opaque!(SDL_sem);
opaque!(SDL_cond);
opaque!(SDL_Cursor);
opaque!(SDL_PixelFormat);
opaque!(SDL_Palette);

// -- SDL_ttf --
opaque!(TTF_Font);

// -- SDL_mixer --
opaque!(Mix_Chunk);
opaque!(Mix_Music);

// -- SDL_net --
opaque!(_TCPsocket);
opaque!(_UDPsocket);
opaque!(_SDLNet_SocketSet);
// UDPpacket has public fields in SDL_net, but this crate only ever frees one,
// so it stays opaque here.
opaque!(UDPpacket);

pub type TCPsocket = *mut _TCPsocket;
pub type UDPsocket = *mut _UDPsocket;
pub type SDLNet_SocketSet = *mut _SDLNet_SocketSet;

// -- SDL_rtf --
opaque!(RTF_Context);

/// SDL boolean return type.
pub type SDL_bool = c_int;
pub const SDL_FALSE: SDL_bool = 0;
pub const SDL_TRUE: SDL_bool = 1;

/// Resolved address, host and port both in network byte order.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct IPaddress {
    pub host: u32,
    pub port: u16,
}

// SDL_LogPriority values. SDL starts at 1.
pub const SDL_LOG_PRIORITY_VERBOSE: c_int = 1;
pub const SDL_LOG_PRIORITY_DEBUG: c_int = 2;
pub const SDL_LOG_PRIORITY_INFO: c_int = 3;
pub const SDL_LOG_PRIORITY_WARN: c_int = 4;
pub const SDL_LOG_PRIORITY_ERROR: c_int = 5;
pub const SDL_LOG_PRIORITY_CRITICAL: c_int = 6;

/// Callback installed via `SDL_LogSetOutputFunction`. `message` is a
/// NUL-terminated UTF-8 string owned by SDL for the duration of the call.
pub type SDL_LogOutputFunction =
    Option<unsafe extern "C" fn(userdata: *mut c_void, category: c_int, priority: c_int, message: *const c_char)>;
