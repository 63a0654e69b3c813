// sdlsafe: safe calling layer for SDL2 and its satellite libraries.
//
// Two pieces: `sdl_call`, which turns SDL's return-value failure conventions
// into `SdlResult` errors carrying the library's last-error string, and one
// owned handle type per native resource whose Drop runs the matching
// destructor. All unsafe plumbing is confined to this crate and sdlsafe-ffi;
// user code only sees the adapter and the handles.

pub mod api;
pub mod call;
pub mod error;
pub mod guard;
pub mod logging;
pub mod sync;
pub mod video;

mod owned;

#[cfg(feature = "ttf")]
pub mod ttf;
#[cfg(feature = "mixer")]
pub mod mixer;
#[cfg(feature = "net")]
pub mod net;
#[cfg(feature = "rtf")]
pub mod rtf;

#[cfg(test)]
pub(crate) mod test_api;

// Re-export the primary public API surface.
pub use api::install;
#[cfg(feature = "link")]
pub use api::install_linked;
pub use call::{fail, sdl_call, take_last_error};
pub use error::{NO_ERROR_SET, SdlError, SdlResult};
pub use guard::ffi_boundary;
pub use logging::route_sdl_logs;
pub use sync::{CondVar, Mutex, Semaphore};
pub use video::{Cursor, Palette, PixelFormat, Renderer, Surface, Texture, Window};

#[cfg(feature = "ttf")]
pub use ttf::Font;
#[cfg(feature = "mixer")]
pub use mixer::{Chunk, Music};
#[cfg(feature = "net")]
pub use net::{SocketSet, TcpSocket, UdpPacket, UdpSocket};
#[cfg(feature = "rtf")]
pub use rtf::RichText;

// Raw contract types, for callers writing their own extern blocks.
pub use sdlsafe_ffi as ffi;
