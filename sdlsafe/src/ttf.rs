// Owned handle for SDL_ttf fonts.

use sdlsafe_ffi::TTF_Font;

use crate::owned::owned_handle;

owned_handle!(
    /// A `TTF_Font`, closed with `TTF_CloseFont`. Close before `TTF_Quit`.
    Font, TTF_Font, ttf, close_font
);
