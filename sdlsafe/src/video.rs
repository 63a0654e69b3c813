// Owned handles for SDL's video and rendering resources.

use sdlsafe_ffi::{
    SDL_Cursor, SDL_Palette, SDL_PixelFormat, SDL_Renderer, SDL_Surface, SDL_Texture, SDL_Window,
};

use crate::owned::owned_handle;

owned_handle!(
    /// An `SDL_Window`, destroyed with `SDL_DestroyWindow`.
    Window, SDL_Window, core, destroy_window
);

owned_handle!(
    /// An `SDL_Renderer`, destroyed with `SDL_DestroyRenderer`.
    ///
    /// SDL destroys a window's renderer when the window goes away, so keep
    /// the `Renderer` from outliving the `Window` it was created for.
    Renderer, SDL_Renderer, core, destroy_renderer
);

owned_handle!(
    /// An `SDL_Texture`, destroyed with `SDL_DestroyTexture`. Must not
    /// outlive the renderer that created it.
    Texture, SDL_Texture, core, destroy_texture
);

owned_handle!(
    /// An `SDL_Surface`, freed with `SDL_FreeSurface`. Only for surfaces the
    /// caller owns. Never adopt `SDL_GetWindowSurface`'s return value, that
    /// one belongs to the window.
    Surface, SDL_Surface, core, free_surface
);

owned_handle!(
    /// An `SDL_PixelFormat` from `SDL_AllocFormat`, freed with
    /// `SDL_FreeFormat`.
    PixelFormat, SDL_PixelFormat, core, free_format
);

owned_handle!(
    /// An `SDL_Palette` from `SDL_AllocPalette`, freed with
    /// `SDL_FreePalette`.
    Palette, SDL_Palette, core, free_palette
);

owned_handle!(
    /// An `SDL_Cursor`, freed with `SDL_FreeCursor`. Only for cursors created
    /// by the caller, not the return of `SDL_GetCursor`.
    Cursor, SDL_Cursor, core, free_cursor
);
