// Owned handle for SDL_rtf rich-text contexts.

use sdlsafe_ffi::RTF_Context;

use crate::owned::owned_handle;

owned_handle!(
    /// An `RTF_Context`, freed with `RTF_FreeContext`. Must not outlive the
    /// renderer its font engine draws through.
    RichText, RTF_Context, rtf, free_context
);
