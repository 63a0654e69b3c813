// Owned handles for SDL_mixer audio data.

use sdlsafe_ffi::{Mix_Chunk, Mix_Music};

use crate::owned::owned_handle;

owned_handle!(
    /// A `Mix_Chunk`, freed with `Mix_FreeChunk`. Freeing a chunk that is
    /// still playing makes SDL_mixer halt the channel first.
    Chunk, Mix_Chunk, mixer, free_chunk
);

owned_handle!(
    /// A `Mix_Music`, freed with `Mix_FreeMusic`.
    Music, Mix_Music, mixer, free_music
);
