// Owned handles for SDL's synchronization primitives. These wrap the native
// objects' lifetimes only; locking and signalling stay native calls.

use sdlsafe_ffi::{SDL_cond, SDL_mutex, SDL_sem};

use crate::owned::owned_handle;

owned_handle!(
    /// An `SDL_mutex`, destroyed with `SDL_DestroyMutex`. Destroying a locked
    /// mutex is undefined in SDL; drop only after the last unlock.
    Mutex, SDL_mutex, core, destroy_mutex
);

owned_handle!(
    /// An `SDL_sem`, destroyed with `SDL_DestroySemaphore`.
    Semaphore, SDL_sem, core, destroy_semaphore
);

owned_handle!(
    /// An `SDL_cond`, destroyed with `SDL_DestroyCond`.
    CondVar, SDL_cond, core, destroy_cond
);
