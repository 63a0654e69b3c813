// One macro generates the whole owned-handle family: the mechanical part of
// this crate is the per-type mapping to the right native destructor, and the
// mapping lives entirely in the invocations.

/// Define an owning wrapper over a native SDL handle.
///
/// `$table` names the accessor in [`crate::api`] for the sub-table holding the
/// destructor, `$dtor` the destructor entry itself. The generated type is
/// `!Send + !Sync` (SDL resources are thread-confined), never wraps null, and
/// runs the destructor exactly once. Shared ownership is `Rc<T>`/`Arc<T>`
/// composed on top, no per-type alias family needed.
macro_rules! owned_handle {
    (
        $(#[$meta:meta])*
        $name:ident, $raw:ty, $table:ident, $dtor:ident
    ) => {
        $(#[$meta])*
        pub struct $name {
            ptr: std::ptr::NonNull<$raw>,
        }

        impl $name {
            /// Take ownership of a raw handle. Returns `None` for null so a
            /// failed allocation can never become an "owned" resource.
            ///
            /// # Safety
            /// `ptr` must be a live handle of this type, and nothing else may
            /// free it afterwards.
            pub unsafe fn from_raw(ptr: *mut $raw) -> Option<Self> {
                std::ptr::NonNull::new(ptr).map(|ptr| Self { ptr })
            }

            /// The raw handle, for passing back into native calls. Ownership
            /// stays with `self`.
            pub fn as_ptr(&self) -> *mut $raw {
                self.ptr.as_ptr()
            }

            /// Release ownership without running the destructor.
            pub fn into_raw(self) -> *mut $raw {
                let ptr = self.ptr.as_ptr();
                std::mem::forget(self);
                ptr
            }
        }

        impl Drop for $name {
            fn drop(&mut self) {
                match $crate::api::$table() {
                    // SAFETY: we hold the only ownership of a live handle.
                    Ok(api) => unsafe { (api.$dtor)(self.ptr.as_ptr()) },
                    // No table means no destructor to call. Leak rather than
                    // panic inside Drop.
                    Err(err) => log::error!("leaking {}: {err}", stringify!($name)),
                }
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.ptr).finish()
            }
        }
    };
}

pub(crate) use owned_handle;
