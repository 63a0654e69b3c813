// Global API table storage. Installed once at startup, then read-only.

use std::sync::OnceLock;

use sdlsafe_ffi::{
    SDL_API_TABLE_VERSION, SdlApiTable, SdlCoreApi, SdlMixerApi, SdlNetApi, SdlRtfApi, SdlTtfApi,
};

use crate::error::{SdlError, SdlResult};

/// Newtype over the installed table pointer. `*const SdlApiTable` is neither
/// Send nor Sync on its own, which OnceLock needs, so the marker impls are
/// asserted here.
/// SAFETY: the table is required to outlive the process and is read-only
/// after installation.
struct TableRef(*const SdlApiTable);
unsafe impl Send for TableRef {}
unsafe impl Sync for TableRef {}

static TABLE: OnceLock<TableRef> = OnceLock::new();

/// Install the API table the crate calls SDL through. Rejects a table built
/// against a different contract version, and rejects a second installation.
///
/// The table must stay valid and unchanged for the rest of the process.
pub fn install(table: *const SdlApiTable) -> SdlResult<()> {
    assert!(!table.is_null(), "install called with a null table");
    // SAFETY: non-null checked above; caller guarantees a live table.
    let version = unsafe { (*table).version };
    if version != SDL_API_TABLE_VERSION {
        return Err(SdlError::UnsupportedVersion {
            expected: SDL_API_TABLE_VERSION,
            found: version,
        });
    }
    assert!(
        unsafe { !(*table).core.is_null() },
        "install called with a null core sub-table"
    );
    if TABLE.set(TableRef(table)).is_err() {
        return Err(SdlError::AlreadyInstalled);
    }
    log::debug!("SDL API table v{version} installed");
    Ok(())
}

/// Install the table wired to the statically linked SDL symbols.
#[cfg(feature = "link")]
pub fn install_linked() -> SdlResult<()> {
    install(sdlsafe_ffi::linked::table())
}

/// Returns true once a table has been installed.
pub fn is_installed() -> bool {
    TABLE.get().is_some()
}

fn table() -> SdlResult<&'static SdlApiTable> {
    match TABLE.get() {
        // SAFETY: validated in install; read-only for the process lifetime.
        Some(table) => Ok(unsafe { &*table.0 }),
        None => Err(SdlError::NotInstalled),
    }
}

fn satellite<T>(ptr: *const T, name: &'static str) -> SdlResult<&'static T> {
    if ptr.is_null() {
        return Err(SdlError::MissingApi(name));
    }
    // SAFETY: same lifetime contract as the table itself.
    Ok(unsafe { &*ptr })
}

pub fn core() -> SdlResult<&'static SdlCoreApi> {
    // SAFETY: core was null-checked at install time.
    Ok(unsafe { &*table()?.core })
}

pub fn ttf() -> SdlResult<&'static SdlTtfApi> {
    satellite(table()?.ttf, "SDL_ttf")
}

pub fn mixer() -> SdlResult<&'static SdlMixerApi> {
    satellite(table()?.mixer, "SDL_mixer")
}

pub fn net() -> SdlResult<&'static SdlNetApi> {
    satellite(table()?.net, "SDL_net")
}

pub fn rtf() -> SdlResult<&'static SdlRtfApi> {
    satellite(table()?.rtf, "SDL_rtf")
}
