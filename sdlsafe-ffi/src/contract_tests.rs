// Compile-time contract tests: catch layout drift in the tables and the plain
// data types. These const assertions fail the build if an entry is added or
// removed without bumping SDL_API_TABLE_VERSION alongside.

use std::mem::size_of;

use crate::api_table::*;
use crate::native::{IPaddress, SDL_bool};

const PTR: usize = size_of::<usize>();

const _: () = assert!(size_of::<SdlCoreApi>() == 14 * PTR);
const _: () = assert!(size_of::<SdlTtfApi>() == PTR);
const _: () = assert!(size_of::<SdlMixerApi>() == 2 * PTR);
const _: () = assert!(size_of::<SdlNetApi>() == 4 * PTR);
const _: () = assert!(size_of::<SdlRtfApi>() == PTR);

// u32 version + padding + five sub-table pointers.
const _: () = assert!(size_of::<SdlApiTable>() == 6 * PTR);

const _: () = assert!(size_of::<IPaddress>() == 8);
const _: () = assert!(size_of::<SDL_bool>() == 4);
