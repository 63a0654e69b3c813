// sdlsafe-ffi: opaque native types and API table definitions.
// Zero external dependencies. This crate defines the complete contract between
// the safe layer and the SDL2 library family; it never calls SDL itself except
// through the optional `link` table.

#![allow(non_camel_case_types)]

pub mod native;
pub mod api_table;
pub mod contract_tests;

#[cfg(feature = "link")]
pub mod linked;

pub use native::*;
pub use api_table::*;
