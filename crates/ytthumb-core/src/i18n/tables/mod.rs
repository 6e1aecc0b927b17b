//! Bundled translation tables. Every table carries the same key set.

mod ar;
mod en;
mod es;
mod hi;
mod id;
mod pt;

pub(super) use ar::AR;
pub(super) use en::EN;
pub(super) use es::ES;
pub(super) use hi::HI;
pub(super) use id::ID;
pub(super) use pt::PT;
