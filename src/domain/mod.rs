//! Domain types.

mod role;

pub use role::Role;
