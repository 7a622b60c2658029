//! Shared, host-independent types of the tree menu.
//!
//! - `menu` - resource descriptors, classification into groups/leaves,
//!   expansion state and label resolution
//! - `shared` - configuration DTOs

pub mod menu;
pub mod shared;
