//! Checks run on a parsed program before it is handed to the backend.

pub mod entry_point;
pub mod type_check;


pub use entry_point::{find_entry_point, EntryPoint, EntryPointError};
pub use type_check::{type_check, TypeError};
