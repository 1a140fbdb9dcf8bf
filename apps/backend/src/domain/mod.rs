//! Pure planning rules: no I/O, no HTTP, no database.

pub mod budget;
pub mod couple;
pub mod fields;
pub mod vendor;
