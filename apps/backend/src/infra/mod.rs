//! Infrastructure layer: database bootstrap, state assembly and DB error translation.

pub mod db;
pub mod db_errors;
pub mod state;
