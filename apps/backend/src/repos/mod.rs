//! Persistence functions, generic over `ConnectionTrait` so they run on a
//! pooled connection or inside `with_txn` alike.
//!
//! Every group-scoped query filters on `couple_id`; a row owned by another
//! couple is indistinguishable from a missing one.

pub mod budget;
pub mod couples;
pub mod todos;
pub mod users;
pub mod vendors;
pub mod wishlist;
