//! Use cases spanning several repos. Handlers own HTTP and hashing;
//! services own the database steps and their ordering.

pub mod couples;
pub mod dashboard;
pub mod users;
