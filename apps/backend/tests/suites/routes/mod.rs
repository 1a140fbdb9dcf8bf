pub mod couples;
pub mod dashboard;
pub mod rate_limiting;
pub mod todos;
pub mod vendors;
pub mod wishlist;
