use actix_web::web;

use crate::middleware::JwtExtract;

pub mod auth;
pub mod budget;
pub mod couples;
pub mod dashboard;
pub mod health;
pub mod todos;
pub mod users;
pub mod vendors;
pub mod wishlist;

/// Full route table without rate limiting, for tests.
///
/// `main.rs` mounts the same scopes with rate limiters in front. `/api/auth`
/// has to be registered before `/api` or the authenticated scope would
/// swallow it.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::configure_routes))
        .service(web::scope("/api/auth").configure(auth::configure_routes))
        .service(
            web::scope("/api")
                .wrap(JwtExtract)
                .configure(configure_protected),
        );
}

/// Everything under `/api` that needs a bearer token.
pub fn configure_protected(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/users").configure(users::configure_routes))
        .service(web::scope("/couples").configure(couples::configure_routes))
        .service(web::scope("/todos").configure(todos::configure_routes))
        .service(web::scope("/vendors").configure(vendors::configure_routes))
        .service(web::scope("/budget").configure(budget::configure_routes))
        .service(web::scope("/wishlist").configure(wishlist::configure_routes))
        .service(web::scope("/dashboard").configure(dashboard::configure_routes));
}
