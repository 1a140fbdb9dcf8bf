use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_extensible_rate_limit::RateLimiter;
use actix_web::{web, App, HttpServer};
use backend::config::db::DbProfile;
use backend::config::server::ServerConfig;
use backend::infra::db::DbKind;
use backend::infra::state::build_state;
use backend::middleware::rate_limit::{api_rate_limit_config, auth_rate_limit_config};
use backend::middleware::{
    cors_middleware, JwtExtract, RequestTrace, SecurityHeaders, StructuredLogger, TraceSpan,
};
use backend::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker-compose env_file, or `set -a; . ./.env; set +a` locally).
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_db(DbKind::Postgres(DbProfile::Prod))
        .with_security(config.security.clone())
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, "starting Wedding Mate backend");

    let data = web::Data::new(app_state);
    // Created outside the factory so every worker counts against the same
    // window. Separate backends because both limiters key on the client IP.
    let auth_backend = InMemoryBackend::builder().build();
    let api_backend = InMemoryBackend::builder().build();

    HttpServer::new(move || {
        let auth_limiter =
            RateLimiter::builder(auth_backend.clone(), auth_rate_limit_config().build())
                .add_headers()
                .build();
        let api_limiter =
            RateLimiter::builder(api_backend.clone(), api_rate_limit_config().build())
                .add_headers()
                .build();

        App::new()
            .wrap(cors_middleware())
            .wrap(SecurityHeaders)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .service(web::scope("/health").configure(routes::health::configure_routes))
            .service(
                web::scope("/api/auth")
                    .wrap(auth_limiter)
                    .configure(routes::auth::configure_routes),
            )
            .service(
                web::scope("/api")
                    .wrap(JwtExtract)
                    .wrap(api_limiter)
                    .configure(routes::configure_protected),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
