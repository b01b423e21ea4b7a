//! CORS configuration
//!
//! Development allows any origin for local clients and tooling; production
//! restricts origins to the `ALLOWED_ORIGINS` list. The environment is
//! passed in from the loaded configuration rather than read ambiently.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use smil_shared::config::Environment;

const DEFAULT_MAX_AGE: usize = 3600;

/// Create the CORS middleware for the given environment
pub fn create_cors(environment: &Environment) -> Cors {
    if environment.is_production() {
        create_production_cors()
    } else {
        create_development_cors()
    }
}

fn create_development_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
        ])
        .max_age(DEFAULT_MAX_AGE)
}

fn create_production_cors() -> Cors {
    let allowed_origins = std::env::var("ALLOWED_ORIGINS").unwrap_or_default();

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
        ])
        .max_age(DEFAULT_MAX_AGE);

    for origin in allowed_origins.split(',').filter(|s| !s.trim().is_empty()) {
        cors = cors.allowed_origin(origin.trim());
    }

    cors
}
