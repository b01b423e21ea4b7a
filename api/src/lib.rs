//! # SMIL API
//!
//! HTTP surface of the SMIL backend: request DTOs, route handlers, the
//! bearer-token guard, and the mapping from domain errors to HTTP responses.
//! Business logic lives in `smil_core`; this crate only validates input,
//! calls services, and shapes responses.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
