//! # pay-api
//!
//! HTTP API layer for campus-pay.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for order creation and payment verification
//! - The composition root wiring the gateway and store clients
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Health check |
//! | GET | `/health` | Health check (probe alias) |
//! | POST | `/api/orders` | Create a gateway order |
//! | POST | `/api/verify` | Verify payment, upgrade subscription |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
