//! # Campus-Pay
//!
//! Payment backend for the institute management platform.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export RAZORPAY_KEY_ID=rzp_test_...
//! export RAZORPAY_KEY_SECRET=...
//! export SUPABASE_URL=https://<project>.supabase.co
//! export SUPABASE_SERVICE_KEY=...
//!
//! # Run the server
//! campus-pay
//! ```

use pay_api::{routes, state::AppState};
use pay_core::PaymentGateway;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.gateway.provider_name());
    info!("Allowed frontend origin: {}", state.config.frontend_origin);

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Campus-Pay starting on http://{}", addr);

    if !is_prod {
        info!("Health: GET http://{}/", addr);
        info!("Orders: POST http://{}/api/orders", addr);
        info!("Verify: POST http://{}/api/verify", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
