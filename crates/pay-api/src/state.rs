//! # Application State
//!
//! Shared state for the Axum application.
//! The composition root: builds the gateway and store clients once at
//! startup and hands them to the handlers by reference.

use pay_core::{BoxedPaymentGateway, BoxedSubscriptionStore};
use pay_razorpay::{MockGateway, RazorpayGateway};
use pay_supabase::SupabaseClient;
use std::sync::Arc;
use tracing::warn;

/// Frontend origin allowed by CORS when none is configured
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Frontend origin allowed by CORS
    pub frontend_origin: String,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Replace all gateway interaction with locally synthesized responses
    pub mock_payments: bool,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            frontend_origin: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGIN.to_string()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            mock_payments: std::env::var("MOCK_PAYMENTS")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment gateway (Razorpay, or mock when `MOCK_PAYMENTS` is set)
    pub gateway: BoxedPaymentGateway,
    /// Subscription record store
    pub store: BoxedSubscriptionStore,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState from the environment.
    ///
    /// The gateway implementation is chosen here, once; handlers never
    /// re-check the mock flag.
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let gateway: BoxedPaymentGateway = if config.mock_payments {
            warn!("MOCK_PAYMENTS enabled: orders are synthesized locally and signatures are not checked");
            Arc::new(MockGateway::new())
        } else {
            let gateway = RazorpayGateway::from_env()
                .map_err(|e| anyhow::anyhow!("Failed to initialize Razorpay: {}", e))?;
            Arc::new(gateway)
        };

        let store: BoxedSubscriptionStore = Arc::new(
            SupabaseClient::from_env()
                .map_err(|e| anyhow::anyhow!("Failed to initialize Supabase: {}", e))?,
        );

        Ok(Self {
            gateway,
            store,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test for everything env-sourced; env vars are process-global
    // and parallel tests mutating them interleave.
    #[test]
    fn test_app_config_from_env() {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("FRONTEND_URL");
        std::env::remove_var("MOCK_PAYMENTS");

        let config = AppConfig::from_env();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.frontend_origin, DEFAULT_FRONTEND_ORIGIN);
        assert!(!config.mock_payments);

        // The mock flag is enabled by the literal "true", case-insensitive
        std::env::set_var("MOCK_PAYMENTS", "TRUE");
        assert!(AppConfig::from_env().mock_payments);

        std::env::set_var("MOCK_PAYMENTS", "false");
        assert!(!AppConfig::from_env().mock_payments);

        std::env::set_var("MOCK_PAYMENTS", "yes");
        assert!(!AppConfig::from_env().mock_payments);

        std::env::remove_var("MOCK_PAYMENTS");
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            frontend_origin: DEFAULT_FRONTEND_ORIGIN.to_string(),
            environment: "test".to_string(),
            mock_payments: true,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }
}
