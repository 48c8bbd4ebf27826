//! # Supabase Configuration
//!
//! Configuration management for the Supabase record store.
//! The service-role key is loaded from environment variables and used for
//! both the `apikey` and bearer-auth headers.

use pay_core::PaymentError;
use std::env;

/// Supabase API configuration
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL (https://<project>.supabase.co)
    pub url: String,

    /// Service-role key (bypasses row-level security; server-side only)
    pub service_key: String,
}

impl SupabaseConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_SERVICE_KEY`
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let url = env::var("SUPABASE_URL").map_err(|_| {
            PaymentError::Configuration("SUPABASE_URL not set".to_string())
        })?;

        let service_key = env::var("SUPABASE_SERVICE_KEY").map_err(|_| {
            PaymentError::Configuration("SUPABASE_SERVICE_KEY not set".to_string())
        })?;

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(PaymentError::Configuration(
                "SUPABASE_URL must be an http(s) URL".to_string(),
            ));
        }

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            service_key,
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(url: impl Into<String>, service_key: impl Into<String>) -> Self {
        let url: String = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            service_key: service_key.into(),
        }
    }

    /// REST endpoint for a table
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_table_url() {
        let config = SupabaseConfig::new("https://proj.supabase.co", "service-key");
        assert_eq!(
            config.table_url("schools"),
            "https://proj.supabase.co/rest/v1/schools"
        );
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let config = SupabaseConfig::new("https://proj.supabase.co/", "service-key");
        assert_eq!(
            config.table_url("school_admins"),
            "https://proj.supabase.co/rest/v1/school_admins"
        );
    }

    #[test]
    fn test_from_env_missing_url() {
        env::remove_var("SUPABASE_URL");

        let result = SupabaseConfig::from_env();
        assert!(result.is_err());
    }
}
