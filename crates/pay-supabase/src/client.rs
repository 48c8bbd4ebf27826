//! # Supabase Client
//!
//! `SubscriptionStore` implementation over the Supabase PostgREST API.
//!
//! The service touches exactly two tables:
//! - `school_admins` (read): resolves `user_id` -> `school_id`
//! - `schools` (write): `subscription_plan` / `subscription_status` columns

use crate::config::SupabaseConfig;
use async_trait::async_trait;
use pay_core::{PaymentError, PaymentResult, SubscriptionStore, SubscriptionUpdate};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

/// Supabase record-store client
///
/// Holds one long-lived HTTP client; constructed once at startup and shared
/// by all handlers.
pub struct SupabaseClient {
    config: SupabaseConfig,
    client: Client,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(config: SupabaseConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = SupabaseConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Attach the service-role auth headers PostgREST expects
    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.config.service_key)
            .bearer_auth(&self.config.service_key)
    }

    async fn read_body(response: reqwest::Response) -> PaymentResult<(reqwest::StatusCode, String)> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;
        Ok((status, body))
    }
}

#[derive(Debug, Deserialize)]
struct SchoolAdminRow {
    school_id: String,
}

#[async_trait]
impl SubscriptionStore for SupabaseClient {
    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn school_for_admin(&self, user_id: &str) -> PaymentResult<Option<String>> {
        let response = self
            .authed(self.client.get(self.config.table_url("school_admins")))
            .query(&[
                ("select", "school_id".to_string()),
                ("user_id", format!("eq.{}", user_id)),
            ])
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let (status, body) = Self::read_body(response).await?;

        if !status.is_success() {
            error!("school_admins lookup failed: status={}, body={}", status, body);
            return Err(PaymentError::StoreError(format!(
                "school_admins lookup: HTTP {}: {}",
                status, body
            )));
        }

        let rows: Vec<SchoolAdminRow> = serde_json::from_str(&body).map_err(|e| {
            PaymentError::Serialization(format!("Failed to parse school_admins rows: {}", e))
        })?;

        debug!("school_admins rows: {}", rows.len());

        Ok(rows.into_iter().next().map(|row| row.school_id))
    }

    #[instrument(skip(self, update), fields(school_id = %school_id))]
    async fn update_subscription(
        &self,
        school_id: &str,
        update: &SubscriptionUpdate,
    ) -> PaymentResult<bool> {
        let response = self
            .authed(self.client.patch(self.config.table_url("schools")))
            .query(&[("id", format!("eq.{}", school_id))])
            // Ask PostgREST to return the affected rows so an update that
            // matched nothing is distinguishable from success.
            .header("Prefer", "return=representation")
            .json(update)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let (status, body) = Self::read_body(response).await?;

        if !status.is_success() {
            error!("schools update failed: status={}, body={}", status, body);
            return Err(PaymentError::StoreError(format!(
                "schools update: HTTP {}: {}",
                status, body
            )));
        }

        let rows: Vec<serde_json::Value> = serde_json::from_str(&body).map_err(|e| {
            PaymentError::Serialization(format!("Failed to parse schools rows: {}", e))
        })?;

        info!("schools update affected {} row(s)", rows.len());

        Ok(!rows.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SupabaseClient {
        SupabaseClient::new(SupabaseConfig::new(server.uri(), "service-key"))
    }

    #[tokio::test]
    async fn test_school_for_admin_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/school_admins"))
            .and(query_param("select", "school_id"))
            .and(query_param("user_id", "eq.user_1"))
            .and(header("apikey", "service-key"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"school_id": "sch_1"}])),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let school = client.school_for_admin("user_1").await.unwrap();

        assert_eq!(school.as_deref(), Some("sch_1"));
    }

    #[tokio::test]
    async fn test_school_for_admin_missing_row() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/school_admins"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let school = client.school_for_admin("user_unknown").await.unwrap();

        assert!(school.is_none());
    }

    #[tokio::test]
    async fn test_update_subscription_affected_row() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/rest/v1/schools"))
            .and(query_param("id", "eq.sch_1"))
            .and(header("Prefer", "return=representation"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "sch_1",
                "subscription_plan": "pro",
                "subscription_status": "active"
            }])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let updated = client
            .update_subscription("sch_1", &SubscriptionUpdate::pro())
            .await
            .unwrap();

        assert!(updated);
    }

    #[tokio::test]
    async fn test_update_subscription_no_matching_row() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/rest/v1/schools"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let updated = client
            .update_subscription("sch_missing", &SubscriptionUpdate::pro())
            .await
            .unwrap();

        assert!(!updated);
    }

    #[tokio::test]
    async fn test_store_error_on_http_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/school_admins"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "message": "JWT expired"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.school_for_admin("user_1").await.unwrap_err();

        assert!(matches!(err, PaymentError::StoreError(_)));
    }
}
