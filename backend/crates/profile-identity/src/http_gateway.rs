use crate::{IdentityError, IdentityGateway, IdentityLookup, IdentityResult};

use profile_core::{IdentityRecord, UserId};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, StatusCode};

/// `GET {base_url}/users/{id}` against the identity service.
pub struct HttpIdentityGateway {
    base_url: String,
    client: ReqwestClient,
}

impl HttpIdentityGateway {
    /// # Arguments
    /// * `base_url` - Identity service URL (e.g., "http://localhost:8001")
    /// * `timeout` - Per-request timeout covering connect and body
    pub fn new(base_url: &str, timeout: Duration) -> IdentityResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request_user(&self, id: UserId) -> IdentityResult<Option<IdentityRecord>> {
        let url = format!("{}/users/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            return Err(IdentityError::Status {
                status: status.as_u16(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let bytes = response.bytes().await?;
        let record: IdentityRecord =
            serde_json::from_slice(&bytes).map_err(|e| IdentityError::Decode {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Some(record))
    }
}

#[async_trait]
impl IdentityGateway for HttpIdentityGateway {
    async fn lookup_user(&self, id: UserId) -> IdentityLookup {
        let lookup = match self.request_user(id).await {
            Ok(Some(record)) => IdentityLookup::Found(record),
            Ok(None) => IdentityLookup::NotFound,
            Err(e) => {
                warn!("Identity lookup for user {} failed ({}): {}", id, e.reason(), e);
                IdentityLookup::Unavailable(e)
            }
        };

        debug!("Identity lookup for user {}: {}", id, lookup.outcome());
        metrics::counter!("profile_identity_lookups_total", "outcome" => lookup.outcome())
            .increment(1);

        lookup
    }
}
