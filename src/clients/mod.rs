/// External API clients module
use crate::domain::LaunchRecord;
use crate::errors::TransportError;
use crate::utils::{b_pick, s_pick};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, warn};

/// Source of launch records
#[async_trait]
pub trait LaunchGateway: Send + Sync {
    async fn fetch_launches(&self) -> Result<Vec<LaunchRecord>, TransportError>;
}

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent("launch-board/1.0")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// SpaceX API client
pub struct SpaceXClient {
    http_client: HttpClient,
    launches_url: String,
}

impl SpaceXClient {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http_client: HttpClient::new()?,
            launches_url: format!("{}/launches", base_url.trim_end_matches('/')),
        })
    }

    pub fn launches_url(&self) -> &str {
        &self.launches_url
    }

    async fn request(&self) -> Result<Value, TransportError> {
        let url = &self.launches_url;
        let resp = self
            .http_client
            .get_client()
            .get(url)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.clone(),
                source,
            })?;

        if !resp.status().is_success() {
            return Err(TransportError::Status {
                url: url.clone(),
                status: resp.status(),
            });
        }

        resp.json().await.map_err(|source| TransportError::Decode {
            url: url.clone(),
            source,
        })
    }
}

#[async_trait]
impl LaunchGateway for SpaceXClient {
    /// Fetch all launches
    async fn fetch_launches(&self) -> Result<Vec<LaunchRecord>, TransportError> {
        let result = self.request().await.and_then(|json| {
            normalize_launches(json).ok_or_else(|| TransportError::UnexpectedShape {
                url: self.launches_url.clone(),
            })
        });

        match result {
            Ok(records) => {
                debug!(count = records.len(), "Fetched launches");
                Ok(records)
            }
            Err(e) => {
                error!(error = %e, "Error fetching launches");
                Err(e)
            }
        }
    }
}

/// Map a launches response body into records.
///
/// Accepts a bare array or a paginated `{"docs": [...]}` object. `None` when
/// the body is neither.
pub fn normalize_launches(json: Value) -> Option<Vec<LaunchRecord>> {
    let items = match json {
        Value::Array(arr) => arr,
        Value::Object(mut obj) => match obj.remove("docs") {
            Some(Value::Array(arr)) => arr,
            _ => return None,
        },
        _ => return None,
    };

    Some(items.iter().filter_map(normalize_launch).collect())
}

/// Map one raw launch into the canonical record shape.
///
/// Only the id is required, since detail lookup and row links key on it; an
/// entry without one is dropped. A missing name maps to an empty string and a
/// missing `date_utc` to an empty timestamp, which displays as "Invalid Date"
/// and sorts lowest. Every other absent field becomes `None`.
pub fn normalize_launch(item: &Value) -> Option<LaunchRecord> {
    let Some(id) = s_pick(item, &["id", "rocket_id"]) else {
        warn!(raw = %item, "Dropping launch without id");
        return None;
    };
    let name = s_pick(item, &["name"]).unwrap_or_default();
    let launch_date_utc = s_pick(item, &["date_utc"]).unwrap_or_default();

    Some(LaunchRecord {
        id,
        name,
        launch_date_utc,
        launchpad_id: s_pick(item, &["launchpad", "launchpad_id"]),
        success: b_pick(item, &["success"]),
        details: s_pick(item, &["details"]),
    })
}
