//! Typed REST adapter for the prediction backend.
//!
//! One thin wrapper per endpoint over a shared `reqwest::Client`. Every
//! response body is decoded into an explicit struct; a body that does not
//! match the expected shape is a `Decode` error, never a partially-populated
//! view. Auth is a bearer token taken from the caller's session.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::predictions::RawPrediction;
use crate::session::{Role, Session};

/// Backend origin. The original deployment served the API and the dashboard
/// from the same host, so a relative base would also work behind a proxy.
pub const API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("{detail}")]
    Backend { status: u16, detail: String },
}

impl ApiError {
    /// The backend's own error message, when there is one. The prediction
    /// call site falls back to a generic message otherwise.
    pub fn backend_detail(&self) -> Option<&str> {
        match self {
            ApiError::Backend { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

/// FastAPI error envelope: `{"detail": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

// -- Wire types --

#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserInfo,
}

impl LoginResponse {
    pub fn into_session(self) -> Session {
        Session {
            token: self.access_token,
            role: Role::parse(&self.user.role),
            username: self.user.name,
        }
    }
}

#[derive(Serialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredUser {
    pub email: String,
}

/// Latest-price card for one asset, from `/prices/top-assets`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetStat {
    pub id: String,
    pub name: String,
    /// Absent when the backend has no candles yet for the asset.
    pub price: Option<f64>,
    pub change: f64,
}

/// One OHLC history point, `y` ordered open/high/low/close.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CandlePoint {
    pub x: DateTime<Utc>,
    pub y: [f64; 4],
}

impl CandlePoint {
    pub fn close(&self) -> f64 {
        self.y[3]
    }
}

/// Market record an admin injects through the dashboard form.
#[derive(Debug, Clone, Serialize)]
pub struct MarketDataInput {
    pub symbol: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub avg_sentiment: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResult {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsSummary {
    pub total_users: i64,
    pub total_data_points: i64,
    pub total_predictions: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccuracyRow {
    pub asset: String,
    pub timestamp: DateTime<Utc>,
    pub predicted_price: f64,
    pub actual_price: f64,
}

// -- Client --

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        ApiClient::new()
    }
}

impl ApiClient {
    pub fn new() -> ApiClient {
        ApiClient::with_base(API_BASE)
    }

    pub fn with_base(base: &str) -> ApiClient {
        ApiClient {
            http: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Check the status, then decode the body against the expected shape.
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|e| e.detail)
                .unwrap_or_else(|| format!("backend returned status {}", status.as_u16()));
            return Err(ApiError::Backend {
                status: status.as_u16(),
                detail,
            });
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, ApiError> {
        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(request)
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub async fn top_assets(&self, token: &str) -> Result<Vec<AssetStat>, ApiError> {
        self.get_json("/prices/top-assets", token).await
    }

    pub async fn price_history(&self, symbol: &str, token: &str) -> Result<Vec<CandlePoint>, ApiError> {
        self.get_json(&format!("/prices/{}", symbol), token).await
    }

    pub async fn predict(&self, symbol: &str, token: &str) -> Result<Vec<RawPrediction>, ApiError> {
        self.get_json(&format!("/prices/predict/{}", symbol), token).await
    }

    pub async fn add_market_data(
        &self,
        input: &MarketDataInput,
        token: &str,
    ) -> Result<UploadResult, ApiError> {
        let response = self
            .http
            .post(self.url("/prices/add-data"))
            .bearer_auth(token)
            .json(input)
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub async fn upload_csv(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        token: &str,
    ) -> Result<UploadResult, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("text/csv")?;
        let form = reqwest::multipart::Form::new().part("file", part);
        let response = self
            .http
            .post(self.url("/prices/upload-csv"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub async fn admin_stats(&self, token: &str) -> Result<StatsSummary, ApiError> {
        self.get_json("/admin/stats", token).await
    }

    pub async fn accuracy_report(&self, token: &str) -> Result<Vec<AccuracyRow>, ApiError> {
        self.get_json("/admin/accuracy-analysis", token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    #[test]
    fn test_login_response_decodes_and_converts() {
        let body = r#"{
            "access_token": "jwt-abc",
            "token_type": "bearer",
            "user": {"id": 7, "name": "sara", "email": "s@x.io", "role": "admin"}
        }"#;
        let parsed: LoginResponse = serde_json::from_str(body).unwrap();
        let session = parsed.into_session();
        assert_eq!(session.token, "jwt-abc");
        assert_eq!(session.username, "sara");
        assert_eq!(session.role, Role::Admin);
    }

    #[test]
    fn test_candle_point_decodes_ohlc_array() {
        let body = r#"{"x": "2024-05-01T12:00:00Z", "y": [100.0, 110.0, 95.0, 105.5]}"#;
        let point: CandlePoint = serde_json::from_str(body).unwrap();
        assert_eq!(point.close(), 105.5);
    }

    #[test]
    fn test_asset_stat_tolerates_null_price() {
        let body = r#"{"id": "BTC", "name": "BTC", "price": null, "change": 0.5}"#;
        let stat: AssetStat = serde_json::from_str(body).unwrap();
        assert!(stat.price.is_none());
    }

    #[test]
    fn test_raw_prediction_decodes() {
        let body = r#"[{"timestamp": "2024-05-01T13:00:00Z", "predicted_price": 64000.5, "confidence": 0.91}]"#;
        let parsed: Vec<RawPrediction> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].predicted_price, 64000.5);
    }

    #[test]
    fn test_error_body_detail_extraction() {
        let body = r#"{"detail": "Incomplete data for 48h simulation."}"#;
        let parsed: ErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.detail.as_deref(), Some("Incomplete data for 48h simulation."));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::with_base("http://api.local/");
        assert_eq!(client.url("/auth/login"), "http://api.local/auth/login");
    }
}
