//! REST API client implementation.

use chrono::NaiveDate;
use footfall_core::types::DbId;
use footfall_core::views::{Demographics, LiveVisitor, OverviewStats, TrafficSlot};
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::error::{ClientError, ClientResult};
use crate::types::{
    Alert, Customer, DetectionOutcome, EndVisit, NewAlert, NewCustomer, NewDetection,
    NewTrackingEvent, NewVisit, NewZone, ResolveOutcome, TrackingEvent, Visit, Zone, ZoneStats,
};

/// The server's error body shape.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Typed client for the footfall analytics API.
#[derive(Debug, Clone)]
pub struct FootfallClient {
    http: HttpClient,
    base_url: Url,
}

impl FootfallClient {
    /// Create a new client against a base URL such as
    /// `http://localhost:3000`.
    pub fn new(base_url: Url) -> Self {
        let http = HttpClient::builder()
            .user_agent(concat!("footfall-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self { http, base_url }
    }

    /// Create a client from a base URL string.
    pub fn from_url(base_url: &str) -> ClientResult<Self> {
        Ok(Self::new(Url::parse(base_url)?))
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // -- Analytics ----------------------------------------------------------

    /// `GET /api/stats/overview`
    pub async fn overview_stats(&self) -> ClientResult<OverviewStats> {
        self.get("api/stats/overview", &[]).await
    }

    /// `GET /api/analytics/demographics`
    pub async fn demographics(&self) -> ClientResult<Demographics> {
        self.get("api/analytics/demographics", &[]).await
    }

    /// `GET /api/analytics/traffic`
    pub async fn hourly_traffic(&self) -> ClientResult<Vec<TrafficSlot>> {
        self.get("api/analytics/traffic", &[]).await
    }

    /// `GET /api/tracking/live`
    pub async fn live_visitors(&self) -> ClientResult<Vec<LiveVisitor>> {
        self.get("api/tracking/live", &[]).await
    }

    // -- Zones --------------------------------------------------------------

    /// `GET /api/zones`
    pub async fn zones(&self) -> ClientResult<Vec<Zone>> {
        self.get("api/zones", &[]).await
    }

    /// `POST /api/zones`
    pub async fn create_zone(&self, zone: &NewZone) -> ClientResult<Zone> {
        self.post("api/zones", zone).await
    }

    /// `GET /api/zones/stats?zoneId=&date=`
    pub async fn zone_stats(
        &self,
        zone_id: Option<DbId>,
        date: Option<NaiveDate>,
    ) -> ClientResult<Vec<ZoneStats>> {
        let mut params = Vec::new();
        if let Some(zone_id) = zone_id {
            params.push(("zoneId", zone_id.to_string()));
        }
        if let Some(date) = date {
            params.push(("date", date.to_string()));
        }
        self.get("api/zones/stats", &params).await
    }

    // -- Alerts -------------------------------------------------------------

    /// `GET /api/alerts?status=`
    pub async fn alerts(&self, status: Option<&str>) -> ClientResult<Vec<Alert>> {
        let mut params = Vec::new();
        if let Some(status) = status {
            params.push(("status", status.to_string()));
        }
        self.get("api/alerts", &params).await
    }

    /// `POST /api/alerts`
    pub async fn create_alert(&self, alert: &NewAlert) -> ClientResult<Alert> {
        self.post("api/alerts", alert).await
    }

    /// `PATCH /api/alerts/{id}/resolve`
    pub async fn resolve_alert(&self, id: DbId) -> ClientResult<ResolveOutcome> {
        let path = format!("api/alerts/{id}/resolve");
        let url = self.base_url.join(&path)?;
        let response = self.http.patch(url).send().await?;
        Self::decode(response).await
    }

    // -- Customers ----------------------------------------------------------

    /// `GET /api/customers`
    pub async fn customers(&self) -> ClientResult<Vec<Customer>> {
        self.get("api/customers", &[]).await
    }

    /// `POST /api/customers`
    pub async fn create_customer(&self, customer: &NewCustomer) -> ClientResult<Customer> {
        self.post("api/customers", customer).await
    }

    /// `GET /api/customers/{id}/visits`
    pub async fn customer_visits(&self, id: DbId) -> ClientResult<Vec<Visit>> {
        self.get(&format!("api/customers/{id}/visits"), &[]).await
    }

    // -- Tracking -----------------------------------------------------------

    /// `GET /api/tracking/events?limit=`
    pub async fn recent_events(&self, limit: Option<i64>) -> ClientResult<Vec<TrackingEvent>> {
        let mut params = Vec::new();
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        self.get("api/tracking/events", &params).await
    }

    /// `POST /api/tracking/events`
    pub async fn create_event(&self, event: &NewTrackingEvent) -> ClientResult<TrackingEvent> {
        self.post("api/tracking/events", event).await
    }

    /// `POST /api/tracking/detections`
    pub async fn record_detection(
        &self,
        detection: &NewDetection,
    ) -> ClientResult<DetectionOutcome> {
        self.post("api/tracking/detections", detection).await
    }

    // -- Visits -------------------------------------------------------------

    /// `POST /api/visits`
    pub async fn open_visit(&self, visit: &NewVisit) -> ClientResult<Visit> {
        self.post("api/visits", visit).await
    }

    /// `PATCH /api/visits/{id}/end`
    pub async fn end_visit(&self, id: DbId, end: &EndVisit) -> ClientResult<Visit> {
        let path = format!("api/visits/{id}/end");
        let url = self.base_url.join(&path)?;
        let response = self.http.patch(url).json(end).send().await?;
        Self::decode(response).await
    }

    // -- Plumbing -----------------------------------------------------------

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ClientResult<T> {
        let mut url = self.base_url.join(path)?;
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    async fn post<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.base_url.join(path)?;
        let response = self.http.post(url).json(body).send().await?;
        Self::decode(response).await
    }

    /// Turn a response into `T`, mapping non-success statuses onto
    /// [`ClientError::Server`] with the server's error message when the
    /// body carries one.
    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        Err(ClientError::Server { status, message })
    }
}
