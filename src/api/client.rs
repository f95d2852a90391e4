//! HTTP client for the budget service
//!
//! A thin blocking wrapper: every method builds one request, attaches the
//! bearer token, and maps the outcome onto [`BoardsError`]. Status errors keep
//! the response body so the CLI can show what the server complained about.

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::config::Settings;
use crate::error::{BoardsError, BoardsResult};
use crate::models::{
    Board, BoardId, Category, Entry, EntryId, Goal, GoalId, GoalProgress, GoalSpec,
    HealthAnalysis, MonthlyAnalytics, RecommendationReport,
};

use super::payloads::{
    BoardOrder, CreateBoard, CreateEntry, EntryOrder, RenameBoard, UpdateEntry, UserProfile,
};
use super::BoardRemote;

/// Talks to the budget service over HTTP
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl ApiClient {
    /// Create a client for `base_url` (no trailing path)
    pub fn new(base_url: &str, timeout: Duration) -> BoardsResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("budget-boards/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| BoardsError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            client,
        })
    }

    /// Create a client from user settings
    pub fn from_settings(settings: &Settings) -> BoardsResult<Self> {
        Self::new(&settings.api_base_url, settings.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send and return the raw body of a successful response
    fn send(&self, request: RequestBuilder, token: &str) -> BoardsResult<String> {
        let response = request.bearer_auth(token).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "request rejected");
            return Err(BoardsError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    /// Send and decode a JSON body
    fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder, token: &str) -> BoardsResult<T> {
        let body = self.send(request, token)?;
        serde_json::from_str(&body).map_err(|e| BoardsError::MalformedResponse(e.to_string()))
    }

    /// Send, ignoring whatever acknowledgement body comes back
    fn send_ack(&self, request: RequestBuilder, token: &str) -> BoardsResult<()> {
        self.send(request, token).map(|_| ())
    }

    // --- categories -------------------------------------------------------

    /// `GET /categories/`
    pub fn categories(&self, token: &str) -> BoardsResult<Vec<Category>> {
        self.send_json(self.client.get(self.url("/categories/")), token)
    }

    // --- goals ------------------------------------------------------------

    /// `GET /goals/`
    pub fn goals(&self, token: &str) -> BoardsResult<Vec<Goal>> {
        self.send_json(self.client.get(self.url("/goals/")), token)
    }

    /// `POST /goals/`
    pub fn create_goal(&self, token: &str, spec: &GoalSpec) -> BoardsResult<Goal> {
        self.send_json(self.client.post(self.url("/goals/")).json(spec), token)
    }

    /// `PUT /goals/{id}`
    pub fn update_goal(&self, token: &str, id: GoalId, spec: &GoalSpec) -> BoardsResult<Goal> {
        let url = self.url(&format!("/goals/{}", id));
        self.send_json(self.client.put(url).json(spec), token)
    }

    /// `DELETE /goals/{id}`
    pub fn delete_goal(&self, token: &str, id: GoalId) -> BoardsResult<()> {
        let url = self.url(&format!("/goals/{}", id));
        self.send_ack(self.client.delete(url), token)
    }

    /// `GET /goals/{id}/progress`
    pub fn goal_progress(&self, token: &str, id: GoalId) -> BoardsResult<GoalProgress> {
        let url = self.url(&format!("/goals/{}/progress", id));
        self.send_json(self.client.get(url), token)
    }

    // --- insights ---------------------------------------------------------

    /// `GET /ai/recommendations`
    pub fn recommendations(&self, token: &str) -> BoardsResult<RecommendationReport> {
        self.send_json(self.client.get(self.url("/ai/recommendations")), token)
    }

    /// `GET /ai/budget-health-analysis`
    pub fn health_analysis(&self, token: &str) -> BoardsResult<HealthAnalysis> {
        self.send_json(self.client.get(self.url("/ai/budget-health-analysis")), token)
    }

    /// `GET /ai/analytics/{year}/{month}`
    pub fn analytics(&self, token: &str, year: i32, month: u32) -> BoardsResult<MonthlyAnalytics> {
        let url = self.url(&format!("/ai/analytics/{}/{}", year, month));
        self.send_json(self.client.get(url), token)
    }

    // --- account ----------------------------------------------------------

    /// `GET /users/me`
    pub fn current_user(&self, token: &str) -> BoardsResult<UserProfile> {
        self.send_json(self.client.get(self.url("/users/me")), token)
    }
}

impl BoardRemote for ApiClient {
    fn fetch_boards(&self, token: &str) -> BoardsResult<Vec<Board>> {
        self.send_json(self.client.get(self.url("/boards")), token)
    }

    fn create_board(&self, token: &str, body: &CreateBoard) -> BoardsResult<Board> {
        self.send_json(self.client.post(self.url("/boards")).json(body), token)
    }

    fn rename_board(&self, token: &str, id: BoardId, body: &RenameBoard) -> BoardsResult<()> {
        let url = self.url(&format!("/boards/{}", id));
        self.send_ack(self.client.put(url).json(body), token)
    }

    fn delete_board(&self, token: &str, id: BoardId) -> BoardsResult<()> {
        let url = self.url(&format!("/boards/{}", id));
        self.send_ack(self.client.delete(url), token)
    }

    fn reorder_boards(&self, token: &str, body: &BoardOrder) -> BoardsResult<()> {
        self.send_ack(self.client.put(self.url("/boards/reorder")).json(body), token)
    }

    fn create_entry(&self, token: &str, body: &CreateEntry) -> BoardsResult<Entry> {
        self.send_json(self.client.post(self.url("/entries")).json(body), token)
    }

    fn update_entry(&self, token: &str, id: EntryId, body: &UpdateEntry) -> BoardsResult<Entry> {
        let url = self.url(&format!("/entries/{}", id));
        self.send_json(self.client.put(url).json(body), token)
    }

    fn assign_entry(&self, token: &str, id: EntryId, body: &UpdateEntry) -> BoardsResult<()> {
        let url = self.url(&format!("/entries/{}", id));
        self.send_ack(self.client.put(url).json(body), token)
    }

    fn delete_entry(&self, token: &str, id: EntryId) -> BoardsResult<()> {
        let url = self.url(&format!("/entries/{}", id));
        self.send_ack(self.client.delete(url), token)
    }

    fn reorder_entries(&self, token: &str, body: &EntryOrder) -> BoardsResult<()> {
        self.send_ack(self.client.put(self.url("/entries/reorder")).json(body), token)
    }
}
