//! Insight service
//!
//! Read-only access to what the server computes: recommendations, the budget
//! health score and monthly analytics.

use crate::api::ApiClient;
use crate::error::BoardsResult;
use crate::models::{HealthAnalysis, MonthlyAnalytics, RecommendationReport};
use crate::session::Session;

pub struct InsightService<'a> {
    client: &'a ApiClient,
    session: &'a Session,
}

impl<'a> InsightService<'a> {
    pub fn new(client: &'a ApiClient, session: &'a Session) -> Self {
        Self { client, session }
    }

    pub fn recommendations(&self) -> BoardsResult<RecommendationReport> {
        self.client.recommendations(self.session.bearer()?)
    }

    pub fn health(&self) -> BoardsResult<HealthAnalysis> {
        self.client.health_analysis(self.session.bearer()?)
    }

    /// Per-category totals for one month
    pub fn analytics(&self, year: i32, month: u32) -> BoardsResult<MonthlyAnalytics> {
        self.client.analytics(self.session.bearer()?, year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HealthBand;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_health_band() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ai/budget-health-analysis");
            then.status(200).json_body(json!({"health_score": 71.5}));
        });

        let client = ApiClient::new(&server.base_url(), Duration::from_secs(5)).unwrap();
        let session = Session::with_token("tok");
        let health = InsightService::new(&client, &session).health().unwrap();

        assert_eq!(health.band(), HealthBand::Fair);
    }

    #[test]
    fn test_recommendations_tolerate_missing_sections() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ai/recommendations");
            then.status(200).json_body(json!({
                "recommendations": [{"title": "Cut dining", "category": "Dining", "savings": 25}]
            }));
        });

        let client = ApiClient::new(&server.base_url(), Duration::from_secs(5)).unwrap();
        let session = Session::with_token("tok");
        let report = InsightService::new(&client, &session)
            .recommendations()
            .unwrap();

        assert_eq!(report.recommendations.len(), 1);
        assert!(report.budget_insights.is_empty());
    }
}
