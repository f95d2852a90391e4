//! Recommendation and analytics payloads
//!
//! Everything here is computed by the remote service; the client only decodes
//! and presents it. Fields are lenient because the server omits empty sections.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Urgency attached to a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    #[default]
    #[serde(other)]
    Low,
}

/// One suggestion from the recommendation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-text category label; not a category ID
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub savings: f64,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl Recommendation {
    /// Whether this can be turned into a goal (achievements cannot)
    pub fn is_actionable(&self) -> bool {
        self.savings > 0.0 && self.kind.as_deref() != Some("achievement")
    }
}

/// Grouped plain-text insights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BudgetInsights {
    #[serde(default)]
    pub on_track: Vec<String>,
    #[serde(default)]
    pub caution: Vec<String>,
    #[serde(default)]
    pub opportunity: Vec<String>,
}

impl BudgetInsights {
    pub fn is_empty(&self) -> bool {
        self.on_track.is_empty() && self.caution.is_empty() && self.opportunity.is_empty()
    }
}

/// Server commentary on a single goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalEvaluation {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Response of `GET /ai/recommendations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecommendationReport {
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub budget_insights: BudgetInsights,
    #[serde(default)]
    pub smart_alerts: Vec<serde_json::Value>,
    #[serde(default)]
    pub goals_evaluation: Vec<GoalEvaluation>,
}

/// Coarse rating of a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Good,
    Fair,
    Poor,
}

impl fmt::Display for HealthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => write!(f, "Good"),
            Self::Fair => write!(f, "Fair"),
            Self::Poor => write!(f, "Poor"),
        }
    }
}

/// Response of `GET /ai/budget-health-analysis`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HealthAnalysis {
    #[serde(default)]
    pub health_score: f64,
}

impl HealthAnalysis {
    /// Score clamped to 0-100
    pub fn normalized_score(&self) -> f64 {
        if self.health_score.is_finite() {
            self.health_score.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    pub fn band(&self) -> HealthBand {
        let score = self.normalized_score();
        if score >= 85.0 {
            HealthBand::Good
        } else if score >= 60.0 {
            HealthBand::Fair
        } else {
            HealthBand::Poor
        }
    }
}

/// Total for one category in a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    #[serde(deserialize_with = "number_or_string")]
    pub value: f64,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Response of `GET /ai/analytics/{year}/{month}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MonthlyAnalytics {
    #[serde(default)]
    pub category_totals: BTreeMap<String, CategoryTotal>,
}

impl MonthlyAnalytics {
    /// Category totals sorted largest first
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut rows: Vec<_> = self
            .category_totals
            .iter()
            .map(|(name, total)| (name.as_str(), total.value))
            .collect();
        rows.sort_by(|a, b| b.1.total_cmp(&a.1));
        rows
    }

    pub fn grand_total(&self) -> f64 {
        self.category_totals.values().map(|t| t.value).sum()
    }
}

// Some server versions send decimals as strings ("12.50")
fn number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(f64),
        Text(String),
    }

    match Wire::deserialize(deserializer)? {
        Wire::Number(n) => Ok(n),
        Wire::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_report_defaults() {
        let report: RecommendationReport = serde_json::from_str("{}").unwrap();
        assert!(report.recommendations.is_empty());
        assert!(report.budget_insights.is_empty());
    }

    #[test]
    fn test_recommendation_actionable() {
        let json = r#"{
            "recommendations": [
                {"id": 1, "title": "Cut dining", "category": "Dining", "savings": 40, "priority": "high", "type": "saving"},
                {"id": 2, "title": "Nice work", "category": "Rent", "savings": 10, "type": "achievement"},
                {"id": 3, "title": "Keep going", "category": "Rent", "priority": "urgent"}
            ]
        }"#;
        let report: RecommendationReport = serde_json::from_str(json).unwrap();

        assert!(report.recommendations[0].is_actionable());
        assert_eq!(report.recommendations[0].priority, Priority::High);
        assert!(!report.recommendations[1].is_actionable());
        assert!(!report.recommendations[2].is_actionable());
        assert_eq!(report.recommendations[2].priority, Priority::Low);
    }

    #[test]
    fn test_health_bands() {
        let band = |score| HealthAnalysis { health_score: score }.band();
        assert_eq!(band(92.0), HealthBand::Good);
        assert_eq!(band(85.0), HealthBand::Good);
        assert_eq!(band(60.0), HealthBand::Fair);
        assert_eq!(band(59.9), HealthBand::Poor);
        assert_eq!(band(-5.0), HealthBand::Poor);

        let over = HealthAnalysis { health_score: 140.0 };
        assert_eq!(over.normalized_score(), 100.0);
    }

    #[test]
    fn test_category_totals_accept_strings() {
        let json = r#"{"category_totals": {
            "Rent": {"value": "1200.00", "type": "expense"},
            "Food": {"value": 310.5, "type": "expense"}
        }}"#;
        let analytics: MonthlyAnalytics = serde_json::from_str(json).unwrap();

        assert_eq!(analytics.ranked(), vec![("Rent", 1200.0), ("Food", 310.5)]);
        assert_eq!(analytics.grand_total(), 1510.5);
    }
}
