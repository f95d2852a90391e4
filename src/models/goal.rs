//! Budget goal model
//!
//! A goal caps spending in one category for one month. The target can be a
//! fixed amount, a percentage of income, or a percentage change against a
//! reference period. Progress is computed by the server.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, GoalId};

/// How a goal's target amount is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    /// `amount` is a currency amount
    #[default]
    Fixed,
    /// `amount` is a percentage of the month's income
    Percentage,
    /// `amount` is a percentage change against `reference_period`
    Relative,
}

impl GoalKind {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Fixed => "Fixed Amount",
            Self::Percentage => "Percentage of Income",
            Self::Relative => "Relative to Previous Period",
        }
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Period a relative goal compares against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReferencePeriod {
    #[default]
    PreviousMonth,
    PreviousYear,
}

impl fmt::Display for ReferencePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreviousMonth => write!(f, "previous month"),
            Self::PreviousYear => write!(f, "same month last year"),
        }
    }
}

/// The user-editable part of a goal; also the create/update request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSpec {
    pub category_id: CategoryId,

    #[serde(rename = "type")]
    pub kind: GoalKind,

    pub amount: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_period: Option<ReferencePeriod>,

    pub month: u32,

    pub year: i32,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl GoalSpec {
    /// A fixed-amount goal for the current month
    pub fn fixed(category_id: CategoryId, amount: f64) -> Self {
        let today = Utc::now().date_naive();
        Self {
            category_id,
            kind: GoalKind::Fixed,
            amount,
            reference_period: None,
            month: today.month(),
            year: today.year(),
            is_active: true,
        }
    }

    /// Set the month and year the goal applies to
    pub fn for_month(mut self, year: i32, month: u32) -> Self {
        self.year = year;
        self.month = month;
        self
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(GoalValidationError::NegativeAmount);
        }

        if self.kind == GoalKind::Percentage && self.amount > 100.0 {
            return Err(GoalValidationError::PercentageOutOfRange(self.amount));
        }

        if self.kind == GoalKind::Relative && self.reference_period.is_none() {
            return Err(GoalValidationError::MissingReferencePeriod);
        }

        if !(1..=12).contains(&self.month) {
            return Err(GoalValidationError::InvalidMonth(self.month));
        }

        Ok(())
    }

    /// Human-readable target, e.g. "$250.00", "15% of income"
    pub fn target_description(&self, currency_symbol: &str) -> String {
        match self.kind {
            GoalKind::Fixed => format!("{}{:.2}", currency_symbol, self.amount),
            GoalKind::Percentage => format!("{}% of income", self.amount),
            GoalKind::Relative => format!(
                "{}% vs {}",
                self.amount,
                self.reference_period.unwrap_or_default()
            ),
        }
    }
}

/// A goal as stored by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,

    #[serde(flatten)]
    pub spec: GoalSpec,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

/// Server verdict on a goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    OnTrack,
    Exceeded,
    #[serde(other)]
    Unknown,
}

/// Progress report for one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GoalProgress {
    #[serde(default)]
    pub current_amount: Option<f64>,
    #[serde(default)]
    pub target_amount: Option<f64>,
    #[serde(default)]
    pub remaining_budget: Option<f64>,
    #[serde(default)]
    pub progress_percentage: Option<f64>,
    #[serde(default)]
    pub status: Option<GoalStatus>,
    #[serde(default)]
    pub message: Option<String>,
}

impl GoalProgress {
    /// Progress as a whole percentage capped at 100
    pub fn percent_capped(&self) -> u32 {
        self.progress_percentage
            .unwrap_or(0.0)
            .clamp(0.0, 100.0)
            .round() as u32
    }

    pub fn is_on_track(&self) -> bool {
        self.status == Some(GoalStatus::OnTrack)
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq)]
pub enum GoalValidationError {
    NegativeAmount,
    PercentageOutOfRange(f64),
    MissingReferencePeriod,
    InvalidMonth(u32),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Goal amount must be a non-negative number"),
            Self::PercentageOutOfRange(p) => {
                write!(f, "Percentage goal must be between 0 and 100 (got {})", p)
            }
            Self::MissingReferencePeriod => {
                write!(f, "Relative goals need a reference period")
            }
            Self::InvalidMonth(m) => write!(f, "Month must be 1-12 (got {})", m),
        }
    }
}

impl std::error::Error for GoalValidationError {}
