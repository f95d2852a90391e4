//! Goal service
//!
//! Goal CRUD and progress on top of the API client, plus turning a
//! recommendation into a fixed goal for its category.

use tracing::debug;

use crate::api::ApiClient;
use crate::error::{BoardsError, BoardsResult};
use crate::models::category::match_label;
use crate::models::{Goal, GoalId, GoalKind, GoalProgress, GoalSpec, Recommendation, ReferencePeriod};
use crate::session::Session;

/// Fields to change on an existing goal; `None` leaves a field as it is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalChanges {
    pub kind: Option<GoalKind>,
    pub amount: Option<f64>,
    pub reference_period: Option<ReferencePeriod>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub is_active: Option<bool>,
}

impl GoalChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply_to(&self, spec: &mut GoalSpec) {
        if let Some(kind) = self.kind {
            spec.kind = kind;
        }
        if let Some(amount) = self.amount {
            spec.amount = amount;
        }
        if let Some(period) = self.reference_period {
            spec.reference_period = Some(period);
        }
        if let Some(month) = self.month {
            spec.month = month;
        }
        if let Some(year) = self.year {
            spec.year = year;
        }
        if let Some(active) = self.is_active {
            spec.is_active = active;
        }
    }
}

/// Service for budget goals
pub struct GoalService<'a> {
    client: &'a ApiClient,
    session: &'a Session,
}

impl<'a> GoalService<'a> {
    pub fn new(client: &'a ApiClient, session: &'a Session) -> Self {
        Self { client, session }
    }

    pub fn list(&self) -> BoardsResult<Vec<Goal>> {
        self.client.goals(self.session.bearer()?)
    }

    /// Validate and create a goal
    pub fn create(&self, spec: &GoalSpec) -> BoardsResult<Goal> {
        let token = self.session.bearer()?;
        spec.validate()
            .map_err(|e| BoardsError::Validation(e.to_string()))?;

        let goal = self.client.create_goal(token, spec)?;
        debug!(goal = %goal.id, "goal created");
        Ok(goal)
    }

    pub fn update(&self, id: GoalId, spec: &GoalSpec) -> BoardsResult<Goal> {
        let token = self.session.bearer()?;
        spec.validate()
            .map_err(|e| BoardsError::Validation(e.to_string()))?;
        self.client.update_goal(token, id, spec)
    }

    /// Apply `changes` to the stored goal and send the whole goal back
    pub fn revise(&self, id: GoalId, changes: &GoalChanges) -> BoardsResult<Goal> {
        if changes.is_empty() {
            return Err(BoardsError::Validation("Nothing to change".into()));
        }

        let mut spec = self
            .list()?
            .into_iter()
            .find(|g| g.id == id)
            .map(|g| g.spec)
            .ok_or_else(|| BoardsError::goal_not_found(id.to_string()))?;
        changes.apply_to(&mut spec);

        let goal = self.update(id, &spec)?;
        debug!(goal = %goal.id, "goal updated");
        Ok(goal)
    }

    pub fn delete(&self, id: GoalId) -> BoardsResult<()> {
        self.client.delete_goal(self.session.bearer()?, id)
    }

    pub fn progress(&self, id: GoalId) -> BoardsResult<GoalProgress> {
        self.client.goal_progress(self.session.bearer()?, id)
    }

    /// Every goal with its progress; goals whose progress cannot be fetched
    /// are paired with `None`
    pub fn list_with_progress(&self) -> BoardsResult<Vec<(Goal, Option<GoalProgress>)>> {
        let goals = self.list()?;
        Ok(goals
            .into_iter()
            .map(|goal| {
                let progress = self.progress(goal.id).ok();
                (goal, progress)
            })
            .collect())
    }

    /// Create a fixed goal for the category a recommendation talks about
    ///
    /// The recommendation's category is free text, so it is matched against
    /// the user's categories by name. Achievements and recommendations
    /// without savings are rejected.
    pub fn adopt_recommendation(
        &self,
        recommendation: &Recommendation,
        year: i32,
        month: u32,
    ) -> BoardsResult<Goal> {
        let token = self.session.bearer()?;
        if !recommendation.is_actionable() {
            return Err(BoardsError::Validation(format!(
                "Recommendation '{}' has no savings to turn into a goal",
                recommendation.title
            )));
        }

        let categories = self.client.categories(token)?;
        let category = match_label(&categories, &recommendation.category)
            .ok_or_else(|| BoardsError::category_not_found(recommendation.category.clone()))?;

        let spec = GoalSpec::fixed(category.id, recommendation.savings).for_month(year, month);
        self.create(&spec)
    }
}
