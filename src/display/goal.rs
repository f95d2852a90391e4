//! Goal display formatting

use crate::models::category::find_by_id;
use crate::models::{Category, Goal, GoalProgress, GoalStatus};

const BAR_WIDTH: usize = 20;

/// Format goals with optional progress bars
pub fn format_goal_list(
    rows: &[(Goal, Option<GoalProgress>)],
    categories: &[Category],
    symbol: &str,
) -> String {
    if rows.is_empty() {
        return "No goals found.".to_string();
    }

    let mut output = String::new();

    for (goal, progress) in rows {
        let category = goal
            .category_name
            .clone()
            .or_else(|| find_by_id(categories, goal.spec.category_id).map(|c| c.name.clone()))
            .unwrap_or_else(|| format!("category #{}", goal.spec.category_id));
        let inactive = if goal.spec.is_active { "" } else { " (inactive)" };

        output.push_str(&format!(
            "#{} {} {:02}/{}: {} ({}){}\n",
            goal.id,
            category,
            goal.spec.month,
            goal.spec.year,
            goal.spec.target_description(symbol),
            goal.spec.kind.description(),
            inactive
        ));

        if let Some(progress) = progress {
            output.push_str(&format!("    {}\n", format_progress_line(progress)));
        }
    }

    output
}

/// "[#######-------------]  35%  on track"
pub fn format_progress_line(progress: &GoalProgress) -> String {
    let percent = progress.percent_capped();
    let filled = (percent as usize * BAR_WIDTH) / 100;
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled));

    let status = match &progress.status {
        Some(GoalStatus::OnTrack) => "  on track",
        Some(GoalStatus::Exceeded) => "  exceeded",
        _ => "",
    };

    let mut line = format!("[{}] {:>3}%{}", bar, percent, status);
    if let Some(message) = &progress.message {
        line.push_str(&format!("  {}", message));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, GoalId, GoalSpec};

    #[test]
    fn test_progress_bar() {
        let progress = GoalProgress {
            progress_percentage: Some(50.0),
            status: Some(GoalStatus::OnTrack),
            ..Default::default()
        };
        assert_eq!(
            format_progress_line(&progress),
            "[##########----------]  50%  on track"
        );
    }

    #[test]
    fn test_progress_capped() {
        let progress = GoalProgress {
            progress_percentage: Some(180.0),
            status: Some(GoalStatus::Exceeded),
            ..Default::default()
        };
        assert!(format_progress_line(&progress).starts_with("[####################] 100%  exceeded"));
    }

    #[test]
    fn test_goal_list_uses_category_names() {
        let goal = Goal {
            id: GoalId::server(4),
            spec: GoalSpec::fixed(CategoryId::server(2), 150.0).for_month(2024, 6),
            category_name: None,
        };
        let categories = vec![Category::new(CategoryId::server(2), "Dining")];

        let output = format_goal_list(&[(goal, None)], &categories, "$");
        assert!(output.starts_with("#4 Dining 06/2024: $150.00"));
    }
}
