//! Recommendation, health and analytics formatting

use crate::models::{HealthAnalysis, MonthlyAnalytics, RecommendationReport};

/// Format the recommendation report
///
/// Recommendations are numbered so they can be adopted as goals by index.
pub fn format_recommendations(report: &RecommendationReport, symbol: &str) -> String {
    let mut output = String::new();

    if report.recommendations.is_empty() {
        output.push_str("No recommendations right now.\n");
    } else {
        output.push_str("Recommendations:\n");
        for (i, rec) in report.recommendations.iter().enumerate() {
            output.push_str(&format!("  {}. [{:?}] {}", i + 1, rec.priority, rec.title));
            if rec.savings > 0.0 {
                output.push_str(&format!(" (save {}{:.2})", symbol, rec.savings));
            }
            output.push('\n');
            if !rec.description.is_empty() {
                output.push_str(&format!("     {}\n", rec.description));
            }
        }
    }

    let insights = &report.budget_insights;
    for (heading, items) in [
        ("On track", &insights.on_track),
        ("Caution", &insights.caution),
        ("Opportunities", &insights.opportunity),
    ] {
        if items.is_empty() {
            continue;
        }
        output.push_str(&format!("\n{}:\n", heading));
        for item in items {
            output.push_str(&format!("  - {}\n", item));
        }
    }

    if !report.goals_evaluation.is_empty() {
        output.push_str("\nGoals:\n");
        for evaluation in &report.goals_evaluation {
            output.push_str(&format!("  - {}\n", evaluation.message));
            for suggestion in &evaluation.suggestions {
                output.push_str(&format!("      * {}\n", suggestion));
            }
        }
    }

    output
}

pub fn format_health(health: &HealthAnalysis) -> String {
    format!(
        "Budget health: {:.0}/100 ({})\n",
        health.normalized_score(),
        health.band()
    )
}

/// Category totals for a month, largest first
pub fn format_analytics(analytics: &MonthlyAnalytics, year: i32, month: u32, symbol: &str) -> String {
    let ranked = analytics.ranked();
    if ranked.is_empty() {
        return format!("No spending recorded for {:02}/{}.", month, year);
    }

    let name_width = ranked.iter().map(|(n, _)| n.len()).max().unwrap_or(8).max(8);
    let total = analytics.grand_total();

    let mut output = format!("Spending for {:02}/{}\n", month, year);
    for (name, value) in &ranked {
        let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
        output.push_str(&format!(
            "  {:<width$}  {:>12}  {:>5.1}%\n",
            name,
            format!("{}{:.2}", symbol, value),
            share,
            width = name_width
        ));
    }
    output.push_str(&format!(
        "  {:<width$}  {:>12}\n",
        "Total",
        format!("{}{:.2}", symbol, total),
        width = name_width
    ));

    output
}
