use egui::Color32;
use egui_plot::{Bar, BarChart};
use std::collections::BTreeMap;

use crate::analysis::ExerciseTotals;

pub const CHART_TITLE: &str = "Total Workout Duration by Exercise";
pub const X_AXIS_LABEL: &str = "Exercise";
pub const Y_AXIS_LABEL: &str = "Total Duration (mins)";

const BAR_WIDTH: f64 = 0.6;

/// Bar heights for each exercise in summary order.
///
/// The x position of a bar is its index in the returned list.
pub fn duration_bar_values(summary: &BTreeMap<String, ExerciseTotals>) -> Vec<(&str, f64)> {
    summary
        .iter()
        .map(|(ex, totals)| (ex.as_str(), totals.duration_minutes as f64))
        .collect()
}

/// Exercise names indexed by bar position, used to label the x-axis.
pub fn bar_labels(summary: &BTreeMap<String, ExerciseTotals>) -> Vec<String> {
    summary.keys().cloned().collect()
}

/// Create a bar chart with one bar per exercise showing its summed duration.
pub fn duration_bar_chart(summary: &BTreeMap<String, ExerciseTotals>, color: Color32) -> BarChart {
    let bars: Vec<Bar> = duration_bar_values(summary)
        .into_iter()
        .enumerate()
        .map(|(idx, (ex, minutes))| {
            Bar::new(idx as f64, minutes)
                .name(ex)
                .width(BAR_WIDTH)
                .fill(color)
        })
        .collect();
    BarChart::new(bars).name("Duration").color(color)
}

/// Format an x-axis grid mark as the exercise label at that position.
///
/// Marks between bars or outside the chart produce an empty label.
pub fn format_exercise_mark(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}
