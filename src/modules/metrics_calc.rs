use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::modules::dataset::{AppUsageRecord, DailyRecord};

/// Three-state mood classification from two consecutive 7-day windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    Improving,
    Declining,
    Stable,
}

impl fmt::Display for MoodTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoodTrend::Improving => write!(f, "improving"),
            MoodTrend::Declining => write!(f, "declining"),
            MoodTrend::Stable => write!(f, "stable"),
        }
    }
}

/// Summed hours for one distinct app category, keeping the first-seen color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryUsage {
    pub name: String,
    pub hours: f64,
    pub color: String,
}

/// Arithmetic mean of `field` over the most recent 7 records, or fewer when
/// the input is shorter. Division is by the number of records actually taken,
/// so an empty input yields NaN; callers must guarantee at least one record.
pub fn weekly_average<F>(records: &[DailyRecord], field: F) -> f64
where
    F: Fn(&DailyRecord) -> f64,
{
    let window = &records[records.len().saturating_sub(7)..];
    let sum: f64 = window.iter().map(field).sum();
    sum / window.len() as f64
}

/// Pearson product-moment correlation coefficient, sum-based formula.
///
/// Degenerate inputs (fewer than 2 points, zero variance) yield NaN rather
/// than an error. Equal length is the caller's responsibility; it is not
/// validated here.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();
    let sum_xx: f64 = x.iter().map(|a| a * a).sum();
    let sum_yy: f64 = y.iter().map(|b| b * b).sum();

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_xx - sum_x * sum_x) * (n * sum_yy - sum_y * sum_y)).sqrt();

    numerator / denominator
}

/// Compare the mean mood of the last 7 records against the 7 before them.
///
/// With fewer than 14 records the earlier window shrinks or is empty; an
/// empty window means NaN and NaN comparisons are false, so the result falls
/// through to Stable. Short histories read as Stable on purpose.
pub fn mood_trend(records: &[DailyRecord]) -> MoodTrend {
    let recent = &records[records.len().saturating_sub(7)..];
    let earlier = &records[records.len().saturating_sub(14)..records.len().saturating_sub(7)];

    let recent_avg = mean_mood(recent);
    let earlier_avg = mean_mood(earlier);
    let difference = recent_avg - earlier_avg;

    if difference > 0.5 {
        MoodTrend::Improving
    } else if difference < -0.5 {
        MoodTrend::Declining
    } else {
        MoodTrend::Stable
    }
}

fn mean_mood(records: &[DailyRecord]) -> f64 {
    let sum: f64 = records.iter().map(|r| r.mood as f64).sum();
    sum / records.len() as f64
}

/// Fold app usage by exact category label, summing hours. Grouping keeps
/// insertion order and the first-seen color; no case-folding or trimming.
pub fn aggregate_by_category(apps: &[AppUsageRecord]) -> Vec<CategoryUsage> {
    let mut by_category: IndexMap<&str, CategoryUsage> = IndexMap::new();

    for app in apps {
        by_category
            .entry(app.category.as_str())
            .and_modify(|entry| entry.hours += app.hours)
            .or_insert_with(|| CategoryUsage {
                name: app.category.clone(),
                hours: app.hours,
                color: app.color.clone(),
            });
    }

    by_category.into_values().collect()
}
