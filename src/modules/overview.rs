use serde::{Deserialize, Serialize};

use crate::modules::dataset::{app_usage, daily_records};
use crate::modules::metrics_calc::{
    aggregate_by_category, mood_trend, weekly_average, CategoryUsage, MoodTrend,
};

/// Everything the dashboard header and summary cards need, computed from the
/// dataset at read time. The dataset never changes, so neither does this.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    pub total_screen_time: f64,
    pub daily_average: f64,
    pub avg_mood: f64,
    pub avg_sleep: f64,
    pub avg_anxiety: f64,
    pub avg_focus: f64,
    pub mood_trend: MoodTrend,
    pub category_breakdown: Vec<CategoryUsage>,
}

/// The compact metric bundle handed to the assistant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WellnessSnapshot {
    pub screen_time: f64,
    pub mood: f64,
    pub sleep: f64,
    pub anxiety: f64,
    pub focus: f64,
}

pub fn build_overview() -> DashboardOverview {
    let records = daily_records();
    let last_week = &records[records.len().saturating_sub(7)..];
    let total_screen_time: f64 = last_week.iter().map(|r| r.total_hours).sum();

    DashboardOverview {
        total_screen_time,
        daily_average: total_screen_time / 7.0,
        avg_mood: weekly_average(records, |r| r.mood as f64),
        avg_sleep: weekly_average(records, |r| r.sleep_hours),
        avg_anxiety: weekly_average(records, |r| r.anxiety_level as f64),
        avg_focus: weekly_average(records, |r| r.focus_score as f64),
        mood_trend: mood_trend(records),
        category_breakdown: aggregate_by_category(app_usage()),
    }
}

impl DashboardOverview {
    pub fn snapshot(&self) -> WellnessSnapshot {
        WellnessSnapshot {
            screen_time: self.daily_average,
            mood: self.avg_mood,
            sleep: self.avg_sleep,
            anxiety: self.avg_anxiety,
            focus: self.avg_focus,
        }
    }
}
