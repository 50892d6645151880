use chrono::{Local, Timelike};
use serde::Serialize;

use crate::modules::dataset::daily_records;
use crate::modules::metrics_calc::{mood_trend, MoodTrend};
use crate::modules::overview::WellnessSnapshot;

/// Point-in-time wellness read derived from the snapshot and the hour of day.
#[derive(Debug, Clone, Serialize)]
pub struct LiveReport {
    pub current_screen_time: f64,
    pub today_mood: f64,
    pub trend: MoodTrend,
    pub hour: u32,
    pub risk_factors: Vec<String>,
    pub improvements: Vec<String>,
}

/// Build the report for the current local hour.
pub fn live_report_now(snapshot: &WellnessSnapshot) -> LiveReport {
    live_report(snapshot, Local::now().hour())
}

/// Pure form: callers (and tests) supply the hour of day.
pub fn live_report(snapshot: &WellnessSnapshot, hour: u32) -> LiveReport {
    let is_evening_usage = hour >= 20;
    let is_working_hours = (9..=17).contains(&hour);

    let mut risk_factors = Vec::new();
    if is_evening_usage {
        risk_factors.push("Late evening usage detected".to_string());
    }
    if snapshot.screen_time > 8.0 {
        risk_factors.push("Excessive daily usage".to_string());
    }
    if snapshot.anxiety > 6.0 {
        risk_factors.push("Elevated anxiety levels".to_string());
    }
    if snapshot.sleep < 7.0 {
        risk_factors.push("Insufficient sleep quality".to_string());
    }

    let mut improvements = Vec::new();
    if snapshot.mood > 7.0 {
        improvements.push("Mood stability maintained".to_string());
    }
    if is_working_hours {
        improvements.push("Productive hours usage".to_string());
    }
    if snapshot.focus > 6.0 {
        improvements.push("Good focus levels".to_string());
    }

    let report = LiveReport {
        current_screen_time: snapshot.screen_time,
        today_mood: snapshot.mood,
        trend: mood_trend(daily_records()),
        hour,
        risk_factors,
        improvements,
    };
    log::debug!(
        "live report: {} risk factor(s), {} improvement(s)",
        report.risk_factors.len(),
        report.improvements.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(screen_time: f64, mood: f64, sleep: f64, anxiety: f64, focus: f64) -> WellnessSnapshot {
        WellnessSnapshot {
            screen_time,
            mood,
            sleep,
            anxiety,
            focus,
        }
    }

    #[test]
    fn healthy_afternoon_has_no_risk_factors() {
        let report = live_report(&snapshot(5.0, 8.0, 8.0, 3.0, 8.0), 14);
        assert!(report.risk_factors.is_empty());
        assert_eq!(
            report.improvements,
            ["Mood stability maintained", "Productive hours usage", "Good focus levels"]
        );
    }

    #[test]
    fn heavy_evening_usage_raises_every_risk() {
        let report = live_report(&snapshot(9.5, 4.0, 6.0, 7.0, 4.0), 22);
        assert_eq!(
            report.risk_factors,
            [
                "Late evening usage detected",
                "Excessive daily usage",
                "Elevated anxiety levels",
                "Insufficient sleep quality",
            ]
        );
        assert!(report.improvements.is_empty());
    }

    #[test]
    fn working_hours_flag_is_inclusive() {
        assert!(live_report(&snapshot(5.0, 5.0, 8.0, 3.0, 5.0), 9)
            .improvements
            .contains(&"Productive hours usage".to_string()));
        assert!(live_report(&snapshot(5.0, 5.0, 8.0, 3.0, 5.0), 17)
            .improvements
            .contains(&"Productive hours usage".to_string()));
        assert!(!live_report(&snapshot(5.0, 5.0, 8.0, 3.0, 5.0), 18)
            .improvements
            .contains(&"Productive hours usage".to_string()));
    }

    #[test]
    fn report_carries_the_dataset_mood_trend() {
        let report = live_report(&snapshot(5.0, 5.0, 8.0, 3.0, 5.0), 12);
        assert_eq!(report.trend, MoodTrend::Stable);
    }
}
