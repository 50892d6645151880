use std::sync::OnceLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of screen-time and self-reported wellness metrics.
/// Records are stored ascending by date; no two records share a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub day: String,
    pub total_hours: f64,
    pub mood: u32,
    pub sleep_hours: f64,
    pub sleep_quality: u32,
    pub anxiety_level: u32,
    pub focus_score: u32,
    pub stress_level: u32,
    pub physical_activity: u32,
    pub social_interaction: f64,
}

/// Aggregate usage for one application over the observation window.
/// `avg_session_length * sessions ~= hours` is expected but not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppUsageRecord {
    pub name: String,
    pub category: String,
    pub hours: f64,
    pub sessions: u32,
    pub avg_session_length: f64,
    pub color: String,
    pub mental_health_impact: MentalHealthImpact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentalHealthImpact {
    Positive,
    Neutral,
    Negative,
}

/// Pre-aggregated weekly means. Authored independently of the daily records,
/// not derived from them at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyAggregate {
    pub week: String,
    pub screen_time: f64,
    pub mood: f64,
    pub anxiety: f64,
    pub sleep: f64,
    pub focus: f64,
    pub stress: f64,
    pub productivity: f64,
}

/// Mean usage, mood and alertness for one hour of the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyAggregate {
    pub hour: String,
    pub usage: f64,
    pub mood: f64,
    pub alertness: f64,
}

/// An authored statistical claim pairing two metrics. The coefficient is a
/// literal constant, not computed from the daily records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationFinding {
    pub metric: String,
    pub correlation: f64,
    pub significance: Significance,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Significance {
    High,
    Medium,
    Low,
}

static DAILY_RECORDS: OnceLock<Vec<DailyRecord>> = OnceLock::new();
static APP_USAGE: OnceLock<Vec<AppUsageRecord>> = OnceLock::new();
static WEEKLY_TRENDS: OnceLock<Vec<WeeklyAggregate>> = OnceLock::new();
static HOURLY_USAGE: OnceLock<Vec<HourlyAggregate>> = OnceLock::new();
static CORRELATION_FINDINGS: OnceLock<Vec<CorrelationFinding>> = OnceLock::new();

/// 30 days of screen time and mental health observations.
pub fn daily_records() -> &'static [DailyRecord] {
    DAILY_RECORDS.get_or_init(build_daily_records)
}

pub fn app_usage() -> &'static [AppUsageRecord] {
    APP_USAGE.get_or_init(build_app_usage)
}

/// Weekly trends over 8 weeks.
pub fn weekly_trends() -> &'static [WeeklyAggregate] {
    WEEKLY_TRENDS.get_or_init(build_weekly_trends)
}

pub fn hourly_usage() -> &'static [HourlyAggregate] {
    HOURLY_USAGE.get_or_init(build_hourly_usage)
}

pub fn correlation_findings() -> &'static [CorrelationFinding] {
    CORRELATION_FINDINGS.get_or_init(build_correlation_findings)
}

#[allow(clippy::too_many_arguments)]
fn rec(
    day_of_month: u32,
    day: &str,
    total_hours: f64,
    mood: u32,
    sleep_hours: f64,
    sleep_quality: u32,
    anxiety_level: u32,
    focus_score: u32,
    stress_level: u32,
    physical_activity: u32,
    social_interaction: f64,
) -> DailyRecord {
    DailyRecord {
        date: NaiveDate::from_ymd_opt(2024, 1, day_of_month).expect("valid dataset date"),
        day: day.to_string(),
        total_hours,
        mood,
        sleep_hours,
        sleep_quality,
        anxiety_level,
        focus_score,
        stress_level,
        physical_activity,
        social_interaction,
    }
}

fn build_daily_records() -> Vec<DailyRecord> {
    vec![
        rec(1, "Mon", 8.5, 6, 7.2, 7, 4, 6, 5, 30, 3.0),
        rec(2, "Tue", 9.2, 5, 6.8, 6, 5, 5, 6, 20, 2.0),
        rec(3, "Wed", 7.8, 7, 8.1, 8, 3, 7, 4, 45, 4.0),
        rec(4, "Thu", 10.1, 4, 6.5, 5, 6, 4, 7, 15, 2.0),
        rec(5, "Fri", 11.3, 3, 6.0, 4, 7, 3, 8, 10, 1.0),
        rec(6, "Sat", 6.2, 8, 8.5, 9, 2, 8, 3, 60, 6.0),
        rec(7, "Sun", 5.8, 8, 8.3, 8, 2, 7, 3, 50, 5.0),
        rec(8, "Mon", 9.0, 5, 7.0, 6, 5, 5, 6, 25, 3.0),
        rec(9, "Tue", 8.7, 6, 7.3, 7, 4, 6, 5, 35, 4.0),
        rec(10, "Wed", 7.5, 7, 7.8, 8, 3, 7, 4, 40, 4.0),
        rec(11, "Thu", 10.5, 4, 6.2, 5, 6, 4, 7, 20, 2.0),
        rec(12, "Fri", 12.1, 3, 5.8, 4, 8, 3, 8, 5, 1.0),
        rec(13, "Sat", 5.5, 9, 9.0, 9, 1, 8, 2, 75, 7.0),
        rec(14, "Sun", 6.0, 8, 8.7, 8, 2, 7, 3, 55, 6.0),
        rec(15, "Mon", 8.8, 5, 7.1, 6, 5, 5, 6, 30, 3.0),
        rec(16, "Tue", 9.3, 5, 6.9, 6, 5, 5, 6, 25, 3.0),
        rec(17, "Wed", 7.2, 7, 8.0, 8, 3, 7, 4, 45, 5.0),
        rec(18, "Thu", 10.8, 4, 6.3, 5, 6, 4, 7, 15, 2.0),
        rec(19, "Fri", 11.7, 3, 5.9, 4, 7, 3, 8, 10, 1.0),
        rec(20, "Sat", 6.8, 8, 8.2, 8, 2, 7, 3, 65, 6.0),
        rec(21, "Sun", 5.2, 9, 8.8, 9, 1, 8, 2, 70, 7.0),
        rec(22, "Mon", 8.9, 6, 7.2, 7, 4, 6, 5, 30, 3.0),
        rec(23, "Tue", 9.1, 5, 7.0, 6, 5, 5, 6, 25, 3.0),
        rec(24, "Wed", 7.6, 7, 7.9, 8, 3, 7, 4, 40, 4.0),
        rec(25, "Thu", 10.3, 4, 6.4, 5, 6, 4, 7, 20, 2.0),
        rec(26, "Fri", 11.9, 3, 5.7, 4, 8, 3, 8, 8, 1.0),
        rec(27, "Sat", 6.5, 8, 8.4, 8, 2, 7, 3, 60, 6.0),
        rec(28, "Sun", 5.9, 8, 8.6, 8, 2, 7, 3, 55, 5.0),
        rec(29, "Mon", 8.6, 6, 7.3, 7, 4, 6, 5, 35, 4.0),
        rec(30, "Tue", 9.4, 5, 6.8, 6, 5, 5, 6, 20, 3.0),
    ]
}

fn app(
    name: &str,
    category: &str,
    hours: f64,
    sessions: u32,
    avg_session_length: f64,
    color: &str,
    mental_health_impact: MentalHealthImpact,
) -> AppUsageRecord {
    AppUsageRecord {
        name: name.to_string(),
        category: category.to_string(),
        hours,
        sessions,
        avg_session_length,
        color: color.to_string(),
        mental_health_impact,
    }
}

fn build_app_usage() -> Vec<AppUsageRecord> {
    use MentalHealthImpact::{Negative, Neutral, Positive};

    vec![
        app("Instagram", "Social Media", 2.8, 45, 3.7, "chart-1", Negative),
        app("TikTok", "Social Media", 2.1, 38, 3.3, "chart-1", Negative),
        app("Facebook", "Social Media", 1.3, 22, 3.5, "chart-1", Negative),
        app("Slack", "Work/Productivity", 3.2, 28, 6.9, "chart-2", Neutral),
        app("Notion", "Work/Productivity", 1.8, 15, 7.2, "chart-2", Positive),
        app("VS Code", "Work/Productivity", 2.5, 12, 12.5, "chart-2", Positive),
        app("Netflix", "Entertainment", 2.2, 8, 16.5, "chart-3", Neutral),
        app("YouTube", "Entertainment", 1.9, 25, 4.6, "chart-3", Neutral),
        app("Spotify", "Entertainment", 1.1, 18, 3.7, "chart-3", Positive),
        app("WhatsApp", "Communication", 1.2, 35, 2.1, "chart-4", Positive),
        app("Discord", "Communication", 0.8, 12, 4.0, "chart-4", Positive),
        app("Headspace", "Health & Wellness", 0.3, 7, 2.6, "chart-5", Positive),
        app("Calm", "Health & Wellness", 0.2, 5, 2.4, "chart-5", Positive),
        app("News Apps", "Information", 0.9, 20, 2.7, "destructive", Negative),
    ]
}

fn week(
    label: &str,
    screen_time: f64,
    mood: f64,
    anxiety: f64,
    sleep: f64,
    focus: f64,
    stress: f64,
    productivity: f64,
) -> WeeklyAggregate {
    WeeklyAggregate {
        week: label.to_string(),
        screen_time,
        mood,
        anxiety,
        sleep,
        focus,
        stress,
        productivity,
    }
}

fn build_weekly_trends() -> Vec<WeeklyAggregate> {
    vec![
        week("Week 1", 58.0, 5.2, 5.1, 7.0, 5.3, 5.8, 6.2),
        week("Week 2", 62.0, 4.8, 5.6, 6.7, 4.9, 6.2, 5.8),
        week("Week 3", 45.0, 6.8, 3.2, 8.1, 7.1, 3.8, 7.5),
        week("Week 4", 67.0, 4.2, 6.8, 6.2, 4.1, 7.1, 5.2),
        week("Week 5", 52.0, 5.9, 4.3, 7.4, 6.2, 4.9, 6.8),
        week("Week 6", 48.0, 6.5, 3.8, 7.8, 6.8, 4.2, 7.2),
        week("Week 7", 71.0, 3.9, 7.2, 5.9, 3.8, 7.8, 4.9),
        week("Week 8", 43.0, 7.1, 2.9, 8.3, 7.4, 3.5, 7.8),
    ]
}

fn hour(label: &str, usage: f64, mood: f64, alertness: f64) -> HourlyAggregate {
    HourlyAggregate {
        hour: label.to_string(),
        usage,
        mood,
        alertness,
    }
}

fn build_hourly_usage() -> Vec<HourlyAggregate> {
    vec![
        hour("6 AM", 0.2, 6.0, 4.0),
        hour("7 AM", 0.8, 6.0, 5.0),
        hour("8 AM", 1.2, 6.0, 6.0),
        hour("9 AM", 2.1, 6.0, 7.0),
        hour("10 AM", 2.8, 6.0, 8.0),
        hour("11 AM", 3.2, 6.0, 8.0),
        hour("12 PM", 2.9, 6.0, 7.0),
        hour("1 PM", 2.1, 6.0, 6.0),
        hour("2 PM", 3.5, 5.0, 6.0),
        hour("3 PM", 4.1, 5.0, 5.0),
        hour("4 PM", 3.8, 5.0, 5.0),
        hour("5 PM", 3.2, 5.0, 6.0),
        hour("6 PM", 2.8, 6.0, 6.0),
        hour("7 PM", 3.5, 6.0, 5.0),
        hour("8 PM", 4.2, 5.0, 4.0),
        hour("9 PM", 4.8, 5.0, 3.0),
        hour("10 PM", 3.9, 4.0, 3.0),
        hour("11 PM", 2.1, 4.0, 2.0),
    ]
}

fn finding(
    metric: &str,
    correlation: f64,
    significance: Significance,
    description: &str,
) -> CorrelationFinding {
    CorrelationFinding {
        metric: metric.to_string(),
        correlation,
        significance,
        description: description.to_string(),
    }
}

fn build_correlation_findings() -> Vec<CorrelationFinding> {
    use Significance::High;

    vec![
        finding(
            "Screen Time vs Mood",
            -0.78,
            High,
            "Strong negative correlation: Higher screen time associated with lower mood scores",
        ),
        finding(
            "Screen Time vs Sleep Quality",
            -0.72,
            High,
            "High screen time significantly impacts sleep quality",
        ),
        finding(
            "Screen Time vs Anxiety",
            0.81,
            High,
            "Strong positive correlation: More screen time linked to higher anxiety",
        ),
        finding(
            "Screen Time vs Focus",
            -0.69,
            High,
            "Extended screen time reduces focus and concentration ability",
        ),
        finding(
            "Social Media vs Anxiety",
            0.85,
            High,
            "Social media usage strongly correlates with increased anxiety levels",
        ),
        finding(
            "Physical Activity vs Mood",
            0.74,
            High,
            "More physical activity associated with better mood scores",
        ),
        finding(
            "Sleep Quality vs Focus",
            0.76,
            High,
            "Better sleep quality leads to improved focus and productivity",
        ),
        finding(
            "Evening Screen Time vs Sleep",
            -0.83,
            High,
            "Screen time after 9 PM severely impacts sleep quality",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_records_are_ordered_and_unique() {
        let records = daily_records();
        assert_eq!(records.len(), 30);
        for pair in records.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn daily_record_ranges_hold() {
        for record in daily_records() {
            assert!(record.total_hours >= 0.0);
            assert!((1..=10).contains(&record.mood));
            assert!((1..=10).contains(&record.sleep_quality));
            assert!((1..=10).contains(&record.anxiety_level));
            assert!((1..=10).contains(&record.focus_score));
            assert!((1..=10).contains(&record.stress_level));
            assert!(record.sleep_hours >= 0.0);
            assert!(record.social_interaction >= 0.0);
        }
    }

    #[test]
    fn table_sizes_match_dataset() {
        assert_eq!(app_usage().len(), 14);
        assert_eq!(weekly_trends().len(), 8);
        assert_eq!(hourly_usage().len(), 18);
        assert_eq!(correlation_findings().len(), 8);
    }

    #[test]
    fn correlation_coefficients_are_in_range() {
        for finding in correlation_findings() {
            assert!((-1.0..=1.0).contains(&finding.correlation), "{}", finding.metric);
        }
    }

    #[test]
    fn tables_return_the_same_instance() {
        // OnceLock guarantees one build per process
        assert!(std::ptr::eq(daily_records(), daily_records()));
        assert!(std::ptr::eq(app_usage(), app_usage()));
    }
}
