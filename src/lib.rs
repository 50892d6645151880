// Module declarations
pub mod modules;

pub use modules::assistant::{respond, ChatMessage, Role, Transcript};
pub use modules::dataset::{
    app_usage, correlation_findings, daily_records, hourly_usage, weekly_trends, AppUsageRecord,
    CorrelationFinding, DailyRecord, HourlyAggregate, MentalHealthImpact, Significance,
    WeeklyAggregate,
};
pub use modules::import_export::{
    begin_export, begin_import, ExportFormat, ExportReceipt, ImportSummary,
};
pub use modules::insights::{live_report, live_report_now, LiveReport};
pub use modules::metrics_calc::{
    aggregate_by_category, mood_trend, pearson_correlation, weekly_average, CategoryUsage,
    MoodTrend,
};
pub use modules::overview::{build_overview, DashboardOverview, WellnessSnapshot};
pub use modules::task_timer::{schedule, DelayedTask, TaskState};
