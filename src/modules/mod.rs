// Module declarations
pub mod assistant;
pub mod dataset;
pub mod import_export;
pub mod insights;
pub mod metrics_calc;
pub mod overview;
pub mod task_timer;
