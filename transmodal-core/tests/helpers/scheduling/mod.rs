use crate::helpers::create_test_logger;
use crate::models::common::Duration;
use crate::scheduling::{DEFAULT_TIME_THRESHOLD, PackageScheduler};

/// Creates a scheduler with the default threshold and a silent logger.
pub fn create_test_scheduler() -> PackageScheduler {
    create_test_scheduler_with_threshold(DEFAULT_TIME_THRESHOLD)
}

/// Creates a scheduler with a custom threshold and a silent logger.
pub fn create_test_scheduler_with_threshold(time_threshold: Duration) -> PackageScheduler {
    PackageScheduler::with_logger(time_threshold, create_test_logger())
}
