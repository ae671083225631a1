use crate::domain::model::ReadOutcome;
use async_trait::async_trait;

/// Port for anything that can serve rows for a range key ("Sheet!A:B").
///
/// Implementations absorb their own failures: they return fallback rows with
/// `DataOrigin::Fallback` rather than erroring, so callers never branch on
/// failure.
#[async_trait]
pub trait RangeSource: Send + Sync {
    async fn read_range(&self, range: &str) -> ReadOutcome;
}
