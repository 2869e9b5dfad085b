use crate::shared::config::SUBMIT_DELAY_MS;
use contracts::shared::SubmissionResult;
use gloo_timers::future::TimeoutFuture;

/// Submit a new equipment listing.
///
/// There is no backend yet: waits for the simulated latency and succeeds
/// without sending anything.
pub async fn submit_equipment() -> SubmissionResult<()> {
    TimeoutFuture::new(SUBMIT_DELAY_MS).await;
    Ok(())
}
