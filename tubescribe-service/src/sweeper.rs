//! Background removal of expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use tubescribe_cache::TranscriptCache;

/// Spawns a task that calls [`TranscriptCache::cleanup_expired`] every `every`.
///
/// The first sweep runs immediately. The task runs until the returned handle
/// is aborted or the runtime shuts down.
///
/// # Panics
///
/// Panics if `every` is zero.
pub fn spawn_expiry_sweeper<P>(cache: Arc<TranscriptCache<P>>, every: Duration) -> JoinHandle<()>
where
    P: Clone + Send + 'static,
{
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(interval_secs = every.as_secs_f64(), "Starting cache expiry sweeper");

    tokio::spawn(async move {
        loop {
            ticker.tick().await;

            let removed = cache.cleanup_expired();
            if removed > 0 {
                info!(removed, remaining = cache.size(), "Swept expired transcripts");
            } else {
                debug!("Sweep found no expired transcripts");
            }
        }
    })
}
