use chrono::Utc;
use std::convert::Infallible;
use std::time::Duration;

use kv_memo_axum::Producer;

/// Stand-in for a relational query that takes a long time to answer.
///
/// It waits `delay` and returns the current time as an HTTP date, so a cached
/// answer is easy to tell apart from a fresh one.
pub(crate) struct SlowQuery {
    delay: Duration,
}

impl SlowQuery {
    pub(crate) fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Producer<()> for SlowQuery {
    type Error = Infallible;

    async fn produce(&self, _args: ()) -> Result<String, Infallible> {
        tracing::info!("Running slow query, this takes {:?}", self.delay);
        tokio::time::sleep(self.delay).await;
        Ok(http_date_now())
    }
}

fn http_date_now() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
