use crate::foundation::GatewayError;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Retry an async operation with fixed delay/backoff.
///
/// Only for side-effect-free calls (simulate, query). Submissions must never
/// pass through here: a retried submit risks a duplicate write.
pub async fn retry<F, Fut, T>(mut attempts: usize, delay: Duration, mut op: F) -> Result<T, GatewayError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GatewayError>>,
{
    let mut last_err = None;
    while attempts > 0 {
        match op().await {
            Ok(v) => return Ok(v),
            Err(err) => {
                last_err = Some(err);
                attempts -= 1;
                if attempts > 0 {
                    sleep(delay).await;
                }
            }
        }
    }
    Err(last_err.unwrap_or_else(|| GatewayError::Message("retry exhausted".to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn returns_first_success() {
        let calls = AtomicUsize::new(0);
        let result = retry(3, Duration::from_millis(1), || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Err(GatewayError::Message("transient".to_string()))
                } else {
                    Ok(n)
                }
            }
        })
        .await;
        assert_eq!(result.expect("second attempt"), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn surfaces_last_error_when_exhausted() {
        let result: Result<(), _> =
            retry(2, Duration::from_millis(1), || async { Err(GatewayError::Message("down".to_string())) }).await;
        assert!(result.expect_err("exhausted").to_string().contains("down"));
    }
}
