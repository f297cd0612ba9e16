//! Deadline boundary around an arbitrary oracle.

use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use super::TextOracle;
use crate::error::{OracleError, OracleResult};

/// Runs each call of the wrapped oracle on a worker thread and gives up after
/// `timeout`.
///
/// A call that outlives its deadline keeps running on its worker until the
/// inner oracle returns; its reply is then dropped.
pub struct DeadlineOracle {
    inner: Arc<dyn TextOracle>,
    timeout: Duration,
}

impl DeadlineOracle {
    /// Wrap `inner` so no call blocks longer than `timeout`.
    pub fn new(inner: Arc<dyn TextOracle>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    /// The configured deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl TextOracle for DeadlineOracle {
    fn complete(&self, prompt: &str) -> OracleResult<String> {
        let (tx, rx) = mpsc::channel();
        let inner = Arc::clone(&self.inner);
        let prompt = prompt.to_owned();

        thread::Builder::new()
            .name("oracle-call".to_string())
            .spawn(move || {
                // The receiver is gone once the deadline passed.
                let _ = tx.send(inner.complete(&prompt));
            })
            .map_err(|e| OracleError::Transport(e.to_string()))?;

        match rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(OracleError::Timeout(self.timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(OracleError::Aborted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    struct Slow(Duration);

    impl TextOracle for Slow {
        fn complete(&self, _prompt: &str) -> OracleResult<String> {
            thread::sleep(self.0);
            Ok("late".to_string())
        }
    }

    struct Echo;

    impl TextOracle for Echo {
        fn complete(&self, prompt: &str) -> OracleResult<String> {
            Ok(prompt.to_uppercase())
        }
    }

    struct Panics;

    impl TextOracle for Panics {
        fn complete(&self, _prompt: &str) -> OracleResult<String> {
            panic!("client library blew up");
        }
    }

    #[test]
    fn passes_fast_replies_through() {
        let o = DeadlineOracle::new(Arc::new(Echo), Duration::from_secs(5));
        assert_eq!(o.complete("hi").unwrap(), "HI");
    }

    #[test]
    fn stalled_call_times_out() {
        let o = DeadlineOracle::new(
            Arc::new(Slow(Duration::from_secs(5))),
            Duration::from_millis(50),
        );
        let start = Instant::now();
        let err = o.complete("anything").unwrap_err();
        assert!(matches!(err, OracleError::Timeout(_)));
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn panicking_oracle_is_contained() {
        let o = DeadlineOracle::new(Arc::new(Panics), Duration::from_secs(5));
        assert!(matches!(o.complete("x"), Err(OracleError::Aborted)));
    }
}
