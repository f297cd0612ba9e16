//! Text-oracle capability.
//!
//! The oracle is an optional, fallible text-completion service. The engine
//! holds it as `Option<Arc<dyn TextOracle>>`; absence is a normal
//! configuration, and every call site pairs the oracle with a local
//! fallback.

pub mod deadline;
pub mod gemini;
pub mod prompts;

pub use deadline::DeadlineOracle;
pub use gemini::GeminiOracle;

use tracing::{debug, warn};

use crate::error::OracleResult;

/// A service that completes a text prompt.
pub trait TextOracle: Send + Sync {
    /// Send `prompt` and return the raw reply text.
    fn complete(&self, prompt: &str) -> OracleResult<String>;
}

/// Call the oracle and log the outcome under `purpose`.
pub(crate) fn consult(
    oracle: &dyn TextOracle,
    purpose: &'static str,
    prompt: &str,
) -> OracleResult<String> {
    match oracle.complete(prompt) {
        Ok(reply) => {
            debug!(purpose, reply = %reply.trim(), "oracle replied");
            Ok(reply)
        }
        Err(e) => {
            warn!(purpose, error = %e, "oracle call failed, using fallback");
            Err(e)
        }
    }
}
