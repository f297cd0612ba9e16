pub mod play;
pub mod scores;
pub mod status;
pub mod topic;
pub mod validate;
pub mod word;

use sr_core::Topic;

/// Normalize a topic given on the command line.
fn parse_topic(raw: &str) -> Result<Topic, String> {
    Topic::new(raw).map_err(|e| e.to_string())
}
