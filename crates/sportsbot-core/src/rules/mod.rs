//! Rule-based responder: sport detection → intent classification → template.
//!
//! Everything here is pure and deterministic. No LLM tokens are spent and the
//! same query always produces the same text.

pub mod intent;
pub mod sport;
pub mod templates;

use tracing::debug;

pub use intent::{classify, Intent};
pub use sport::{detect_sport, Sport};
pub use templates::respond;

/// The detected (intent, sport) pair for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub intent: Intent,
    pub sport: Option<Sport>,
}

impl Classification {
    pub fn of(query: &str) -> Self {
        Self {
            intent: classify(query),
            sport: detect_sport(query),
        }
    }
}

/// Run the full pipeline on a query.
pub fn answer(query: &str) -> String {
    let c = Classification::of(query.trim());
    debug!(
        intent = c.intent.as_str(),
        sport = c.sport.map(|s| s.as_str()).unwrap_or("none"),
        "Rule-based classification"
    );
    respond(c.intent, c.sport)
}
