//! Intent classifier: keyword-based, first match wins.
//!
//! Each intent has its own predicate. Predicates overlap (a query can mention
//! both "rules" and "stats"), so the evaluation order in [`classify`] decides
//! the result and must not be reshuffled.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// What the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Rules,
    Summary,
    Stats,
    Commentary,
    NewsOrPrediction,
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Rules => "rules",
            Intent::Summary => "summary",
            Intent::Stats => "stats",
            Intent::Commentary => "commentary",
            Intent::NewsOrPrediction => "news_or_prediction",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const RULES_KEYWORDS: &[&str] = &[
    "rules", "how to play", "format", "formats", "scoring", "points system",
];

const SUMMARY_KEYWORDS: &[&str] = &[
    "summary", "recap", "what happened", "match report", "breakdown",
];

const STATS_KEYWORDS: &[&str] = &[
    "stats", "statistics", "numbers", "record", "averages", "efficiency",
];

const COMMENTARY_KEYWORDS: &[&str] = &[
    "commentary", "play-by-play", "live text", "radio style",
];

const NEWS_KEYWORDS: &[&str] = &[
    "news", "headline", "brief", "prediction", "preview", "outlook",
];

static HOW_DOES_IT_WORK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"how\s+does\s+.*\s+work").expect("valid regex"));

/// Precedence order. The first predicate that holds picks the intent.
const PREDICATES: &[(Intent, fn(&str) -> bool)] = &[
    (Intent::Rules, is_rules),
    (Intent::Summary, is_summary),
    (Intent::Stats, is_stats),
    (Intent::Commentary, is_commentary),
    (Intent::NewsOrPrediction, is_news_or_prediction),
];

/// Classify a query, falling back to [`Intent::General`].
pub fn classify(text: &str) -> Intent {
    let lower = text.to_lowercase();
    PREDICATES
        .iter()
        .find(|(_, holds)| holds(lower.as_str()))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::General)
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

fn is_rules(t: &str) -> bool {
    contains_any(t, RULES_KEYWORDS) || HOW_DOES_IT_WORK.is_match(t)
}

fn is_summary(t: &str) -> bool {
    contains_any(t, SUMMARY_KEYWORDS) || t.contains("vs") || t.contains("v.")
}

fn is_stats(t: &str) -> bool {
    contains_any(t, STATS_KEYWORDS) || (t.contains("compare") && t.contains("player"))
}

fn is_commentary(t: &str) -> bool {
    contains_any(t, COMMENTARY_KEYWORDS) || (t.contains("call the") && t.contains("play"))
}

fn is_news_or_prediction(t: &str) -> bool {
    contains_any(t, NEWS_KEYWORDS) || t.contains("who will win")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules() {
        assert_eq!(classify("What are the rules of cricket?"), Intent::Rules);
        assert_eq!(classify("How does the offside trap work?"), Intent::Rules);
        assert_eq!(classify("Explain the tennis scoring"), Intent::Rules);
    }

    #[test]
    fn test_summary() {
        assert_eq!(classify("Man United vs Liverpool"), Intent::Summary);
        assert_eq!(classify("India v. Australia"), Intent::Summary);
        assert_eq!(classify("Give me a recap of last night"), Intent::Summary);
    }

    #[test]
    fn test_stats() {
        assert_eq!(classify("compare player stats for LeBron and Jordan"), Intent::Stats);
        assert_eq!(classify("compare this player with Kohli"), Intent::Stats);
        assert_eq!(classify("career averages of Kohli"), Intent::Stats);
    }

    #[test]
    fn test_commentary() {
        assert_eq!(classify("Give me some commentary"), Intent::Commentary);
        assert_eq!(classify("call the last play like a broadcaster"), Intent::Commentary);
    }

    #[test]
    fn test_news_or_prediction() {
        assert_eq!(classify("Latest headline from the league"), Intent::NewsOrPrediction);
        assert_eq!(classify("Who will win the final?"), Intent::NewsOrPrediction);
    }

    #[test]
    fn test_general() {
        assert_eq!(classify("tell me a joke"), Intent::General);
        assert_eq!(classify(""), Intent::General);
    }

    #[test]
    fn test_rules_beats_stats() {
        assert_eq!(classify("rules and stats"), Intent::Rules);
        assert_eq!(classify("compare the rules and stats of both teams"), Intent::Rules);
    }

    #[test]
    fn test_summary_beats_news() {
        assert_eq!(classify("preview of Spain vs Italy"), Intent::Summary);
    }
}
