//! Sport detector: keyword containment, first sport in declaration order wins.

use std::fmt;

/// The sports the rule-based responder has templates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sport {
    Cricket,
    Football,
    Basketball,
    Tennis,
}

impl Sport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Cricket => "cricket",
            Sport::Football => "football",
            Sport::Basketball => "basketball",
            Sport::Tennis => "tennis",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const CRICKET_KEYWORDS: &[&str] = &[
    "cricket", "odi", "test", "t20", "ipl", "runs", "wickets",
];

const FOOTBALL_KEYWORDS: &[&str] = &[
    "football", "soccer", "goal", "premier league", "la liga", "world cup",
    "man united", "manchester", "liverpool", "arsenal", "chelsea",
    "barcelona", "real madrid",
];

const BASKETBALL_KEYWORDS: &[&str] = &[
    "basketball", "nba", "points", "rebounds", "assists", "three-pointer",
    "lebron", "jordan", "lakers", "celtics", "warriors",
];

const TENNIS_KEYWORDS: &[&str] = &[
    "tennis", "grand slam", "set", "game", "ace", "break",
];

/// Detection order. Earlier entries win when several sports match.
const SPORT_KEYWORDS: &[(Sport, &[&str])] = &[
    (Sport::Cricket, CRICKET_KEYWORDS),
    (Sport::Football, FOOTBALL_KEYWORDS),
    (Sport::Basketball, BASKETBALL_KEYWORDS),
    (Sport::Tennis, TENNIS_KEYWORDS),
];

/// Map free text to the first sport whose keywords occur in it.
///
/// Matching is plain substring containment on the lower-cased text, so short
/// keywords like `set` or `odi` also fire inside longer words.
pub fn detect_sport(text: &str) -> Option<Sport> {
    let lower = text.to_lowercase();
    SPORT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(sport, _)| *sport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_each_sport() {
        assert_eq!(detect_sport("Who leads the IPL table?"), Some(Sport::Cricket));
        assert_eq!(detect_sport("Best soccer leagues"), Some(Sport::Football));
        assert_eq!(detect_sport("NBA finals"), Some(Sport::Basketball));
        assert_eq!(detect_sport("Wimbledon is a grand slam"), Some(Sport::Tennis));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(detect_sport("CRICKET"), Some(Sport::Cricket));
        assert_eq!(detect_sport("Man United vs Liverpool"), Some(Sport::Football));
        assert_eq!(detect_sport("LeBron or Jordan?"), Some(Sport::Basketball));
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        // Mentions tennis first in the text, but cricket is declared first.
        assert_eq!(detect_sport("tennis or cricket?"), Some(Sport::Cricket));
        assert_eq!(detect_sport("basketball and football"), Some(Sport::Football));
        assert_eq!(detect_sport("tennis and nba"), Some(Sport::Basketball));
    }

    #[test]
    fn test_substring_matches_inside_words() {
        // "odi" inside "melodic" is enough.
        assert_eq!(detect_sport("a melodic chant"), Some(Sport::Cricket));
    }

    #[test]
    fn test_no_sport() {
        assert_eq!(detect_sport("tell me a joke"), None);
        assert_eq!(detect_sport(""), None);
    }
}
