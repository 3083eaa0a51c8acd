//! Keyword-frequency style recommendation.

/// Style returned when no keyword from any style occurs in the document.
pub const DEFAULT_STYLE: &str = "corporate-professional";

/// A named style and the keywords that vote for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEntry {
    pub name: String,
    pub keywords: Vec<String>,
}

impl StyleEntry {
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Total occurrences of this entry's keywords in already-lowercased text.
    ///
    /// Substring counts, so "teams" scores for "team".
    fn score(&self, lowered: &str) -> usize {
        self.keywords
            .iter()
            .filter(|k| !k.is_empty())
            .map(|k| lowered.matches(k.as_str()).count())
            .sum()
    }
}

/// Ordered style/keyword table. Earlier entries win ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    entries: Vec<StyleEntry>,
    default_style: String,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new(
            vec![
                StyleEntry::new(
                    "tech-keynote",
                    &["product", "launch", "innovation", "demo", "revolutionary", "future", "transform"],
                ),
                StyleEntry::new(
                    "corporate-professional",
                    &["business", "strategy", "report", "proposal", "enterprise", "quarter", "results"],
                ),
                StyleEntry::new(
                    "creative-bold",
                    &["brand", "marketing", "campaign", "creative", "design", "experience", "engage"],
                ),
                StyleEntry::new(
                    "financial-elite",
                    &["investment", "financial", "investor", "portfolio", "capital", "returns", "valuation"],
                ),
                StyleEntry::new(
                    "startup-pitch",
                    &[
                        "startup", "funding", "traction", "growth", "market", "team", "vision",
                        "problem", "solution",
                    ],
                ),
            ],
            DEFAULT_STYLE,
        )
    }
}

impl StyleTable {
    /// Create a table from entries in tie-break order.
    pub fn new(entries: Vec<StyleEntry>, default_style: impl Into<String>) -> Self {
        Self {
            entries,
            default_style: default_style.into(),
        }
    }

    pub fn entries(&self) -> &[StyleEntry] {
        &self.entries
    }

    pub fn default_style(&self) -> &str {
        &self.default_style
    }

    /// Score every style against the document, in table order.
    pub fn scores(&self, content: &str) -> Vec<(&str, usize)> {
        let lowered = content.to_lowercase();
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.score(&lowered)))
            .collect()
    }

    /// Recommend the highest-scoring style, or the default when nothing scores.
    pub fn recommend(&self, content: &str) -> &str {
        let mut best: Option<(&str, usize)> = None;

        for (name, score) in self.scores(content) {
            log::trace!("Style {} scored {}", name, score);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((name, score));
            }
        }

        match best {
            Some((name, score)) if score > 0 => name,
            _ => self.default_style.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_nothing_matches() {
        let table = StyleTable::default();
        assert_eq!(table.recommend("Hello world, nothing to see."), DEFAULT_STYLE);
        assert_eq!(table.recommend(""), DEFAULT_STYLE);
    }

    #[test]
    fn test_highest_score_wins() {
        let table = StyleTable::default();
        let text = "Our investment portfolio delivers capital returns. The product is great.";
        assert_eq!(table.recommend(text), "financial-elite");
    }

    #[test]
    fn test_case_insensitive() {
        let table = StyleTable::default();
        assert_eq!(table.recommend("BRAND CAMPAIGN"), "creative-bold");
    }

    #[test]
    fn test_substring_matches_count() {
        let table = StyleTable::default();
        let scores = table.scores("teams marketplace");

        // "team" inside "teams", "market" inside "marketplace"
        assert_eq!(scores[4], ("startup-pitch", 2));
    }

    #[test]
    fn test_tie_goes_to_earlier_entry() {
        let table = StyleTable::default();
        // one tech keyword, one startup keyword
        assert_eq!(table.recommend("demo for the team"), "tech-keynote");
        // one corporate keyword, one creative keyword
        assert_eq!(table.recommend("design strategy"), "corporate-professional");
    }

    #[test]
    fn test_custom_table() {
        let table = StyleTable::new(
            vec![
                StyleEntry::new("calm", &["Quiet"]),
                StyleEntry::new("loud", &["noise"]),
            ],
            "neutral",
        );

        assert_eq!(table.recommend("noise noise quiet"), "loud");
        assert_eq!(table.recommend("QUIET"), "calm");
        assert_eq!(table.recommend("nothing"), "neutral");
    }
}
