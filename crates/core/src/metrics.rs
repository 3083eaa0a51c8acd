//! Numeric highlight extraction.
//!
//! Picks out numbers such as `45%`, `12M` or `1500` together with the text
//! around them. Small bare numbers are treated as noise.

use crate::error::{Error, Result};
use crate::types::Metric;
use regex::Regex;
use std::sync::LazyLock;

/// Number, optional whitespace, optional single unit or currency symbol.
static METRIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+\.?[0-9]*)\s*([%$€£¥MKB]?)").unwrap());

/// Extracts the first few significant numbers from a document.
#[derive(Debug, Clone)]
pub struct MetricExtractor {
    /// Maximum number of metrics kept, in document order.
    max_metrics: usize,

    /// Characters of context kept on each side of a match.
    context_radius: usize,

    /// Bare numbers must be strictly greater than this to count.
    threshold: f64,
}

impl Default for MetricExtractor {
    fn default() -> Self {
        Self {
            max_metrics: 10,
            context_radius: 50,
            threshold: 10.0,
        }
    }
}

impl MetricExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_metrics(mut self, max: usize) -> Self {
        self.max_metrics = max;
        self
    }

    pub fn with_context_radius(mut self, radius: usize) -> Self {
        self.context_radius = radius;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Scan the whole text and keep the first accepted matches.
    pub fn extract(&self, content: &str) -> Result<Vec<Metric>> {
        let mut metrics = Vec::new();

        for caps in METRIC_REGEX.captures_iter(content) {
            let (Some(whole), Some(value)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let unit = caps.get(2).map_or("", |m| m.as_str());

            let number: f64 = value
                .as_str()
                .parse()
                .map_err(|_| Error::MalformedNumber(value.as_str().to_string()))?;

            if number > self.threshold || !unit.is_empty() {
                metrics.push(Metric {
                    value: value.as_str().to_string(),
                    unit: unit.to_string(),
                    context: context_window(content, whole.start(), whole.end(), self.context_radius)
                        .to_string(),
                });
            }
        }

        log::debug!("Found {} candidate metrics", metrics.len());
        metrics.truncate(self.max_metrics);
        Ok(metrics)
    }
}

/// Slice of `text` spanning `radius` characters either side of `start..end`.
fn context_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let lo = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(i, _)| i);
    let hi = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| end + i);
    &text[lo..hi]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(metrics: &[Metric]) -> Vec<(&str, &str)> {
        metrics
            .iter()
            .map(|m| (m.value.as_str(), m.unit.as_str()))
            .collect()
    }

    #[test]
    fn test_revenue_sentence() {
        let metrics = MetricExtractor::new()
            .extract("Revenue grew 45% to $12M this quarter, from 3 stores")
            .unwrap();

        assert_eq!(values(&metrics), vec![("45", "%"), ("12", "M")]);
    }

    #[test]
    fn test_bare_numbers_need_threshold() {
        let metrics = MetricExtractor::new()
            .extract("We have 3 offices, 10 teams and 11 products")
            .unwrap();

        assert_eq!(values(&metrics), vec![("11", "")]);
    }

    #[test]
    fn test_decimal_and_spaced_unit() {
        let metrics = MetricExtractor::new()
            .extract("Margin 2.5 % and 3.75B in bookings")
            .unwrap();

        assert_eq!(values(&metrics), vec![("2.5", "%"), ("3.75", "B")]);
    }

    #[test]
    fn test_currency_suffix() {
        let metrics = MetricExtractor::new().extract("priced at 5€ or 4£").unwrap();
        assert_eq!(values(&metrics), vec![("5", "€"), ("4", "£")]);
    }

    #[test]
    fn test_keeps_first_ten() {
        let text = (11..30).map(|n| n.to_string()).collect::<Vec<_>>().join(" ");
        let metrics = MetricExtractor::new().extract(&text).unwrap();

        assert_eq!(metrics.len(), 10);
        assert_eq!(metrics[0].value, "11");
        assert_eq!(metrics[9].value, "20");
    }

    #[test]
    fn test_custom_limits() {
        let metrics = MetricExtractor::new()
            .with_max_metrics(1)
            .with_threshold(100.0)
            .extract("50 then 150 then 250")
            .unwrap();

        assert_eq!(values(&metrics), vec![("150", "")]);
    }

    #[test]
    fn test_context_clipped_to_bounds() {
        let metrics = MetricExtractor::new().extract("Up 45% today").unwrap();
        assert_eq!(metrics[0].context, "Up 45% today");
    }

    #[test]
    fn test_context_radius_counts_chars() {
        let extractor = MetricExtractor::new().with_context_radius(3);
        let metrics = extractor.extract("ééééé 99 ééééé").unwrap();

        // match is "99 " (trailing whitespace consumed by the pattern)
        assert_eq!(metrics[0].context, "éé 99 ééé");
    }

    #[test]
    fn test_context_window_zero_radius() {
        assert_eq!(context_window("abc123def", 3, 6, 0), "123");
    }

    #[test]
    fn test_no_numbers() {
        assert!(MetricExtractor::new().extract("").unwrap().is_empty());
        assert!(MetricExtractor::new().extract("no digits here").unwrap().is_empty());
    }
}
