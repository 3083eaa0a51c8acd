//! Slide composition statistics.

use crate::error::Result;
use crate::types::{Slide, SlideKind, Statistics};

/// Tally slide kinds and derive composition flags.
///
/// `has_metrics` is true when the JSON rendering of any slide contains the
/// text "metrics". Every key message slide qualifies through its
/// `key_metrics_dashboard` template, as does any slide whose text mentions
/// metrics.
pub fn calculate_stats(slides: &[Slide]) -> Result<Statistics> {
    let mut stats = Statistics::default();

    for slide in slides {
        *stats
            .slide_types
            .entry(slide.kind.as_str().to_string())
            .or_insert(0) += 1;

        match slide.kind {
            SlideKind::Image => stats.has_images = true,
            SlideKind::Quote => stats.has_quotes = true,
            _ => {}
        }

        if !stats.has_metrics && serde_json::to_string(slide)?.contains("metrics") {
            stats.has_metrics = true;
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let stats = calculate_stats(&[]).unwrap();
        assert_eq!(stats, Statistics::default());
        assert!(stats.slide_types.is_empty());
    }

    #[test]
    fn test_counts_and_flags() {
        let slides = vec![
            Slide::title("Deck", 1),
            Slide::bullets("a", 2),
            Slide::bullets("b", 4),
            Slide::quote("Be bold", 6),
            Slide::images(vec!["x.png".to_string()], 7),
        ];
        let stats = calculate_stats(&slides).unwrap();

        assert_eq!(stats.slide_types["title_slide"], 1);
        assert_eq!(stats.slide_types["bullets"], 2);
        assert_eq!(stats.slide_types["quote"], 1);
        assert_eq!(stats.slide_types["image"], 1);
        assert_eq!(stats.slide_types.len(), 4);
        assert!(stats.has_images);
        assert!(stats.has_quotes);
        assert!(!stats.has_metrics);
    }

    #[test]
    fn test_key_message_template_signals_metrics() {
        let stats = calculate_stats(&[Slide::key_message("Why", 1)]).unwrap();
        assert!(stats.has_metrics);
    }

    #[test]
    fn test_metrics_text_signals_metrics() {
        let stats = calculate_stats(&[Slide::section("Our metrics", 1)]).unwrap();
        assert!(stats.has_metrics);

        let stats = calculate_stats(&[Slide::section("Our Metrics", 1)]).unwrap();
        assert!(!stats.has_metrics);
    }
}
