//! Whole-document analysis.

use crate::error::{Error, Result};
use crate::frontmatter::extract_frontmatter;
use crate::mapper::SlideMapper;
use crate::metrics::MetricExtractor;
use crate::stats::calculate_stats;
use crate::style::StyleTable;
use crate::types::AnalysisResult;
use std::path::Path;

/// Front matter key that pins the style and skips recommendation.
const STYLE_KEY: &str = "style";

/// Read a UTF-8 document from disk.
pub fn load_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::InputNotFound(path.to_path_buf()),
        _ => Error::IoError(e),
    })
}

/// Turns markdown text into an [`AnalysisResult`].
#[derive(Debug, Clone, Default)]
pub struct ContentAnalyzer {
    styles: StyleTable,
    mapper: SlideMapper,
    metrics: MetricExtractor,
}

impl ContentAnalyzer {
    /// Create an analyzer with the built-in style table and metric limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style_table(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_metric_extractor(mut self, metrics: MetricExtractor) -> Self {
        self.metrics = metrics;
        self
    }

    /// Analyze a document already in memory.
    pub fn analyze(&self, content: &str) -> Result<AnalysisResult> {
        let frontmatter = extract_frontmatter(content);

        let recommended_style = match frontmatter.get(STYLE_KEY) {
            Some(style) if !style.is_empty() => {
                log::debug!("Style pinned by front matter: {}", style);
                style.clone()
            }
            _ => self.styles.recommend(content).to_string(),
        };

        let slides = self.mapper.map(content);
        let key_metrics = self.metrics.extract(content)?;
        let statistics = calculate_stats(&slides)?;

        log::debug!(
            "Analysis complete: style={}, slides={}, metrics={}",
            recommended_style,
            slides.len(),
            key_metrics.len()
        );

        Ok(AnalysisResult {
            recommended_style,
            frontmatter,
            total_slides: slides.len(),
            estimated_duration: slides.len(),
            slide_structure: slides,
            key_metrics,
            statistics,
        })
    }

    /// Load and analyze a document from disk.
    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisResult> {
        log::debug!("Reading {}", path.display());
        let content = load_document(path)?;
        self.analyze(&content)
    }
}
