//! Core content analysis for turning markdown documents into slide plans:
//! front matter, style recommendation, slide mapping, and metric extraction.

pub mod analyzer;
pub mod error;
pub mod frontmatter;
pub mod mapper;
pub mod metrics;
pub mod stats;
pub mod style;
pub mod types;

pub use analyzer::{load_document, ContentAnalyzer};
pub use error::{Error, Result};
pub use frontmatter::extract_frontmatter;
pub use mapper::SlideMapper;
pub use metrics::MetricExtractor;
pub use stats::calculate_stats;
pub use style::{StyleEntry, StyleTable, DEFAULT_STYLE};
pub use types::{
    AnalysisResult, FrontMatter, Metric, Slide, SlideContent, SlideKind, SlideTemplate, Statistics,
};
