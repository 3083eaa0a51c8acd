//! Domain types for representing a slide plan.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key/value pairs from a document's leading `---` block.
pub type FrontMatter = BTreeMap<String, String>;

/// The kind of slide a group of markdown lines maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideKind {
    /// `# Heading`
    TitleSlide,
    /// `## Heading`
    Section,
    /// `### Heading`, may collect bullets.
    KeyMessage,
    /// A run of `-` or `*` items.
    Bullets,
    /// `> quoted text`
    Quote,
    /// One or more `![alt](url)` references.
    Image,
}

impl SlideKind {
    /// The tag used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TitleSlide => "title_slide",
            Self::Section => "section",
            Self::KeyMessage => "key_message",
            Self::Bullets => "bullets",
            Self::Quote => "quote",
            Self::Image => "image",
        }
    }
}

/// Presentation template a slide should be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideTemplate {
    TitleSlide,
    ChapterIntro,
    KeyMetricsDashboard,
    TwoColumnText,
    QuoteTestimonial,
    FullImageSlide,
}

/// Payload of a slide. Which fields are present depends on the slide kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

/// A single planned slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    #[serde(rename = "type")]
    pub kind: SlideKind,

    pub template: SlideTemplate,

    pub content: SlideContent,

    /// 1-based source line where the slide began.
    pub line_number: usize,
}

impl Slide {
    /// Title slide from a `#` heading.
    pub fn title(title: impl Into<String>, line_number: usize) -> Self {
        Self {
            kind: SlideKind::TitleSlide,
            template: SlideTemplate::TitleSlide,
            content: SlideContent {
                title: Some(title.into()),
                ..Default::default()
            },
            line_number,
        }
    }

    /// Section slide from a `##` heading.
    pub fn section(title: impl Into<String>, line_number: usize) -> Self {
        Self {
            kind: SlideKind::Section,
            template: SlideTemplate::ChapterIntro,
            content: SlideContent {
                title: Some(title.into()),
                ..Default::default()
            },
            line_number,
        }
    }

    /// Key message slide from a `###` heading, with an empty bullet list.
    pub fn key_message(title: impl Into<String>, line_number: usize) -> Self {
        Self {
            kind: SlideKind::KeyMessage,
            template: SlideTemplate::KeyMetricsDashboard,
            content: SlideContent {
                title: Some(title.into()),
                bullets: Some(Vec::new()),
                ..Default::default()
            },
            line_number,
        }
    }

    /// Bullet slide opened by its first item.
    pub fn bullets(first: impl Into<String>, line_number: usize) -> Self {
        Self {
            kind: SlideKind::Bullets,
            template: SlideTemplate::TwoColumnText,
            content: SlideContent {
                bullets: Some(vec![first.into()]),
                ..Default::default()
            },
            line_number,
        }
    }

    pub fn quote(quote: impl Into<String>, line_number: usize) -> Self {
        Self {
            kind: SlideKind::Quote,
            template: SlideTemplate::QuoteTestimonial,
            content: SlideContent {
                quote: Some(quote.into()),
                ..Default::default()
            },
            line_number,
        }
    }

    /// Image slide. A single image gets the full-bleed template.
    pub fn images(images: Vec<String>, line_number: usize) -> Self {
        let template = if images.len() == 1 {
            SlideTemplate::FullImageSlide
        } else {
            SlideTemplate::TwoColumnText
        };

        Self {
            kind: SlideKind::Image,
            template,
            content: SlideContent {
                images: Some(images),
                ..Default::default()
            },
            line_number,
        }
    }

    /// Append a bullet if this slide collects bullets.
    ///
    /// Returns `false` (and leaves the slide untouched) when it does not.
    pub fn push_bullet(&mut self, text: impl Into<String>) -> bool {
        match self.content.bullets.as_mut() {
            Some(bullets) => {
                bullets.push(text.into());
                true
            }
            None => false,
        }
    }
}

/// A numeric highlight found in the document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// The number as written, without reformatting.
    pub value: String,

    /// Unit or currency symbol following the number, or empty.
    pub unit: String,

    /// Surrounding text, clipped to document bounds.
    pub context: String,
}

/// Composition statistics over a slide sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub slide_types: BTreeMap<String, usize>,
    pub has_images: bool,
    pub has_metrics: bool,
    pub has_quotes: bool,
}

/// Complete output of a document analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub recommended_style: String,
    pub frontmatter: FrontMatter,
    pub total_slides: usize,
    pub slide_structure: Vec<Slide>,
    pub key_metrics: Vec<Metric>,
    pub statistics: Statistics,
    /// Minutes, at one slide per minute.
    pub estimated_duration: usize,
}

impl AnalysisResult {
    /// Render as pretty-printed JSON (2-space indentation).
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as single-line JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_serializes_type_and_template_tags() {
        let slide = Slide::key_message("Results", 3);
        let json = serde_json::to_string(&slide).unwrap();

        assert_eq!(
            json,
            r#"{"type":"key_message","template":"key_metrics_dashboard","content":{"title":"Results","bullets":[]},"line_number":3}"#
        );
    }

    #[test]
    fn test_kind_as_str_matches_serde_tag() {
        for kind in [
            SlideKind::TitleSlide,
            SlideKind::Section,
            SlideKind::KeyMessage,
            SlideKind::Bullets,
            SlideKind::Quote,
            SlideKind::Image,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_image_template_depends_on_count() {
        let one = Slide::images(vec!["a.png".to_string()], 1);
        assert_eq!(one.template, SlideTemplate::FullImageSlide);

        let two = Slide::images(vec!["a.png".to_string(), "b.png".to_string()], 1);
        assert_eq!(two.template, SlideTemplate::TwoColumnText);
    }

    #[test]
    fn test_push_bullet_only_on_bullet_slides() {
        let mut quote = Slide::quote("Stay hungry", 1);
        assert!(!quote.push_bullet("nope"));
        assert_eq!(quote.content.bullets, None);

        let mut list = Slide::bullets("a", 1);
        assert!(list.push_bullet("b"));
        assert_eq!(
            list.content.bullets,
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }
}
