//! Line-by-line grouping of markdown into slides.
//!
//! Each non-blank line is classified by the first pattern it matches, in this
//! order: `#`, `##`, `###`, bullet, quote, image, `===` break. Anything else is
//! ignored. Headings, quotes and images always start a new slide; bullets
//! extend the open slide when it already carries a bullet list.

use crate::types::Slide;
use regex::Regex;
use std::sync::LazyLock;

static TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s+[^#]").unwrap());

static SECTION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^##\s+[^#]").unwrap());

static KEY_MESSAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^###\s+").unwrap());

static BULLET_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[*\-]\s+").unwrap());

static QUOTE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>\s+").unwrap());

/// Lazy `.*?` so several images on one line are captured separately.
static IMAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\((.+?)\)").unwrap());

static BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^===+$").unwrap());

/// What a single trimmed line means to the mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind<'a> {
    Title(&'a str),
    Section(&'a str),
    KeyMessage(&'a str),
    Bullet(&'a str),
    Quote(&'a str),
    Images(Vec<&'a str>),
    Break,
    Other,
}

/// Text after a leading marker match.
fn after<'a>(regex: &Regex, line: &'a str) -> &'a str {
    regex.find(line).map_or(line, |m| &line[m.end()..])
}

/// Text after a heading marker. The heading patterns also consume the first
/// title character, so strip only the marker and its whitespace here.
fn heading_text(line: &str, hashes: usize) -> &str {
    line[hashes..].trim_start()
}

fn classify(line: &str) -> LineKind<'_> {
    if TITLE_REGEX.is_match(line) {
        LineKind::Title(heading_text(line, 1))
    } else if SECTION_REGEX.is_match(line) {
        LineKind::Section(heading_text(line, 2))
    } else if KEY_MESSAGE_REGEX.is_match(line) {
        LineKind::KeyMessage(after(&KEY_MESSAGE_REGEX, line))
    } else if BULLET_REGEX.is_match(line) {
        LineKind::Bullet(after(&BULLET_REGEX, line))
    } else if QUOTE_REGEX.is_match(line) {
        LineKind::Quote(after(&QUOTE_REGEX, line))
    } else if IMAGE_REGEX.is_match(line) {
        let images = IMAGE_REGEX
            .captures_iter(line)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect();
        LineKind::Images(images)
    } else if BREAK_REGEX.is_match(line) {
        LineKind::Break
    } else {
        LineKind::Other
    }
}

/// Accumulator threaded through the mapping loop.
#[derive(Debug, Default)]
struct MapState {
    slides: Vec<Slide>,
    current: Option<Slide>,
}

impl MapState {
    fn flush(&mut self) {
        if let Some(slide) = self.current.take() {
            self.slides.push(slide);
        }
    }

    fn open(&mut self, slide: Slide) {
        self.flush();
        self.current = Some(slide);
    }

    fn apply(&mut self, kind: LineKind<'_>, line_number: usize) {
        match kind {
            LineKind::Title(text) => self.open(Slide::title(text, line_number)),
            LineKind::Section(text) => self.open(Slide::section(text, line_number)),
            LineKind::KeyMessage(text) => self.open(Slide::key_message(text, line_number)),
            LineKind::Bullet(text) => {
                let appended = self
                    .current
                    .as_mut()
                    .is_some_and(|slide| slide.push_bullet(text));
                if !appended {
                    self.open(Slide::bullets(text, line_number));
                }
            }
            LineKind::Quote(text) => self.open(Slide::quote(text, line_number)),
            LineKind::Images(images) => {
                let images = images.into_iter().map(str::to_string).collect();
                self.open(Slide::images(images, line_number));
            }
            LineKind::Break => self.flush(),
            LineKind::Other => {}
        }
    }

    fn finish(mut self) -> Vec<Slide> {
        self.flush();
        self.slides
    }
}

/// Groups markdown lines into slide records.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlideMapper;

impl SlideMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map a whole document to slides, in source order.
    pub fn map(&self, content: &str) -> Vec<Slide> {
        let mut state = MapState::default();

        for (idx, raw) in content.split('\n').enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let kind = classify(line);
            log::trace!("Line {}: {:?}", idx + 1, kind);
            state.apply(kind, idx + 1);
        }

        let slides = state.finish();
        log::debug!("Mapped {} slides", slides.len());
        slides
    }
}
