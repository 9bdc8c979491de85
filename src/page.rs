use crate::settings::{Settings, HEADER_LINES};
use crate::units::Px;
use serde::{Deserialize, Serialize};

/// One row of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Line {
    /// A wrapped fragment of a paragraph. Never empty.
    Text(String),
    /// The gap between two paragraphs
    Blank,
}

impl Line {
    /// The line's text, or `None` for a paragraph gap
    pub fn text(&self) -> Option<&str> {
        match self {
            Line::Text(text) => Some(text),
            Line::Blank => None,
        }
    }

    /// The line's text, with paragraph gaps as the empty string
    pub fn as_str(&self) -> &str {
        self.text().unwrap_or_default()
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Line::Blank)
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Line::Text(text)
    }
}

/// Where the drawing side should put a line: `x` is the left edge of the text and `y` the top
/// of the line's slot, both in canvas pixels from the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePlacement<'p> {
    pub line: &'p Line,
    pub x: Px,
    pub y: Px,
}

/// A laid out page: the lines that fit on one canvas, top to bottom
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub lines: Vec<Line>,
}

impl Page {
    pub fn new(lines: Vec<Line>) -> Page {
        Page { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The text of every non-blank line, in order
    pub fn text_lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().filter_map(Line::text)
    }

    /// Positions each line on the canvas. Lines stack downward from the top padding in steps
    /// of `font_size * line_height`; the first page starts below the title header when the
    /// settings reserve one.
    pub fn placements<'p>(
        &'p self,
        settings: &Settings,
        page_index: usize,
    ) -> Vec<LinePlacement<'p>> {
        let header = if page_index == 0 && settings.reserves_header() {
            HEADER_LINES
        } else {
            0
        };
        let advance = settings.line_advance();

        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| LinePlacement {
                line,
                x: settings.padding,
                y: settings.padding + advance * (header + i) as f32,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Page {
        Page::new(vec![
            Line::Text("first".into()),
            Line::Blank,
            Line::Text("second".into()),
        ])
    }

    #[test]
    fn text_lines_skip_gaps() {
        let page = sample();
        assert_eq!(page.text_lines().collect::<Vec<_>>(), vec!["first", "second"]);
        assert_eq!(page.lines[1].as_str(), "");
        assert!(page.lines[1].is_blank());
        assert_eq!(page.len(), 3);
    }

    #[test]
    fn placements_step_by_line_advance() {
        let mut settings = Settings::default();
        settings.font_size(Px(20.0)).line_height(1.5).padding(Px(50.0));

        let page = sample();
        let placed = page.placements(&settings, 1);
        assert_eq!(placed.len(), 3);
        assert_eq!(placed[0].x, Px(50.0));
        assert_eq!(placed[0].y, Px(50.0));
        assert_eq!(placed[2].y, Px(110.0));
        assert!(placed[1].line.is_blank());
    }

    #[test]
    fn first_page_starts_below_the_header() {
        let mut settings = Settings::default();
        settings
            .font_size(Px(20.0))
            .line_height(1.0)
            .padding(Px(10.0))
            .has_title(true);

        let page = sample();
        assert_eq!(page.placements(&settings, 0)[0].y, Px(70.0));
        assert_eq!(page.placements(&settings, 1)[0].y, Px(10.0));

        settings.show_title_header(false);
        assert_eq!(page.placements(&settings, 0)[0].y, Px(10.0));
    }
}
