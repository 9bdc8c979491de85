use super::{ends_sentence, wrap, Measure};
use crate::page::{Line, Page};
use crate::post::Post;
use crate::settings::{Settings, CLEARANCE, HEADER_LINES};
use crate::LayoutError;
use log::{debug, trace};

/// Characters that end a clause, used as fallback page break points
pub const WEAK_TERMINATORS: [char; 3] = [',', ';', '-'];

/// How many lines back from a full page to look for a sentence end
pub const SENTENCE_LOOKBACK: usize = 4;

/// How many lines back from a full page to look for a clause end
pub const CLAUSE_LOOKBACK: usize = 6;

/// True if `text` ends with clause punctuation, ignoring trailing whitespace
pub fn ends_clause(text: &str) -> bool {
    text.trim_end().ends_with(WEAK_TERMINATORS)
}

/// How many lines fit on each page
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageCapacity {
    pub lines_per_page: usize,
    /// Capacity of the first page, after any title header reservation
    pub first_page: usize,
}

impl PageCapacity {
    /// Works out the capacity for the given settings. Fails on out of range settings, and
    /// rather than clamping when the canvas cannot hold at least one line on every page.
    pub fn from_settings(settings: &Settings) -> Result<PageCapacity, LayoutError> {
        settings.validate()?;
        let usable = settings.canvas_height - settings.padding * 2.0 - CLEARANCE;
        let lines_per_page = (usable / settings.line_advance()).floor() as i64;
        PageCapacity::checked(lines_per_page, settings.reserves_header())
    }

    fn checked(lines_per_page: i64, reserve_header: bool) -> Result<PageCapacity, LayoutError> {
        let first_page = if reserve_header {
            lines_per_page - HEADER_LINES as i64
        } else {
            lines_per_page
        };

        if lines_per_page < 1 || first_page < 1 {
            return Err(LayoutError::CapacityTooSmall {
                lines_per_page,
                first_page,
            });
        }

        Ok(PageCapacity {
            lines_per_page: lines_per_page as usize,
            first_page: first_page as usize,
        })
    }

    /// The same page size with the title header reservation switched on or off
    pub fn with_header(self, reserve_header: bool) -> Result<PageCapacity, LayoutError> {
        PageCapacity::checked(self.lines_per_page as i64, reserve_header)
    }

    /// Capacity of the page at `page_index` (0-based)
    pub fn for_page(&self, page_index: usize) -> usize {
        if page_index == 0 {
            self.first_page
        } else {
            self.lines_per_page
        }
    }
}

/// The quality of a chosen page break
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BreakKind {
    /// The page ends with a sentence
    Sentence,
    /// The page ends with a clause
    Clause,
    /// The page ends wherever it filled up
    Hard,
}

/// Where to split a full page: lines before `index` stay, the rest carry to the next page
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BreakPoint {
    pub index: usize,
    pub kind: BreakKind,
}

/// Searches the tail of a full page for the best place to end it.
///
/// The last [`SENTENCE_LOOKBACK`] lines are searched, newest first, for one ending a sentence;
/// failing that the last [`CLAUSE_LOOKBACK`] lines for one ending a clause. The break goes
/// right after the line found. Without either, the page breaks at its end.
pub fn find_break(lines: &[Line]) -> BreakPoint {
    let search = |lookback: usize, ends: fn(&str) -> bool| {
        lines
            .iter()
            .enumerate()
            .rev()
            .take(lookback)
            .find(|(_, line)| line.text().is_some_and(ends))
            .map(|(i, _)| i + 1)
    };

    if let Some(index) = search(SENTENCE_LOOKBACK, ends_sentence) {
        return BreakPoint {
            index,
            kind: BreakKind::Sentence,
        };
    }
    if let Some(index) = search(CLAUSE_LOOKBACK, ends_clause) {
        return BreakPoint {
            index,
            kind: BreakKind::Clause,
        };
    }
    BreakPoint {
        index: lines.len(),
        kind: BreakKind::Hard,
    }
}

/// Splits a full page at `index` into the lines that stay and the lines carried to the next
/// page. Paragraph gaps at the head of the carried lines are dropped so no page opens with one.
fn split_at(mut lines: Vec<Line>, index: usize) -> (Vec<Line>, Vec<Line>) {
    let mut carried = lines.split_off(index);
    let gaps = carried.iter().take_while(|line| line.is_blank()).count();
    carried.drain(..gaps);
    (lines, carried)
}

/// Splits text into paragraphs at blank lines. Line endings are normalised first; a line with
/// only whitespace on it counts as blank. Paragraphs are trimmed and never empty.
///
/// This is looser than splitting on runs of two or more newlines: `"a\n  \nb"` is two
/// paragraphs here, so a gap marker lands between them.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n").trim().to_string());
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n").trim().to_string());
    }

    paragraphs
}

/// Lays text out into pages for one set of [`Settings`].
///
/// Page capacity is worked out once when the paginator is built, so one paginator can lay out
/// any number of texts. Layout itself holds no state between calls.
///
/// ```
/// use textpages::layout::{MonospaceMeasure, Paginator};
/// use textpages::{Line, Settings};
///
/// let paginator = Paginator::new(Settings::default()).expect("settings fit the canvas");
/// let pages = paginator
///     .paginate("Hello world.\n\nSecond paragraph.", &MonospaceMeasure::new(20))
///     .expect("measure is ready");
///
/// assert_eq!(pages.len(), 1);
/// assert_eq!(
///     pages[0].lines,
///     vec![
///         Line::Text("Hello world.".into()),
///         Line::Blank,
///         Line::Text("Second paragraph.".into()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Paginator {
    settings: Settings,
    capacity: PageCapacity,
}

impl Paginator {
    /// Validates the settings and computes page capacity
    pub fn new(settings: Settings) -> Result<Paginator, LayoutError> {
        let capacity = PageCapacity::from_settings(&settings)?;
        debug!(
            "paginator: {} lines per page, {} on the first page, {} max line width",
            capacity.lines_per_page,
            capacity.first_page,
            settings.max_width()
        );
        Ok(Paginator { settings, capacity })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn capacity(&self) -> PageCapacity {
        self.capacity
    }

    /// Capacity of the page at `page_index` (0-based)
    pub fn capacity_for(&self, page_index: usize) -> usize {
        self.capacity.for_page(page_index)
    }

    /// Lays `text` out into pages. Empty or whitespace-only text gives no pages.
    pub fn paginate<M: Measure + ?Sized>(
        &self,
        text: &str,
        measure: &M,
    ) -> Result<Vec<Page>, LayoutError> {
        self.layout(text, self.capacity, measure)
    }

    /// Lays out a post's body. Whether the first page reserves room for the title header
    /// follows the post's title rather than [`Settings::has_title`].
    pub fn paginate_post<M: Measure + ?Sized>(
        &self,
        post: &Post,
        measure: &M,
    ) -> Result<Vec<Page>, LayoutError> {
        let reserve = post.has_title() && self.settings.show_title_header;
        let capacity = if reserve == self.settings.reserves_header() {
            self.capacity
        } else {
            self.capacity.with_header(reserve)?
        };
        self.layout(&post.body, capacity, measure)
    }

    fn layout<M: Measure + ?Sized>(
        &self,
        text: &str,
        capacity: PageCapacity,
        measure: &M,
    ) -> Result<Vec<Page>, LayoutError> {
        if !measure.is_ready() {
            return Err(LayoutError::MeasureNotReady);
        }

        let max_width = self.settings.max_width();
        let paragraphs = split_paragraphs(text);
        let mut pages: Vec<Page> = Vec::new();
        let mut buffer: Vec<Line> = Vec::new();

        for (pi, paragraph) in paragraphs.iter().enumerate() {
            let lines = wrap(paragraph, max_width, measure);
            trace!("paragraph {pi}: {} lines", lines.len());

            for line in lines {
                if buffer.len() >= capacity.for_page(pages.len()) {
                    let point = find_break(&buffer);
                    let (kept, carried) = split_at(buffer, point.index);
                    debug!(
                        "page {}: {} lines, {:?} break, {} carried over",
                        pages.len(),
                        kept.len(),
                        point.kind,
                        carried.len()
                    );
                    pages.push(Page::new(kept));
                    buffer = carried;
                }
                buffer.push(Line::Text(line));
            }

            let is_last = pi + 1 == paragraphs.len();
            if !is_last && buffer.len() < capacity.for_page(pages.len()) {
                buffer.push(Line::Blank);
            }
        }

        if !buffer.is_empty() {
            debug!("page {}: {} lines, final", pages.len(), buffer.len());
            pages.push(Page::new(buffer));
        }

        Ok(pages)
    }
}

/// Lays `text` out into pages for `settings`, measuring with `measure`.
///
/// Shorthand for building a [`Paginator`] and calling [`Paginator::paginate`].
pub fn paginate<M: Measure + ?Sized>(
    text: &str,
    settings: &Settings,
    measure: &M,
) -> Result<Vec<Page>, LayoutError> {
    Paginator::new(settings.clone())?.paginate(text, measure)
}
