//! Pattern grid composition and grid-to-calendar translation.
//!
//! A [`PatternGrid`] has one row per weekday and one column per week. Column 0,
//! row 0 is the anchor date; each column step is seven days, each row step one.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{GlyphGraphError, Result};
use crate::glyph::{self, HEIGHT};

/// Blank columns inserted between adjacent glyphs.
pub const SEPARATOR: usize = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct PatternGrid {
    rows: Vec<Vec<bool>>,
}

#[derive(Deserialize)]
struct RawGrid {
    rows: Vec<Vec<bool>>,
}

impl TryFrom<RawGrid> for PatternGrid {
    type Error = GlyphGraphError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        Self::from_rows(raw.rows)
    }
}

impl PatternGrid {
    /// Zero rows, zero columns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Either no rows at all, or exactly [`HEIGHT`] rows of equal width.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        if rows.is_empty() {
            return Ok(Self::empty());
        }
        if rows.len() != HEIGHT {
            return Err(GlyphGraphError::InvalidInput(format!(
                "grid has {} rows, expected {HEIGHT}",
                rows.len()
            )));
        }
        let width = rows[0].len();
        if rows.iter().any(|row| row.len() != width) {
            return Err(GlyphGraphError::InvalidInput(
                "grid rows differ in width".to_string(),
            ));
        }
        Ok(Self { rows })
    }

    fn blank(width: usize) -> Self {
        Self {
            rows: vec![vec![false; width]; HEIGHT],
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn lit_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&cell| cell).count()
    }

    /// Lit cells as `(col, row)` pairs, column-major.
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.width()).flat_map(move |col| {
            (0..self.height())
                .filter(move |&row| self.get(row, col))
                .map(move |row| (col, row))
        })
    }

    /// One string per row, for terminal previews.
    pub fn render(&self, filled: char, blank: char) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| if cell { filled } else { blank })
                    .collect()
            })
            .collect()
    }
}

/// Rasterize `word` into a seven-row grid.
///
/// Input is upper-cased before lookup; characters without a glyph render as
/// blank columns. An empty word yields [`PatternGrid::empty`].
pub fn compose(word: &str) -> PatternGrid {
    let glyphs: Vec<_> = word
        .chars()
        .map(|ch| glyph::lookup(ch.to_ascii_uppercase()))
        .collect();
    if glyphs.is_empty() {
        return PatternGrid::empty();
    }

    let width = glyphs.iter().map(|g| g.width()).sum::<usize>()
        + SEPARATOR * (glyphs.len() - 1);
    let mut grid = PatternGrid::blank(width);

    let mut offset = 0;
    for g in &glyphs {
        for (row, cells) in grid.rows.iter_mut().enumerate() {
            for col in 0..g.width() {
                if g.is_filled(row, col) {
                    cells[offset + col] = true;
                }
            }
        }
        offset += g.width() + SEPARATOR;
    }
    grid
}

/// Map every lit cell to `anchor + (col * 7 + row)` days, sorted ascending.
///
/// The anchor's own weekday is treated as row 0. Callers check
/// [`ensure_fits`] first; cells that would land past the end of the
/// representable calendar are dropped.
pub fn to_dates(grid: &PatternGrid, anchor: NaiveDate) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = grid
        .lit_cells()
        .filter_map(|(col, row)| anchor.checked_add_days(Days::new((col * 7 + row) as u64)))
        .collect();
    dates.sort();
    dates
}

/// Fail when some lit cell of `grid` would land past the last representable date.
pub fn ensure_fits(grid: &PatternGrid, anchor: NaiveDate) -> Result<()> {
    let Some(last) = grid.lit_cells().map(|(col, row)| col * 7 + row).max() else {
        return Ok(());
    };
    match anchor.checked_add_days(Days::new(last as u64)) {
        Some(_) => Ok(()),
        None => Err(GlyphGraphError::InvalidInput(format!(
            "start date {anchor} leaves no room for the pattern before {}",
            NaiveDate::MAX
        ))),
    }
}

/// Characters of `word` that render blank without being a space, in
/// first-seen order.
pub fn unsupported_chars(word: &str) -> Vec<char> {
    let mut seen = Vec::new();
    for ch in word.chars() {
        if !glyph::is_supported(ch.to_ascii_uppercase()) && !seen.contains(&ch) {
            seen.push(ch);
        }
    }
    seen
}
