//! Word-to-calendar mapping engine for glyphgraph.
//!
//! [`compose`] rasterizes a word into a seven-row [`PatternGrid`];
//! [`to_dates`] turns the grid's lit cells into calendar dates relative to an
//! anchor; [`schedule`] spreads those dates into commit timestamps.

pub mod calendar;
pub mod error;
pub mod glyph;
pub mod grid;

pub use calendar::{
    AnchorPolicy, MAX_COMMITS_PER_DAY, default_anchor, parse_anchor, resolve_anchor, schedule,
};
pub use error::{GlyphGraphError, Result};
pub use glyph::{Glyph, HEIGHT};
pub use grid::{PatternGrid, compose, ensure_fits, to_dates, unsupported_chars};
