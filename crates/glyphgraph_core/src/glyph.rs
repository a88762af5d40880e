//! Bitmap glyphs for the contribution calendar.
//!
//! Every glyph is [`HEIGHT`] rows tall, one row per weekday. Rows within a
//! glyph share the same width; widths may differ between glyphs. A `#` marks a
//! filled cell, a space marks a blank one.

use std::fmt;

/// Rows per glyph (Sunday through Saturday).
pub const HEIGHT: usize = 7;

/// Mark for a filled cell in a glyph row.
pub const FILLED: char = '#';

/// Characters with a dedicated bitmap.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ ";

pub type Bitmap = [&'static str; HEIGHT];

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    bitmap: Bitmap,
}

/// Fallback for anything outside [`ALPHABET`].
pub const BLANK: Glyph = Glyph {
    bitmap: ["     ", "     ", "     ", "     ", "     ", "     ", "     "],
};

impl Glyph {
    const fn new(bitmap: Bitmap) -> Self {
        Self { bitmap }
    }

    pub fn width(&self) -> usize {
        self.bitmap[0].chars().count()
    }

    pub fn rows(&self) -> &Bitmap {
        &self.bitmap
    }

    /// `false` for out-of-range coordinates.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.bitmap
            .get(row)
            .and_then(|r| r.chars().nth(col))
            .is_some_and(|c| c == FILLED)
    }

    pub fn lit_count(&self) -> usize {
        self.bitmap
            .iter()
            .map(|row| row.chars().filter(|&c| c == FILLED).count())
            .sum()
    }
}

impl fmt::Debug for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.bitmap.iter()).finish()
    }
}

/// Return the bitmap for `ch`, or `None` if the character has none.
/// Expects uppercase input; case folding is the caller's job.
pub fn glyph(ch: char) -> Option<Glyph> {
    let bitmap = match ch {
        'A' => [" ### ", "#   #", "#   #", "#####", "#   #", "#   #", "     "],
        'B' => ["#### ", "#   #", "#   #", "#### ", "#   #", "#   #", "#### "],
        'C' => [" ### ", "#   #", "#    ", "#    ", "#    ", "#   #", " ### "],
        'D' => ["#### ", "#   #", "#   #", "#   #", "#   #", "#   #", "#### "],
        'E' => ["#####", "#    ", "#    ", "#### ", "#    ", "#    ", "#####"],
        'F' => ["#####", "#    ", "#    ", "#### ", "#    ", "#    ", "#    "],
        'G' => [" ### ", "#   #", "#    ", "# ###", "#   #", "#   #", " ### "],
        'H' => ["#   #", "#   #", "#   #", "#####", "#   #", "#   #", "#   #"],
        'I' => ["#####", "  #  ", "  #  ", "  #  ", "  #  ", "  #  ", "#####"],
        'J' => ["#####", "    #", "    #", "    #", "    #", "#   #", " ### "],
        'K' => ["#   #", "#  # ", "# #  ", "##   ", "# #  ", "#  # ", "#   #"],
        'L' => ["#    ", "#    ", "#    ", "#    ", "#    ", "#    ", "#####"],
        'M' => ["#   #", "## ##", "# # #", "#   #", "#   #", "#   #", "#   #"],
        'N' => ["#   #", "##  #", "# # #", "#  ##", "#   #", "#   #", "#   #"],
        'O' => [" ### ", "#   #", "#   #", "#   #", "#   #", "#   #", " ### "],
        'P' => ["#### ", "#   #", "#   #", "#### ", "#    ", "#    ", "#    "],
        'Q' => [" ### ", "#   #", "#   #", "#   #", "# # #", "#  # ", " ####"],
        'R' => ["#### ", "#   #", "#   #", "#### ", "# #  ", "#  # ", "#   #"],
        'S' => [" ### ", "#   #", "#    ", " ### ", "    #", "#   #", " ### "],
        'T' => ["#####", "  #  ", "  #  ", "  #  ", "  #  ", "  #  ", "  #  "],
        'U' => ["#   #", "#   #", "#   #", "#   #", "#   #", "#   #", " ### "],
        'V' => ["#   #", "#   #", "#   #", "#   #", "#   #", " # # ", "  #  "],
        'W' => ["#   #", "#   #", "#   #", "#   #", "# # #", "## ##", "#   #"],
        'X' => ["#   #", " # # ", "  #  ", "  #  ", "  #  ", " # # ", "#   #"],
        'Y' => ["#   #", "#   #", " # # ", "  #  ", "  #  ", "  #  ", "  #  "],
        'Z' => ["#####", "    #", "   # ", "  #  ", " #   ", "#    ", "#####"],
        ' ' => return Some(BLANK),
        _ => return None,
    };
    debug_assert!(
        bitmap.iter().all(|row| row.len() == bitmap[0].len()),
        "glyph '{ch}' has inconsistent row widths",
    );
    Some(Glyph::new(bitmap))
}

/// Like [`glyph`] but never fails: unsupported characters map to [`BLANK`].
pub fn lookup(ch: char) -> Glyph {
    glyph(ch).unwrap_or(BLANK)
}

pub fn is_supported(ch: char) -> bool {
    glyph(ch).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_has_seven_rows_of_equal_width() {
        for ch in ALPHABET.chars() {
            let g = glyph(ch).unwrap();
            assert_eq!(g.rows().len(), HEIGHT, "glyph {ch:?}");
            let width = g.width();
            assert!(width > 0, "glyph {ch:?} is empty");
            for row in g.rows() {
                assert_eq!(row.chars().count(), width, "glyph {ch:?} row {row:?}");
            }
        }
    }

    #[test]
    fn glyph_rows_only_use_filled_or_blank_marks() {
        for ch in ALPHABET.chars() {
            for row in glyph(ch).unwrap().rows() {
                assert!(row.chars().all(|c| c == FILLED || c == ' '), "{ch:?}: {row:?}");
            }
        }
    }

    #[test]
    fn letters_are_not_blank() {
        for ch in ALPHABET.chars().filter(|c| c.is_ascii_uppercase()) {
            assert!(lookup(ch).lit_count() > 0, "glyph {ch:?} has no filled cells");
        }
    }

    #[test]
    fn unsupported_characters_fall_back_to_blank() {
        for ch in ['7', '!', 'é', '\t', 'a'] {
            assert!(glyph(ch).is_none());
            assert!(!is_supported(ch));
            assert_eq!(lookup(ch), BLANK);
        }
        assert_eq!(BLANK.lit_count(), 0);
        assert_eq!(BLANK.width(), 5);
    }

    #[test]
    fn space_is_supported_and_blank() {
        assert!(is_supported(' '));
        assert_eq!(lookup(' '), BLANK);
    }

    #[test]
    fn h_and_i_cell_counts() {
        let h = lookup('H');
        assert_eq!(h.lit_count(), 17);
        assert!(h.is_filled(0, 0));
        assert!(!h.is_filled(0, 1));
        assert!(h.is_filled(3, 2));

        let i = lookup('I');
        assert_eq!(i.lit_count(), 15);
        assert!(i.is_filled(1, 2));
        assert!(!i.is_filled(1, 0));
    }

    #[test]
    fn is_filled_out_of_range() {
        let h = lookup('H');
        assert!(!h.is_filled(HEIGHT, 0));
        assert!(!h.is_filled(0, 5));
    }
}
