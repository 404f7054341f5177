//! Tests for board constants and diagram tables

#[cfg(test)]
mod tests {
    use pentomino::io::configuration::{
        BLOCKED_AREA, BLOCKER_GLYPH, BLOCKER_SIDE, DEFAULT_HEIGHT, DEFAULT_WIDTH,
        DIAGRAM_ELEMENTS, EMPTY_GLYPH, LINES_PER_ROW, MIN_SIDE, PIECE_CELLS, PIECE_COUNT,
        TILED_AREA,
    };

    // Tests board areas follow from the piece set
    // Verified by changing the piece cell count
    #[test]
    fn test_area_constants() {
        assert_eq!(PIECE_CELLS, 5);
        assert_eq!(PIECE_COUNT, 12);
        assert_eq!(TILED_AREA, 60);
        assert_eq!(BLOCKER_SIDE, 2);
        assert_eq!(BLOCKED_AREA, 64);
    }

    // Tests the default board is a valid 60-cell rectangle
    // Verified by changing the default height
    #[test]
    fn test_default_board() {
        assert_eq!(DEFAULT_WIDTH * DEFAULT_HEIGHT, TILED_AREA);
        assert!(DEFAULT_WIDTH >= MIN_SIDE && DEFAULT_HEIGHT >= MIN_SIDE);
    }

    // Tests glyphs distinguish empty and blocked cells from piece letters
    // Verified by rendering the blocker as a letter
    #[test]
    fn test_glyphs() {
        assert_ne!(EMPTY_GLYPH, BLOCKER_GLYPH);
        assert!(!BLOCKER_GLYPH.is_ascii_alphabetic());
        assert!(EMPTY_GLYPH.is_whitespace());
    }

    // Tests every reachable corner mask draws four characters per line
    // Verified by shortening one element of the table
    #[test]
    fn test_diagram_elements() {
        assert_eq!(DIAGRAM_ELEMENTS.len(), LINES_PER_ROW);

        for elements in &DIAGRAM_ELEMENTS {
            for (mask, element) in elements.iter().enumerate() {
                // A boundary cannot end at a corner, so single-bit masks never occur
                if mask.count_ones() == 1 {
                    assert!(element.is_empty(), "mask {mask}");
                } else {
                    assert_eq!(element.chars().count(), 4, "mask {mask}");
                }
            }
        }
    }

    // Tests vertical boundaries continue onto the second line
    // Verified by blanking the second line for masks with the lower edge
    #[test]
    fn test_second_line_draws_lower_edge() {
        let [_, second] = &DIAGRAM_ELEMENTS;
        for (mask, element) in second.iter().enumerate() {
            if mask.count_ones() > 1 {
                assert_eq!(element.starts_with('|'), mask & 8 != 0, "mask {mask}");
            }
        }
    }
}
