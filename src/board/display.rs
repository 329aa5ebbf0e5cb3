use std::fmt;

use super::Board;

const FILLED_CELL: char = '#';
const EMPTY_CELL: char = '.';

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut rows: Vec<String> = Vec::with_capacity(4);
        for row in 0..4 {
            let mut cells = String::with_capacity(6);
            for col in 0..6 {
                // A piece placed at offset (x, y) fills bit `23 - (x*4 + y)`
                // (its mask is anchored at bit 23 and right-shifted by the
                // offset), so the cell at (col, row) lives at that bit, not
                // at `col*4 + row` itself.
                let bit = 23 - (col * 4 + row);
                let filled = self.bits() & (1 << bit) != 0;
                cells.push(if filled { FILLED_CELL } else { EMPTY_CELL });
            }
            rows.push(cells);
        }
        write!(f, "{}", rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::PIECES;

    #[test]
    fn placed_piece_renders_at_its_offset() {
        // The single-cell piece placed at (x=0, y=0) should render as a
        // filled top-left cell, not a filled bottom-right one.
        let mask = PIECES[0].footprint(0, 0).unwrap();
        let board = Board::new(mask);
        let rendered = format!("{board}");
        let top_row = rendered.lines().next().unwrap();
        assert_eq!(top_row.chars().next().unwrap(), FILLED_CELL);
        assert_eq!(rendered.chars().filter(|&c| c == FILLED_CELL).count(), 1);
    }
}
