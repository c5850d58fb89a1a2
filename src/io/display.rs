//! Textual rendering of board state

use crate::grid::board::Board;

/// Render the board as one text line per row
///
/// Filled cells print as `#`, known-empty cells as `X`, undetermined cells
/// as a space, joined by single spaces. Partially solved boards render the
/// same way, which makes stalled puzzles easy to eyeball.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in board.cells().rows() {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}
