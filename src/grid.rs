//! Text rendering of the top and bottom layers.
//!
//! Each layer is drawn as a 3x3 grid seen from above, with back at the top
//! row and left in the first column. Only the four corner cells of each grid
//! carry a piece; edges and centers are not simulated and show as `.`.

use crate::cube::CubeState;
use crate::slots::Slot;

/// Grid (row, column) of each upper slot when the top layer is viewed from above.
const TOP_POS_TO_RC: [(Slot, (usize, usize)); 4] = [
    (Slot::Ulb, (0, 0)),
    (Slot::Urb, (0, 2)),
    (Slot::Urf, (2, 2)),
    (Slot::Ulf, (2, 0)),
];

/// Grid (row, column) of each lower slot, viewed through the cube from above.
const BOTTOM_POS_TO_RC: [(Slot, (usize, usize)); 4] = [
    (Slot::Dlb, (0, 0)),
    (Slot::Drb, (0, 2)),
    (Slot::Drf, (2, 2)),
    (Slot::Dlf, (2, 0)),
];

/// Width of one rendered layer: three 3-character cells and two separators.
const LAYER_WIDTH: usize = 11;

/// Builds the 3x3 cell text of one layer.
fn layer_cells(state: &CubeState, layout: &[(Slot, (usize, usize)); 4]) -> [[String; 3]; 3] {
    let mut cells: [[String; 3]; 3] =
        std::array::from_fn(|_| std::array::from_fn(|_| " . ".to_string()));

    for &(slot, (row, col)) in layout {
        if let Some(occupant) = state.piece_at_slot(slot) {
            cells[row][col] = format!("{}:{}", occupant.piece, occupant.twist);
        }
    }

    cells
}

/// Formats the state as top and bottom layer grids side by side.
///
/// Each corner cell reads `piece:twist`.
pub fn format_layers(state: &CubeState) -> String {
    let top = layer_cells(state, &TOP_POS_TO_RC);
    let bottom = layer_cells(state, &BOTTOM_POS_TO_RC);

    let mut output = format!("{:<width$}  {}\n", "top", "bottom", width = LAYER_WIDTH);
    for (top_row, bottom_row) in top.iter().zip(bottom.iter()) {
        let line = format!("{}  {}", top_row.join(" "), bottom_row.join(" "));
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}
