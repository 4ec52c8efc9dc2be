use crate::models::Coord;

/// `|Δrow| + |Δcol|`; admissible for four-way movement with unit step cost.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u64 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as u64
}
