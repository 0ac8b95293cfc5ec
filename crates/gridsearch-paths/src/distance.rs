use gridsearch_core::Pos;

/// Manhattan (L1) distance between two positions.
///
/// Never overestimates the number of orthogonal steps between them.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> u32 {
    (a.row - b.row).unsigned_abs() + (a.col - b.col).unsigned_abs()
}
