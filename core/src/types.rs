/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Board position as `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Iterates the up-to-8 in-bounds neighbors of `center` by clamping the 3x3
/// window to the board edges and skipping the center itself.
pub fn neighbors(center: Coord2, size: Coord2) -> impl Iterator<Item = Coord2> {
    let (row, col) = center;
    let (rows, cols) = size;

    let row_lo = row.saturating_sub(1);
    let row_hi = row.saturating_add(1).min(rows.saturating_sub(1));
    let col_lo = col.saturating_sub(1);
    let col_hi = col.saturating_add(1).min(cols.saturating_sub(1));

    (row_lo..=row_hi)
        .flat_map(move |r| (col_lo..=col_hi).map(move |c| (r, c)))
        .filter(move |&pos| pos != center)
}
