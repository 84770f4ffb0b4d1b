/// Position along one board axis: a category column or a clue row.
pub type Coord = u8;

/// Cell coordinates `(category, clue)`, both zero-based.
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

pub const fn mult(a: Coord, b: Coord) -> u16 {
    let a = a as u16;
    let b = b as u16;
    a.saturating_mul(b)
}
