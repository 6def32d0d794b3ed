use num_integer::Integer;
use rand::Rng;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Default, Add, AddAssign, Sub, Neg, Display)]
#[display(fmt = "({}, {})", x, y)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

/// Width and height of the grid in cells
pub type GridDim = GridPoint;

impl GridPoint {
    pub fn center_of(dim: GridDim) -> Self {
        Self {
            x: Integer::div_floor(&dim.x, &2),
            y: Integer::div_floor(&dim.y, &2),
        }
    }

    /// Uniform over `[0, dim.x) x [0, dim.y)`
    pub fn random_in(dim: GridDim, rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0..dim.x),
            y: rng.gen_range(0..dim.y),
        }
    }

    #[cfg(test)]
    pub fn is_in(self, dim: GridDim) -> bool {
        (0..dim.x).contains(&self.x) && (0..dim.y).contains(&self.y)
    }

    /// Top-left pixel of the cell
    pub fn to_pixels(self, cell_size: f32) -> (f32, f32) {
        (self.x as f32 * cell_size, self.y as f32 * cell_size)
    }

    #[cfg(test)]
    pub fn is_adjacent_to(self, other: Self) -> bool {
        let d = self - other;
        d.x.abs() + d.y.abs() == 1
    }
}
