use std::{
    fmt::{self, Display, Formatter},
    ops::Deref,
    rc::Rc,
};

use itertools::Itertools;
use rand::Rng;

use crate::{
    app::snake::Snake,
    basic::{GridDim, GridPoint},
    stream::{Latest, Stream},
};

/// Fixed item positions, generated once and shared by every reader.
/// Eating an item neither removes nor moves it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Collectibles(Rc<[GridPoint]>);

impl Collectibles {
    pub fn generate(count: usize, grid_dim: GridDim, rng: &mut impl Rng) -> Self {
        (0..count).map(|_| GridPoint::random_in(grid_dim, rng)).collect()
    }

    /// Index of the item at `pos`, the last one if several share the cell
    pub fn collision_at(&self, pos: GridPoint) -> Option<usize> {
        self.0.iter().rposition(|&item| item == pos)
    }
}

impl FromIterator<GridPoint> for Collectibles {
    fn from_iter<I: IntoIterator<Item = GridPoint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for Collectibles {
    type Target = [GridPoint];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Collectibles {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

/// Index of the collectible under the head, for every snake that lands on one
pub fn collisions(snakes: &Stream<Snake>, collectibles: &Latest<Collectibles>) -> Stream<usize> {
    snakes
        .with_latest_from(collectibles, |snake, collectibles| {
            collectibles.collision_at(snake.head)
        })
        .filter_map(|hit| *hit)
}
