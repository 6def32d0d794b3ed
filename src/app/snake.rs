use std::iter;

use crate::{
    basic::{GridDim, GridPoint},
    stream::Stream,
};

/// `body` is a delta chain: each element is the offset from the previous
/// segment (the first one from `head`), not an absolute position
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snake {
    pub head: GridPoint,
    pub body: Vec<GridPoint>,
}

impl Snake {
    /// Head in the middle of the grid, body trailing straight down
    pub fn initial(grid_dim: GridDim, body_len: usize) -> Self {
        Self {
            head: GridPoint::center_of(grid_dim),
            body: vec![GridPoint { x: 0, y: 1 }; body_len],
        }
    }

    /// The body slides by one, its length never changes
    #[must_use]
    pub fn advance(&self, step: GridPoint) -> Self {
        let body = iter::once(-step)
            .chain(self.body.iter().copied())
            .take(self.body.len())
            .collect();
        Self { head: self.head + step, body }
    }

    /// Absolute positions from head to tail, `body.len() + 1` of them
    pub fn segments(&self) -> impl Iterator<Item = GridPoint> + '_ {
        iter::once(self.head).chain(self.body.iter().scan(self.head, |pos, offset| {
            *pos += *offset;
            Some(*pos)
        }))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Movement {
    Step(GridPoint),
    /// Back to the spawn snake
    Reset,
}

/// Folds movements into snakes, one new snake per movement
pub fn accumulate(movements: &Stream<Movement>, initial: Snake) -> Stream<Snake> {
    movements.scan(initial.clone(), move |snake, movement| match movement {
        Movement::Step(step) => snake.advance(*step),
        Movement::Reset => initial.clone(),
    })
}
