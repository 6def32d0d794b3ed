use crate::stream::Stream;

pub type Score = u32;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Tally {
    /// Collision with the collectible at this index
    Hit(usize),
    Reset,
}

/// Every hit is worth `reward` regardless of which collectible it was
pub fn accumulate(tallies: &Stream<Tally>, reward: Score) -> Stream<Score> {
    tallies.scan(0, move |score, tally| match tally {
        Tally::Hit(_) => score.saturating_add(reward),
        Tally::Reset => 0,
    })
}
