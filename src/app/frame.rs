use crate::{
    app::{collectibles::Collectibles, phase::PhaseCell, score::Score, snake::Snake},
    stream::{Latest, Stream},
};

/// Everything a frame shows
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Scene {
    pub snake: Snake,
    pub collectibles: Collectibles,
    pub score: Score,
}

/// Samples the newest snake, collectibles and score on every frame pulse
/// while the game is playing. Pulses are independent of movement, two
/// frames may show the same snake.
pub fn frame_driver(
    frames: &Stream<u64>,
    phase: &PhaseCell,
    snake: &Latest<Snake>,
    collectibles: &Latest<Collectibles>,
    score: &Latest<Score>,
) -> Stream<Scene> {
    let phase = phase.clone();
    let snake = snake.clone();
    let collectibles = collectibles.clone();
    let score = score.clone();
    frames.filter_map(move |_| {
        if !phase.is_playing() {
            return None;
        }
        Some(Scene {
            snake: snake.get()?,
            collectibles: collectibles.get()?,
            score: score.get()?,
        })
    })
}
