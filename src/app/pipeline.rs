use std::time::Duration;

use ggez::input::keyboard::KeyCode;
use rand::Rng;
use tracing::{debug, info};

use crate::{
    app::{
        collectibles::{self, Collectibles},
        frame::{frame_driver, Scene},
        input::{DirectionStream, Input},
        phase::{Phase, PhaseCell},
        score::{self, Score, Tally},
        snake::{self, Movement, Snake},
        tick::TickStream,
    },
    config::Config,
    stream::{FramePulse, Interval, Latest},
};

/// Owns the whole stream graph: released keys, elapsed time and frame
/// pulses go in, scenes come out.
pub struct Pipeline {
    phase: PhaseCell,
    input: Input,
    interval: Interval,
    frame_pulse: FramePulse,

    snake: Latest<Snake>,
    collectibles: Latest<Collectibles>,
    score: Latest<Score>,
    scene: Latest<Scene>,
}

impl Pipeline {
    pub fn new(config: &Config, rng: &mut impl Rng) -> Self {
        let collectibles =
            Collectibles::generate(config.collectible_count, config.grid_dim, rng);
        Self::with_collectibles(config, collectibles)
    }

    pub fn with_collectibles(config: &Config, collectibles: Collectibles) -> Self {
        let phase = PhaseCell::default();
        let input = Input::new();
        let interval = Interval::new(config.move_period);
        let frame_pulse = FramePulse::new();

        let directions = DirectionStream::new(input.arrows(), &phase);
        let ticks = TickStream::new(interval.ticks(), directions.stream(), &phase);

        {
            let phase = phase.clone();
            input.start().subscribe(move |_| {
                match phase.get() {
                    Phase::Menu => info!("game started"),
                    Phase::Playing => info!("game restarted"),
                }
                phase.set(Phase::Playing);
            });
        }
        // subscription order: the score is zeroed before the snake
        // re-emits its spawn cell
        let score_resets = input.start().map(|_| Tally::Reset);
        let snake_resets = input.start().map(|_| Movement::Reset);

        let steps = directions
            .stream()
            .merge(ticks.stream())
            .map(|dir| Movement::Step(dir.offset()));
        let initial = Snake::initial(config.grid_dim, config.body_len);
        let snakes = snake::accumulate(&steps.merge(&snake_resets), initial.clone());
        let snake = snakes.hold_with(initial);

        let collectibles = Latest::new(collectibles);
        let hits = collectibles::collisions(&snakes, &collectibles);
        {
            let snake = snake.clone();
            hits.subscribe(move |&index| {
                let head = snake.with(|snake| snake.head);
                debug!(index, ?head, "collectible hit");
            });
        }
        let scores = score::accumulate(
            &hits.map(|&index| Tally::Hit(index)).merge(&score_resets),
            config.reward,
        );
        let score = scores.hold_with(0);

        let scene = frame_driver(frame_pulse.frames(), &phase, &snake, &collectibles, &score)
            .hold();

        Self {
            phase,
            input,
            interval,
            frame_pulse,

            snake,
            collectibles,
            score,
            scene,
        }
    }

    pub fn key_released(&self, key: KeyCode) {
        self.input.key_released(key)
    }

    /// Drives the movement timer
    pub fn advance(&mut self, elapsed: Duration) {
        self.interval.advance(elapsed);
    }

    /// One frame pulse, `None` until the game is playing
    pub fn frame(&self) -> Option<Scene> {
        self.frame_pulse.fire();
        self.scene.take()
    }

    /// Back to the menu, nothing moves or renders until the next start
    pub fn stop(&self) {
        if self.phase() == Phase::Playing {
            let head = self.snake().head;
            info!(score = self.score(), %head, "game stopped");
        }
        self.phase.set(Phase::Menu);
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn snake(&self) -> Snake {
        self.snake.get().unwrap_or_else(|| unreachable!("snake is seeded"))
    }

    pub fn collectibles(&self) -> Collectibles {
        self.collectibles
            .get()
            .unwrap_or_else(|| unreachable!("collectibles are seeded"))
    }

    pub fn score(&self) -> Score {
        self.score.get().unwrap_or_default()
    }
}
