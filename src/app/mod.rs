use ggez::{
    event::EventHandler,
    input::keyboard::KeyInput,
    Context, GameResult,
};
use rand::thread_rng;
use tracing::info;

use crate::{
    app::pipeline::Pipeline,
    config::Config,
    rendering::{CanvasSurface, Renderer},
};

pub mod collectibles;
pub mod frame;
pub mod input;
pub mod palette;
pub mod phase;
pub mod pipeline;
pub mod score;
pub mod snake;
pub mod tick;

/// Bridges ggez callbacks to the [`Pipeline`]: key releases are fed in
/// as they arrive, `update` drives the movement timer and every `draw`
/// is one frame pulse
pub struct App {
    config: Config,
    pipeline: Pipeline,
    renderer: Renderer,
}

impl App {
    pub fn new(config: Config) -> Self {
        let pipeline = Pipeline::new(&config, &mut thread_rng());
        info!(
            grid = %config.grid_dim,
            move_period = ?config.move_period,
            collectibles = %pipeline.collectibles(),
            "pipeline ready"
        );
        let renderer = Renderer::new(&config);
        Self { config, pipeline, renderer }
    }
}

impl EventHandler for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        self.pipeline.advance(ctx.time.delta());
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut surface = CanvasSurface::new(ctx, self.config.window_size());
        match self.pipeline.frame() {
            Some(scene) => self.renderer.draw(&mut surface, &scene)?,
            None => self.renderer.draw_menu(&mut surface)?,
        }
        surface.finish()
    }

    fn key_up_event(&mut self, _ctx: &mut Context, input: KeyInput) -> GameResult {
        if let Some(key) = input.keycode {
            self.pipeline.key_released(key);
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> GameResult<bool> {
        self.pipeline.stop();
        Ok(false)
    }
}
