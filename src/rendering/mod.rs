pub use canvas_surface::CanvasSurface;

mod canvas_surface;

use ggez::{graphics::Color, GameResult};

use crate::{
    app::{frame::Scene, palette::Palette},
    config::Config,
};

/// Primitive drawing operations, coordinates in pixels
pub trait Surface {
    fn clear(&mut self, color: Color) -> GameResult;
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> GameResult;
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> GameResult;
    /// `y` is the baseline of the text
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_size: f32) -> GameResult;
}

/// Stateless scene drawing
pub struct Renderer {
    cell_size: f32,
    font_size: f32,
    palette: Palette,
}

impl Renderer {
    const SCORE_POSITION: (f32, f32) = (10., 20.);

    pub fn new(config: &Config) -> Self {
        Self {
            cell_size: config.cell_size,
            font_size: config.score_font_size,
            palette: config.palette,
        }
    }

    pub fn draw_menu(&self, surface: &mut impl Surface) -> GameResult {
        surface.clear(self.palette.menu_background)
    }

    pub fn reset_scene(&self, surface: &mut impl Surface) -> GameResult {
        surface.clear(self.palette.gaming_background)
    }

    pub fn draw(&self, surface: &mut impl Surface, scene: &Scene) -> GameResult {
        self.reset_scene(surface)?;
        self.draw_collectibles(surface, scene)?;
        self.draw_snake(surface, scene)?;
        self.draw_score(surface, scene)
    }

    fn draw_collectibles(&self, surface: &mut impl Surface, scene: &Scene) -> GameResult {
        let side = self.cell_size;
        for item in scene.collectibles.iter() {
            let (x, y) = item.to_pixels(side);
            surface.set_fill_color(self.palette.collectible_fill);
            surface.set_stroke_color(self.palette.collectible_stroke);
            surface.fill_rect(x, y, side, side)?;
            surface.stroke_rect(x, y, side, side)?;
        }
        Ok(())
    }

    fn draw_snake(&self, surface: &mut impl Surface, scene: &Scene) -> GameResult {
        let side = self.cell_size;
        surface.set_stroke_color(self.palette.snake_stroke);
        for segment in scene.snake.segments() {
            let (x, y) = segment.to_pixels(side);
            surface.stroke_rect(x, y, side, side)?;
        }
        Ok(())
    }

    fn draw_score(&self, surface: &mut impl Surface, scene: &Scene) -> GameResult {
        let (x, y) = Self::SCORE_POSITION;
        surface.set_fill_color(self.palette.score_text);
        surface.fill_text(&format!("$ {}", scene.score), x, y, self.font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::{collectibles::Collectibles, snake::Snake},
        basic::{Dir, GridPoint},
    };

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear(Color),
        Fill(Color),
        Stroke(Color),
        FillRect(f32, f32),
        StrokeRect(f32, f32),
        Text(String, f32, f32),
    }

    #[derive(Default)]
    struct Recorder(Vec<Op>);

    impl Surface for Recorder {
        fn clear(&mut self, color: Color) -> GameResult {
            self.0.push(Op::Clear(color));
            Ok(())
        }

        fn set_fill_color(&mut self, color: Color) {
            self.0.push(Op::Fill(color))
        }

        fn set_stroke_color(&mut self, color: Color) {
            self.0.push(Op::Stroke(color))
        }

        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> GameResult {
            assert_eq!((w, h), (10., 10.));
            self.0.push(Op::FillRect(x, y));
            Ok(())
        }

        fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> GameResult {
            assert_eq!((w, h), (10., 10.));
            self.0.push(Op::StrokeRect(x, y));
            Ok(())
        }

        fn fill_text(&mut self, text: &str, x: f32, y: f32, _: f32) -> GameResult {
            self.0.push(Op::Text(text.to_string(), x, y));
            Ok(())
        }
    }

    fn scene() -> Scene {
        let grid = GridPoint { x: 40, y: 40 };
        Scene {
            snake: Snake::initial(grid, 2).advance(Dir::Right.offset()),
            collectibles: [GridPoint { x: 3, y: 4 }].into_iter().collect::<Collectibles>(),
            score: 300,
        }
    }

    #[test]
    fn test_menu() {
        let renderer = Renderer::new(&Config::DEFAULT);
        let mut recorder = Recorder::default();
        renderer.draw_menu(&mut recorder).unwrap();
        assert_eq!(recorder.0, vec![Op::Clear(Palette::DEFAULT.menu_background)]);
    }

    #[test]
    fn test_draw_scene() {
        let renderer = Renderer::new(&Config::DEFAULT);
        let palette = Palette::DEFAULT;
        let mut recorder = Recorder::default();
        renderer.draw(&mut recorder, &scene()).unwrap();

        assert_eq!(
            recorder.0,
            vec![
                Op::Clear(palette.gaming_background),
                Op::Fill(palette.collectible_fill),
                Op::Stroke(palette.collectible_stroke),
                Op::FillRect(30., 40.),
                Op::StrokeRect(30., 40.),
                Op::Stroke(palette.snake_stroke),
                // head, then the delta chain
                Op::StrokeRect(210., 200.),
                Op::StrokeRect(200., 200.),
                Op::StrokeRect(200., 210.),
                Op::Fill(palette.score_text),
                Op::Text("$ 300".to_string(), 10., 20.),
            ]
        );
    }
}
