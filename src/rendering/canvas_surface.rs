use ggez::{
    graphics::{Canvas, Color, DrawMode, DrawParam, Mesh, PxScale, Quad, Rect, Text},
    Context, GameResult,
};

use crate::rendering::Surface;

/// [`Surface`] over the ggez frame canvas, call [`CanvasSurface::finish`]
/// to present
pub struct CanvasSurface<'a> {
    ctx: &'a mut Context,
    canvas: Canvas,
    size: (f32, f32),
    fill: Color,
    stroke: Color,
}

impl<'a> CanvasSurface<'a> {
    const LINE_WIDTH: f32 = 1.;

    pub fn new(ctx: &'a mut Context, size: (f32, f32)) -> Self {
        let canvas = Canvas::from_frame(&*ctx, Color::BLACK);
        Self {
            ctx,
            canvas,
            size,
            fill: Color::BLACK,
            stroke: Color::BLACK,
        }
    }

    pub fn finish(self) -> GameResult {
        self.canvas.finish(self.ctx)
    }

    fn quad(&mut self, rect: Rect, color: Color) {
        self.canvas
            .draw(&Quad, DrawParam::default().dest_rect(rect).color(color))
    }
}

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self, color: Color) -> GameResult {
        let (w, h) = self.size;
        self.quad(Rect::new(0., 0., w, h), color);
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> GameResult {
        self.quad(Rect::new(x, y, w, h), self.fill);
        Ok(())
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> GameResult {
        let mesh = Mesh::new_rectangle(
            &*self.ctx,
            DrawMode::stroke(Self::LINE_WIDTH),
            Rect::new(x, y, w, h),
            self.stroke,
        )?;
        self.canvas.draw(&mesh, DrawParam::default());
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_size: f32) -> GameResult {
        let mut text = Text::new(text);
        text.set_scale(PxScale::from(font_size));
        // ggez positions text by its top edge
        let dp = DrawParam::default().dest([x, y - font_size]).color(self.fill);
        self.canvas.draw(&text, dp);
        Ok(())
    }
}
