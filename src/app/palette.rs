use ggez::graphics::Color;

macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        Color {
            r: $r as f32 / 255.,
            g: $g as f32 / 255.,
            b: $b as f32 / 255.,
            a: 1.,
        }
    };
}

#[derive(Copy, Clone, Debug)]
pub struct Palette {
    /// Background while waiting for the start key
    pub menu_background: Color,
    pub gaming_background: Color,

    pub snake_stroke: Color,

    pub collectible_fill: Color,
    pub collectible_stroke: Color,

    pub score_text: Color,
}

impl Palette {
    pub const DEFAULT: Self = Self {
        menu_background: rgb!(0x33, 0x44, 0x55),
        gaming_background: rgb!(0x33, 0x33, 0x33),

        snake_stroke: rgb!(0x00, 0x80, 0x00),

        collectible_fill: rgb!(0xff, 0x41, 0x36),
        collectible_stroke: rgb!(0xff, 0xdc, 0x00),

        score_text: rgb!(0xff, 0xdc, 0x00),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
