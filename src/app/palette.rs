use ggez::graphics::Color;

use crate::game::render::Sprite;

macro_rules! gray {
    ($lightness:expr) => {
        Color {
            r: $lightness,
            g: $lightness,
            b: $lightness,
            a: 1.,
        }
    };
}

lazy_static! {
    static ref DEFAULT_HEAD_TINT: Color = Color::from_rgb(255, 255, 255);
    static ref DEFAULT_TAIL_TINT: Color = Color::from_rgb(110, 160, 110);
}

pub struct Palette {
    pub background: Color,
    pub hud_background: Color,
    pub text: Color,

    /// Multiplied with the block image, interpolated along the snake
    pub head_tint: Color,
    pub tail_tint: Color,
    pub apple_tint: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: gray!(0.08),
            hud_background: gray!(0.18),
            text: Color::WHITE,

            head_tint: *DEFAULT_HEAD_TINT,
            tail_tint: *DEFAULT_TAIL_TINT,
            apple_tint: Color::WHITE,
        }
    }
}

impl Palette {
    pub fn tint(&self, sprite: Sprite) -> Color {
        match sprite {
            Sprite::Block { index, len } => {
                if len <= 1 {
                    return self.head_tint;
                }
                let head_ratio = 1. - index as f32 / (len - 1) as f32;
                let tail_ratio = 1. - head_ratio;
                let (head, tail) = (self.head_tint, self.tail_tint);
                Color {
                    r: head_ratio * head.r + tail_ratio * tail.r,
                    g: head_ratio * head.g + tail_ratio * tail.g,
                    b: head_ratio * head.b + tail_ratio * tail.b,
                    a: 1.,
                }
            }
            Sprite::Apple => self.apple_tint,
        }
    }
}

#[test]
fn test_block_tint_runs_head_to_tail() {
    let palette = Palette::default();
    let head = palette.tint(Sprite::Block { index: 0, len: 5 });
    let tail = palette.tint(Sprite::Block { index: 4, len: 5 });
    assert_eq!(head, palette.head_tint);
    assert!((tail.g - palette.tail_tint.g).abs() < 1e-6);
    assert_eq!(palette.tint(Sprite::Block { index: 0, len: 1 }), palette.head_tint);
}
