use std::f32::consts::PI;

use ggez::graphics::{
    Canvas, DrawMode, DrawParam, Image, Mesh, PxScale, Rect, Text, TextAlign, TextLayout,
};
use ggez::Context;

use crate::app::app_error::{AppError, AppErrorConversion, AppResult};
use crate::app::palette::Palette;
use crate::app::prefs::Prefs;
use crate::basic::{CellPoint, Heading, Point, Side};
use crate::game::render::{Renderer, Sprite, TextSlot};

pub struct Sprites {
    block: Image,
    apple: Image,
}

impl Sprites {
    pub fn load(ctx: &mut Context) -> AppResult<Self> {
        let block = Image::from_path(ctx, "/block.jpg")
            .map_err(AppError::from)
            .with_trace_step("Sprites::load (block)")?;
        let apple = Image::from_path(ctx, "/apple.jpg")
            .map_err(AppError::from)
            .with_trace_step("Sprites::load (apple)")?;
        Ok(Self { block, apple })
    }
}

pub fn generate_hud_mesh(ctx: &mut Context, prefs: &Prefs, palette: &Palette) -> AppResult<Mesh> {
    let rect = Rect::new(0., 0., prefs.window_width, prefs.hud_height);
    Mesh::new_rectangle(ctx, DrawMode::fill(), rect, palette.hud_background)
        .map_err(AppError::from)
        .with_trace_step("generate_hud_mesh")
}

fn rotation(heading: Heading) -> f32 {
    match heading {
        Heading::Right => 0.,
        Heading::Down => PI / 2.,
        Heading::Left => PI,
        Heading::Up => -PI / 2.,
    }
}

/// Turns sprite and text requests into draw calls on a ggez canvas
pub struct CanvasRenderer<'a> {
    pub canvas: &'a mut Canvas,
    pub sprites: &'a Sprites,
    pub palette: &'a Palette,
    pub prefs: &'a Prefs,
}

impl CanvasRenderer<'_> {
    /// Pixel position of the center of a cell, below the hud strip
    fn cell_center(&self, cell: CellPoint) -> Point {
        let side = self.prefs.cell_side;
        cell.to_point(side)
            + Point::square(side / 2.)
            + Point { x: 0., y: self.prefs.hud_height }
    }

    fn board_center(&self) -> Point {
        let hud = self.prefs.hud_height;
        Point {
            x: self.prefs.window_width / 2.,
            y: hud + (self.prefs.window_height - hud) / 2.,
        }
    }
}

impl Renderer for CanvasRenderer<'_> {
    fn sprite(&mut self, sprite: Sprite, cell: CellPoint, heading: Heading) {
        let (image, rotation) = match sprite {
            Sprite::Block { .. } => (&self.sprites.block, rotation(heading)),
            Sprite::Apple => (&self.sprites.apple, 0.),
        };

        let scale = [
            self.prefs.cell_side / image.width() as f32,
            self.prefs.cell_side / image.height() as f32,
        ];
        let dp = DrawParam::default()
            .dest(self.cell_center(cell))
            .offset(Point::square(0.5))
            .rotation(rotation)
            .scale(scale)
            .color(self.palette.tint(sprite));

        self.canvas.draw(image, dp)
    }

    fn text(&mut self, text: &str, slot: TextSlot) {
        let mut text = Text::new(text);
        text.set_scale(PxScale::from(self.prefs.font_size));

        let margin = self.prefs.cell_side / 2.;
        let line_height = self.prefs.font_size * 1.5;
        let hud_middle = self.prefs.hud_height / 2.;

        let (dest, h_align) = match slot {
            TextSlot::Hud(Side::Left) => (Point { x: margin, y: hud_middle }, TextAlign::Begin),
            TextSlot::Hud(Side::Right) => (
                Point { x: self.prefs.window_width - margin, y: hud_middle },
                TextAlign::End,
            ),
            TextSlot::Banner(line) => (
                self.board_center() + Point { x: 0., y: line as f32 * line_height },
                TextAlign::Middle,
            ),
        };
        text.set_layout(TextLayout { h_align, v_align: TextAlign::Middle });

        let dp = DrawParam::default().dest(dest).color(self.palette.text);
        self.canvas.draw(&text, dp)
    }
}

#[test]
fn test_rotation_follows_heading() {
    assert_eq!(rotation(Heading::Right), 0.);
    assert!((rotation(Heading::Left) - PI).abs() < f32::EPSILON);
    assert!((rotation(Heading::Up) + rotation(Heading::Down)).abs() < f32::EPSILON);
}
