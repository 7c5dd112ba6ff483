use crate::basic::{CellPoint, Heading, Side};
use crate::game::{Game, State};
use rand::Rng;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Sprite {
    /// One segment of the snake, `index` counts from the head
    Block { index: usize, len: usize },
    Apple,
}

/// Where a piece of text goes, the renderer turns slots into pixels
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TextSlot {
    /// The reserved strip above the board
    Hud(Side),
    /// Centered on the board, lines counted from the middle
    Banner(i32),
}

pub trait Renderer {
    fn sprite(&mut self, sprite: Sprite, cell: CellPoint, heading: Heading);
    fn text(&mut self, text: &str, slot: TextSlot);
}

impl<R: Rng> Game<R> {
    /// Describe the current frame in terms of sprites and text
    pub fn render(&self, renderer: &mut impl Renderer) {
        self.render_hud(renderer);

        if self.state() == State::Start {
            renderer.text("Snake & Apple", TextSlot::Banner(-2));
            renderer.text("Press Enter to start", TextSlot::Banner(0));
            renderer.text(
                &format!("Difficulty: {} (1 / 2 / 3 to change)", self.difficulty()),
                TextSlot::Banner(1),
            );
            return;
        }

        // snake first, the apple goes on top
        let heading = self.snake().heading();
        let len = self.snake().len();
        for (index, cell) in self.snake().segments().enumerate() {
            // a head that ran into the wall is left off the board
            if self.rules.grid.contains(cell) {
                renderer.sprite(Sprite::Block { index, len }, cell, heading);
            }
        }
        renderer.sprite(Sprite::Apple, self.apple().pos, heading);

        match self.state() {
            State::Paused => {
                renderer.text("Paused", TextSlot::Banner(0));
                renderer.text("Press Space to resume", TextSlot::Banner(1));
            }
            State::GameOver => {
                renderer.text(
                    &format!("Game over! Your score is {}", self.score()),
                    TextSlot::Banner(-1),
                );
                if self.new_record() {
                    renderer.text("New high score!", TextSlot::Banner(0));
                }
                renderer.text(
                    "Press R or Enter to play again, Escape to quit",
                    TextSlot::Banner(1),
                );
            }
            _ => (),
        }
    }

    fn render_hud(&self, renderer: &mut impl Renderer) {
        renderer.text(
            &format!("Score: {}   High score: {}", self.score(), self.high_score()),
            TextSlot::Hud(Side::Left),
        );
        let mute = if self.muted() { "   [muted]" } else { "" };
        renderer.text(
            &format!("{}{}", self.difficulty(), mute),
            TextSlot::Hud(Side::Right),
        );
    }
}
