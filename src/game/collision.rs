use crate::basic::{CellPoint, GridDim};
use crate::game::snake::Snake;

/// A collision that ends the game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Crash {
    /// The head ran into another segment of the snake
    SelfBite,
    /// The head left the playable area
    Wall,
}

pub fn eats_apple(snake: &Snake, apple: CellPoint) -> bool {
    snake.head() == apple
}

pub fn bites_itself(snake: &Snake) -> bool {
    let head = snake.head();
    snake.body().any(|segment| segment == head)
}

pub fn hits_wall(snake: &Snake, grid: GridDim) -> bool {
    !grid.contains(snake.head())
}

/// Self-collision is checked before the walls
pub fn find_crash(snake: &Snake, grid: GridDim) -> Option<Crash> {
    if bites_itself(snake) {
        Some(Crash::SelfBite)
    } else if hits_wall(snake, grid) {
        Some(Crash::Wall)
    } else {
        None
    }
}
