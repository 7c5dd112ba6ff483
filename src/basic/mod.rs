pub use cell_point::{CellPoint, GridDim};
pub use heading::Heading;
pub use point::Point;

mod cell_point;
mod heading;
mod point;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    Left,
    Right,
}
