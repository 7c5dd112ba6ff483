use ggez::mint::Point2;

/// A more convenient version of mint::Point2<f32>
#[derive(Copy, Clone, Debug, PartialEq, Add, Sub)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for Point2<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2 { x, y }
    }
}

impl Point {
    /// Equal x and y
    pub fn square(side: f32) -> Self {
        Self { x: side, y: side }
    }
}

#[test]
fn test_offsets_add_up() {
    let p = Point { x: 1., y: 2. } + Point::square(0.5) - Point { x: 0., y: 1. };
    assert_eq!(p, Point { x: 1.5, y: 1.5 });
}
