use std::fmt::{self, Display, Formatter};
use std::time::Duration;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// Time between two ticks
    pub fn tick_interval(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(200),
            Difficulty::Normal => Duration::from_millis(150),
            Difficulty::Hard => Duration::from_millis(100),
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", name)
    }
}

#[test]
fn test_harder_is_faster() {
    use Difficulty::*;
    assert!(Easy.tick_interval() > Normal.tick_interval());
    assert!(Normal.tick_interval() > Hard.tick_interval());
}
