use crate::basic::Heading;
use crate::game::input::Command;
use crate::game::Difficulty;
use ggez::input::keyboard::KeyCode::{self, *};

#[derive(Copy, Clone, Debug)]
pub struct Controls {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,

    pub confirm: KeyCode,
    /// Both keys toggle pause
    pub pause: [KeyCode; 2],
    pub mute: KeyCode,
    pub restart: KeyCode,
    pub quit: KeyCode,

    pub easy: KeyCode,
    pub normal: KeyCode,
    pub hard: KeyCode,
}

impl Default for Controls {
    fn default() -> Self {
        #[rustfmt::skip]
        let controls = Self {
            up: Up, down: Down, left: Left, right: Right,
            confirm: Return, pause: [Space, P], mute: M, restart: R, quit: Escape,
            easy: Key1, normal: Key2, hard: Key3,
        };
        controls
    }
}

impl Controls {
    pub fn command(&self, key: KeyCode) -> Option<Command> {
        let command = match key {
            k if k == self.up => Command::Turn(Heading::Up),
            k if k == self.down => Command::Turn(Heading::Down),
            k if k == self.left => Command::Turn(Heading::Left),
            k if k == self.right => Command::Turn(Heading::Right),
            k if k == self.confirm => Command::Confirm,
            k if self.pause.contains(&k) => Command::TogglePause,
            k if k == self.mute => Command::ToggleMute,
            k if k == self.restart => Command::Restart,
            k if k == self.quit => Command::Quit,
            k if k == self.easy => Command::SelectDifficulty(Difficulty::Easy),
            k if k == self.normal => Command::SelectDifficulty(Difficulty::Normal),
            k if k == self.hard => Command::SelectDifficulty(Difficulty::Hard),
            _ => return None,
        };
        Some(command)
    }
}

#[test]
fn test_default_bindings() {
    let controls = Controls::default();
    assert_eq!(controls.command(Up), Some(Command::Turn(Heading::Up)));
    assert_eq!(controls.command(Left), Some(Command::Turn(Heading::Left)));
    assert_eq!(controls.command(Space), Some(Command::TogglePause));
    assert_eq!(controls.command(P), Some(Command::TogglePause));
    assert_eq!(controls.command(Escape), Some(Command::Quit));
    assert_eq!(
        controls.command(Key3),
        Some(Command::SelectDifficulty(Difficulty::Hard))
    );
    assert_eq!(controls.command(Q), None);
}
