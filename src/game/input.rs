use std::collections::VecDeque;

use crate::basic::Heading;
use crate::game::Difficulty;

/// Player intents, already decoupled from concrete keys
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Command {
    Turn(Heading),
    Confirm,
    TogglePause,
    ToggleMute,
    Restart,
    Quit,
    SelectDifficulty(Difficulty),
}

impl Command {
    /// Whether holding the key down should repeat the command,
    /// toggles would otherwise flicker on and off
    pub fn repeats_when_held(self) -> bool {
        matches!(self, Command::Turn(_))
    }
}

/// Turns entered between two ticks, at most one is applied per tick
pub struct TurnQueue {
    queue: VecDeque<Heading>,
}

impl TurnQueue {
    pub const LIMIT: usize = 3;

    pub fn new() -> Self {
        Self {
            queue: VecDeque::with_capacity(Self::LIMIT),
        }
    }

    /// `current` is the heading the snake has right now, it is used to
    /// judge the first queued turn, later turns are judged against the
    /// turn queued before them
    pub fn push(&mut self, turn: Heading, current: Heading) {
        if self.queue.len() >= Self::LIMIT {
            return;
        }
        let last = self.queue.back().copied().unwrap_or(current);
        // deny 180° turns and repeats
        if turn != last && turn != -last {
            self.queue.push_back(turn);
        }
    }

    pub fn pop(&mut self) -> Option<Heading> {
        self.queue.pop_front()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

#[test]
fn test_queue_rejects_reverse_and_repeat() {
    use Heading::*;
    let mut turns = TurnQueue::new();
    turns.push(Left, Right);
    turns.push(Right, Right);
    assert_eq!(turns.len(), 0);

    turns.push(Up, Right);
    turns.push(Up, Right);
    turns.push(Down, Right);
    assert_eq!(turns.len(), 1);
}

#[test]
fn test_queue_keeps_quick_double_turn() {
    use Heading::*;
    let mut turns = TurnQueue::new();
    // heading right, up then left: a u-turn over two ticks
    turns.push(Up, Right);
    turns.push(Left, Right);
    assert_eq!(turns.pop(), Some(Up));
    assert_eq!(turns.pop(), Some(Left));
    assert_eq!(turns.pop(), None);
}

#[test]
fn test_queue_limit() {
    use Heading::*;
    let mut turns = TurnQueue::new();
    for turn in [Up, Left, Down, Right, Up] {
        turns.push(turn, Right);
    }
    assert_eq!(turns.len(), TurnQueue::LIMIT);
}

#[test]
fn test_only_turns_repeat_when_held() {
    assert!(Command::Turn(Heading::Up).repeats_when_held());
    assert!(!Command::TogglePause.repeats_when_held());
    assert!(!Command::ToggleMute.repeats_when_held());
    assert!(!Command::Confirm.repeats_when_held());
    assert!(!Command::SelectDifficulty(Difficulty::Hard).repeats_when_held());
}
