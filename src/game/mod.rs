use log::{debug, info, trace, warn};
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

use crate::basic::{CellPoint, GridDim, Heading};
use apple::Apple;
use collision::Crash;
use input::{Command, TurnQueue};
use score::HighScore;
use snake::Snake;
use sound::{Effect, Music, SoundBoard};

pub use difficulty::Difficulty;

pub mod apple;
pub mod collision;
mod difficulty;
pub mod input;
pub mod render;
pub mod score;
pub mod snake;
pub mod sound;

/// Everything needed to lay out a fresh game
#[derive(Copy, Clone, Debug)]
pub struct Rules {
    pub grid: GridDim,
    pub start: CellPoint,
    pub start_heading: Heading,
    pub initial_len: usize,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Start,
    Playing,
    Paused,
    GameOver,
}

/// Whether the main loop should keep going after a command
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Flow {
    Continue,
    Quit,
}

/// What happened during a tick
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Tick {
    /// Nothing to simulate in the current state
    Idle,
    Moved,
    Ate,
    Crashed(Crash),
}

pub struct Game<R: Rng = ThreadRng> {
    rules: Rules,
    state: State,
    difficulty: Difficulty,

    snake: Snake,
    apple: Apple,
    turns: TurnQueue,

    high_score: HighScore,
    /// High score when the current game started
    previous_best: u32,
    muted: bool,

    rng: R,
}

impl Game<ThreadRng> {
    pub fn new(rules: Rules, difficulty: Difficulty, high_score: HighScore) -> Self {
        Self::with_rng(rules, difficulty, high_score, thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(rules: Rules, difficulty: Difficulty, high_score: HighScore, mut rng: R) -> Self {
        assert!(
            rules.grid.num_cells() > rules.initial_len,
            "board too small for a snake of length {}",
            rules.initial_len
        );

        let snake = Snake::new(rules.start, rules.start_heading, rules.initial_len);
        let apple = Self::spawn_apple(rules, &snake, &mut rng);
        let previous_best = high_score.best();
        Self {
            rules,
            state: State::Start,
            difficulty,

            snake,
            apple,
            turns: TurnQueue::new(),

            high_score,
            previous_best,
            muted: false,

            rng,
        }
    }

    fn spawn_apple(rules: Rules, snake: &Snake, rng: &mut R) -> Apple {
        Apple::spawn(rules.grid, snake.segments(), rng).unwrap_or_else(|| {
            warn!("no room for an apple, placing it on the snake");
            Apple { pos: snake.tail() }
        })
    }

    /// Fresh snake and apple, the high score carries over
    fn reset(&mut self) {
        self.snake = Snake::new(self.rules.start, self.rules.start_heading, self.rules.initial_len);
        self.apple = Self::spawn_apple(self.rules, &self.snake, &mut self.rng);
        self.turns.clear();
        self.previous_best = self.high_score.best();
    }

    fn start_playing(&mut self, sounds: &mut impl SoundBoard) {
        self.reset();
        self.state = State::Playing;
        sounds.music(Music::Play);
        info!("new game ({})", self.difficulty);
    }

    pub fn handle(&mut self, command: Command, sounds: &mut impl SoundBoard) -> Flow {
        use Command::*;
        use State::*;

        match (self.state, command) {
            (_, Quit) => {
                info!("quitting");
                return Flow::Quit;
            }
            (_, ToggleMute) => {
                self.muted = !self.muted;
                sounds.set_muted(self.muted);
            }
            (Start, Confirm) => self.start_playing(sounds),
            (GameOver, Restart | Confirm) => self.start_playing(sounds),
            (Start | GameOver, SelectDifficulty(difficulty)) => {
                info!("difficulty set to {}", difficulty);
                self.difficulty = difficulty;
            }
            (Playing, TogglePause) => {
                self.state = Paused;
                sounds.music(Music::Pause);
            }
            (Paused, TogglePause) => {
                self.state = Playing;
                sounds.music(Music::Resume);
            }
            (Playing, Turn(heading)) => self.turns.push(heading, self.snake.heading()),
            (state, command) => trace!("ignored {:?} in state {:?}", command, state),
        }
        Flow::Continue
    }

    /// Advance the simulation by one step, does nothing unless playing
    pub fn tick(&mut self, sounds: &mut impl SoundBoard) -> Tick {
        if self.state != State::Playing {
            return Tick::Idle;
        }

        if let Some(turn) = self.turns.pop() {
            if !self.snake.change_heading(turn) {
                debug!("rejected turn {:?} while heading {:?}", turn, self.snake.heading());
            }
        }
        self.snake.advance();

        let mut outcome = Tick::Moved;

        if collision::eats_apple(&self.snake, self.apple.pos) {
            self.snake.grow();
            self.apple
                .relocate(self.rules.grid, self.snake.segments(), &mut self.rng);
            sounds.play(Effect::Eat);
            if self.high_score.submit(self.score()) {
                debug!("new high score {}", self.score());
            }
            outcome = Tick::Ate;
        }

        if let Some(crash) = collision::find_crash(&self.snake, self.rules.grid) {
            self.state = State::GameOver;
            sounds.play(Effect::Crash);
            sounds.music(Music::Stop);
            info!("game over ({:?}), score {}", crash, self.score());
            if self.new_record() {
                info!("new high score: {}", self.high_score.best());
            }
            outcome = Tick::Crashed(crash);
        }

        outcome
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn score(&self) -> u32 {
        (self.snake.len() - self.rules.initial_len) as u32
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best()
    }

    /// Whether the current game beat the record it started with
    pub fn new_record(&self) -> bool {
        self.score() > self.previous_best
    }

    pub fn muted(&self) -> bool {
        self.muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::render::tests::RecordingRenderer;
    use crate::game::render::Sprite;
    use crate::game::score::tests::MemoryStore;
    use crate::game::sound::tests::{Heard, RecordingSounds};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use Heading::*;

    const RULES: Rules = Rules {
        grid: GridDim { width: 20, height: 15 },
        start: CellPoint { x: 10, y: 7 },
        start_heading: Right,
        initial_len: 3,
    };

    fn game_with(rules: Rules, store: MemoryStore) -> Game<StdRng> {
        let high_score = HighScore::load(Box::new(store));
        Game::with_rng(rules, Difficulty::Normal, high_score, StdRng::seed_from_u64(11))
    }

    fn playing_game() -> (Game<StdRng>, RecordingSounds) {
        let mut sounds = RecordingSounds::default();
        let mut game = game_with(RULES, MemoryStore::default());
        game.handle(Command::Confirm, &mut sounds);
        assert_eq!(game.state(), State::Playing);
        (game, sounds)
    }

    /// Put the apple right in front of the snake
    fn feed(game: &mut Game<StdRng>) {
        game.apple.pos = game.snake.head().step(game.snake.heading());
    }

    /// Keep the apple away from the snake's path
    fn park_apple(game: &mut Game<StdRng>) {
        game.apple.pos = CellPoint { x: 0, y: 0 };
    }

    #[test]
    fn test_one_tick_without_input() {
        let (mut game, mut sounds) = playing_game();
        park_apple(&mut game);
        let before: Vec<_> = game.snake().segments().collect();

        assert_eq!(game.tick(&mut sounds), Tick::Moved);

        let after: Vec<_> = game.snake().segments().collect();
        assert_eq!(after.len(), 3);
        assert_eq!(after[0], before[0].step(Right));
        assert_eq!(&after[1..], &before[..2]);
        assert!(!after.contains(&before[2]));
    }

    #[test]
    fn test_eating_grows_and_moves_apple() {
        let (mut game, mut sounds) = playing_game();
        feed(&mut game);
        let old_apple = game.apple().pos;

        assert_eq!(game.tick(&mut sounds), Tick::Ate);

        assert_eq!(game.snake().len(), 4);
        assert_eq!(game.score(), 1);
        assert_ne!(game.apple().pos, old_apple);
        assert!(RULES.grid.contains(game.apple().pos));
        assert!(!game.snake().occupies(game.apple().pos));
        assert!(sounds.heard.contains(&Heard::Effect(Effect::Eat)));
    }

    #[test]
    fn test_length_after_n_apples() {
        let (mut game, mut sounds) = playing_game();
        for n in 1..=8 {
            let len_before = game.snake().len();
            feed(&mut game);
            assert_eq!(game.tick(&mut sounds), Tick::Ate, "apple {}", n);
            assert_eq!(game.snake().len(), len_before + 1);
        }
        assert_eq!(game.snake().len(), RULES.initial_len + 8);
        assert_eq!(game.score(), 8);
        assert_eq!(game.state(), State::Playing);
    }

    #[test]
    fn test_wall_ends_game() {
        let (mut game, mut sounds) = playing_game();
        park_apple(&mut game);
        let mut last = Tick::Idle;
        for _ in 0..RULES.grid.width {
            last = game.tick(&mut sounds);
            if last != Tick::Moved {
                break;
            }
        }
        assert_eq!(last, Tick::Crashed(Crash::Wall));
        assert_eq!(game.state(), State::GameOver);
        assert_eq!(game.snake().head().x, RULES.grid.width);
        assert!(sounds.heard.contains(&Heard::Effect(Effect::Crash)));
        assert_eq!(sounds.heard.last(), Some(&Heard::Music(Music::Stop)));

        // nothing moves once the game is over
        let head = game.snake().head();
        assert_eq!(game.tick(&mut sounds), Tick::Idle);
        assert_eq!(game.snake().head(), head);
    }

    #[test]
    fn test_self_bite_ends_game() {
        let rules = Rules { initial_len: 5, ..RULES };
        let mut sounds = RecordingSounds::default();
        let mut game = game_with(rules, MemoryStore::default());
        game.handle(Command::Confirm, &mut sounds);
        park_apple(&mut game);

        let mut outcomes = vec![];
        for turn in [Down, Left, Up] {
            game.handle(Command::Turn(turn), &mut sounds);
            outcomes.push(game.tick(&mut sounds));
        }
        assert_eq!(outcomes, vec![Tick::Moved, Tick::Moved, Tick::Crashed(Crash::SelfBite)]);
        assert_eq!(game.state(), State::GameOver);
    }

    #[test]
    fn test_reverse_turn_ignored() {
        let (mut game, mut sounds) = playing_game();
        park_apple(&mut game);
        let head = game.snake().head();
        game.handle(Command::Turn(Left), &mut sounds);
        game.tick(&mut sounds);
        assert_eq!(game.snake().heading(), Right);
        assert_eq!(game.snake().head(), head.step(Right));
    }

    #[test]
    fn test_quick_double_turn_is_not_a_reversal() {
        let (mut game, mut sounds) = playing_game();
        park_apple(&mut game);
        let head = game.snake().head();
        game.handle(Command::Turn(Up), &mut sounds);
        game.handle(Command::Turn(Left), &mut sounds);

        game.tick(&mut sounds);
        assert_eq!(game.snake().head(), head.step(Up));
        game.tick(&mut sounds);
        assert_eq!(game.snake().head(), head.step(Up).step(Left));
        assert_eq!(game.state(), State::Playing);
    }

    #[test]
    fn test_start_screen_waits_for_confirm() {
        let mut sounds = RecordingSounds::default();
        let mut game = game_with(RULES, MemoryStore::default());
        let head = game.snake().head();
        assert_eq!(game.tick(&mut sounds), Tick::Idle);
        game.handle(Command::Turn(Up), &mut sounds);
        game.handle(Command::TogglePause, &mut sounds);
        assert_eq!(game.state(), State::Start);
        assert_eq!(game.snake().head(), head);

        game.handle(Command::Confirm, &mut sounds);
        assert_eq!(game.state(), State::Playing);
        assert_eq!(sounds.heard, vec![Heard::Music(Music::Play)]);
    }

    #[test]
    fn test_pause_freezes_snake() {
        let (mut game, mut sounds) = playing_game();
        park_apple(&mut game);
        game.handle(Command::TogglePause, &mut sounds);
        assert_eq!(game.state(), State::Paused);

        let head = game.snake().head();
        game.handle(Command::Turn(Up), &mut sounds);
        assert_eq!(game.tick(&mut sounds), Tick::Idle);
        assert_eq!(game.snake().head(), head);

        game.handle(Command::TogglePause, &mut sounds);
        assert_eq!(game.state(), State::Playing);
        game.tick(&mut sounds);
        // the turn entered while paused was dropped
        assert_eq!(game.snake().head(), head.step(Right));
        assert!(sounds.heard.ends_with(&[Heard::Music(Music::Pause), Heard::Music(Music::Resume)]));
    }

    #[test]
    fn test_restart_after_game_over() {
        let (mut game, mut sounds) = playing_game();
        feed(&mut game);
        game.tick(&mut sounds);
        assert_eq!(game.score(), 1);
        park_apple(&mut game);
        while game.tick(&mut sounds) != Tick::Crashed(Crash::Wall) {}

        game.handle(Command::SelectDifficulty(Difficulty::Hard), &mut sounds);
        game.handle(Command::Restart, &mut sounds);
        assert_eq!(game.state(), State::Playing);
        assert_eq!(game.difficulty(), Difficulty::Hard);
        assert_eq!(game.score(), 0);
        assert_eq!(game.snake().head(), RULES.start);
        assert_eq!(game.high_score(), 1);

        // only a finished game can be restarted
        game.tick(&mut sounds);
        game.handle(Command::Restart, &mut sounds);
        assert_eq!(game.state(), State::Playing);
        assert_eq!(game.snake().head(), RULES.start.step(Right));
    }

    #[test]
    fn test_difficulty_locked_while_playing() {
        let (mut game, mut sounds) = playing_game();
        game.handle(Command::SelectDifficulty(Difficulty::Easy), &mut sounds);
        assert_eq!(game.difficulty(), Difficulty::Normal);
    }

    #[test]
    fn test_quit_from_every_state() {
        let (mut game, mut sounds) = playing_game();
        assert_eq!(game.handle(Command::Quit, &mut sounds), Flow::Quit);
        game.handle(Command::TogglePause, &mut sounds);
        assert_eq!(game.handle(Command::Quit, &mut sounds), Flow::Quit);

        let mut fresh = game_with(RULES, MemoryStore::default());
        assert_eq!(fresh.handle(Command::Quit, &mut sounds), Flow::Quit);
        assert_eq!(fresh.handle(Command::Confirm, &mut sounds), Flow::Continue);
    }

    #[test]
    fn test_mute_toggles_in_any_state() {
        let mut sounds = RecordingSounds::default();
        let mut game = game_with(RULES, MemoryStore::default());
        game.handle(Command::ToggleMute, &mut sounds);
        assert!(game.muted());
        game.handle(Command::Confirm, &mut sounds);
        game.handle(Command::ToggleMute, &mut sounds);
        assert!(!game.muted());
        assert_eq!(
            sounds.heard,
            vec![Heard::Muted(true), Heard::Music(Music::Play), Heard::Muted(false)]
        );
    }

    #[test]
    fn test_high_score_saved_only_on_record() {
        let store = MemoryStore { initial: Some(1), ..Default::default() };
        let saved = store.saved.clone();
        let mut sounds = RecordingSounds::default();
        let mut game = game_with(RULES, store);
        game.handle(Command::Confirm, &mut sounds);
        assert_eq!(game.high_score(), 1);

        feed(&mut game);
        game.tick(&mut sounds);
        assert_eq!(game.score(), 1);
        assert!(!game.new_record());
        assert!(saved.borrow().is_empty());

        feed(&mut game);
        game.tick(&mut sounds);
        assert_eq!(game.high_score(), 2);
        assert!(game.new_record());
        assert_eq!(*saved.borrow(), vec![2]);
    }

    #[test]
    fn test_crashed_head_stays_off_screen() {
        let (mut game, mut sounds) = playing_game();
        park_apple(&mut game);
        game.handle(Command::Turn(Up), &mut sounds);
        while game.tick(&mut sounds) != Tick::Crashed(Crash::Wall) {}
        assert_eq!(game.snake().head(), CellPoint { x: 10, y: -1 });

        let mut renderer = RecordingRenderer::default();
        game.render(&mut renderer);
        let sprites = renderer.sprites();
        assert!(sprites.iter().all(|(_, cell)| RULES.grid.contains(*cell)));
        assert_eq!(sprites.len(), game.snake().len());
        assert!(!sprites
            .iter()
            .any(|(sprite, _)| matches!(sprite, Sprite::Block { index: 0, .. })));
    }

    #[test]
    fn test_render_draws_snake_then_apple() {
        let (mut game, mut sounds) = playing_game();
        park_apple(&mut game);
        game.tick(&mut sounds);

        let mut renderer = RecordingRenderer::default();
        game.render(&mut renderer);
        let sprites = renderer.sprites();
        assert_eq!(sprites.len(), game.snake().len() + 1);
        assert_eq!(sprites[0], (Sprite::Block { index: 0, len: 3 }, game.snake().head()));
        assert_eq!(sprites.last(), Some(&(Sprite::Apple, CellPoint { x: 0, y: 0 })));
        assert!(renderer.texts().iter().any(|t| t.starts_with("Score: 0")));
    }

    #[test]
    fn test_render_banners() {
        let mut sounds = RecordingSounds::default();
        let mut game = game_with(RULES, MemoryStore::default());

        let mut renderer = RecordingRenderer::default();
        game.render(&mut renderer);
        assert!(renderer.sprites().is_empty());
        assert!(renderer.texts().contains(&"Press Enter to start"));

        game.handle(Command::Confirm, &mut sounds);
        game.handle(Command::TogglePause, &mut sounds);
        let mut renderer = RecordingRenderer::default();
        game.render(&mut renderer);
        assert!(renderer.texts().contains(&"Paused"));

        game.handle(Command::TogglePause, &mut sounds);
        park_apple(&mut game);
        while game.tick(&mut sounds) != Tick::Crashed(Crash::Wall) {}
        let mut renderer = RecordingRenderer::default();
        game.render(&mut renderer);
        assert!(renderer.texts().contains(&"Game over! Your score is 0"));
    }
}
