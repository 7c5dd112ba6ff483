/// One-shot sound effects
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Effect {
    Eat,
    Crash,
}

/// What the background track should do
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Music {
    /// Start looping from the beginning
    Play,
    Pause,
    Resume,
    Stop,
}

/// Audio output as seen by the game, playback problems are the
/// implementation's business and never interrupt the game
pub trait SoundBoard {
    fn play(&mut self, effect: Effect);
    fn music(&mut self, cue: Music);
    fn set_muted(&mut self, muted: bool);
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[derive(Copy, Clone, Eq, PartialEq, Debug)]
    pub enum Heard {
        Effect(Effect),
        Music(Music),
        Muted(bool),
    }

    #[derive(Default)]
    pub struct RecordingSounds {
        pub heard: Vec<Heard>,
    }

    impl SoundBoard for RecordingSounds {
        fn play(&mut self, effect: Effect) {
            self.heard.push(Heard::Effect(effect));
        }

        fn music(&mut self, cue: Music) {
            self.heard.push(Heard::Music(cue));
        }

        fn set_muted(&mut self, muted: bool) {
            self.heard.push(Heard::Muted(muted));
        }
    }
}
