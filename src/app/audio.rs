use ggez::audio::{SoundSource, Source};
use ggez::{Context, GameResult};
use log::{debug, warn};

use crate::app::app_error::{AppError, AppErrorConversion, AppResult};
use crate::app::prefs::Prefs;
use crate::game::sound::{Effect, Music, SoundBoard};

pub struct Audio {
    eat: Source,
    crash: Source,
    music: Source,

    muted: bool,
    music_volume: f32,
    effect_volume: f32,
}

fn load_source(ctx: &mut Context, path: &str) -> AppResult<Source> {
    Source::new(ctx, path)
        .map_err(AppError::from)
        .with_trace_step(format!("load_source({})", path))
}

impl Audio {
    pub fn load(ctx: &mut Context, prefs: &Prefs) -> AppResult<Self> {
        let mut eat = load_source(ctx, "/ding.mp3")?;
        let mut crash = load_source(ctx, "/crash.mp3")?;
        let mut music = load_source(ctx, "/bg_music.mp3")?;

        eat.set_volume(prefs.effect_volume);
        crash.set_volume(prefs.effect_volume);
        music.set_volume(prefs.music_volume);
        music.set_repeat(true);

        Ok(Self {
            eat,
            crash,
            music,
            muted: false,
            music_volume: prefs.music_volume,
            effect_volume: prefs.effect_volume,
        })
    }

    /// Pair with the context for the duration of one event
    pub fn bind<'a>(&'a mut self, ctx: &'a Context) -> GgezSounds<'a> {
        GgezSounds { audio: self, ctx }
    }
}

pub struct GgezSounds<'a> {
    audio: &'a mut Audio,
    ctx: &'a Context,
}

impl GgezSounds<'_> {
    fn report(result: GameResult, what: &str) {
        if let Err(e) = result {
            warn!("audio: failed to {}: {}", what, e);
        }
    }
}

impl SoundBoard for GgezSounds<'_> {
    fn play(&mut self, effect: Effect) {
        if self.audio.muted {
            return;
        }
        let source = match effect {
            Effect::Eat => &mut self.audio.eat,
            Effect::Crash => &mut self.audio.crash,
        };
        Self::report(source.play_detached(self.ctx), "play effect");
    }

    fn music(&mut self, cue: Music) {
        let music = &mut self.audio.music;
        match cue {
            Music::Play => {
                let result = music.stop(self.ctx).and_then(|()| music.play(self.ctx));
                Self::report(result, "start music");
            }
            Music::Pause => music.pause(),
            Music::Resume => music.resume(),
            Music::Stop => Self::report(music.stop(self.ctx), "stop music"),
        }
    }

    fn set_muted(&mut self, muted: bool) {
        debug!("muted: {}", muted);
        let audio = &mut *self.audio;
        audio.muted = muted;

        let (music_volume, effect_volume) = if muted {
            (0., 0.)
        } else {
            (audio.music_volume, audio.effect_volume)
        };
        audio.music.set_volume(music_volume);
        audio.eat.set_volume(effect_volume);
        audio.crash.set_volume(effect_volume);
    }
}
