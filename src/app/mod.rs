use std::thread;
use std::time::Duration;

use ggez::event::EventHandler;
use ggez::graphics::{Canvas, DrawParam, Mesh};
use ggez::input::keyboard::KeyInput;
use ggez::Context;
use log::trace;

use crate::app::app_error::{AppError, AppErrorConversion, AppResult};
use crate::app::audio::Audio;
use crate::app::control::Control;
use crate::app::drawing::{generate_hud_mesh, CanvasRenderer, Sprites};
use crate::app::palette::Palette;
use crate::app::prefs::Prefs;
use crate::game::score::{FileStore, HighScore};
use crate::game::{Flow, Game, State};

pub mod app_error;
mod audio;
mod control;
mod drawing;
pub mod keyboard_control;
mod palette;
pub mod prefs;

pub struct App {
    game: Game,
    control: Control,

    sprites: Sprites,
    hud_mesh: Mesh,
    audio: Audio,
    palette: Palette,
    prefs: Prefs,
}

impl App {
    /// Never wait longer than a frame so input stays responsive
    const MAX_SLEEP: Duration = Duration::from_millis(16);

    pub fn new(ctx: &mut Context, prefs: Prefs) -> AppResult<Self> {
        let palette = Palette::default();
        let sprites = Sprites::load(ctx).with_trace_step("App::new")?;
        let hud_mesh = generate_hud_mesh(ctx, &prefs, &palette).with_trace_step("App::new")?;
        let audio = Audio::load(ctx, &prefs).with_trace_step("App::new")?;

        let store = FileStore::new(prefs.high_score_path.clone());
        let game = Game::new(prefs.rules(), prefs.difficulty, HighScore::load(Box::new(store)));
        let control = Control::new(prefs.difficulty.tick_interval());

        Ok(Self {
            game,
            control,

            sprites,
            hud_mesh,
            audio,
            palette,
            prefs,
        })
    }

    /// Keep the tick clock in line with the state of the game
    fn sync_control(&mut self) {
        self.control
            .set_tick_interval(self.game.difficulty().tick_interval());
        if self.game.state() == State::Playing {
            self.control.play();
        } else {
            self.control.pause();
        }
    }
}

impl EventHandler<AppError> for App {
    fn update(&mut self, ctx: &mut Context) -> AppResult {
        self.sync_control();

        while self.control.can_update() {
            let mut sounds = self.audio.bind(ctx);
            let tick = self.game.tick(&mut sounds);
            trace!("tick: {:?}", tick);

            // a crash stops the clock before any catch-up ticks run
            self.sync_control();
        }

        if self.control.is_running() {
            thread::sleep(self.control.until_next_tick().min(Self::MAX_SLEEP));
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> AppResult {
        let mut canvas = Canvas::from_frame(ctx, self.palette.background);
        canvas.draw(&self.hud_mesh, DrawParam::default());

        let mut renderer = CanvasRenderer {
            canvas: &mut canvas,
            sprites: &self.sprites,
            palette: &self.palette,
            prefs: &self.prefs,
        };
        self.game.render(&mut renderer);

        canvas
            .finish(ctx)
            .map_err(AppError::from)
            .with_trace_step("App::draw")
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeated: bool) -> AppResult {
        let Some(command) = input
            .keycode
            .and_then(|key| self.prefs.controls.command(key))
        else {
            return Ok(());
        };
        if repeated && !command.repeats_when_held() {
            return Ok(());
        }

        let mut sounds = self.audio.bind(ctx);
        if self.game.handle(command, &mut sounds) == Flow::Quit {
            ctx.request_quit();
        }
        self.sync_control();
        Ok(())
    }
}
