#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate lazy_static;

use ggez::{event, ContextBuilder};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use crate::app::app_error::{AppError, AppErrorConversion, AppResult};
use crate::app::prefs::Prefs;
use crate::app::App;

mod app;
mod basic;
mod game;

fn main() -> AppResult {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let prefs = Prefs::default();

    let (mut ctx, event_loop) = ContextBuilder::new("snake_apple", "gorilskij")
        .window_mode(prefs.window_mode())
        .window_setup(prefs.window_setup())
        .add_resource_path(prefs.resource_dir.clone())
        .build()
        .map_err(AppError::from)
        .with_trace_step("main")?;

    let app = App::new(&mut ctx, prefs).with_trace_step("main")?;
    event::run(ctx, event_loop, app)
}
