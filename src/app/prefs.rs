use std::path::PathBuf;

use ggez::conf::{FullscreenType, WindowMode, WindowSetup};

use crate::app::keyboard_control::Controls;
use crate::basic::{CellPoint, GridDim, Heading};
use crate::game::{Difficulty, Rules};

pub struct Prefs {
    pub window_width: f32,
    pub window_height: f32,
    /// Side of a square cell in pixels
    pub cell_side: f32,
    /// Height of the strip above the board that holds the score
    pub hud_height: f32,
    pub font_size: f32,

    pub initial_len: usize,
    pub difficulty: Difficulty,

    pub music_volume: f32,
    pub effect_volume: f32,

    pub high_score_path: PathBuf,
    pub resource_dir: PathBuf,

    pub controls: Controls,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            window_width: 700.,
            window_height: 700.,
            cell_side: 20.,
            hud_height: 40.,
            font_size: 22.,

            initial_len: 3,
            difficulty: Difficulty::Normal,

            music_volume: 0.4,
            effect_volume: 1.,

            high_score_path: PathBuf::from("high_score.txt"),
            resource_dir: PathBuf::from("./resources"),

            controls: Controls::default(),
        }
    }
}

// derived values
impl Prefs {
    /// Playable cells, the hud strip is not part of the board
    pub fn grid_dim(&self) -> GridDim {
        GridDim {
            width: (self.window_width / self.cell_side) as i32,
            height: ((self.window_height - self.hud_height) / self.cell_side) as i32,
        }
    }

    pub fn rules(&self) -> Rules {
        let grid = self.grid_dim();
        Rules {
            grid,
            start: CellPoint { x: grid.width / 2 - 2, y: grid.height / 2 },
            start_heading: Heading::Right,
            initial_len: self.initial_len,
        }
    }

    pub fn window_mode(&self) -> WindowMode {
        WindowMode::default()
            .dimensions(self.window_width, self.window_height)
            .fullscreen_type(FullscreenType::Windowed)
            .resizable(false)
    }

    pub fn window_setup(&self) -> WindowSetup {
        WindowSetup::default().title("Snake & Apple").vsync(true)
    }
}

#[test]
fn test_default_grid_excludes_hud() {
    let prefs = Prefs::default();
    assert_eq!(prefs.grid_dim(), GridDim { width: 35, height: 33 });
}

#[test]
fn test_start_fits_on_board() {
    let prefs = Prefs::default();
    let rules = prefs.rules();
    let tail = rules
        .start
        .translate(-rules.start_heading, rules.initial_len as i32 - 1);
    assert!(rules.grid.contains(rules.start));
    assert!(rules.grid.contains(tail));
}
