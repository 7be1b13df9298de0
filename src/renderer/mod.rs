//! Canvas 2D painting
//!
//! Paints whatever state it is handed; owns nothing but the drawing context.
//! Asteroids are drawn as circles even though collision treats them as
//! squares of the same size.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::besttime::format_time;
use crate::consts::{ASTEROID_SIZE, PLAYER_SIZE};
use crate::sim::GameState;

const PLAYER_COLOR: &str = "red";
const ASTEROID_COLOR: &str = "gray";
const HUD_COLOR: &str = "white";
const HUD_FONT: &str = "20px Arial";

pub struct Painter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let ctx = canvas
            .get_context("2d")
            .expect("failed to query 2d context")
            .expect("2d context unavailable")
            .dyn_into::<CanvasRenderingContext2d>()
            .expect("not a 2d context");
        Self { canvas, ctx }
    }

    /// Paint one frame: field, player, HUD
    pub fn draw(&self, state: &GameState, best_ms: u64) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);

        self.ctx.set_fill_style_str(PLAYER_COLOR);
        self.ctx.fill_rect(
            state.player.pos.x as f64,
            state.player.pos.y as f64,
            PLAYER_SIZE as f64,
            PLAYER_SIZE as f64,
        );

        self.ctx.set_fill_style_str(ASTEROID_COLOR);
        let r = (ASTEROID_SIZE / 2.0) as f64;
        for asteroid in &state.asteroids {
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                asteroid.pos.x as f64 + r,
                asteroid.pos.y as f64 + r,
                r,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.fill();
            self.ctx.close_path();
        }

        self.ctx.set_fill_style_str(HUD_COLOR);
        self.ctx.set_font(HUD_FONT);
        let _ = self
            .ctx
            .fill_text(&format!("Best time: {}", format_time(best_ms)), 10.0, 30.0);
        let _ = self.ctx.fill_text(
            &format!("Time: {}", format_time(state.elapsed_ms())),
            10.0,
            60.0,
        );
    }
}
