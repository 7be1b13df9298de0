//! Astro Dodge entry point
//!
//! Handles platform-specific initialization and wires browser timers, the
//! keyboard and the canvas to the simulation.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use astro_dodge::besttime::BestTime;
    use astro_dodge::consts::*;
    use astro_dodge::renderer::Painter;
    use astro_dodge::sim::{Bounds, Direction, Session, TickOutcome};

    /// Game instance holding all state
    struct Game {
        session: Session,
        painter: Painter,
        canvas: HtmlCanvasElement,
    }

    impl Game {
        /// Resize the canvas to the full window and return the play bounds.
        /// Called at startup and again after every run ends.
        fn sample_bounds(canvas: &HtmlCanvasElement) -> Bounds {
            let window = web_sys::window().expect("no window");
            let width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(800.0);
            let height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(600.0);
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            Bounds::new(width as f32, height as f32)
        }

        /// Run one frame: simulate, finalize a finished run, repaint
        fn frame(&mut self) {
            match self.session.tick() {
                TickOutcome::Running => {}
                TickOutcome::Collided {
                    elapsed_ms,
                    new_best,
                } => {
                    log::info!("run over after {} ms", elapsed_ms);
                    if new_best {
                        self.session.best.save();
                    }
                    let bounds = Self::sample_bounds(&self.canvas);
                    self.session.restart(bounds);
                }
            }
            self.painter
                .draw(&self.session.state, self.session.best.millis);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Astro Dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let bounds = Game::sample_bounds(&canvas);
        let seed = js_sys::Date::now() as u64;
        let session = Session::new(bounds, seed, BestTime::load());
        log::info!("Game initialized with seed: {}", seed);

        let painter = Painter::new(canvas.clone());
        let game = Rc::new(RefCell::new(Game {
            session,
            painter,
            canvas,
        }));

        setup_keyboard(game.clone());
        setup_timers(game);

        log::info!("Astro Dodge running!");
    }

    /// Map wasd and the arrow keys to movement; everything else is ignored.
    /// Bound once for the page lifetime, so input survives every reset.
    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let dir = match event.key().as_str() {
                "w" | "W" | "ArrowUp" => Some(Direction::Up),
                "a" | "A" | "ArrowLeft" => Some(Direction::Left),
                "s" | "S" | "ArrowDown" => Some(Direction::Down),
                "d" | "D" | "ArrowRight" => Some(Direction::Right),
                _ => None,
            };
            if let Some(dir) = dir {
                game.borrow_mut().session.input(dir);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Bind the fixed-rate tick and the slow escalation interval, once.
    /// Both run for the page lifetime; escalation deliberately keeps firing
    /// across resets so consecutive runs get harder.
    fn setup_timers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                game.borrow_mut().frame();
            });
            window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    TICK_MS as i32,
                )
                .expect("failed to start tick interval");
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut()>::new(move || {
                game.borrow_mut().session.escalate();
            });
            window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    ESCALATION_MS as i32,
                )
                .expect("failed to start escalation interval");
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Astro Dodge (native) starting...");
    log::info!("The game targets the browser - run with `trunk serve` for the web version");

    smoke_check();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_check() {
    use astro_dodge::consts::INITIAL_ASTEROIDS;
    use astro_dodge::sim::{Bounds, GameState, player_hit};

    let state = GameState::new(Bounds::new(800.0, 600.0), 7);
    assert_eq!(state.asteroids.len(), INITIAL_ASTEROIDS as usize);
    assert!(!player_hit(&state.player, &state.asteroids));
    println!("✓ Simulation smoke check passed!");
}
