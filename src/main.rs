//! Catch Ball entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, TouchEvent};

    use catch_ball::Settings;
    use catch_ball::audio::AudioManager;
    use catch_ball::consts::*;
    use catch_ball::platform::dom::DomSink;
    use catch_ball::platform::{KeyAction, key_action};
    use catch_ball::sim::{GamePhase, TickInput, World, tick};

    /// Game instance holding all state
    struct Game {
        world: World,
        sink: DomSink,
        audio: Rc<AudioManager>,
        accumulator: f64,
        last_time: f64,
        input: TickInput,
    }

    impl Game {
        /// Run simulation steps for the elapsed frame time
        fn update(&mut self, dt_ms: f64) {
            let dt_ms = dt_ms.min(100.0);
            self.accumulator += dt_ms;

            let (width, height) = self.sink.field_size();
            let field = self.world.playfield.field;
            if width != field.width || height != field.height {
                self.world.playfield.resize(width, height);
            }

            let mut substeps = 0;
            while self.accumulator >= STEP_MS && substeps < MAX_SUBSTEPS {
                let input = self.input.clone();
                tick(&mut self.world, &input);
                self.accumulator -= STEP_MS;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.nudge = None;
                self.input.pointer_x = None;
                self.input.restart = false;
            }
            if substeps == MAX_SUBSTEPS {
                self.accumulator = 0.0;
            }

            self.world.dispatch_events(&mut self.sink);
        }

        fn render(&mut self) {
            self.sink.sync(&self.world);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Catch Ball starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = Settings::load();
        let audio = Rc::new(AudioManager::new(settings.effective_volume()));

        let Some(sink) = DomSink::new(document.clone(), audio.clone(), settings.effective_flashes()) else {
            log::error!("No #gameArea element - nothing to play in");
            return;
        };

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let mut world = World::new(seed, settings.ruleset);
        let (width, height) = sink.field_size();
        world.playfield.resize(width, height);
        if let Some((w, h)) = sink.basket_size() {
            world.playfield.basket.width = w;
            world.playfield.basket.height = h;
        }
        world.playfield.basket.recenter(world.playfield.field.width);

        log::info!(
            "Game initialized with seed: {} ({} rules, field {}x{})",
            seed,
            settings.ruleset.as_str(),
            width,
            height
        );

        let game = Rc::new(RefCell::new(Game {
            world,
            sink,
            audio,
            accumulator: 0.0,
            last_time: 0.0,
            input: TickInput::default(),
        }));

        setup_input_handlers(game.clone());
        setup_restart_button(game.clone());
        setup_audio_unlock(game.clone());

        {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            g.sink.sync(&g.world);
        }

        request_animation_frame(game);

        log::info!("Catch Ball running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match key_action(&event.key()) {
                    Some(KeyAction::Nudge(dir)) => {
                        event.prevent_default();
                        g.input.nudge = Some(dir);
                    }
                    Some(KeyAction::ToggleAutopilot) => {
                        g.input.autopilot = !g.input.autopilot;
                        log::info!("Autopilot: {}", g.input.autopilot);
                    }
                    Some(KeyAction::Restart) => {
                        if g.world.phase() == GamePhase::Over {
                            g.input.restart = true;
                        }
                    }
                    None => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start / move - center basket under the finger
        let game_area = game.borrow().sink.game_area().clone();
        for event_name in ["touchstart", "touchmove"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let Some(touch) = event.touches().get(0) else { return };
                let mut g = game.borrow_mut();
                let x = touch.client_x() as f32 - g.sink.field_left();
                g.input.pointer_x = Some(x);
            });
            let _ = game_area
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_audio_unlock(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let audio = game.borrow().audio.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            audio.unlock();
        });
        let _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt_ms = if g.last_time > 0.0 {
                time - g.last_time
            } else {
                STEP_MS
            };
            g.last_time = time;

            g.update(dt_ms);
            g.render();
        }

        request_animation_frame(game);
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restartBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().input.restart = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
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
    use catch_ball::Settings;
    use catch_ball::platform::run_headless;

    /// Five simulated minutes
    const DEMO_STEPS: u64 = 5 * 60 * 50;

    env_logger::init();
    log::info!("Catch Ball (native) starting...");
    log::info!("Native mode runs a headless autopilot session - use `trunk serve` for the web version");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let report = run_headless(seed, settings.ruleset, DEMO_STEPS);
    log::info!(
        "Finished after {:.1}s: score {}, lives {}",
        report.simulated_secs,
        report.session.score,
        report.session.lives
    );
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => log::warn!("Could not serialize report: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
