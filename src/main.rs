//! Road Rivals entry point
//!
//! Native builds run a seeded headless demo and print a JSON summary.
//! wasm32 builds export a `WebMatch` handle; the page owns the
//! requestAnimationFrame loop, keyboard events, and all drawing.

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use wasm_bindgen::prelude::*;

    use road_rivals::input::{InputState, KeyBindings};
    use road_rivals::sim::{MatchState, TickInput, tick};

    #[wasm_bindgen(start)]
    fn init() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }

    /// One running match plus its input plumbing
    #[wasm_bindgen]
    pub struct WebMatch {
        state: MatchState,
        input: InputState,
        bindings: [KeyBindings; 2],
    }

    #[wasm_bindgen]
    impl WebMatch {
        /// Start a match with two rider display names
        #[wasm_bindgen(constructor)]
        pub fn new(seed: u64, rider1: String, rider2: String) -> WebMatch {
            WebMatch {
                state: MatchState::new(seed, [rider1, rider2]),
                input: InputState::new(),
                bindings: [KeyBindings::wasd(), KeyBindings::arrows()],
            }
        }

        /// New match, same session records
        pub fn restart(&mut self, seed: u64, rider1: String, rider2: String) {
            self.state.restart(seed, [rider1, rider2]);
            self.input.clear();
        }

        /// Forward a KeyboardEvent.key from the page's keydown handler
        pub fn key_down(&mut self, key: &str) {
            self.input.key_down(key);
        }

        /// Forward a KeyboardEvent.key from the page's keyup handler
        pub fn key_up(&mut self, key: &str) {
            self.input.key_up(key);
        }

        /// One simulation step; call once per animation frame
        pub fn frame(&mut self) {
            let input = TickInput {
                riders: [
                    self.bindings[0].resolve(&self.input),
                    self.bindings[1].resolve(&self.input),
                ],
            };
            tick(&mut self.state, &input);
        }

        pub fn running(&self) -> bool {
            self.state.running
        }

        /// Full renderable state for the page, as JSON
        pub fn snapshot_json(&self) -> String {
            serde_json::to_string(&self.state.snapshot()).unwrap_or_default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use road_rivals::input::DirectionFlags;
    use road_rivals::sim::{LevelTable, MatchState, TickInput, tick};

    env_logger::init();

    LevelTable::standard().validate()?;

    let seed = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u64>())
        .transpose()?
        .unwrap_or(0x0AD5);

    let mut state = MatchState::new(seed, ["Player 1".to_string(), "Player 2".to_string()]);

    // Scripted demo: both riders drift onto a lane center and hold position,
    // so the first obstacle in their lane ends their run.
    let drift = TickInput {
        riders: [
            DirectionFlags {
                left: true,
                ..Default::default()
            },
            DirectionFlags {
                right: true,
                ..Default::default()
            },
        ],
    };
    let hold = TickInput::default();

    const FRAME_CAP: u64 = 100_000;
    while state.running && state.frame < FRAME_CAP {
        let input = if state.frame < 10 { drift } else { hold };
        tick(&mut state, &input);
    }

    let snapshot = state.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
