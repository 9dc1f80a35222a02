pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game built on the quest
/// runner.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (init, tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use quest_web::GameRunner;
///
/// mod levels;
///
/// quest_web::export_quest!(levels::all, "treasure-quest");
/// ```
///
/// # Arguments
///
/// - `$catalog`: a function returning the game's `Vec<Level>`
/// - `$game_name`: a string literal used in the initialization log message
#[macro_export]
macro_rules! export_quest {
    ($catalog:expr, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init(surface_width: f32, surface_height: f32) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let runner = $crate::GameRunner::new($catalog(), surface_width, surface_height);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        // ---- Input ----

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.key_down(key_code));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.key_up(key_code));
        }

        #[wasm_bindgen]
        pub fn game_action(name: &str, pressed: bool) -> bool {
            with_runner(|r| r.action(name, pressed))
        }

        // ---- Level lifecycle ----

        #[wasm_bindgen]
        pub fn game_select_level(id: u32) -> bool {
            with_runner(|r| r.select_level(id))
        }

        #[wasm_bindgen]
        pub fn game_advance_level() -> bool {
            with_runner(|r| r.advance_level())
        }

        #[wasm_bindgen]
        pub fn game_reset() {
            with_runner(|r| r.reset());
        }

        #[wasm_bindgen]
        pub fn game_set_checkpoint(x: f32, y: f32) {
            with_runner(|r| r.set_checkpoint(x, y));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_shapes_ptr() -> *const f32 {
            with_runner(|r| r.shapes_ptr())
        }

        #[wasm_bindgen]
        pub fn get_shape_count() -> u32 {
            with_runner(|r| r.shape_count())
        }

        #[wasm_bindgen]
        pub fn get_sound_cues_ptr() -> *const u8 {
            with_runner(|r| r.sound_cues_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sound_cue_count() -> u32 {
            with_runner(|r| r.sound_cue_count())
        }

        // ---- Status polls ----

        #[wasm_bindgen]
        pub fn get_camera_x() -> f32 {
            with_runner(|r| r.camera_x())
        }

        #[wasm_bindgen]
        pub fn get_status() -> u32 {
            with_runner(|r| r.status_code())
        }

        #[wasm_bindgen]
        pub fn get_level_complete() -> bool {
            with_runner(|r| r.level_complete())
        }

        #[wasm_bindgen]
        pub fn get_game_over() -> bool {
            with_runner(|r| r.game_over())
        }

        #[wasm_bindgen]
        pub fn get_lives() -> u32 {
            with_runner(|r| r.lives())
        }

        #[wasm_bindgen]
        pub fn get_gems() -> u32 {
            with_runner(|r| r.gems())
        }

        #[wasm_bindgen]
        pub fn get_level_id() -> u32 {
            with_runner(|r| r.level_id())
        }

        #[wasm_bindgen]
        pub fn get_level_name() -> String {
            with_runner(|r| r.level_name())
        }

        #[wasm_bindgen]
        pub fn get_level_width() -> f32 {
            with_runner(|r| r.level_width())
        }

        #[wasm_bindgen]
        pub fn get_level_height() -> f32 {
            with_runner(|r| r.level_height())
        }

        #[wasm_bindgen]
        pub fn get_level_count() -> u32 {
            with_runner(|r| r.level_count())
        }

        #[wasm_bindgen]
        pub fn get_is_last_level() -> bool {
            with_runner(|r| r.is_last_level())
        }

        #[wasm_bindgen]
        pub fn get_surface_width() -> f32 {
            with_runner(|r| r.surface_width())
        }

        #[wasm_bindgen]
        pub fn get_surface_height() -> f32 {
            with_runner(|r| r.surface_height())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_shapes() -> u32 {
            with_runner(|r| r.max_shapes())
        }

        #[wasm_bindgen]
        pub fn get_max_sounds() -> u32 {
            with_runner(|r| r.max_sounds())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
