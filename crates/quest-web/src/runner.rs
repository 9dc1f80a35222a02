use glam::Vec2;
use quest_engine::bridge::protocol::ProtocolLayout;
use quest_engine::{
    Action, InputState, Level, PlatformerEngine, ShapeBuffer, Surface, TickPacer,
};

/// The simulation cadence every level was tuned against.
const SIMULATION_HZ: f32 = 60.0;

/// The host loop: owns the level catalog and one engine instance per
/// attempt, translates device events into logical actions, paces the
/// fixed-step simulation, and exposes the frame's buffers to the
/// JavaScript renderer.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports
/// free functions via `#[wasm_bindgen]` (see `export_quest!`).
pub struct GameRunner {
    levels: Vec<Level>,
    current: usize,
    engine: PlatformerEngine,
    surface: Surface,
    input: InputState,
    frame: ShapeBuffer,
    pacer: TickPacer,
    layout: ProtocolLayout,
    /// Flat buffer of sound-cue codes for SharedArrayBuffer reads.
    sounds: Vec<u8>,
}

impl GameRunner {
    /// Build a runner over a non-empty catalog, starting on its first
    /// level. An empty catalog is a wiring bug in the game crate, not a
    /// runtime condition.
    pub fn new(levels: Vec<Level>, surface_width: f32, surface_height: f32) -> Self {
        let surface = Surface::new(surface_width, surface_height);
        let first = levels.first().cloned().expect("level catalog is empty");
        let layout = ProtocolLayout::default();
        Self {
            engine: PlatformerEngine::new(first, surface),
            levels,
            current: 0,
            surface,
            input: InputState::new(),
            frame: ShapeBuffer::with_capacity(layout.max_shapes),
            pacer: TickPacer::at_hz(SIMULATION_HZ),
            sounds: Vec::with_capacity(layout.max_sounds),
            layout,
        }
    }

    /// Run one animation frame: zero or more fixed simulation steps
    /// depending on the wall-clock delta, then one render pass.
    pub fn tick(&mut self, dt: f32) {
        let steps = self.pacer.advance(dt);
        self.sounds.clear();
        for _ in 0..steps {
            self.engine.update(&self.input);
            for cue in self.engine.drain_sounds() {
                if self.sounds.len() < self.layout.max_sounds {
                    self.sounds.push(cue.code());
                }
            }
        }
        self.engine.render(&mut self.frame);
    }

    // ---- Input translation (device → logical) ----

    /// Browser `keyCode` values the shipped hosts send.
    fn action_for_key(code: u32) -> Option<Action> {
        match code {
            37 | 65 => Some(Action::MoveLeft),  // ArrowLeft, A
            39 | 68 => Some(Action::MoveRight), // ArrowRight, D
            32 | 38 | 87 => Some(Action::Jump), // Space, ArrowUp, W
            _ => None,
        }
    }

    pub fn key_down(&mut self, code: u32) {
        if let Some(action) = Self::action_for_key(code) {
            self.input.set(action, true);
        }
    }

    pub fn key_up(&mut self, code: u32) {
        if let Some(action) = Self::action_for_key(code) {
            self.input.set(action, false);
        }
    }

    /// Press/release by logical action name, for on-screen buttons and
    /// touch-drag controls. Unknown names are ignored.
    pub fn action(&mut self, name: &str, pressed: bool) -> bool {
        self.input.apply_name(name, pressed)
    }

    // ---- Level lifecycle ----

    pub fn select_level(&mut self, id: u32) -> bool {
        match self.levels.iter().position(|level| level.id == id) {
            Some(index) => {
                self.start_level(index);
                true
            }
            None => {
                log::warn!("unknown level id {id}");
                false
            }
        }
    }

    /// Move to the next catalog entry. Returns false on the last level.
    pub fn advance_level(&mut self) -> bool {
        if self.current + 1 >= self.levels.len() {
            return false;
        }
        self.start_level(self.current + 1);
        true
    }

    /// Retry the current attempt in place.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.input.release_all();
    }

    pub fn set_checkpoint(&mut self, x: f32, y: f32) {
        self.engine.set_checkpoint(Vec2::new(x, y));
    }

    fn start_level(&mut self, index: usize) {
        self.current = index;
        let level = self.levels[index].clone();
        log::info!("starting level {} ({})", level.id, level.name);
        self.engine = PlatformerEngine::new(level, self.surface);
        self.input.release_all();
    }

    // ---- Data accessors for SharedArrayBuffer reads ----

    pub fn shapes_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn shape_count(&self) -> u32 {
        self.frame.len() as u32
    }

    pub fn sound_cues_ptr(&self) -> *const u8 {
        self.sounds.as_ptr()
    }

    pub fn sound_cue_count(&self) -> u32 {
        self.sounds.len() as u32
    }

    // ---- Status polls ----

    pub fn engine(&self) -> &PlatformerEngine {
        &self.engine
    }

    pub fn camera_x(&self) -> f32 {
        self.engine.camera_x()
    }

    pub fn status_code(&self) -> u32 {
        self.engine.status().code()
    }

    pub fn level_complete(&self) -> bool {
        self.engine.level_complete()
    }

    pub fn game_over(&self) -> bool {
        self.engine.game_over()
    }

    pub fn lives(&self) -> u32 {
        self.engine.lives()
    }

    pub fn gems(&self) -> u32 {
        self.engine.gems_collected()
    }

    pub fn level_id(&self) -> u32 {
        self.levels[self.current].id
    }

    pub fn level_name(&self) -> String {
        self.levels[self.current].name.clone()
    }

    pub fn level_width(&self) -> f32 {
        self.levels[self.current].width
    }

    pub fn level_height(&self) -> f32 {
        self.levels[self.current].height
    }

    pub fn level_count(&self) -> u32 {
        self.levels.len() as u32
    }

    pub fn is_last_level(&self) -> bool {
        self.current + 1 == self.levels.len()
    }

    pub fn surface_width(&self) -> f32 {
        self.surface.width
    }

    pub fn surface_height(&self) -> f32 {
        self.surface.height
    }

    // ---- Capacity accessors ----

    pub fn max_shapes(&self) -> u32 {
        self.layout.max_shapes as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.layout.max_sounds as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
