/// Logical input actions the engine understands.
/// Device decoding (keyboard, touch drag, on-screen buttons) is the
/// host's job; identical physics regardless of input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::MoveLeft, Action::MoveRight, Action::Jump];

    /// Resolve a logical action name. Unrecognized names map to `None` so
    /// hosts can carry extra actions the engine does not use yet.
    pub fn from_name(name: &str) -> Option<Action> {
        match name {
            "move-left" => Some(Action::MoveLeft),
            "move-right" => Some(Action::MoveRight),
            "jump" => Some(Action::Jump),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::MoveLeft => "move-left",
            Action::MoveRight => "move-right",
            Action::Jump => "jump",
        }
    }

    fn index(self) -> usize {
        match self {
            Action::MoveLeft => 0,
            Action::MoveRight => 1,
            Action::Jump => 2,
        }
    }
}

/// Live pressed/released mapping, written by the host as device events
/// arrive and read by the engine at the start of each update. Both sides
/// share one thread in the browser execution model, so no synchronization
/// is needed, only the convention that event handlers never call back
/// into the simulation directly.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: [bool; Action::ALL.len()],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, action: Action, pressed: bool) {
        self.held[action.index()] = pressed;
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    /// Apply a press/release by logical name. Returns whether the name was
    /// recognized; unknown names are silently ignored.
    pub fn apply_name(&mut self, name: &str, pressed: bool) -> bool {
        match Action::from_name(name) {
            Some(action) => {
                self.set(action, pressed);
                true
            }
            None => false,
        }
    }

    /// Release everything, e.g. when the host loses focus or swaps levels.
    pub fn release_all(&mut self) {
        self.held = [false; Action::ALL.len()];
    }
}
