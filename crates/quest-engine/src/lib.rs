pub mod api;
pub mod bridge;
pub mod core;
pub mod input;
pub mod level;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use crate::api::types::{EngineStatus, SoundCue};
pub use crate::bridge::protocol::ProtocolLayout;
pub use crate::core::engine::{Gem, PlatformerEngine, Surface};
pub use crate::core::geom::Aabb;
pub use crate::core::pacer::TickPacer;
pub use crate::core::player::{Facing, Player};
pub use crate::input::state::{Action, InputState};
pub use crate::level::{EntitySizes, Level, Point, Size};
pub use crate::renderer::camera::ScrollCamera;
pub use crate::renderer::instance::{Paint, ShapeBuffer, ShapeInstance, ShapeKind, Space};
pub use crate::systems::draw::build_frame;
pub use crate::systems::text::{push_text, text_width};
