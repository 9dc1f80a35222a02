//! SharedArrayBuffer layout.
//! Must stay in sync with the TypeScript `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Shapes: max_shapes × 8 floats]
//! [Sounds: max_sounds × 1 float]
//! ```
//!
//! Capacities are written once into the header at init. TypeScript reads
//! them from the header to compute offsets dynamically.

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_SHAPES: usize = 2;
pub const HEADER_SHAPE_COUNT: usize = 3;
pub const HEADER_CAMERA_X: usize = 4;
pub const HEADER_STATUS: usize = 5;
pub const HEADER_LIVES: usize = 6;
pub const HEADER_GEMS: usize = 7;
pub const HEADER_LEVEL_ID: usize = 8;
pub const HEADER_LEVEL_WIDTH: usize = 9;
pub const HEADER_LEVEL_HEIGHT: usize = 10;
pub const HEADER_SURFACE_WIDTH: usize = 11;
pub const HEADER_SURFACE_HEIGHT: usize = 12;
pub const HEADER_MAX_SOUNDS: usize = 13;
pub const HEADER_SOUND_COUNT: usize = 14;
pub const HEADER_PROTOCOL_VERSION: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per shape record (wire format — never changes).
pub const SHAPE_FLOATS: usize = 8;

/// Default shape capacity; generous for the largest shipped level plus
/// HUD and banner glyphs.
pub const DEFAULT_MAX_SHAPES: usize = 1024;

/// Default per-frame sound-cue capacity.
pub const DEFAULT_MAX_SOUNDS: usize = 16;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum shape records per frame.
    pub max_shapes: usize,
    /// Maximum sound cues per frame.
    pub max_sounds: usize,

    /// Size of the shape data section in floats.
    pub shape_data_floats: usize,
    /// Size of the sound data section in floats.
    pub sound_data_floats: usize,

    /// Offset (in floats) where shape data begins.
    pub shape_data_offset: usize,
    /// Offset (in floats) where sound data begins.
    pub sound_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_shapes: usize, max_sounds: usize) -> Self {
        let shape_data_floats = max_shapes * SHAPE_FLOATS;
        let sound_data_floats = max_sounds;

        let shape_data_offset = HEADER_FLOATS;
        let sound_data_offset = shape_data_offset + shape_data_floats;

        let buffer_total_floats = sound_data_offset + sound_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_shapes,
            max_sounds,
            shape_data_floats,
            sound_data_floats,
            shape_data_offset,
            sound_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }
}

impl Default for ProtocolLayout {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SHAPES, DEFAULT_MAX_SOUNDS)
    }
}
