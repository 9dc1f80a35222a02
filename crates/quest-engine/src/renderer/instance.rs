use bytemuck::{Pod, Zeroable};

/// What a shape record asks the rasterizer to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Filled axis-aligned rectangle.
    Rect,
    /// Stroked rectangle border.
    RectOutline,
    /// Filled upward triangle: base spans the bottom edge, apex at the
    /// top-center of the bounding box.
    Triangle,
    /// Filled circle inscribed in the bounding box.
    Circle,
    /// Stroked circle inscribed in the bounding box.
    CircleOutline,
    /// One text glyph; the character code rides in `data`, the box height
    /// is the font size.
    Glyph,
}

impl ShapeKind {
    /// Stable wire code.
    pub fn code(self) -> f32 {
        match self {
            ShapeKind::Rect => 0.0,
            ShapeKind::RectOutline => 1.0,
            ShapeKind::Triangle => 2.0,
            ShapeKind::Circle => 3.0,
            ShapeKind::CircleOutline => 4.0,
            ShapeKind::Glyph => 5.0,
        }
    }
}

/// The game's fixed palette. The rasterizer maps each code to a concrete
/// fill/stroke style; the hex values are the authored colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Sky backdrop, #87CEEB.
    Sky,
    /// Ground strip, #E0C084.
    Sand,
    /// Platform fill, #8B6F47.
    PlatformFill,
    /// Platform border, #5C4629.
    PlatformEdge,
    /// Spike fill, #FF6B6B.
    Spike,
    /// Lava fill, #FF8C00.
    LavaFill,
    /// Lava border, #FF4500.
    LavaEdge,
    /// Gem fill, #00CED1.
    GemFill,
    /// Gem ring, #00BFFF.
    GemEdge,
    /// Exit marker, #FFD700.
    ExitGold,
    /// Exit label text, #FFA500.
    ExitLabel,
    /// Player at rest, #FF8C42.
    PlayerIdle,
    /// Player while airborne, #FF69B4.
    PlayerJump,
    /// Player border, #FF6B35.
    PlayerEdge,
    /// Player eyes, #000000.
    Eye,
    /// HUD panel, black at 70% opacity.
    HudBackdrop,
    /// HUD text, #FFFFFF.
    HudText,
    /// Life icon, #FF6B6B.
    Heart,
    /// End-of-attempt banner panel, black at 80% opacity.
    BannerBackdrop,
    /// Level-complete banner text, #FFD700.
    BannerGold,
    /// Game-over banner text, #FF6B6B.
    BannerRed,
}

impl Paint {
    /// Stable wire code.
    pub fn code(self) -> f32 {
        match self {
            Paint::Sky => 0.0,
            Paint::Sand => 1.0,
            Paint::PlatformFill => 2.0,
            Paint::PlatformEdge => 3.0,
            Paint::Spike => 4.0,
            Paint::LavaFill => 5.0,
            Paint::LavaEdge => 6.0,
            Paint::GemFill => 7.0,
            Paint::GemEdge => 8.0,
            Paint::ExitGold => 9.0,
            Paint::ExitLabel => 10.0,
            Paint::PlayerIdle => 11.0,
            Paint::PlayerJump => 12.0,
            Paint::PlayerEdge => 13.0,
            Paint::Eye => 14.0,
            Paint::HudBackdrop => 15.0,
            Paint::HudText => 16.0,
            Paint::Heart => 17.0,
            Paint::BannerBackdrop => 18.0,
            Paint::BannerGold => 19.0,
            Paint::BannerRed => 20.0,
        }
    }
}

/// Which coordinate space a record lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    /// Level coordinates; the rasterizer translates by the camera offset.
    World,
    /// Surface coordinates; HUD and banners, never translated.
    Screen,
}

impl Space {
    pub fn code(self) -> f32 {
        match self {
            Space::World => 0.0,
            Space::Screen => 1.0,
        }
    }
}

/// Per-shape render record read by the TypeScript rasterizer.
/// Wire format: 8 floats, 32-byte stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct ShapeInstance {
    /// ShapeKind wire code.
    pub kind: f32,
    /// Bounding-box top-left x.
    pub x: f32,
    /// Bounding-box top-left y.
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Paint wire code.
    pub paint: f32,
    /// Kind-specific payload (glyph character code; otherwise 0).
    pub data: f32,
    /// Space wire code.
    pub space: f32,
}

impl ShapeInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Growable list of shape records for one frame, rebuilt by the frame
/// composer every tick and read out through a raw pointer.
pub struct ShapeBuffer {
    shapes: Vec<ShapeInstance>,
}

impl ShapeBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            shapes: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn push(&mut self, shape: ShapeInstance) {
        self.shapes.push(shape);
    }

    pub fn push_rect(&mut self, x: f32, y: f32, w: f32, h: f32, paint: Paint, space: Space) {
        self.push_shape(ShapeKind::Rect, x, y, w, h, paint, 0.0, space);
    }

    pub fn push_outline(&mut self, x: f32, y: f32, w: f32, h: f32, paint: Paint, space: Space) {
        self.push_shape(ShapeKind::RectOutline, x, y, w, h, paint, 0.0, space);
    }

    pub fn push_triangle(&mut self, x: f32, y: f32, w: f32, h: f32, paint: Paint, space: Space) {
        self.push_shape(ShapeKind::Triangle, x, y, w, h, paint, 0.0, space);
    }

    pub fn push_circle(&mut self, x: f32, y: f32, w: f32, h: f32, paint: Paint, space: Space) {
        self.push_shape(ShapeKind::Circle, x, y, w, h, paint, 0.0, space);
    }

    pub fn push_circle_outline(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        paint: Paint,
        space: Space,
    ) {
        self.push_shape(ShapeKind::CircleOutline, x, y, w, h, paint, 0.0, space);
    }

    pub fn push_glyph(&mut self, x: f32, y: f32, size: f32, c: char, paint: Paint, space: Space) {
        self.push_shape(ShapeKind::Glyph, x, y, size, size, paint, c as u32 as f32, space);
    }

    #[allow(clippy::too_many_arguments)]
    fn push_shape(
        &mut self,
        kind: ShapeKind,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        paint: Paint,
        data: f32,
        space: Space,
    ) {
        self.shapes.push(ShapeInstance {
            kind: kind.code(),
            x,
            y,
            w,
            h,
            paint: paint.code(),
            data,
            space: space.code(),
        });
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shapes(&self) -> &[ShapeInstance] {
        &self.shapes
    }

    /// Raw pointer to shape data for SharedArrayBuffer reads.
    pub fn as_ptr(&self) -> *const f32 {
        self.shapes.as_ptr() as *const f32
    }
}

impl Default for ShapeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<ShapeInstance>(), 32);
        assert_eq!(ShapeInstance::FLOATS, 8);
    }

    #[test]
    fn push_helpers_encode_kind_and_paint() {
        let mut buf = ShapeBuffer::new();
        buf.push_rect(0.0, 0.0, 64.0, 16.0, Paint::PlatformFill, Space::World);
        buf.push_triangle(10.0, 20.0, 32.0, 24.0, Paint::Spike, Space::World);

        let shapes = buf.shapes();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].kind, ShapeKind::Rect.code());
        assert_eq!(shapes[0].paint, Paint::PlatformFill.code());
        assert_eq!(shapes[0].space, Space::World.code());
        assert_eq!(shapes[1].kind, ShapeKind::Triangle.code());
        assert_eq!(shapes[1].w, 32.0);
    }

    #[test]
    fn glyph_carries_character_code() {
        let mut buf = ShapeBuffer::new();
        buf.push_glyph(5.0, 6.0, 20.0, 'A', Paint::HudText, Space::Screen);
        let g = buf.shapes()[0];
        assert_eq!(g.kind, ShapeKind::Glyph.code());
        assert_eq!(g.data, 65.0);
        assert_eq!(g.w, 20.0);
        assert_eq!(g.h, 20.0);
        assert_eq!(g.space, Space::Screen.code());
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut buf = ShapeBuffer::new();
        buf.push_rect(0.0, 0.0, 1.0, 1.0, Paint::Sky, Space::Screen);
        assert!(!buf.is_empty());
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
    }
}
