use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A coordinate pair in level space (pixels, top-left origin, Y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// A rectangle extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    pub fn vec2(self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }
}

/// Per-kind entity rectangle sizes, declared in level data.
///
/// Level coordinates are top-left anchors; the sizes here turn them into
/// collision rectangles. The defaults are the tuning every shipped level
/// was authored against, so levels only declare sizes when they diverge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntitySizes {
    pub platform: Size,
    pub gem: Size,
    pub spike: Size,
    pub lava: Size,
    pub exit: Size,
    pub player: Size,
}

impl Default for EntitySizes {
    fn default() -> Self {
        Self {
            platform: Size::new(64.0, 16.0),
            gem: Size::new(16.0, 16.0),
            spike: Size::new(32.0, 24.0),
            lava: Size::new(64.0, 32.0),
            exit: Size::new(32.0, 32.0),
            player: Size::new(32.0, 32.0),
        }
    }
}

/// An immutable level descriptor, supplied by a level catalog or parsed
/// from JSON.
///
/// The engine does not validate content: a level without a reachable exit
/// simply never completes. That is an authoring defect, not a runtime
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    pub name: String,
    /// Logical level width in pixels.
    pub width: f32,
    /// Logical level height in pixels.
    pub height: f32,
    /// Top-left anchors of landable platforms.
    pub platforms: Vec<Point>,
    /// Top-left anchors of collectible gems.
    pub gems: Vec<Point>,
    /// Top-left anchors of spike hazards.
    pub spikes: Vec<Point>,
    /// Top-left anchors of lava hazards.
    pub lava: Vec<Point>,
    /// Authored mid-level respawn marker. Carried in data for future level
    /// design; the engine pins the respawn point to the spawn offset until
    /// `set_checkpoint` is called.
    pub checkpoint: Point,
    /// Top-left anchor of the exit rectangle.
    pub exit: Point,
    #[serde(default)]
    pub sizes: EntitySizes,
}

impl Level {
    /// Parse a level from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize a level to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Number of gems authored into this level.
    pub fn gem_count(&self) -> usize {
        self.gems.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sizes_match_authored_tuning() {
        let sizes = EntitySizes::default();
        assert_eq!(sizes.platform, Size::new(64.0, 16.0));
        assert_eq!(sizes.gem, Size::new(16.0, 16.0));
        assert_eq!(sizes.spike, Size::new(32.0, 24.0));
        assert_eq!(sizes.lava, Size::new(64.0, 32.0));
        assert_eq!(sizes.exit, Size::new(32.0, 32.0));
        assert_eq!(sizes.player, Size::new(32.0, 32.0));
    }

    #[test]
    fn parse_level_without_sizes_uses_defaults() {
        let json = r#"{
            "id": 1,
            "name": "Test Cavern",
            "width": 1600.0,
            "height": 600.0,
            "platforms": [{ "x": 0.0, "y": 550.0 }],
            "gems": [{ "x": 150.0, "y": 400.0 }],
            "spikes": [],
            "lava": [],
            "checkpoint": { "x": 600.0, "y": 300.0 },
            "exit": { "x": 1550.0, "y": 450.0 }
        }"#;
        let level = Level::from_json(json).unwrap();
        assert_eq!(level.id, 1);
        assert_eq!(level.name, "Test Cavern");
        assert_eq!(level.gem_count(), 1);
        assert_eq!(level.sizes, EntitySizes::default());
    }

    #[test]
    fn json_round_trip_preserves_geometry() {
        let level = Level {
            id: 7,
            name: "Round Trip".into(),
            width: 800.0,
            height: 600.0,
            platforms: vec![Point::new(0.0, 400.0), Point::new(64.0, 400.0)],
            gems: vec![Point::new(100.0, 350.0)],
            spikes: vec![Point::new(200.0, 376.0)],
            lava: vec![],
            checkpoint: Point::new(50.0, 300.0),
            exit: Point::new(700.0, 368.0),
            sizes: EntitySizes::default(),
        };
        let json = level.to_json().unwrap();
        let back = Level::from_json(&json).unwrap();
        assert_eq!(back.platforms, level.platforms);
        assert_eq!(back.exit, level.exit);
        assert_eq!(back.sizes, level.sizes);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Level::from_json("{ not a level }").is_err());
    }
}
