//! The shipped level catalog.
//!
//! Coordinates are top-left anchors in level space; entity rectangle
//! sizes come from each level's `EntitySizes` (all four use the
//! defaults).

use quest_engine::level::{EntitySizes, Level, Point};

fn points(coords: &[(f32, f32)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn desert_oasis() -> Level {
    Level {
        id: 1,
        name: "Desert Oasis".into(),
        width: 1600.0,
        height: 600.0,
        platforms: points(&[
            // Starting area
            (0.0, 550.0),
            (100.0, 480.0),
            (200.0, 400.0),
            // Middle section
            (350.0, 420.0),
            (500.0, 380.0),
            (650.0, 420.0),
            // Jump challenge
            (800.0, 350.0),
            (900.0, 320.0),
            (1000.0, 350.0),
            // Water area
            (1150.0, 380.0),
            (1300.0, 420.0),
            // Final platforms to the exit
            (1450.0, 480.0),
            (1550.0, 500.0),
        ]),
        gems: points(&[
            (150.0, 400.0),
            (400.0, 330.0),
            (750.0, 250.0),
            (1100.0, 280.0),
            (1400.0, 380.0),
        ]),
        spikes: points(&[
            (300.0, 380.0),
            (600.0, 350.0),
            (1050.0, 420.0),
            (1250.0, 380.0),
        ]),
        lava: points(&[(1000.0, 500.0)]),
        checkpoint: Point::new(600.0, 300.0),
        exit: Point::new(1550.0, 450.0),
        sizes: EntitySizes::default(),
    }
}

fn ancient_temple() -> Level {
    Level {
        id: 2,
        name: "Ancient Temple".into(),
        width: 1800.0,
        height: 700.0,
        platforms: points(&[
            // Entrance
            (0.0, 600.0),
            (100.0, 520.0),
            (200.0, 450.0),
            // First chamber
            (350.0, 480.0),
            (450.0, 400.0),
            (550.0, 350.0),
            // Stepping stones
            (700.0, 420.0),
            (800.0, 350.0),
            (900.0, 420.0),
            // Narrow passage
            (1050.0, 380.0),
            (1150.0, 380.0),
            // Upper section
            (1300.0, 300.0),
            (1400.0, 250.0),
            (1500.0, 300.0),
            // Final approach
            (1650.0, 400.0),
            (1750.0, 500.0),
        ]),
        gems: points(&[
            (300.0, 350.0),
            (650.0, 280.0),
            (1050.0, 280.0),
            (1350.0, 150.0),
            (1700.0, 300.0),
        ]),
        spikes: points(&[
            (250.0, 400.0),
            (600.0, 300.0),
            (950.0, 350.0),
            (1200.0, 350.0),
            (1550.0, 230.0),
        ]),
        lava: points(&[(500.0, 550.0), (1200.0, 500.0)]),
        checkpoint: Point::new(800.0, 300.0),
        exit: Point::new(1700.0, 450.0),
        sizes: EntitySizes::default(),
    }
}

fn jungle_ruins() -> Level {
    Level {
        id: 3,
        name: "Jungle Ruins".into(),
        width: 2000.0,
        height: 800.0,
        platforms: points(&[
            // Starting jungle
            (0.0, 700.0),
            (100.0, 600.0),
            (200.0, 500.0),
            // Vine section
            (350.0, 520.0),
            (450.0, 450.0),
            (550.0, 380.0),
            (650.0, 420.0),
            // Ruins
            (800.0, 500.0),
            (900.0, 400.0),
            (1000.0, 350.0),
            // Bridge
            (1150.0, 400.0),
            (1250.0, 400.0),
            (1350.0, 400.0),
            // Upper ruins
            (1500.0, 300.0),
            (1600.0, 250.0),
            (1700.0, 300.0),
            // Final climb
            (1850.0, 400.0),
            (1950.0, 500.0),
        ]),
        gems: points(&[
            (250.0, 380.0),
            (550.0, 280.0),
            (900.0, 280.0),
            (1300.0, 300.0),
            (1650.0, 150.0),
        ]),
        spikes: points(&[
            (400.0, 400.0),
            (750.0, 420.0),
            (1100.0, 350.0),
            (1450.0, 270.0),
            (1800.0, 230.0),
        ]),
        lava: points(&[(600.0, 600.0), (1300.0, 550.0)]),
        checkpoint: Point::new(900.0, 250.0),
        exit: Point::new(1950.0, 450.0),
        sizes: EntitySizes::default(),
    }
}

fn ice_cave() -> Level {
    Level {
        id: 4,
        name: "Ice Cave".into(),
        width: 1900.0,
        height: 700.0,
        platforms: points(&[
            // Entrance
            (0.0, 600.0),
            (100.0, 520.0),
            // Icy descent
            (200.0, 450.0),
            (300.0, 380.0),
            // Wide platform
            (450.0, 420.0),
            // Ice puzzle
            (600.0, 380.0),
            (700.0, 350.0),
            (800.0, 380.0),
            (900.0, 420.0),
            // Crystal chamber
            (1050.0, 300.0),
            (1150.0, 250.0),
            (1250.0, 300.0),
            // Icy corridors
            (1400.0, 350.0),
            (1500.0, 380.0),
            // Final ascent
            (1650.0, 450.0),
            (1750.0, 550.0),
            (1850.0, 600.0),
        ]),
        gems: points(&[
            (200.0, 350.0),
            (700.0, 250.0),
            (1050.0, 150.0),
            (1400.0, 250.0),
            (1700.0, 350.0),
        ]),
        spikes: points(&[
            (250.0, 400.0),
            (650.0, 300.0),
            (1000.0, 350.0),
            (1300.0, 250.0),
            (1550.0, 300.0),
        ]),
        lava: points(&[(450.0, 550.0), (1150.0, 500.0)]),
        checkpoint: Point::new(900.0, 250.0),
        exit: Point::new(1750.0, 500.0),
        sizes: EntitySizes::default(),
    }
}

/// Every playable level, in campaign order.
pub fn all() -> Vec<Level> {
    vec![desert_oasis(), ancient_temple(), jungle_ruins(), ice_cave()]
}

pub fn by_id(id: u32) -> Option<Level> {
    all().into_iter().find(|level| level.id == id)
}

pub fn next_after(id: u32) -> Option<Level> {
    by_id(id + 1)
}

pub fn is_last(id: u32) -> bool {
    id == all().len() as u32
}
