//! Frame composition.
//!
//! Rebuilds the shape buffer from engine state once per frame, after the
//! simulation step. Pure output: nothing here feeds back into collision
//! results. Paint order matters visually (hazards under gems under the
//! player, HUD above the world) and is fixed.

use crate::core::engine::PlatformerEngine;
use crate::core::player::Facing;
use crate::renderer::instance::{Paint, ShapeBuffer, Space};
use crate::systems::text::{push_text, text_width};

/// Height of the decorative ground strip along the bottom of the surface.
pub const GROUND_STRIP_HEIGHT: f32 = 100.0;

const HUD_PADDING: f32 = 10.0;
const HUD_LINE_HEIGHT: f32 = 30.0;
const HUD_WIDTH: f32 = 300.0;
const HUD_TEXT_SIZE: f32 = 20.0;
const HEART_SIZE: f32 = 18.0;
const EXIT_LABEL_SIZE: f32 = 16.0;
const BANNER_HEIGHT: f32 = 100.0;
const BANNER_TEXT_SIZE: f32 = 40.0;
const EYE_SIZE: f32 = 4.0;

/// Compose one frame of the attempt into `buf`.
pub fn build_frame(engine: &PlatformerEngine, buf: &mut ShapeBuffer) {
    buf.clear();

    let surface = engine.surface();
    buf.push_rect(0.0, 0.0, surface.width, surface.height, Paint::Sky, Space::Screen);
    buf.push_rect(
        0.0,
        surface.height - GROUND_STRIP_HEIGHT,
        surface.width,
        GROUND_STRIP_HEIGHT,
        Paint::Sand,
        Space::Screen,
    );

    draw_world(engine, buf);
    draw_hud(engine, buf);
    draw_banner(engine, buf);
}

fn draw_world(engine: &PlatformerEngine, buf: &mut ShapeBuffer) {
    let camera = engine.camera();

    for platform in engine.platforms() {
        if !camera.is_rect_visible(platform) {
            continue;
        }
        let (x, y) = (platform.left(), platform.top());
        let (w, h) = (platform.size.x, platform.size.y);
        buf.push_rect(x, y, w, h, Paint::PlatformFill, Space::World);
        buf.push_outline(x, y, w, h, Paint::PlatformEdge, Space::World);
    }

    for spike in engine.spikes() {
        if !camera.is_rect_visible(spike) {
            continue;
        }
        buf.push_triangle(
            spike.left(),
            spike.top(),
            spike.size.x,
            spike.size.y,
            Paint::Spike,
            Space::World,
        );
    }

    for lava in engine.lava() {
        if !camera.is_rect_visible(lava) {
            continue;
        }
        let (x, y) = (lava.left(), lava.top());
        let (w, h) = (lava.size.x, lava.size.y);
        buf.push_rect(x, y, w, h, Paint::LavaFill, Space::World);
        buf.push_outline(x, y, w, h, Paint::LavaEdge, Space::World);
    }

    for gem in engine.gems() {
        if gem.collected || !camera.is_rect_visible(&gem.rect) {
            continue;
        }
        let (x, y) = (gem.rect.left(), gem.rect.top());
        let (w, h) = (gem.rect.size.x, gem.rect.size.y);
        buf.push_circle(x, y, w, h, Paint::GemFill, Space::World);
        buf.push_circle_outline(x, y, w, h, Paint::GemEdge, Space::World);
    }

    let exit = engine.exit();
    buf.push_rect(
        exit.left(),
        exit.top(),
        exit.size.x,
        exit.size.y,
        Paint::ExitGold,
        Space::World,
    );
    let label_x = exit.left() + (exit.size.x - text_width("EXIT", EXIT_LABEL_SIZE)) / 2.0;
    push_text(
        buf,
        "EXIT",
        label_x,
        exit.top() + 8.0,
        EXIT_LABEL_SIZE,
        Paint::ExitLabel,
        Space::World,
    );

    draw_player(engine, buf);
}

fn draw_player(engine: &PlatformerEngine, buf: &mut ShapeBuffer) {
    let player = engine.player();
    let (x, y) = (player.pos.x, player.pos.y);
    let (w, h) = (player.size.x, player.size.y);

    let body = if player.airborne {
        Paint::PlayerJump
    } else {
        Paint::PlayerIdle
    };
    buf.push_rect(x, y, w, h, body, Space::World);
    buf.push_outline(x, y, w, h, Paint::PlayerEdge, Space::World);

    let eye_y = y + 10.0;
    let eye_xs = match player.facing {
        Facing::Right => [x + 18.0, x + 28.0],
        Facing::Left => [x + 10.0, x + 20.0],
    };
    for eye_x in eye_xs {
        buf.push_rect(eye_x, eye_y, EYE_SIZE, EYE_SIZE, Paint::Eye, Space::World);
    }
}

fn draw_hud(engine: &PlatformerEngine, buf: &mut ShapeBuffer) {
    let panel_h = HUD_LINE_HEIGHT * 3.0 + HUD_PADDING * 2.0;
    buf.push_rect(0.0, 0.0, HUD_WIDTH, panel_h, Paint::HudBackdrop, Space::Screen);

    let x = HUD_PADDING;
    let mut y = HUD_PADDING;
    push_text(
        buf,
        &format!("Level: {}", engine.level().name),
        x,
        y,
        HUD_TEXT_SIZE,
        Paint::HudText,
        Space::Screen,
    );

    y += HUD_LINE_HEIGHT;
    let label_w = push_text(buf, "Lives:", x, y, HUD_TEXT_SIZE, Paint::HudText, Space::Screen);
    for i in 0..engine.lives() {
        buf.push_rect(
            x + label_w + 8.0 + i as f32 * (HEART_SIZE + 6.0),
            y + 1.0,
            HEART_SIZE,
            HEART_SIZE,
            Paint::Heart,
            Space::Screen,
        );
    }

    y += HUD_LINE_HEIGHT;
    push_text(
        buf,
        &format!("Gems: {}", engine.gems_collected()),
        x,
        y,
        HUD_TEXT_SIZE,
        Paint::HudText,
        Space::Screen,
    );
}

fn draw_banner(engine: &PlatformerEngine, buf: &mut ShapeBuffer) {
    let (message, paint) = if engine.level_complete() {
        ("LEVEL COMPLETE!", Paint::BannerGold)
    } else if engine.game_over() {
        ("GAME OVER", Paint::BannerRed)
    } else {
        return;
    };

    let surface = engine.surface();
    buf.push_rect(
        0.0,
        surface.height / 2.0 - BANNER_HEIGHT / 2.0,
        surface.width,
        BANNER_HEIGHT,
        Paint::BannerBackdrop,
        Space::Screen,
    );
    let text_x = (surface.width - text_width(message, BANNER_TEXT_SIZE)) / 2.0;
    push_text(
        buf,
        message,
        text_x,
        surface.height / 2.0 - BANNER_TEXT_SIZE / 2.0,
        BANNER_TEXT_SIZE,
        paint,
        Space::Screen,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::Surface;
    use crate::input::state::{Action, InputState};
    use crate::level::{EntitySizes, Level, Point};

    fn level() -> Level {
        Level {
            id: 1,
            name: "Painted Hills".into(),
            width: 1600.0,
            height: 600.0,
            platforms: vec![Point::new(30.0, 400.0), Point::new(1400.0, 400.0)],
            gems: vec![Point::new(60.0, 380.0)],
            spikes: vec![Point::new(200.0, 376.0)],
            lava: vec![Point::new(400.0, 500.0)],
            checkpoint: Point::new(600.0, 300.0),
            exit: Point::new(700.0, 368.0),
            sizes: EntitySizes::default(),
        }
    }

    fn engine() -> PlatformerEngine {
        PlatformerEngine::new(level(), Surface::new(800.0, 600.0))
    }

    fn paints(buf: &ShapeBuffer, paint: Paint) -> usize {
        buf.shapes().iter().filter(|s| s.paint == paint.code()).count()
    }

    #[test]
    fn backdrop_comes_first() {
        let engine = engine();
        let mut buf = ShapeBuffer::new();
        build_frame(&engine, &mut buf);

        let shapes = buf.shapes();
        assert_eq!(shapes[0].paint, Paint::Sky.code());
        assert_eq!(shapes[0].space, Space::Screen.code());
        assert_eq!(shapes[1].paint, Paint::Sand.code());
        assert_eq!(shapes[1].y, 500.0);
    }

    #[test]
    fn world_shapes_outside_the_viewport_are_culled() {
        let mut engine = engine();
        engine.update(&InputState::new());
        // Camera sits at player.x - 100; the platform at x=1400 is far off
        let mut buf = ShapeBuffer::new();
        build_frame(&engine, &mut buf);

        let platform_fills: Vec<f32> = buf
            .shapes()
            .iter()
            .filter(|s| s.paint == Paint::PlatformFill.code())
            .map(|s| s.x)
            .collect();
        assert_eq!(platform_fills, vec![30.0]);
    }

    #[test]
    fn collected_gems_stop_rendering() {
        let mut engine = engine();
        let mut buf = ShapeBuffer::new();
        build_frame(&engine, &mut buf);
        assert_eq!(paints(&buf, Paint::GemFill), 1);

        // Settle onto the platform; the gem there gets picked up
        let idle = InputState::new();
        for _ in 0..60 {
            engine.update(&idle);
        }
        assert_eq!(engine.gems_collected(), 1);
        build_frame(&engine, &mut buf);
        assert_eq!(paints(&buf, Paint::GemFill), 0);
    }

    #[test]
    fn player_paint_tracks_airborne_state() {
        let mut engine = engine();
        let idle = InputState::new();
        for _ in 0..60 {
            engine.update(&idle);
        }
        let mut buf = ShapeBuffer::new();
        build_frame(&engine, &mut buf);
        assert_eq!(paints(&buf, Paint::PlayerIdle), 1);
        assert_eq!(paints(&buf, Paint::PlayerJump), 0);

        let mut jump = InputState::new();
        jump.set(Action::Jump, true);
        engine.update(&jump);
        build_frame(&engine, &mut buf);
        assert_eq!(paints(&buf, Paint::PlayerIdle), 0);
        assert_eq!(paints(&buf, Paint::PlayerJump), 1);
    }

    #[test]
    fn eyes_follow_facing() {
        let mut engine = engine();
        let mut left = InputState::new();
        left.set(Action::MoveLeft, true);
        engine.update(&left);

        let mut buf = ShapeBuffer::new();
        build_frame(&engine, &mut buf);

        let px = engine.player().pos.x;
        let eye_xs: Vec<f32> = buf
            .shapes()
            .iter()
            .filter(|s| s.paint == Paint::Eye.code())
            .map(|s| s.x)
            .collect();
        assert_eq!(eye_xs, vec![px + 10.0, px + 20.0]);
    }

    #[test]
    fn hud_shows_one_heart_per_life() {
        let engine = engine();
        let mut buf = ShapeBuffer::new();
        build_frame(&engine, &mut buf);
        assert_eq!(paints(&buf, Paint::Heart), 3);
        assert_eq!(paints(&buf, Paint::HudBackdrop), 1);
    }

    #[test]
    fn banner_appears_only_in_terminal_states() {
        let mut engine = engine();
        let mut buf = ShapeBuffer::new();
        build_frame(&engine, &mut buf);
        assert_eq!(paints(&buf, Paint::BannerBackdrop), 0);

        // Drop the player onto the exit rectangle to finish the level
        let mut lvl = level();
        lvl.exit = Point::new(50.0, 300.0);
        let mut done = PlatformerEngine::new(lvl, Surface::new(800.0, 600.0));
        done.update(&InputState::new());
        assert!(done.level_complete());

        build_frame(&done, &mut buf);
        assert_eq!(paints(&buf, Paint::BannerBackdrop), 1);
        assert!(paints(&buf, Paint::BannerGold) > 0);
        assert_eq!(paints(&buf, Paint::BannerRed), 0);
    }

    #[test]
    fn render_does_not_disturb_the_simulation() {
        let mut engine = engine();
        engine.update(&InputState::new());
        let pos = engine.player().pos;
        let gems = engine.gems_collected();

        let mut buf = ShapeBuffer::new();
        for _ in 0..10 {
            build_frame(&engine, &mut buf);
        }
        assert_eq!(engine.player().pos, pos);
        assert_eq!(engine.gems_collected(), gems);
    }
}
