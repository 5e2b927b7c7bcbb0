//! Bevy 2D viewer
//!
//! Frame order (one chained `Update` set): window resize -> mouse launch ->
//! key toggles -> one physics tick -> gizmo drawing -> HUD text. Launches
//! therefore land between ticks, never inside one.
//!
//! Controls: drag with the left mouse button to launch, `T` trace,
//! `V` velocity vectors, `A` acceleration vectors, `C` clear.

use bevy::color::palettes::css;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::simulation::engine::{Overlay, Viewport};
use crate::simulation::overlay::{arrow_tip, Readout};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

/// HUD text entity
#[derive(Component)]
struct ReadoutText;

/// Cursor position where the current drag started, in window coordinates
#[derive(Resource, Default)]
struct DragState {
    start: Option<Vec2>,
}

const PARTICLE_RADIUS: f32 = 3.0;
const MAX_LISTED: usize = 8; // readout lines shown in the HUD

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer with {} particles", scenario.particles().len());

    let width = scenario.viewport.width as f32;
    let height = scenario.viewport.height as f32;

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(scenario)
        .init_resource::<DragState>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "bhsling".into(),
                resolution: (width, height).into(),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_system)
        .add_systems(
            Update,
            (
                resize_system,
                launch_input_system,
                toggle_input_system,
                physics_step_system,
                draw_system,
                readout_system,
            )
                .chain(),
        )
        .run();
}

/// Map simulation coordinates (origin top-left, y down) to world space
/// (origin at the window center, y up)
pub fn sim_to_world(x: &NVec2, viewport: &Viewport) -> Vec2 {
    Vec2::new(
        (x.x - 0.5 * viewport.width) as f32,
        (0.5 * viewport.height - x.y) as f32,
    )
}

/// Window cursor coordinates already share the simulation's orientation
pub fn cursor_to_sim(cursor: Vec2) -> NVec2 {
    NVec2::new(cursor.x as f64, cursor.y as f64)
}

fn setup_system(mut commands: Commands, mut scenario: ResMut<Scenario>, windows: Query<&Window, With<PrimaryWindow>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 16.0,
                color: Color::WHITE,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        }),
        ReadoutText,
    ));

    // the OS may not honour the requested size
    if let Ok(window) = windows.get_single() {
        scenario.resize(window.width() as f64, window.height() as f64);
    }
}

fn resize_system(mut events: EventReader<WindowResized>, mut scenario: ResMut<Scenario>) {
    if let Some(e) = events.read().last() {
        scenario.resize(e.width as f64, e.height as f64);
    }
}

fn launch_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut drag: ResMut<DragState>,
    mut scenario: ResMut<Scenario>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let cursor = window.cursor_position();

    if buttons.just_pressed(MouseButton::Left) {
        drag.start = cursor;
    }

    if buttons.just_released(MouseButton::Left) {
        // released outside the window: drop the gesture
        if let (Some(start), Some(end)) = (drag.start.take(), cursor) {
            scenario.launch(cursor_to_sim(start), cursor_to_sim(end));
        }
    }
}

fn toggle_input_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    if keys.just_pressed(KeyCode::KeyT) {
        scenario.toggle(Overlay::Trace);
    }
    if keys.just_pressed(KeyCode::KeyV) {
        scenario.toggle(Overlay::Velocity);
    }
    if keys.just_pressed(KeyCode::KeyA) {
        scenario.toggle(Overlay::Acceleration);
    }
    if keys.just_pressed(KeyCode::KeyC) {
        scenario.clear();
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.tick();
}

fn draw_system(
    scenario: Res<Scenario>,
    drag: Res<DragState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    let viewport = scenario.viewport;
    let overlays = scenario.overlays;

    // black hole
    let center = sim_to_world(&scenario.field.center, &viewport);
    gizmos.circle_2d(center, scenario.registry.swallow_radius() as f32, css::ORANGE_RED);

    for particle in scenario.particles() {
        let pos = sim_to_world(&particle.x, &viewport);

        if overlays.trace && particle.trace.len() > 1 {
            gizmos.linestrip_2d(
                particle.trace.iter().map(|x| sim_to_world(x, &viewport)),
                Color::srgba(0.4, 0.7, 1.0, 0.6),
            );
        }

        gizmos.circle_2d(pos, PARTICLE_RADIUS, Color::WHITE);

        if overlays.velocity || overlays.acceleration {
            let readout = Readout::of(particle, &scenario.field);
            if overlays.velocity {
                let tip = arrow_tip(particle.x, readout.velocity, scenario.velocity_scale);
                gizmos.arrow_2d(pos, sim_to_world(&tip, &viewport), css::LIME);
            }
            if overlays.acceleration {
                let tip = arrow_tip(particle.x, readout.acceleration, scenario.acceleration_scale);
                gizmos.arrow_2d(pos, sim_to_world(&tip, &viewport), css::FUCHSIA);
            }
        }
    }

    // drag preview
    let cursor = windows.get_single().ok().and_then(|w| w.cursor_position());
    if let (Some(start), Some(end)) = (drag.start, cursor) {
        gizmos.line_2d(
            sim_to_world(&cursor_to_sim(start), &viewport),
            sim_to_world(&cursor_to_sim(end), &viewport),
            css::GRAY,
        );
    }
}

fn readout_system(scenario: Res<Scenario>, mut query: Query<&mut Text, With<ReadoutText>>) {
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };

    let o = scenario.overlays;
    let on_off = |b: bool| if b { "on" } else { "off" };
    let mut s = format!(
        "tick: {}   particles: {}   [T]race {}  [V]elocity {}  [A]cceleration {}  [C]lear",
        scenario.ticks,
        scenario.particles().len(),
        on_off(o.trace),
        on_off(o.velocity),
        on_off(o.acceleration),
    );

    if o.velocity || o.acceleration {
        for particle in scenario.particles().iter().take(MAX_LISTED) {
            let readout = Readout::of(particle, &scenario.field);
            s.push_str(&format!("\n#{}  {}", particle.id, readout.label()));
        }
    }

    text.sections[0].value = s;
}
