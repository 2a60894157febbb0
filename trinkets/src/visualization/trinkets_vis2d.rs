use bevy::app::AppExit;
use bevy::input::touch::Touch;
use bevy::math::primitives::{Circle, Rectangle};
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, WindowResolution};

use crate::simulation::drag::PointerEvent;
use crate::simulation::engine::Engine;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, ParticleId, Pose, Viewport};
use crate::visualization::bindings::RenderBindings;
use crate::visualization::pointer::{PointerRouter, PointerSource};

#[derive(Component)]
struct TrinketSprite;

#[derive(Resource, Default)]
struct TrinketBindings(RenderBindings<Entity>);

// Poses published by the last tick, consumed by sync_transforms_system
#[derive(Resource, Default)]
struct FramePoses(Vec<(ParticleId, Pose)>);

pub fn run_2d(scenario: Scenario) {
    let window = Window {
        title: scenario.viewer.title.clone(),
        resolution: WindowResolution::new(scenario.viewer.width as f32, scenario.viewer.height as f32),
        ..default()
    };

    App::new()
        .insert_resource(ClearColor(Color::srgb(0.06, 0.06, 0.08)))
        .init_resource::<TrinketBindings>()
        .init_resource::<FramePoses>()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_systems(Startup, setup_trinkets_system)
        .add_systems(
            Update,
            (pointer_input_system, frame_tick_system, sync_transforms_system, teardown_system).chain(),
        )
        .run();
}

fn setup_trinkets_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut bindings: ResMut<TrinketBindings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    let size = scenario.viewer.visual_size as f32;
    let viewport = scenario.viewer.viewport();
    let body_mesh = Mesh2dHandle(meshes.add(Circle::new(0.5 * size)));
    // Off-centre notch so spin is visible on a plain disc
    let notch_mesh = Mesh2dHandle(meshes.add(Rectangle::new(0.12 * size, 0.3 * size)));
    let notch_material = materials.add(ColorMaterial::from(Color::srgba(0.0, 0.0, 0.0, 0.35)));

    for p in scenario.engine.store().iter() {
        let [r, g, b] = p.trinket.color();
        let z = p.id as f32 * 0.01; // later ids on top, matching pick()

        let entity = commands
            .spawn((
                MaterialMesh2dBundle {
                    mesh: body_mesh.clone(),
                    material: materials.add(ColorMaterial::from(Color::srgb(r, g, b))),
                    transform: pose_transform(p.pose(), viewport, z),
                    ..default()
                },
                TrinketSprite,
            ))
            .with_children(|parent| {
                parent.spawn(MaterialMesh2dBundle {
                    mesh: notch_mesh.clone(),
                    material: notch_material.clone(),
                    transform: Transform::from_xyz(0.0, 0.3 * size, 0.001),
                    ..default()
                });
            })
            .id();

        bindings.0.bind(p.id, entity);
    }

    info!("run_2d: bound {} trinkets", bindings.0.len());
}

/// Translate mouse and touch input into pointer events, viewport pixels.
/// Only the source that grabbed a trinket can move or release it.
fn pointer_input_system(
    mut scenario: ResMut<Scenario>,
    mut router: Local<PointerRouter>,
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let reach = 0.5 * scenario.viewer.visual_size;
    let engine = &mut scenario.engine;

    if let Some(cursor) = window.cursor_position() {
        let at = NVec2::new(cursor.x as f64, cursor.y as f64);
        if buttons.just_pressed(MouseButton::Left) {
            let event = router.press(PointerSource::Mouse, engine.pick(at, reach), at);
            dispatch(engine, &mut router, event);
        } else if buttons.pressed(MouseButton::Left) {
            let event = router.motion(PointerSource::Mouse, at);
            dispatch(engine, &mut router, event);
        }
    }
    if buttons.just_released(MouseButton::Left) {
        let event = router.release(PointerSource::Mouse);
        dispatch(engine, &mut router, event);
    }

    for touch in touches.iter_just_pressed() {
        let at = touch_position(touch);
        let event = router.press(PointerSource::Touch(touch.id()), engine.pick(at, reach), at);
        dispatch(engine, &mut router, event);
    }
    for touch in touches.iter() {
        let event = router.motion(PointerSource::Touch(touch.id()), touch_position(touch));
        dispatch(engine, &mut router, event);
    }
    for touch in touches.iter_just_released() {
        let event = router.release(PointerSource::Touch(touch.id()));
        dispatch(engine, &mut router, event);
    }
    for touch in touches.iter_just_canceled() {
        let event = router.cancel(PointerSource::Touch(touch.id()));
        dispatch(engine, &mut router, event);
    }
}

fn dispatch(engine: &mut Engine, router: &mut PointerRouter, event: Option<PointerEvent>) {
    let Some(event) = event else {
        return;
    };
    let accepted = engine.handle_pointer(event);
    if matches!(event, PointerEvent::Down { .. }) && !accepted {
        router.reset();
    }
}

fn touch_position(touch: &Touch) -> NVec2 {
    NVec2::new(touch.position().x as f64, touch.position().y as f64)
}

fn frame_tick_system(
    mut scenario: ResMut<Scenario>,
    mut poses: ResMut<FramePoses>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    // Read every frame so resizing moves the walls
    let viewport = Viewport::new(window.width() as f64, window.height() as f64);

    poses.0.clear();
    scenario.engine.tick(viewport, &mut poses.0);
}

fn sync_transforms_system(
    poses: Res<FramePoses>,
    bindings: Res<TrinketBindings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<&mut Transform, With<TrinketSprite>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let viewport = Viewport::new(window.width() as f64, window.height() as f64);

    for (&entity, pose) in bindings.0.resolve(&poses.0) {
        if let Ok(mut transform) = query.get_mut(entity) {
            let z = transform.translation.z;
            *transform = pose_transform(pose, viewport, z);
        }
    }
}

fn teardown_system(
    mut scenario: ResMut<Scenario>,
    keys: Res<ButtonInput<KeyCode>>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        scenario.engine.teardown();
        exit.send(AppExit::Success);
    }
}

/// Viewport pixels (origin top-left, y down, clockwise degrees) to Bevy world
/// space (origin centre, y up, counter-clockwise radians).
fn pose_transform(pose: Pose, viewport: Viewport, z: f32) -> Transform {
    let x = (pose.x - 0.5 * viewport.width) as f32;
    let y = (0.5 * viewport.height - pose.y) as f32;
    Transform::from_xyz(x, y, z).with_rotation(Quat::from_rotation_z(-pose.rotation.to_radians() as f32))
}
