//! Windowless runner
//!
//! `MinimalPlugins` supplies the schedule loop and `LogPlugin` the subscriber.
//! The core is ticked against the configured viewport until the frame budget
//! is spent, then torn down.

use bevy::app::AppExit;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{ParticleId, Pose};

const REPORT_EVERY: u64 = 60;

#[derive(Resource)]
struct FrameBudget(u64);

pub fn run_headless(scenario: Scenario, frames: u64) {
    App::new()
        .add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(scenario)
        .insert_resource(FrameBudget(frames))
        .add_systems(Update, headless_tick_system)
        .run();
}

fn headless_tick_system(
    mut scenario: ResMut<Scenario>,
    budget: Res<FrameBudget>,
    mut poses: Local<Vec<(ParticleId, Pose)>>,
    mut impacts: Local<usize>,
    mut exit: EventWriter<AppExit>,
) {
    if scenario.engine.frame() >= budget.0 {
        if scenario.engine.is_running() {
            info!("headless: {} impacts over {} frames", *impacts, budget.0);
            scenario.engine.teardown();
            exit.send(AppExit::Success);
        }
        return;
    }

    let viewport = scenario.viewer.viewport();
    poses.clear();
    if let Some(report) = scenario.engine.tick(viewport, &mut *poses) {
        *impacts += report.collisions.impacts;
        if report.frame % REPORT_EVERY == 0 {
            if let Some((id, pose)) = poses.first() {
                info!(
                    "frame {}: {} impacts so far, trinket {} at ({:.1}, {:.1})",
                    report.frame, *impacts, id, pose.x, pose.y
                );
            }
        }
    }
}
