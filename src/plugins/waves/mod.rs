//! Waves plugin: wires the wave manager into the schedules.
//!
//! ```text
//!   OnEnter(InGame):  begin_first_wave     (Idle -> wave 1)
//!   FixedPostUpdate:  handle_enemy_deaths  (EnemyDied -> release, count, maybe next wave)
//! ```

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::enemies::{contact::detect_projectile_contacts, EnemyDied};

pub mod manager;

pub use manager::{WaveManager, WavePhase, WaveState};

pub fn plugin(app: &mut App) {
    let manager = WaveManager::from_tunables(app.world().resource::<Tunables>());
    app.insert_resource(manager);

    app.add_systems(OnEnter(GameState::InGame), begin_first_wave);

    app.add_systems(
        FixedPostUpdate,
        handle_enemy_deaths
            .after(detect_projectile_contacts)
            .run_if(in_state(GameState::InGame)),
    );
}

pub fn begin_first_wave(mut commands: Commands, mut manager: ResMut<WaveManager>) {
    if manager.phase() != WavePhase::Idle {
        return;
    }
    manager.start_next_wave();
    manager.spawn_enemies(&mut commands);
}

/// The only consumer of `EnemyDied`.
pub fn handle_enemy_deaths(
    mut commands: Commands,
    mut manager: ResMut<WaveManager>,
    mut reader: MessageReader<EnemyDied>,
) {
    for ev in reader.read() {
        manager.on_enemy_died(&mut commands, ev.enemy);
    }
}
