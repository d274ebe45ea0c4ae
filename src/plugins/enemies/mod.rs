//! Enemies plugin: pooled enemies that descend toward the player and die on projectile contact.
//!
//! Enemies are spawned and recycled exclusively by the wave manager (`plugins::waves`). This
//! module only owns what an enemy does on its own:
//!
//! ```text
//!   FixedUpdate:      advance_enemies            (move Active enemies along -Y)
//!   FixedPostUpdate:  detect_projectile_contacts (CollisionStart -> EnemyDied)
//! ```
//!
//! The death report is a message rather than a handle to the manager, so enemies carry no
//! reference to anything outside their own components.

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;

mod components;
pub mod contact;
pub mod movement;
pub mod pool;

pub use components::*;

pub fn plugin(app: &mut App) {
    app.add_message::<EnemyDied>();

    app.add_systems(
        FixedUpdate,
        movement::advance_enemies.run_if(in_state(GameState::InGame)),
    );

    // Runs after Avian writes this step's collision events.
    app.add_systems(
        FixedPostUpdate,
        contact::detect_projectile_contacts
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::InGame)),
    );
}
