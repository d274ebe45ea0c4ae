//! Projectiles plugin: **message-based producer → consumer** firing over an entity pool.
//!
//! # Data flow
//! ```text
//!   Update (variable dt)
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │ (A) Producer: player::request_fire                           │
//!   │     - writes: FireProjectile message                         │
//!   │ (B) Consumer: fire_projectiles_from_pool                     │
//!   │     - mutates: ProjectilePool (single writer in Update)      │
//!   └──────────────────────────────────────────────────────────────┘
//!                 │
//!                 v
//!   FixedUpdate (fixed dt)
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │ (C) advance_projectiles                                      │
//!   │     - moves Active projectiles along +Y                      │
//!   │     - releases them to ProjectilePool past the bound         │
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Projectiles never react to what they hit. Enemies watch for projectile contact
//! (see `enemies::contact`).

pub mod allocator;
pub mod components;
pub mod messages;
pub mod movement;
pub mod pool;

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::player;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(pool::ProjectilePool::new(pool::PROJECTILE_ORIGIN))
            .add_message::<messages::FireProjectile>()
            .add_systems(Startup, pool::init_projectile_pool);

        app.add_systems(
            Update,
            allocator::fire_projectiles_from_pool
                .after(player::request_fire)
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedUpdate,
            movement::advance_projectiles.run_if(in_state(GameState::InGame)),
        );
    }
}

#[cfg(test)]
mod tests;
