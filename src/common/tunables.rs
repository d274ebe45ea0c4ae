//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,

    pub player_speed: f32,
    /// Fixed row the player moves along.
    pub player_y: f32,

    pub projectile_speed: f32,
    /// Projectiles above this height return to their pool.
    pub projectile_bound_y: f32,
    pub projectile_prewarm: usize,

    pub enemy_speed: f32,
    pub enemy_spawn_y: f32,
    /// Enemies below this height wrap back to `enemy_spawn_y`.
    pub enemy_floor_y: f32,
    pub enemy_spacing: f32,
    pub enemies_per_row: usize,
    /// Free-list cap of the enemy pool. `None` keeps every returned enemy.
    pub enemy_pool_max: Option<usize>,

    pub initial_enemies_per_wave: u32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 420.0,
            player_y: -300.0,
            projectile_speed: 900.0,
            projectile_bound_y: 420.0,
            projectile_prewarm: 32,
            enemy_speed: 40.0,
            enemy_spawn_y: 320.0,
            enemy_floor_y: -340.0,
            enemy_spacing: 48.0,
            enemies_per_row: 16,
            enemy_pool_max: Some(64),
            initial_enemies_per_wave: 5,
        }
    }
}
