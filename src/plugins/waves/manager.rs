//! Wave manager: owns the enemy pool and the wave counters.
//!
//! ```text
//!   Idle ──start_next_wave──> SpawningWave ──spawn_enemies──> WaveInProgress
//!                                  ^                               │
//!                                  │                     on_enemy_died (count -> 0)
//!                                  │                               v
//!                                  └────────start_next_wave─── WaveComplete
//! ```
//!
//! There is no terminal state and no pause between waves: the death that clears a wave also
//! spawns the next one.

use bevy::prelude::*;

use crate::common::pool::EntityPool;
use crate::common::tunables::Tunables;
use crate::plugins::enemies::{pool::enemy_sprite, Enemy};

/// Where free enemies park. Off-screen, above the arena.
pub const ENEMY_ORIGIN: Vec3 = Vec3::new(0.0, 2000.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WavePhase {
    #[default]
    Idle,
    SpawningWave,
    WaveInProgress,
    WaveComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveState {
    pub current_wave: u32,
    pub enemies_per_wave: u32,
    pub active_enemy_count: u32,
}

/// Row layout for a freshly spawned wave.
#[derive(Debug, Clone, Copy)]
pub struct SpawnLayout {
    pub top_y: f32,
    pub spacing: f32,
    pub per_row: usize,
}

impl SpawnLayout {
    /// Position of the `index`-th enemy: rows of `per_row`, centred on x = 0, stacked upward.
    pub fn position(&self, index: usize, z: f32) -> Vec3 {
        let per_row = self.per_row.max(1);
        let row = index / per_row;
        let col = index % per_row;
        let x = (col as f32 - (per_row - 1) as f32 * 0.5) * self.spacing;
        let y = self.top_y + row as f32 * self.spacing;
        Vec3::new(x, y, z)
    }
}

#[derive(Resource, Debug)]
pub struct WaveManager {
    state: WaveState,
    phase: WavePhase,
    pool: EntityPool<Enemy>,
    layout: SpawnLayout,
}

/// Per-wave tint; the release hook puts the default colour back.
pub fn wave_tint(wave: u32) -> Color {
    let hue = (wave.saturating_sub(1) as f32 * 47.0) % 360.0;
    Color::hsl(hue, 0.75, 0.55)
}

impl WaveManager {
    pub fn new(initial_enemies_per_wave: u32, pool: EntityPool<Enemy>, layout: SpawnLayout) -> Self {
        Self {
            state: WaveState {
                current_wave: 0,
                enemies_per_wave: initial_enemies_per_wave.max(1),
                active_enemy_count: 0,
            },
            phase: WavePhase::Idle,
            pool,
            layout,
        }
    }

    pub fn from_tunables(t: &Tunables) -> Self {
        let pool = EntityPool::new(ENEMY_ORIGIN);
        let pool = match t.enemy_pool_max {
            Some(max) => pool.with_max_size(max),
            None => pool,
        };
        let layout = SpawnLayout {
            top_y: t.enemy_spawn_y,
            spacing: t.enemy_spacing,
            per_row: t.enemies_per_row,
        };
        Self::new(t.initial_enemies_per_wave, pool, layout)
    }

    #[inline]
    pub fn state(&self) -> WaveState {
        self.state
    }

    #[inline]
    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    #[inline]
    pub fn pool(&self) -> &EntityPool<Enemy> {
        &self.pool
    }

    /// Advance the wave counter. Every wave after the first doubles in size.
    pub fn start_next_wave(&mut self) {
        self.state.current_wave += 1;
        if self.state.current_wave > 1 {
            // Uncapped; saturates at u32::MAX.
            self.state.enemies_per_wave = self.state.enemies_per_wave.saturating_mul(2);
        }
        self.phase = WavePhase::SpawningWave;

        let needed = self.state.enemies_per_wave as usize;
        if let Some(max) = self.pool.max_size().filter(|&max| needed > max) {
            warn!(
                "wave {} needs {} enemies, above the enemy pool cap of {max}",
                self.state.current_wave, self.state.enemies_per_wave
            );
        }

        info!(
            "wave {} starting with {} enemies",
            self.state.current_wave, self.state.enemies_per_wave
        );
    }

    /// Pull exactly `enemies_per_wave` enemies from the pool and lay them out.
    pub fn spawn_enemies(&mut self, commands: &mut Commands) -> Vec<Entity> {
        let count = self.state.enemies_per_wave;
        self.state.active_enemy_count = count;

        let tint = wave_tint(self.state.current_wave);
        let z = self.pool.origin().z;

        let spawned: Vec<Entity> = (0..count as usize)
            .map(|i| {
                let e = self.pool.acquire(commands);
                commands.entity(e).insert((
                    Transform::from_translation(self.layout.position(i, z)),
                    enemy_sprite(tint),
                ));
                e
            })
            .collect();

        self.phase = WavePhase::WaveInProgress;
        debug!(
            "wave {} spawned; enemy pool: {} active, {} free, {} created",
            self.state.current_wave,
            self.pool.active_count(),
            self.pool.free_count(),
            self.pool.total_created()
        );

        spawned
    }

    /// Handle a death report. Returns `true` if this death cleared the wave.
    ///
    /// Reports for enemies that are already back in the pool are ignored.
    pub fn on_enemy_died(&mut self, commands: &mut Commands, enemy: Entity) -> bool {
        if self.state.active_enemy_count == 0 || !self.pool.release(commands, enemy) {
            debug!("ignoring death report for {enemy:?}");
            return false;
        }

        self.state.active_enemy_count -= 1;
        if self.state.active_enemy_count > 0 {
            return false;
        }

        self.phase = WavePhase::WaveComplete;
        info!("wave {} cleared", self.state.current_wave);

        self.start_next_wave();
        self.spawn_enemies(commands);
        true
    }
}
