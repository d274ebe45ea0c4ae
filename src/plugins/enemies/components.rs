use bevy::prelude::*;

/// Marker for pooled enemies. Also the pool kind of the wave manager's enemy pool.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Enemy;

/// Death report: an active enemy touched a projectile.
///
/// This is the only way an enemy talks to the wave manager. The enemy never releases itself.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyDied {
    pub enemy: Entity,
}
