use bevy::prelude::*;

/// Marker for pooled projectiles. Also the pool kind of `ProjectilePool`.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Projectile;
