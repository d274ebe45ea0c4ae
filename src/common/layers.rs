//! Collision layers.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    Player,
    Enemy,
    Projectile,
}

/// Empty filters: a pooled entity sitting in the free list collides with nothing.
#[inline]
pub fn dormant(membership: Layer) -> CollisionLayers {
    CollisionLayers::new(membership, [] as [Layer; 0])
}
