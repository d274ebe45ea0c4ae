//! Buffered fire requests.
//!
//! Producers (player input) create *intent*; the allocator is the single writer that
//! touches the projectile pool.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug)]
pub struct FireProjectile {
    pub pos: Vec2,
}
