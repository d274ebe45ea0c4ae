//! Enemy pool hooks.
//!
//! Clean-state invariant: every enemy handed out by the pool is visible, collidable and wearing
//! the default tint. The release hook restores the tint, so a wave can recolour its enemies freely.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy_firefly::prelude::Occluder2d;

use crate::common::layers::{dormant, Layer};
use crate::common::pool::{PoolKind, PoolState};

use super::components::Enemy;

pub const ENEMY_DEFAULT_COLOR: Color = Color::srgb(0.9, 0.25, 0.25);
const ENEMY_RADIUS: f32 = 14.0;

#[inline]
pub fn active_enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [Layer::Player, Layer::Projectile])
}

#[inline]
pub fn enemy_sprite(color: Color) -> Sprite {
    Sprite {
        color,
        custom_size: Some(Vec2::splat(ENEMY_RADIUS * 2.0)),
        ..default()
    }
}

impl PoolKind for Enemy {
    fn create(commands: &mut Commands, origin: Vec3) -> Entity {
        commands
            .spawn((
                Name::new("Enemy(Pooled)"),
                Enemy,
                PoolState::Inactive,
                enemy_sprite(ENEMY_DEFAULT_COLOR),
                Transform::from_translation(origin),
                Visibility::Hidden,
                RigidBody::Kinematic,
                Collider::circle(ENEMY_RADIUS),
                dormant(Layer::Enemy),
                Occluder2d::circle(ENEMY_RADIUS),
            ))
            .id()
    }

    fn on_acquire(entity: &mut EntityCommands) {
        entity.insert((Visibility::Visible, active_enemy_layers()));
    }

    fn on_release(entity: &mut EntityCommands) {
        entity.insert((
            Visibility::Hidden,
            enemy_sprite(ENEMY_DEFAULT_COLOR),
            dormant(Layer::Enemy),
        ));
    }
}
