use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::{dormant, Layer};
use crate::common::pool::{EntityPool, PoolKind, PoolState};
use crate::common::tunables::Tunables;

use super::components::Projectile;

pub type ProjectilePool = EntityPool<Projectile>;

/// Where free projectiles park. Off-screen, below the arena.
pub const PROJECTILE_ORIGIN: Vec3 = Vec3::new(0.0, -2000.0, 2.0);

#[inline]
pub fn active_projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Projectile, [Layer::Enemy])
}

impl PoolKind for Projectile {
    fn create(commands: &mut Commands, origin: Vec3) -> Entity {
        commands
            .spawn((
                Name::new("Projectile(Pooled)"),
                Projectile,
                PoolState::Inactive,
                Sprite {
                    color: Color::srgb(1.0, 0.85, 0.3),
                    custom_size: Some(Vec2::new(4.0, 12.0)),
                    ..default()
                },
                Transform::from_translation(origin),
                Visibility::Hidden,
                RigidBody::Kinematic,
                Collider::rectangle(4.0, 12.0),
                Sensor,
                dormant(Layer::Projectile),
                // Avian only emits CollisionStart if one collider opts in.
                CollisionEventsEnabled,
            ))
            .id()
    }

    fn on_acquire(entity: &mut EntityCommands) {
        entity.insert((Visibility::Visible, active_projectile_layers()));
    }

    fn on_release(entity: &mut EntityCommands) {
        entity.insert((Visibility::Hidden, dormant(Layer::Projectile)));
    }
}

/// Pre-spawn inactive projectiles so the first volleys never allocate.
pub fn init_projectile_pool(
    mut commands: Commands,
    mut pool: ResMut<ProjectilePool>,
    tunables: Res<Tunables>,
) {
    pool.prewarm(&mut commands, tunables.projectile_prewarm);
    debug!("projectile pool prewarmed with {} entities", pool.free_count());
}
