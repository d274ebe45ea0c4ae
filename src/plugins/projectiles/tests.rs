//! Projectiles plugin tests — deterministic, no physics pipeline.

use avian2d::prelude::*;
use bevy::{ecs::message::Messages, prelude::*};

use crate::common::layers::Layer;
use crate::common::pool::PoolState;
use crate::common::test_utils::{fixed_time_with_delta, run_system_once, with_commands};
use crate::common::tunables::Tunables;

use super::components::Projectile;
use super::messages::FireProjectile;
use super::pool::{ProjectilePool, PROJECTILE_ORIGIN};
use super::{allocator, movement, pool};

fn world_with_pool() -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(ProjectilePool::new(PROJECTILE_ORIGIN));
    world
}

/// Acquire a projectile and place it at `pos`, as the allocator would.
fn fire_at(world: &mut World, pos: Vec3) -> Entity {
    let mut pool = world
        .remove_resource::<ProjectilePool>()
        .expect("ProjectilePool resource must exist");
    let e = with_commands(world, |c| {
        let e = pool.acquire(c);
        c.entity(e).insert(Transform::from_translation(pos));
        e
    });
    world.insert_resource(pool);
    e
}

#[test]
fn step_moves_forward_and_reports_out_of_bounds() {
    let mut t = Vec3::new(5.0, 0.0, 2.0);

    assert!(!movement::step_projectile(&mut t, 100.0, 0.5, 100.0));
    assert_eq!(t, Vec3::new(5.0, 50.0, 2.0));

    assert!(movement::step_projectile(&mut t, 100.0, 0.6, 100.0));
    assert!(t.y > 100.0);
}

#[test]
fn init_pool_prewarms_inactive_hidden_projectiles() {
    let mut world = world_with_pool();
    world.resource_mut::<Tunables>().projectile_prewarm = 6;

    run_system_once(&mut world, pool::init_projectile_pool);

    assert_eq!(world.resource::<ProjectilePool>().free_count(), 6);

    let mut q = world.query::<(&Projectile, &PoolState, &Visibility, &CollisionLayers)>();
    assert_eq!(q.iter(&world).count(), 6);
    for (_p, state, vis, layers) in q.iter(&world) {
        assert_eq!(*state, PoolState::Inactive);
        assert_eq!(*vis, Visibility::Hidden);
        assert!(layers.memberships.has_all(Layer::Projectile));
        assert!(!layers.filters.has_all(Layer::Enemy));
    }
}

#[test]
fn fire_request_activates_projectile_at_requested_position() {
    let mut world = world_with_pool();
    world.init_resource::<Messages<FireProjectile>>();
    world.write_message(FireProjectile { pos: Vec2::new(12.0, -280.0) });

    run_system_once(&mut world, allocator::fire_projectiles_from_pool);

    let mut q = world
        .query_filtered::<(&Transform, &PoolState, &Visibility, &CollisionLayers), With<Projectile>>();
    let (tf, state, vis, layers) = q.single(&world).expect("exactly one projectile");

    assert_eq!(tf.translation, Vec3::new(12.0, -280.0, PROJECTILE_ORIGIN.z));
    assert_eq!(*state, PoolState::Active);
    assert_eq!(*vis, Visibility::Visible);
    assert!(layers.filters.has_all(Layer::Enemy));
    assert_eq!(world.resource::<ProjectilePool>().active_count(), 1);
}

#[test]
fn in_bounds_projectile_keeps_flying() {
    let mut world = world_with_pool();
    world.insert_resource(fixed_time_with_delta(0.1));
    let e = fire_at(&mut world, Vec3::new(0.0, 0.0, 2.0));

    run_system_once(&mut world, movement::advance_projectiles);

    let speed = world.resource::<Tunables>().projectile_speed;
    let tf = world.get::<Transform>(e).unwrap();
    assert!((tf.translation.y - speed * 0.1).abs() < 1e-3);
    assert_eq!(*world.get::<PoolState>(e).unwrap(), PoolState::Active);
    assert_eq!(world.resource::<ProjectilePool>().free_count(), 0);
}

#[test]
fn out_of_bounds_projectile_is_released_exactly_once() {
    let mut world = world_with_pool();
    world.insert_resource(fixed_time_with_delta(0.1));
    let bound = world.resource::<Tunables>().projectile_bound_y;
    let e = fire_at(&mut world, Vec3::new(0.0, bound - 1.0, 2.0));

    run_system_once(&mut world, movement::advance_projectiles);

    {
        let pool = world.resource::<ProjectilePool>();
        assert_eq!(pool.free_count(), 1);
        assert_eq!(pool.active_count(), 0);
        assert!(pool.is_free(e));
    }
    assert_eq!(*world.get::<PoolState>(e).unwrap(), PoolState::Inactive);
    assert_eq!(*world.get::<Visibility>(e).unwrap(), Visibility::Hidden);
    assert_eq!(world.get::<Transform>(e).unwrap().translation, PROJECTILE_ORIGIN);

    // A second tick must not touch the retired projectile again.
    run_system_once(&mut world, movement::advance_projectiles);

    let pool = world.resource::<ProjectilePool>();
    assert_eq!(pool.free_count(), 1);
    assert_eq!(pool.total_created(), 1);
    assert_eq!(world.get::<Transform>(e).unwrap().translation, PROJECTILE_ORIGIN);
}
