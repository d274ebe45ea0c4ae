//! Test helpers.
//!
//! Bevy provides `World::run_system_once` (via the `RunSystemOnce` trait) for quickly
//! executing a system in tests without building a full schedule.
//!
//! Systems that use `Commands` enqueue structural changes; applying them is normally handled by
//! schedule boundaries. We call `world.flush()` after running so queued commands are applied
//! before assertions.

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::ecs::world::CommandQueue;
use bevy::prelude::*;
use std::time::Duration;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Run `f` with a `Commands` bound to `world`, then apply the queued commands.
///
/// Pool operations take `&mut Commands`; this lets tests drive them outside a system.
pub fn with_commands<T>(world: &mut World, f: impl FnOnce(&mut Commands) -> T) -> T {
    let mut queue = CommandQueue::default();
    let result = {
        let mut commands = Commands::new(&mut queue, world);
        f(&mut commands)
    };
    queue.apply(world);
    result
}

/// A `Time<Fixed>` that has advanced by exactly `dt` seconds.
pub fn fixed_time_with_delta(dt: f32) -> Time<Fixed> {
    let mut t = Time::<Fixed>::default();
    t.advance_by(Duration::from_secs_f32(dt));
    t
}
