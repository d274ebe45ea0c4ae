//! Generic entity pool.
//!
//! A pool hands out entities from a LIFO free list and only asks its factory for a new one when
//! the free list is empty. The pool is never exhausted; it grows unless a `max_size` is set, in
//! which case entities returned past the cap are evicted instead of kept.
//!
//! ```text
//!   acquire:  free.pop() ─┬─ Some(e) ─┐
//!                         └─ None ─ K::create ─┤
//!                                              v
//!                     PoolState::Active + origin Transform + K::on_acquire
//!
//!   release:  PoolState::Inactive + origin Transform + K::on_release
//!                         │
//!             free.len() < max_size ? free.push(e) : K::on_evict
//! ```
//!
//! # Invariants
//! - Every entity returned by `acquire` is `PoolState::Active`.
//! - Every entity in the free list is `PoolState::Inactive`.
//! - `active_count() + free_count() == total_created() - total_evicted()`.
//!
//! Hooks are applied through `Commands`, so component writes land at the next command flush
//! (schedule boundary or `world.flush()`).

use std::marker::PhantomData;

use bevy::platform::collections::HashSet;
use bevy::prelude::*;

/// Activation flag written by the pool. Systems skip entities that are not `Active`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoolState {
    #[default]
    Inactive,
    Active,
}

/// The four extension points of a pool.
///
/// Implemented on a marker component so each kind of pooled entity gets its own
/// `EntityPool<K>` type.
pub trait PoolKind: Send + Sync + 'static {
    /// Spawn a fresh, inactive entity at `origin`.
    fn create(commands: &mut Commands, origin: Vec3) -> Entity;

    /// Runs after the pool marks an entity active.
    fn on_acquire(_entity: &mut EntityCommands) {}

    /// Runs after the pool marks an entity inactive.
    fn on_release(_entity: &mut EntityCommands) {}

    /// Runs instead of keeping a returned entity when the free list is full.
    fn on_evict(entity: &mut EntityCommands) {
        entity.despawn();
    }
}

#[derive(Resource, Debug)]
pub struct EntityPool<K: PoolKind> {
    free: Vec<Entity>,
    /// Handed out and not yet returned.
    active: HashSet<Entity>,
    origin: Vec3,
    max_size: Option<usize>,
    created: usize,
    evicted: usize,
    _kind: PhantomData<fn() -> K>,
}

impl<K: PoolKind> EntityPool<K> {
    pub fn new(origin: Vec3) -> Self {
        Self {
            free: Vec::new(),
            active: HashSet::default(),
            origin,
            max_size: None,
            created: 0,
            evicted: 0,
            _kind: PhantomData,
        }
    }

    /// Cap the free list. Returns past the cap go through `K::on_evict`.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self.free.reserve(max_size);
        self
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn total_created(&self) -> usize {
        self.created
    }

    #[inline]
    pub fn total_evicted(&self) -> usize {
        self.evicted
    }

    #[inline]
    pub fn is_free(&self, entity: Entity) -> bool {
        self.free.contains(&entity)
    }

    #[inline]
    pub fn is_active(&self, entity: Entity) -> bool {
        self.active.contains(&entity)
    }

    /// Spawn `count` inactive entities straight into the free list.
    pub fn prewarm(&mut self, commands: &mut Commands, count: usize) {
        self.free.reserve(count);
        for _ in 0..count {
            let e = K::create(commands, self.origin);
            commands.entity(e).insert(PoolState::Inactive);
            self.created += 1;
            self.free.push(e);
        }
    }

    /// Hand out an active entity, reusing the most recently returned one if possible.
    pub fn acquire(&mut self, commands: &mut Commands) -> Entity {
        let e = match self.free.pop() {
            Some(e) => e,
            None => {
                self.created += 1;
                debug!("pool grew to {} entities", self.created - self.evicted);
                K::create(commands, self.origin)
            }
        };

        self.active.insert(e);

        let mut ec = commands.entity(e);
        ec.insert((PoolState::Active, Transform::from_translation(self.origin)));
        K::on_acquire(&mut ec);

        e
    }

    /// Return an entity to the pool.
    ///
    /// Returns `false` without touching anything if the entity is not currently handed out
    /// (already returned, evicted, or never from this pool).
    pub fn release(&mut self, commands: &mut Commands, entity: Entity) -> bool {
        if !self.active.remove(&entity) {
            debug!("ignoring release of {entity:?}: not handed out by this pool");
            return false;
        }

        let mut ec = commands.entity(entity);
        ec.insert((PoolState::Inactive, Transform::from_translation(self.origin)));
        K::on_release(&mut ec);

        if self.max_size.is_some_and(|max| self.free.len() >= max) {
            self.evicted += 1;
            K::on_evict(&mut ec);
            return true;
        }

        self.free.push(entity);
        true
    }

    /// Teardown: despawn every pooled entity that is not currently handed out.
    pub fn clear(&mut self, commands: &mut Commands) {
        self.evicted += self.free.len();
        for e in self.free.drain(..) {
            commands.entity(e).despawn();
        }
    }
}
