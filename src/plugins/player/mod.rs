//! Player plugin.
//!
//! Pipeline:
//! - Update: sample input into `PlayerInput`, turn a trigger press into a `FireProjectile` message
//! - FixedUpdate: apply horizontal velocity to the kinematic rigid body
//!
//! Input resources are optional so headless apps (no `InputPlugin`) simply see no input.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::projectiles::messages::FireProjectile;

/// Distance in front of the player where projectiles appear.
const MUZZLE_OFFSET: f32 = 18.0;

#[derive(Component)]
pub struct Player;

#[derive(Resource, Default, Debug)]
pub struct PlayerInput {
    /// Horizontal axis in [-1, 1].
    pub axis: f32,
    /// Trigger was pressed this frame.
    pub fire: bool,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(
            Update,
            (gather_input, request_fire.after(gather_input)).run_if(in_state(GameState::InGame)),
        )
        .add_systems(FixedUpdate, apply_movement.run_if(in_state(GameState::InGame)));
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let layers = CollisionLayers::new(Layer::Player, [Layer::Enemy]);

    commands.spawn((
        Name::new("Player"),
        Player,
        Sprite {
            color: Color::srgb(0.2, 0.75, 0.9),
            custom_size: Some(Vec2::splat(26.0)),
            ..default()
        },
        Transform::from_xyz(0.0, tunables.player_y, 1.0),
        RigidBody::Kinematic,
        Collider::circle(13.0),
        layers,
        LinearVelocity::ZERO,
        DespawnOnExit(GameState::InGame),
    ));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else {
        *input = PlayerInput::default();
        return;
    };

    let mut axis = 0.0;
    if keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        axis -= 1.0;
    }
    if keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        axis += 1.0;
    }

    input.axis = axis;
    input.fire = keys.just_pressed(KeyCode::Space);
}

/// Producer: write a fire request. Never touches the projectile pool.
pub fn request_fire(
    input: Res<PlayerInput>,
    q_player: Query<&Transform, With<Player>>,
    mut writer: MessageWriter<FireProjectile>,
) {
    if !input.fire {
        return;
    }

    let tf = match q_player.single() {
        Ok(tf) => tf,
        Err(e) => {
            debug!("No single Player Transform: {e:?}");
            return;
        }
    };

    let pos = tf.translation.truncate() + Vec2::Y * MUZZLE_OFFSET;
    writer.write(FireProjectile { pos });
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<&mut LinearVelocity, With<Player>>,
) {
    let Ok(mut vel) = q_player.single_mut() else {
        return;
    };
    vel.0 = Vec2::new(input.axis.clamp(-1.0, 1.0) * tunables.player_speed, 0.0);
}
