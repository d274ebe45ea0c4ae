//! Lighting plugin (Firefly) (render-only).
//!
//! The player carries its own light as a child entity, so it follows without a sync system.
//! Enemies cast shadows through the `Occluder2d` they are spawned with.

use bevy::prelude::*;
use bevy_firefly::prelude::*;

use crate::plugins::player::Player;

#[derive(Component)]
pub struct PlayerLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(Update, attach_player_light);
}

fn attach_player_light(mut commands: Commands, q_new_players: Query<Entity, Added<Player>>) {
    for player in &q_new_players {
        commands.entity(player).with_child((
            Name::new("PlayerLight"),
            PlayerLight,
            PointLight2d {
                color: Color::srgb(1.0, 0.9, 0.75),
                radius: 520.0,
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 10.0),
        ));
    }
}
