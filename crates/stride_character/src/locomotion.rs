use stride_scene::Transform;

use crate::config::ViewerConfig;
use crate::input::{InputState, MoveDirection, SpeedModifier};

/// What one locomotion step did to the character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    None,
    /// Moved along local +Z; negative when walking backward.
    Translate { distance: f32 },
    /// Turned about +Y, radians.
    Rotate { angle: f32 },
}

/// Integrates held movement keys into the character transform.
///
/// Exactly one movement applies per frame, chosen by
/// [`MoveDirection::PRECEDENCE`]: holding forward and turn-right together
/// walks forward without turning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionUpdater {
    pub normal_speed: f32,
    pub fast_speed: f32,
    pub jump_speed_penalty: f32,
    pub turn_rate: f32,
}

impl Default for LocomotionUpdater {
    fn default() -> Self {
        Self::from_config(&ViewerConfig::default())
    }
}

impl LocomotionUpdater {
    #[must_use]
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            normal_speed: config.normal_speed,
            fast_speed: config.fast_speed,
            jump_speed_penalty: config.jump_speed_penalty,
            turn_rate: config.turn_rate,
        }
    }

    /// Scene units per second for the given modifier.
    #[must_use]
    pub fn speed(&self, modifier: SpeedModifier) -> f32 {
        match modifier {
            SpeedModifier::Normal => self.normal_speed,
            SpeedModifier::Fast => self.fast_speed,
            SpeedModifier::Short => self.normal_speed - self.jump_speed_penalty,
        }
    }

    pub fn update(&self, transform: &mut Transform, input: &InputState, dt: f32) -> Motion {
        let Some(direction) = input.movement().dominant() else {
            return Motion::None;
        };
        let speed = self.speed(input.speed_modifier());

        match direction {
            MoveDirection::Forward => {
                let distance = speed * dt;
                transform.translate_z(distance);
                Motion::Translate { distance }
            }
            MoveDirection::Backward => {
                let distance = -speed * dt;
                transform.translate_z(distance);
                Motion::Translate { distance }
            }
            MoveDirection::TurnRight => {
                let angle = -self.turn_rate * dt;
                transform.rotate_y(angle);
                Motion::Rotate { angle }
            }
            MoveDirection::TurnLeft => {
                let angle = self.turn_rate * dt;
                transform.rotate_y(angle);
                Motion::Rotate { angle }
            }
        }
    }
}
