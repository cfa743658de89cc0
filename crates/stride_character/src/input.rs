use bitflags::bitflags;
use stride_core::input::Key;

use crate::config::{BoundAction, KeyBindings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Backward,
    TurnRight,
    TurnLeft,
}

impl MoveDirection {
    /// First match wins when several movement keys are held.
    pub const PRECEDENCE: [MoveDirection; 4] = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::TurnRight,
        MoveDirection::TurnLeft,
    ];

    #[must_use]
    pub fn flag(self) -> MovementKeys {
        match self {
            MoveDirection::Forward => MovementKeys::FORWARD,
            MoveDirection::Backward => MovementKeys::BACKWARD,
            MoveDirection::TurnRight => MovementKeys::TURN_RIGHT,
            MoveDirection::TurnLeft => MovementKeys::TURN_LEFT,
        }
    }
}

bitflags! {
    /// Movement keys currently held.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MovementKeys: u8 {
        const FORWARD    = 1 << 0;
        const BACKWARD   = 1 << 1;
        const TURN_RIGHT = 1 << 2;
        const TURN_LEFT  = 1 << 3;
    }
}

impl MovementKeys {
    /// The held direction that drives this frame, by [`MoveDirection::PRECEDENCE`].
    #[must_use]
    pub fn dominant(self) -> Option<MoveDirection> {
        MoveDirection::PRECEDENCE
            .into_iter()
            .find(|d| self.contains(d.flag()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedModifier {
    #[default]
    Normal,
    /// Sprint key held.
    Fast,
    /// Jump key held.
    Short,
}

/// Keyboard state the locomotion reads each frame.
///
/// The speed modifier goes back to `Normal` on every key-up, whichever key
/// was released. Releasing an unrelated key while sprinting therefore drops
/// back to walking speed even though the sprint key is still down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    movement: MovementKeys,
    speed_modifier: SpeedModifier,
    takedown_held: bool,
}

impl InputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn movement(&self) -> MovementKeys {
        self.movement
    }

    #[must_use]
    pub fn is_moving(&self) -> bool {
        !self.movement.is_empty()
    }

    #[must_use]
    pub fn speed_modifier(&self) -> SpeedModifier {
        self.speed_modifier
    }

    #[must_use]
    pub fn takedown_held(&self) -> bool {
        self.takedown_held
    }

    /// Records a key press and returns what the key is bound to.
    pub fn on_key_down(&mut self, key: Key, bindings: &KeyBindings) -> Option<BoundAction> {
        let action = bindings.resolve(key)?;
        match action {
            BoundAction::Move(direction) => self.movement.insert(direction.flag()),
            BoundAction::Sprint => self.speed_modifier = SpeedModifier::Fast,
            BoundAction::Jump => self.speed_modifier = SpeedModifier::Short,
            BoundAction::Takedown => self.takedown_held = true,
            BoundAction::Gesture(_) | BoundAction::ToggleFollow => {}
        }
        Some(action)
    }

    /// Records a key release and returns what the key was bound to.
    pub fn on_key_up(&mut self, key: Key, bindings: &KeyBindings) -> Option<BoundAction> {
        self.speed_modifier = SpeedModifier::Normal;

        let action = bindings.resolve(key)?;
        match action {
            BoundAction::Move(direction) => self.movement.remove(direction.flag()),
            BoundAction::Takedown => self.takedown_held = false,
            BoundAction::Sprint
            | BoundAction::Jump
            | BoundAction::Gesture(_)
            | BoundAction::ToggleFollow => {}
        }
        Some(action)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
