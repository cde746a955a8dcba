//! Game action definitions and their keyboard bindings

use macroquad::prelude::KeyCode;

/// Everything the player can ask for
///
/// Button mappings (Xbox/PlayStation):
/// - D-pad or left stick = MoveLeft / MoveRight
/// - A/Cross = Jump
/// - Start/Options = Restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Restart,
}

impl Action {
    #[cfg(test)]
    pub const ALL: [Action; 4] = [Action::MoveLeft, Action::MoveRight, Action::Jump, Action::Restart];

    /// Keys bound to this action
    pub fn keys(self) -> &'static [KeyCode] {
        match self {
            Action::MoveLeft => &[KeyCode::Left, KeyCode::A],
            Action::MoveRight => &[KeyCode::Right, KeyCode::D],
            Action::Jump => &[KeyCode::Space, KeyCode::Up, KeyCode::W],
            Action::Restart => &[KeyCode::R, KeyCode::Enter],
        }
    }

    /// Edge-triggered actions fire once per press; the rest fire while held
    pub fn is_edge_triggered(self) -> bool {
        matches!(self, Action::Jump | Action::Restart)
    }
}
