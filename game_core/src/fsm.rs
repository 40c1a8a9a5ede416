//! Frame Loop State Machine
//!
//! Decides which parts of a frame run: simulation while `Running`, nothing
//! while `Paused`, and only the fade while `Fading` after a point.

use crate::systems::Command;

/// Loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Paused,
    Fading,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    TogglePause,
    PointScored,
    FadeDone,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: LoopState,
    pub to_state: LoopState,
    pub action: LoopAction,
}

/// Frame loop finite state machine plus the slow-motion debug toggle
#[derive(Debug, Clone)]
pub struct FrameLoop {
    state: LoopState,
    slow_motion: bool,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
            slow_motion: false,
        }
    }

    /// Get current state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: LoopAction) -> TransitionResult {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                log::debug!("Frame loop {:?} -> {:?} ({:?})", from_state, next_state, action);
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: LoopAction) -> Option<LoopState> {
        match (self.state, action) {
            (LoopState::Running, LoopAction::TogglePause) => Some(LoopState::Paused),
            (LoopState::Paused, LoopAction::TogglePause) => Some(LoopState::Running),
            (LoopState::Running, LoopAction::PointScored) => Some(LoopState::Fading),
            (LoopState::Fading, LoopAction::FadeDone) => Some(LoopState::Running),
            _ => None,
        }
    }

    /// Whether a player command is honoured in the current state.
    /// The fade swallows everything but quitting; a pause freezes the paddles.
    pub fn accepts(&self, command: Command) -> bool {
        match self.state {
            LoopState::Running => true,
            LoopState::Paused => !matches!(command, Command::PaddleUp | Command::PaddleDown),
            LoopState::Fading => command == Command::Quit,
        }
    }

    pub fn toggle_slow_motion(&mut self) -> bool {
        self.slow_motion = !self.slow_motion;
        self.slow_motion
    }

    pub fn slow_motion(&self) -> bool {
        self.slow_motion
    }

    pub fn is_fading(&self) -> bool {
        self.state == LoopState::Fading
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = FrameLoop::new();
        assert_eq!(fsm.state(), LoopState::Running);
        assert!(!fsm.slow_motion());
    }

    #[test]
    fn test_pause_round_trip() {
        let mut fsm = FrameLoop::new();
        let result = fsm.transition(LoopAction::TogglePause);
        assert!(result.success);
        assert_eq!(result.from_state, LoopState::Running);
        assert_eq!(fsm.state(), LoopState::Paused);

        fsm.transition(LoopAction::TogglePause);
        assert_eq!(fsm.state(), LoopState::Running);
    }

    #[test]
    fn test_point_fade_cycle() {
        let mut fsm = FrameLoop::new();
        fsm.transition(LoopAction::PointScored);
        assert!(fsm.is_fading());
        fsm.transition(LoopAction::FadeDone);
        assert_eq!(fsm.state(), LoopState::Running);
    }

    #[test]
    fn test_cannot_pause_during_fade() {
        let mut fsm = FrameLoop::new();
        fsm.transition(LoopAction::PointScored);
        let result = fsm.transition(LoopAction::TogglePause);
        assert!(!result.success);
        assert_eq!(fsm.state(), LoopState::Fading);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = FrameLoop::new();
        let result = fsm.transition(LoopAction::FadeDone);
        assert!(!result.success);
        assert_eq!(result.to_state, LoopState::Running);
    }

    #[test]
    fn test_command_filtering() {
        let mut fsm = FrameLoop::new();
        assert!(fsm.accepts(Command::PaddleUp));

        fsm.transition(LoopAction::TogglePause);
        assert!(!fsm.accepts(Command::PaddleDown));
        assert!(fsm.accepts(Command::LogTouch));
        assert!(fsm.accepts(Command::TogglePause));

        fsm.transition(LoopAction::TogglePause);
        fsm.transition(LoopAction::PointScored);
        assert!(!fsm.accepts(Command::ForceReset));
        assert!(!fsm.accepts(Command::ToggleSlowMotion));
        assert!(fsm.accepts(Command::Quit));
    }

    #[test]
    fn test_slow_motion_toggle() {
        let mut fsm = FrameLoop::new();
        assert!(fsm.toggle_slow_motion());
        assert!(!fsm.toggle_slow_motion());
    }
}
