//! Remote command messages, e.g. from an embedding host.
//!
//! Wire shape: `{"command": "swipe", "direction": "ArrowUp"}` or
//! `{"command": "restartGame"}`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Direction, ParseDirectionError};
use crate::session::GameCommand;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Malformed remote message: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Unknown remote command '{0}'")]
    UnknownCommand(String),

    #[error("Swipe message without a direction")]
    MissingDirection,

    #[error(transparent)]
    InvalidDirection(#[from] ParseDirectionError),
}

/// Raw message as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteMessage {
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

impl RemoteMessage {
    pub fn swipe(direction: Direction) -> Self {
        let name = match direction {
            Direction::Up => "ArrowUp",
            Direction::Down => "ArrowDown",
            Direction::Left => "ArrowLeft",
            Direction::Right => "ArrowRight",
        };
        Self {
            command: "swipe".to_string(),
            direction: Some(name.to_string()),
        }
    }

    pub fn restart() -> Self {
        Self {
            command: "restartGame".to_string(),
            direction: None,
        }
    }

    pub fn to_command(&self) -> Result<GameCommand, RemoteError> {
        match self.command.as_str() {
            "swipe" => {
                let direction = self
                    .direction
                    .as_deref()
                    .ok_or(RemoteError::MissingDirection)?;
                Ok(GameCommand::Move(direction.parse()?))
            }
            "restartGame" => Ok(GameCommand::Restart),
            other => Err(RemoteError::UnknownCommand(other.to_string())),
        }
    }
}

/// Parse one JSON message into a session command.
pub fn parse_message(raw: &str) -> Result<GameCommand, RemoteError> {
    let message: RemoteMessage = serde_json::from_str(raw)?;
    message.to_command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_message_maps_to_move() {
        let command = parse_message(r#"{"command":"swipe","direction":"ArrowLeft"}"#).unwrap();
        assert_eq!(command, GameCommand::Move(Direction::Left));
    }

    #[test]
    fn restart_message_ignores_extra_fields() {
        let command = parse_message(r#"{"command":"restartGame","from":"host"}"#).unwrap();
        assert_eq!(command, GameCommand::Restart);
    }

    #[test]
    fn swipe_without_direction_is_rejected() {
        let err = parse_message(r#"{"command":"swipe"}"#).unwrap_err();
        assert!(matches!(err, RemoteError::MissingDirection));
    }

    #[test]
    fn unknown_command_is_rejected() {
        let err = parse_message(r#"{"command":"undo"}"#).unwrap_err();
        assert!(matches!(err, RemoteError::UnknownCommand(name) if name == "undo"));
    }

    #[test]
    fn constructors_produce_wire_shape() {
        let json = serde_json::to_string(&RemoteMessage::swipe(Direction::Down)).unwrap();
        assert_eq!(json, r#"{"command":"swipe","direction":"ArrowDown"}"#);
        let json = serde_json::to_string(&RemoteMessage::restart()).unwrap();
        assert_eq!(json, r#"{"command":"restartGame"}"#);
    }
}
