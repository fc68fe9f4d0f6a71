//! Wire-level message definitions for the WebSocket channel.
//!
//! Clients subscribe to named channels (a room number, a role, a student id)
//! and receive acknowledgements. No business data travels over the socket.

use serde::{Deserialize, Serialize};

/// Inbound frame sent by the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientMessage {
    /// Subscribe to a channel.
    Join { room: String },
    /// Unsubscribe from a channel.
    Leave { room: String },
}

impl ClientMessage {
    /// Parse a text frame, rejecting blank channel names.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let message: Self = serde_json::from_str(text)?;
        if message.room().trim().is_empty() {
            return Err(serde::de::Error::custom("room must not be empty"));
        }
        Ok(message)
    }

    /// Channel the frame refers to.
    pub fn room(&self) -> &str {
        match self {
            Self::Join { room } | Self::Leave { room } => room,
        }
    }
}

/// Outbound acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    /// The channel was added to this connection.
    Joined { room: String, rooms: Vec<String> },
    /// The channel was removed from this connection.
    Left { room: String, rooms: Vec<String> },
}
