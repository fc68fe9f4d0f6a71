//! Per-connection WebSocket handler.
//!
//! Tracks the channels a client has joined and acknowledges each change. The
//! public contract pings every 5s and considers a connection idle after 10s
//! without client traffic. Tests shorten these intervals.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use actix_ws::{CloseCode, CloseReason, Closed, Message, MessageStream, ProtocolError, Session};
use tokio::time;
use tracing::{debug, warn};

use crate::inbound::ws::messages::{ClientMessage, ServerMessage};

/// Time between heartbeats to the client (5s in production, shorter in tests).
#[cfg(not(test))]
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
#[cfg(test)]
const HEARTBEAT_INTERVAL: Duration = Duration::from_millis(50);

/// Max idle time before disconnecting the client (10s in production, shorter in tests).
#[cfg(not(test))]
const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);
#[cfg(test)]
const CLIENT_TIMEOUT: Duration = Duration::from_millis(100);

pub(super) async fn handle_ws_session(session: Session, stream: MessageStream) {
    WsSession::default().run(session, stream).await;
}

enum SessionError {
    ClientClosed(Option<CloseReason>),
    StreamClosed,
    HeartbeatTimeout,
    Protocol(ProtocolError),
    InvalidPayload,
    Network(Closed),
}

enum CloseAction {
    None,
    Close(Option<CloseReason>),
}

#[derive(Default)]
struct WsSession {
    rooms: BTreeSet<String>,
}

impl WsSession {
    async fn run(mut self, mut session: Session, mut stream: MessageStream) {
        let mut last_heartbeat = Instant::now();
        let mut heartbeat = time::interval(HEARTBEAT_INTERVAL);

        loop {
            let result = tokio::select! {
                _ = heartbeat.tick() => {
                    Self::handle_heartbeat_tick(&mut session, last_heartbeat).await
                }
                message = stream.recv() => {
                    self.handle_stream_message(&mut session, &mut last_heartbeat, message)
                        .await
                }
            };

            if let Err(error) = result {
                log_shutdown_reason(&error);
                close_session_if_needed(session, close_action_for(error)).await;
                return;
            }
        }
    }

    async fn handle_heartbeat_tick(
        session: &mut Session,
        last_heartbeat: Instant,
    ) -> Result<(), SessionError> {
        if Instant::now().duration_since(last_heartbeat) > CLIENT_TIMEOUT {
            return Err(SessionError::HeartbeatTimeout);
        }

        session.ping(b"").await.map_err(SessionError::Network)
    }

    async fn handle_stream_message(
        &mut self,
        session: &mut Session,
        last_heartbeat: &mut Instant,
        message: Option<Result<Message, ProtocolError>>,
    ) -> Result<(), SessionError> {
        let Some(message) = message else {
            return Err(SessionError::StreamClosed);
        };

        match message {
            Ok(message) => self.handle_message(session, last_heartbeat, message).await,
            Err(error) => Err(SessionError::Protocol(error)),
        }
    }

    async fn handle_message(
        &mut self,
        session: &mut Session,
        last_heartbeat: &mut Instant,
        message: Message,
    ) -> Result<(), SessionError> {
        match message {
            Message::Ping(payload) => {
                *last_heartbeat = Instant::now();
                session
                    .pong(&payload)
                    .await
                    .map_err(SessionError::Network)
            }
            Message::Text(text) => {
                *last_heartbeat = Instant::now();
                self.handle_text_message(session, text.as_ref()).await
            }
            Message::Pong(_) | Message::Binary(_) | Message::Continuation(_) | Message::Nop => {
                *last_heartbeat = Instant::now();
                Ok(())
            }
            Message::Close(reason) => Err(SessionError::ClientClosed(reason)),
        }
    }

    async fn handle_text_message(
        &mut self,
        session: &mut Session,
        text: &str,
    ) -> Result<(), SessionError> {
        let request = ClientMessage::parse(text).map_err(|error| {
            warn!(error = %error, "Rejected malformed WebSocket payload");
            SessionError::InvalidPayload
        })?;

        let ack = self.apply(request);
        send_json(session, &ack).await.map_err(SessionError::Network)
    }

    fn apply(&mut self, request: ClientMessage) -> ServerMessage {
        match request {
            ClientMessage::Join { room } => {
                let room = room.trim().to_owned();
                self.rooms.insert(room.clone());
                debug!(room = %room, "client joined channel");
                ServerMessage::Joined {
                    room,
                    rooms: self.joined(),
                }
            }
            ClientMessage::Leave { room } => {
                let room = room.trim().to_owned();
                self.rooms.remove(&room);
                debug!(room = %room, "client left channel");
                ServerMessage::Left {
                    room,
                    rooms: self.joined(),
                }
            }
        }
    }

    fn joined(&self) -> Vec<String> {
        self.rooms.iter().cloned().collect()
    }
}

async fn send_json(session: &mut Session, payload: &ServerMessage) -> Result<(), Closed> {
    match serde_json::to_string(payload) {
        Ok(body) => session.text(body).await,
        Err(error) => {
            warn!(error = %error, "Failed to serialize WebSocket payload");
            Ok(())
        }
    }
}

fn log_shutdown_reason(error: &SessionError) {
    match error {
        SessionError::HeartbeatTimeout => {
            warn!("WebSocket heartbeat timeout; closing connection");
        }
        SessionError::Protocol(error) => {
            warn!(error = %error, "WebSocket protocol error");
        }
        SessionError::Network(error) => {
            warn!(error = %error, "WebSocket send failed; closing connection");
        }
        SessionError::InvalidPayload | SessionError::ClientClosed(_) | SessionError::StreamClosed => {}
    }
}

fn close_action_for(error: SessionError) -> CloseAction {
    match error {
        SessionError::HeartbeatTimeout => CloseAction::Close(Some(CloseReason {
            code: CloseCode::Normal,
            description: Some("heartbeat timeout".to_owned()),
        })),
        SessionError::Protocol(_) => CloseAction::Close(Some(CloseReason {
            code: CloseCode::Protocol,
            description: Some("protocol error".to_owned()),
        })),
        SessionError::InvalidPayload => CloseAction::Close(Some(CloseReason {
            code: CloseCode::Policy,
            description: Some("invalid payload".to_owned()),
        })),
        SessionError::ClientClosed(reason) => CloseAction::Close(reason),
        SessionError::StreamClosed | SessionError::Network(_) => CloseAction::None,
    }
}

async fn close_session_if_needed(session: Session, close_action: CloseAction) {
    if let CloseAction::Close(reason) = close_action {
        if let Err(error) = session.close(reason).await {
            warn!(error = %error, "Failed to close WebSocket session");
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
