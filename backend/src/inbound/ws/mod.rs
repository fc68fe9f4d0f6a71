//! WebSocket inbound adapter.
//!
//! A best-effort channel: clients join and leave named channels and receive
//! acknowledgements. Upgrades are accepted from any origin.

use actix_web::web::Payload;
use actix_web::{HttpRequest, HttpResponse, get};
use tracing::error;

mod session;

pub mod messages;

/// Handle WebSocket upgrade for the `/ws` endpoint.
#[get("/ws")]
pub async fn ws_entry(req: HttpRequest, stream: Payload) -> actix_web::Result<HttpResponse> {
    let (response, session, messages) = actix_ws::handle(&req, stream).map_err(|error| {
        error!(error = %error, "WebSocket upgrade failed");
        error
    })?;
    actix_web::rt::spawn(session::handle_ws_session(session, messages));
    Ok(response)
}
