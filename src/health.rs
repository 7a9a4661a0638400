use crate::error::{other_error, BotResult};
use tiny_http::{Response, Server};
use tracing::{error, info};

/// Start the liveness endpoint on a background thread.
///
/// The hosting environment pings this to confirm the process is up;
/// every request is answered with a plain 200.
pub fn start_health_server(port: u16) -> BotResult<()> {
    let server = Server::http(("0.0.0.0", port))
        .map_err(|e| other_error(&format!("Failed to bind health endpoint: {}", e)))?;

    info!("Health endpoint listening on port {}", port);

    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let response = Response::from_string("OK");
            if let Err(e) = request.respond(response) {
                error!("Failed to answer health check: {}", e);
            }
        }
    });

    Ok(())
}
