use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use tokio_tungstenite::tungstenite::{Message, accept};

/// Serve a single WebSocket client: send `frames` in order, then close.
///
/// Returns the port to connect to and the server thread.
pub fn serve_frames(frames: Vec<String>) -> (u16, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let Ok(mut ws) = accept(stream) else {
            return;
        };

        for frame in frames {
            ws.send(Message::text(frame)).unwrap();
        }
        let _ = ws.close(None);

        // Drive the close handshake to completion
        while ws.read().is_ok() {}
    });

    (port, handle)
}

/// A port nothing is listening on
pub fn unused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

pub fn checkout(user: &str, ref_name: &str, checked_out: bool) -> String {
    serde_json::json!({
        "User": user,
        "RefName": ref_name,
        "CheckedOut": checked_out,
    })
    .to_string()
}
