//! WebSocket connection worker
//!
//! Each connection gets a dedicated thread with a single-threaded tokio
//! runtime. The worker forwards frames to the UI thread over a std channel
//! and always finishes with exactly one [`SourceEvent::Closed`].
//! There is no reconnect: once closed, the stream stays closed.

use std::sync::mpsc::{self, Sender};

use futures::StreamExt;
use tokio_tungstenite::tungstenite::Message;
use tokio_util::sync::CancellationToken;
use url::Url;

use super::source_event::{CloseReason, EventStream, SourceEvent};

/// Status code reported when a close frame carries no code
const NO_STATUS_CODE: u16 = 1005;

/// Open a connection to `endpoint` on a background worker
pub fn connect(endpoint: &Url) -> EventStream {
    let (tx, rx) = mpsc::channel();
    let cancel = CancellationToken::new();
    let worker_cancel = cancel.clone();
    let url = endpoint.to_string();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Cannot start connection runtime: {}", e);
                let _ = tx.send(SourceEvent::Closed(CloseReason::Failed(e.to_string())));
                return;
            }
        };

        let reason = runtime.block_on(run_connection(&url, &tx, &worker_cancel));
        log::info!("[{}] Connection ended: {}", url, reason);
        let _ = tx.send(SourceEvent::Closed(reason));
    });

    EventStream::new(rx, cancel)
}

async fn run_connection(
    url: &str,
    tx: &Sender<SourceEvent>,
    cancel: &CancellationToken,
) -> CloseReason {
    log::info!("[{}] Connecting", url);

    let connected = tokio::select! {
        _ = cancel.cancelled() => return CloseReason::Cancelled,
        result = tokio_tungstenite::connect_async(url) => result,
    };

    let mut stream = match connected {
        Ok((stream, response)) => {
            log::info!("[{}] Connected (status: {})", url, response.status());
            stream
        }
        Err(e) => {
            log::error!("[{}] Connection failed: {}", url, e);
            return CloseReason::Failed(e.to_string());
        }
    };

    if tx.send(SourceEvent::Opened).is_err() {
        return CloseReason::Cancelled;
    }

    loop {
        let next = tokio::select! {
            _ = cancel.cancelled() => None,
            next = stream.next() => Some(next),
        };

        let Some(next) = next else {
            let _ = stream.close(None).await;
            return CloseReason::Cancelled;
        };

        let event = match next {
            Some(Ok(Message::Text(text))) => {
                log::debug!("[{}] Received {} bytes", url, text.len());
                SourceEvent::Text(text.as_str().to_owned())
            }
            Some(Ok(Message::Binary(data))) => {
                log::debug!("[{}] Received binary ({} bytes)", url, data.len());
                SourceEvent::Binary(data.to_vec())
            }
            // Control frames are answered by tungstenite
            Some(Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_))) => continue,
            Some(Ok(Message::Close(frame))) => {
                let (code, reason) = frame
                    .map(|f| (u16::from(f.code), f.reason.to_string()))
                    .unwrap_or((NO_STATUS_CODE, String::new()));
                return CloseReason::Remote { code, reason };
            }
            Some(Err(e)) => {
                log::error!("[{}] Read error: {}", url, e);
                return CloseReason::Failed(e.to_string());
            }
            None => return CloseReason::Dropped,
        };

        if tx.send(event).is_err() {
            // Receiver gone: nobody is listening any more
            let _ = stream.close(None).await;
            return CloseReason::Cancelled;
        }
    }
}
