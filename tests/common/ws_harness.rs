//! Scripted WebSocket room server
//!
//! Binds a real listener and plays the same script to every client
//! that connects: once the `joinRoom` frame arrives, each scripted
//! frame is sent in order. Every client frame is forwarded to the
//! test through a channel for assertions.

use std::net::SocketAddr;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;
use tokio_tungstenite::tungstenite::Message as WsMessage;

pub struct ScriptedRoomServer {
    addr: SocketAddr,
    frames: Receiver<Value>,
}

impl ScriptedRoomServer {
    /// Bind an ephemeral port and serve `script` after each join
    pub fn start(script: Vec<Value>) -> Self {
        let (frame_tx, frame_rx) = channel();
        let (addr_tx, addr_rx) = channel();

        // The accept loop runs until the test process exits
        thread::spawn(move || {
            let rt = Runtime::new().expect("harness runtime");
            rt.block_on(serve(script, frame_tx, addr_tx));
        });

        let addr = addr_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("harness bind");
        Self {
            addr,
            frames: frame_rx,
        }
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}", self.addr)
    }

    /// Next client frame, or `None` on timeout
    pub fn recv_frame(&self, timeout: Duration) -> Option<Value> {
        self.frames.recv_timeout(timeout).ok()
    }

    /// Wait for a frame with the given event name, skipping others
    pub fn wait_for_event(&self, event: &str, timeout: Duration) -> Option<Value> {
        let deadline = std::time::Instant::now() + timeout;
        while let Some(remaining) = deadline.checked_duration_since(std::time::Instant::now()) {
            match self.frames.recv_timeout(remaining) {
                Ok(frame) if frame["event"] == event => return Some(frame),
                Ok(_) => continue,
                Err(_) => break,
            }
        }
        None
    }
}

async fn serve(script: Vec<Value>, frame_tx: Sender<Value>, addr_tx: Sender<SocketAddr>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("harness bind");
    let addr = listener.local_addr().expect("harness addr");
    let _ = addr_tx.send(addr);

    while let Ok((stream, _)) = listener.accept().await {
        let Ok(ws) = tokio_tungstenite::accept_async(stream).await else {
            continue;
        };
        let (mut write, mut read) = ws.split();
        let mut script_sent = false;

        while let Some(Ok(frame)) = read.next().await {
            match frame {
                WsMessage::Text(text) => {
                    let Ok(value) = serde_json::from_str::<Value>(text.as_str()) else {
                        continue;
                    };
                    let is_join = value["event"] == "joinRoom";
                    if frame_tx.send(value).is_err() {
                        // Test is done with us
                        return;
                    }
                    if is_join && !script_sent {
                        script_sent = true;
                        for item in &script {
                            if write.send(WsMessage::text(item.to_string())).await.is_err() {
                                break;
                            }
                        }
                    }
                }
                WsMessage::Close(_) => break,
                _ => {}
            }
        }
    }
}
