//! Room Channel Client
//!
//! This module implements the realtime channel for one room view: a
//! WebSocket client running on a background thread, announcing the join
//! and relaying typed events in both directions.
//!
//! Incoming frames are parsed against the closed `ServerEvent` union at
//! this boundary; frames that fail to parse are logged and discarded,
//! they never reach view state. The UI thread talks to the channel only
//! through non-blocking polls and `send`.
//!
//! Dropping the channel tears the connection down: the command sender
//! closes, the socket task sends a Close frame and the thread exits.
//! The reconnect wait watches for the same teardown, so leaving a room
//! while the server is unreachable does not hang the UI thread. The
//! server removes the member and recomputes host status on its own.

use crate::egui_app::config::Config;
use crate::shared::event::{ClientEvent, ServerEvent};
use futures_util::{SinkExt, StreamExt};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;

/// Connection status reported by the channel thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelStatus {
    Connecting,
    Connected,
    Retrying,
    Error(String),
    Disconnected,
}

/// Realtime channel for one room
#[derive(Debug)]
pub struct RoomChannel {
    room_id: String,
    channel_thread: Option<thread::JoinHandle<()>>,
    event_receiver: Receiver<ServerEvent>,
    status_receiver: Receiver<ChannelStatus>,
    command_sender: Option<UnboundedSender<ClientEvent>>,
}

impl RoomChannel {
    /// Open the channel and announce the join
    ///
    /// Returns immediately; connection progress arrives via
    /// `poll_status`.
    pub fn connect(config: &Config, room_id: &str, user_id: i64) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let (status_tx, status_rx) = mpsc::channel();
        let (command_tx, command_rx) = unbounded_channel();

        let ws_url = config.ws_url().to_string();
        let room = room_id.to_string();
        let thread = thread::spawn(move || {
            run_channel(ws_url, room, user_id, event_tx, status_tx, command_rx);
        });

        Self {
            room_id: room_id.to_string(),
            channel_thread: Some(thread),
            event_receiver: event_rx,
            status_receiver: status_rx,
            command_sender: Some(command_tx),
        }
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    /// Queue an outgoing event
    ///
    /// Fails when the channel thread has exited; callers surface that
    /// as a dropped action.
    pub fn send(&self, event: ClientEvent) -> Result<(), String> {
        let name = event.name();
        match &self.command_sender {
            Some(sender) => sender
                .send(event)
                .map_err(|_| format!("Channel closed, '{}' dropped", name)),
            None => Err(format!("Channel closed, '{}' dropped", name)),
        }
    }

    /// Drain incoming events (non-blocking)
    pub fn poll_events(&self) -> Vec<ServerEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.event_receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Poll latest status update (non-blocking)
    pub fn poll_status(&self) -> Option<ChannelStatus> {
        self.status_receiver.try_recv().ok()
    }
}

impl Drop for RoomChannel {
    fn drop(&mut self) {
        // Closing the command channel ends the socket task
        self.command_sender = None;
        if let Some(thread) = self.channel_thread.take() {
            let _ = thread.join();
        }
    }
}

/// Connection loop run on the channel thread
fn run_channel(
    ws_url: String,
    room_id: String,
    user_id: i64,
    event_sender: Sender<ServerEvent>,
    status_sender: Sender<ChannelStatus>,
    mut command_receiver: UnboundedReceiver<ClientEvent>,
) {
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("[CHANNEL] Failed to create runtime: {}", e);
            let _ = status_sender.send(ChannelStatus::Error(format!("runtime: {}", e)));
            return;
        }
    };

    rt.block_on(async {
        let mut reconnect_delay = std::time::Duration::from_millis(1000);
        const MAX_RECONNECT_DELAY: std::time::Duration = std::time::Duration::from_secs(30);

        loop {
            tracing::info!("[CHANNEL] Connecting to {} for room {}", ws_url, room_id);
            let _ = status_sender.send(ChannelStatus::Connecting);

            let ws_stream = match connect_async(ws_url.as_str()).await {
                Ok((stream, _response)) => stream,
                Err(e) => {
                    tracing::warn!("[CHANNEL] Connect failed (will retry): {}", e);
                    let _ = status_sender.send(ChannelStatus::Error(format!("connect: {}", e)));
                    let _ = status_sender.send(ChannelStatus::Retrying);
                    if await_retry(&mut command_receiver, reconnect_delay).await {
                        let _ = status_sender.send(ChannelStatus::Disconnected);
                        return;
                    }
                    reconnect_delay = std::cmp::min(reconnect_delay * 2, MAX_RECONNECT_DELAY);
                    continue;
                }
            };

            let (mut write, mut read) = ws_stream.split();

            // Announce the join; the server answers with the replay events
            let join = ClientEvent::JoinRoom {
                room_id: room_id.clone(),
                user_id,
            };
            let join_frame = match join.to_frame() {
                Ok(frame) => frame,
                Err(e) => {
                    tracing::error!("[CHANNEL] Cannot build join frame: {}", e);
                    let _ = status_sender.send(ChannelStatus::Error(e.to_string()));
                    return;
                }
            };
            if let Err(e) = write.send(WsMessage::text(join_frame)).await {
                tracing::warn!("[CHANNEL] Join send failed (will retry): {}", e);
                let _ = status_sender.send(ChannelStatus::Retrying);
                if await_retry(&mut command_receiver, reconnect_delay).await {
                    let _ = status_sender.send(ChannelStatus::Disconnected);
                    return;
                }
                reconnect_delay = std::cmp::min(reconnect_delay * 2, MAX_RECONNECT_DELAY);
                continue;
            }

            tracing::info!("[CHANNEL] Connected, joined room {}", room_id);
            let _ = status_sender.send(ChannelStatus::Connected);
            reconnect_delay = std::time::Duration::from_millis(1000);

            let mut connection_lost = false;
            loop {
                tokio::select! {
                    incoming = read.next() => {
                        match incoming {
                            Some(Ok(WsMessage::Text(text))) => {
                                match ServerEvent::parse(text.as_str()) {
                                    Ok(event) => {
                                        tracing::debug!("[CHANNEL] Received '{}'", event.name());
                                        if event_sender.send(event).is_err() {
                                            // UI side is gone
                                            let _ = write.send(WsMessage::Close(None)).await;
                                            return;
                                        }
                                    }
                                    Err(e) => {
                                        tracing::warn!("[CHANNEL] Discarding frame: {}", e);
                                    }
                                }
                            }
                            Some(Ok(WsMessage::Close(_))) => {
                                tracing::info!("[CHANNEL] Server closed the connection");
                                connection_lost = true;
                                break;
                            }
                            Some(Ok(_)) => {
                                // Ping/pong and binary frames carry no events
                            }
                            Some(Err(e)) => {
                                tracing::warn!("[CHANNEL] Read error: {}", e);
                                let _ = status_sender.send(ChannelStatus::Error(format!("stream: {}", e)));
                                connection_lost = true;
                                break;
                            }
                            None => {
                                connection_lost = true;
                                break;
                            }
                        }
                    }
                    command = command_receiver.recv() => {
                        match command {
                            Some(event) => {
                                let name = event.name();
                                match event.to_frame() {
                                    Ok(frame) => {
                                        if let Err(e) = write.send(WsMessage::text(frame)).await {
                                            tracing::warn!("[CHANNEL] Send of '{}' failed: {}", name, e);
                                            connection_lost = true;
                                            break;
                                        }
                                        tracing::debug!("[CHANNEL] Sent '{}'", name);
                                    }
                                    Err(e) => {
                                        tracing::error!("[CHANNEL] Cannot serialize '{}': {}", name, e);
                                    }
                                }
                            }
                            None => {
                                // Channel dropped on the UI side: clean teardown
                                tracing::info!("[CHANNEL] Leaving room {}", room_id);
                                let _ = write.send(WsMessage::Close(None)).await;
                                let _ = status_sender.send(ChannelStatus::Disconnected);
                                return;
                            }
                        }
                    }
                }
            }

            if connection_lost {
                tracing::warn!("[CHANNEL] Connection lost for room {}, will reconnect", room_id);
                let _ = status_sender.send(ChannelStatus::Retrying);
                if await_retry(&mut command_receiver, reconnect_delay).await {
                    let _ = status_sender.send(ChannelStatus::Disconnected);
                    return;
                }
                reconnect_delay = std::cmp::min(reconnect_delay * 2, MAX_RECONNECT_DELAY);
            }
        }
    });
}

/// Wait out the reconnect delay without losing sight of the UI side.
///
/// Commands arriving while the connection is down are dropped; the
/// rejoin replay restores everything that matters. Returns true when
/// the command channel closed, meaning the user left the room and the
/// thread must exit instead of retrying forever.
async fn await_retry(
    commands: &mut UnboundedReceiver<ClientEvent>,
    delay: std::time::Duration,
) -> bool {
    let sleep = tokio::time::sleep(delay);
    tokio::pin!(sleep);
    loop {
        tokio::select! {
            _ = &mut sleep => return false,
            command = commands.recv() => match command {
                Some(event) => {
                    tracing::warn!("[CHANNEL] Dropping '{}' while disconnected", event.name());
                }
                None => return true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_equality() {
        assert_eq!(ChannelStatus::Connected, ChannelStatus::Connected);
        assert_ne!(
            ChannelStatus::Error("a".to_string()),
            ChannelStatus::Error("b".to_string())
        );
    }
}
