use crate::channel::ChannelId;
use crate::core::packet::CustomPayload;
use crate::error::Result;
use crate::utils::metrics::global_metrics;
use crate::version::ProtocolVersion;
use bytes::Bytes;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Callback run by the connection once the dispatched packet has been written
pub type PostSendListener = Box<dyn FnOnce(&Result<()>) + Send + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Server to client
    Clientbound,
    /// Client to server
    Serverbound,
}

/// Negotiated versions on both sides of one proxied connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionVersions {
    pub client: ProtocolVersion,
    pub server: ProtocolVersion,
}

impl ConnectionVersions {
    pub fn new(client: ProtocolVersion, server: ProtocolVersion) -> Self {
        Self { client, server }
    }
}

/// Per-message view handed to the claiming handler
pub struct PayloadContext<'a> {
    direction: Direction,
    versions: &'a ConnectionVersions,
    listeners: Vec<PostSendListener>,
}

impl<'a> PayloadContext<'a> {
    fn new(direction: Direction, versions: &'a ConnectionVersions) -> Self {
        Self {
            direction,
            versions,
            listeners: Vec::new(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn versions(&self) -> &ConnectionVersions {
        self.versions
    }

    pub fn client_version(&self) -> &ProtocolVersion {
        &self.versions.client
    }

    pub fn server_version(&self) -> &ProtocolVersion {
        &self.versions.server
    }

    /// Schedule `listener` to run after the rewritten packet is sent
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnOnce(&Result<()>) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }
}

/// A channel handler: claims messages by channel and rewrites their data.
///
/// Handlers run synchronously on the connection's packet path and must not block.
pub trait PayloadHandler: Send + Sync {
    fn name(&self) -> &'static str;

    fn claims(&self, channel: &ChannelId, direction: Direction) -> bool;

    /// Produce the data to forward; returning the input unchanged passes it through
    fn rewrite(
        &self,
        ctx: &mut PayloadContext<'_>,
        channel: &ChannelId,
        data: Bytes,
    ) -> Result<Bytes>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Rewritten { handler: &'static str },
    Passthrough { handler: &'static str },
    /// No handler claimed the channel; data forwarded untouched
    Unclaimed,
}

pub struct Dispatched {
    pub data: Bytes,
    pub outcome: DispatchOutcome,
    pub listeners: Vec<PostSendListener>,
}

impl fmt::Debug for Dispatched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatched")
            .field("data", &self.data)
            .field("outcome", &self.outcome)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Dispatched {
    /// Run the post-send listeners with the outcome of the write
    pub fn complete(self, sent: &Result<()>) -> (Bytes, DispatchOutcome) {
        for listener in self.listeners {
            listener(sent);
        }
        (self.data, self.outcome)
    }
}

/// Ordered handler chain for one connection.
///
/// The first handler that claims a channel owns the message; when none does,
/// the data passes through unmodified.
pub struct ChannelDispatcher {
    versions: ConnectionVersions,
    handlers: Vec<Arc<dyn PayloadHandler>>,
}

impl ChannelDispatcher {
    pub fn new(versions: ConnectionVersions) -> Self {
        Self {
            versions,
            handlers: Vec::new(),
        }
    }

    pub fn with_handlers(
        versions: ConnectionVersions,
        handlers: Vec<Arc<dyn PayloadHandler>>,
    ) -> Self {
        Self { versions, handlers }
    }

    pub fn register(&mut self, handler: Arc<dyn PayloadHandler>) {
        self.handlers.push(handler);
    }

    pub fn with_handler(mut self, handler: Arc<dyn PayloadHandler>) -> Self {
        self.register(handler);
        self
    }

    pub fn versions(&self) -> &ConnectionVersions {
        &self.versions
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn dispatch(
        &self,
        direction: Direction,
        channel: &ChannelId,
        data: Bytes,
    ) -> Result<Dispatched> {
        let Some(handler) = self
            .handlers
            .iter()
            .find(|handler| handler.claims(channel, direction))
        else {
            global_metrics().payload_unclaimed();
            return Ok(Dispatched {
                data,
                outcome: DispatchOutcome::Unclaimed,
                listeners: Vec::new(),
            });
        };

        let mut ctx = PayloadContext::new(direction, &self.versions);
        let original = data.clone();
        let rewritten = handler.rewrite(&mut ctx, channel, data)?;

        let outcome = if rewritten == original {
            DispatchOutcome::Passthrough {
                handler: handler.name(),
            }
        } else {
            DispatchOutcome::Rewritten {
                handler: handler.name(),
            }
        };
        global_metrics().payload_claimed(matches!(outcome, DispatchOutcome::Rewritten { .. }));
        trace!(channel = %channel, ?direction, ?outcome, "Dispatched channel payload");

        Ok(Dispatched {
            data: rewritten,
            outcome,
            listeners: ctx.listeners,
        })
    }

    pub fn dispatch_packet(
        &self,
        direction: Direction,
        packet: CustomPayload,
    ) -> Result<(CustomPayload, Dispatched)> {
        let channel = ChannelId::new(packet.channel);
        let dispatched = self.dispatch(direction, &channel, packet.data)?;
        let packet = CustomPayload {
            channel: channel.into_raw(),
            data: dispatched.data.clone(),
        };
        Ok((packet, dispatched))
    }

    /// Decode a raw custom payload body, dispatch it and re-encode the result
    pub fn dispatch_body(&self, direction: Direction, body: Bytes) -> Result<(Bytes, Dispatched)> {
        let packet = CustomPayload::decode(body)?;
        let (packet, dispatched) = self.dispatch_packet(direction, packet)?;
        Ok((packet.encode()?, dispatched))
    }
}
