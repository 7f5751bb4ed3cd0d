//! # Handler chain
//!
//! Runs handlers in order until one returns Stop or Reply.

use crate::core::{Handler, HandlerResponse, Inbound, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered list of handlers sharing one inbound message.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs handlers until Stop/Reply; returns Continue when every handler passed.
    #[instrument(skip(self, inbound), fields(chat_id = inbound.message.chat.id, message_id = inbound.message.id))]
    pub async fn handle(&self, inbound: &Inbound) -> Result<HandlerResponse> {
        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            let response = h.handle(inbound).await?;
            debug!(handler = %name, response = ?response, "Handler processed");

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    info!(handler = %name, "step: handler chain stopped by handler");
                    return Ok(response);
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => {}
            }
        }
        Ok(HandlerResponse::Continue)
    }
}
