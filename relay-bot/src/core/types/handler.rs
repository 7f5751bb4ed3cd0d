//! Handler trait and transport conversion traits.

use async_trait::async_trait;

use super::{message::Inbound, message::Message, response::HandlerResponse, user::User};

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// One link of the handler chain. Return Stop or Reply to end the chain; Continue passes on.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, inbound: &Inbound) -> crate::core::error::Result<HandlerResponse>;
}
