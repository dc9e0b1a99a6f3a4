//! Application surface backed by a tokio channel.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{trace, warn};

use pageport_core::{
    application::ports::App,
    domain::{AppId, Message},
};

/// App that forwards every message into an unbounded channel.
///
/// The receiving half is handed to whoever drains the bus (the CLI writes
/// the messages to stdout as JSON lines).
#[derive(Debug, Clone)]
pub struct ChannelApp {
    id: AppId,
    outbox: UnboundedSender<Message>,
}

impl ChannelApp {
    /// Create an app and the receiver for its outbound messages.
    pub fn new(id: AppId) -> (Arc<Self>, UnboundedReceiver<Message>) {
        let (outbox, inbox) = mpsc::unbounded_channel();
        (Arc::new(Self { id, outbox }), inbox)
    }

    pub fn is_closed(&self) -> bool {
        self.outbox.is_closed()
    }
}

impl App for ChannelApp {
    fn id(&self) -> &AppId {
        &self.id
    }

    fn send(&self, message: Message) {
        trace!(app = %self.id, transaction = %message.transaction(), "Sending message");
        if let Err(e) = self.outbox.send(message) {
            warn!(
                app = %self.id,
                transaction = %e.0.transaction(),
                "App receiver dropped, message lost"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageport_core::domain::{ErrorReport, FailureNotification, ShowError, TransactionId};

    fn show_error() -> Message {
        Message::ShowError(ShowError::new(
            TransactionId::new("t-1").unwrap(),
            FailureNotification::html_export_failed("Landing", ErrorReport::new("boom", "")),
        ))
    }

    #[tokio::test]
    async fn sent_messages_reach_the_receiver() {
        let (app, mut inbox) = ChannelApp::new(AppId::new("main").unwrap());

        app.send(show_error());

        let received = inbox.recv().await.unwrap();
        assert_eq!(received.transaction().as_str(), "t-1");
    }

    #[test]
    fn send_after_receiver_dropped_does_not_panic() {
        let (app, inbox) = ChannelApp::new(AppId::new("main").unwrap());
        drop(inbox);

        assert!(app.is_closed());
        app.send(show_error());
    }
}
