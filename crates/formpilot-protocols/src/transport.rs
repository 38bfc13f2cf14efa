//! Transport capability.
//!
//! The engine makes no assumption about the inter-process transport. It
//! needs exactly one primitive from the messaging collaborator: a one-way
//! push so the document side can announce that an eager scan finished.
//! Request/response routing is the host's concern; the service exposes a
//! plain `handle` call for it.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::message::Notification;

/// One-way push channel from the document side to the UI surface.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver a push notification.
    async fn notify(&self, notification: Notification) -> Result<(), TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingTransport {
        sent: Mutex<Vec<Notification>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn notify(&self, notification: Notification) -> Result<(), TransportError> {
            self.sent.lock().unwrap().push(notification);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_transport_notify() {
        let transport = RecordingTransport {
            sent: Mutex::new(Vec::new()),
        };
        transport
            .notify(Notification::FormFieldsReady)
            .await
            .unwrap();
        assert_eq!(
            *transport.sent.lock().unwrap(),
            vec![Notification::FormFieldsReady]
        );
    }
}
