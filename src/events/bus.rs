//! In-process observer list for dispatch envelopes.

use std::sync::mpsc::{channel, Receiver, Sender};

use parking_lot::Mutex;
use tracing::trace;

use crate::events::DispatchEnvelope;

struct Subscriber {
    sender: Sender<DispatchEnvelope>,
    signals_only: bool,
}

#[derive(Default)]
pub struct DispatchBus {
    subscribers: Mutex<Vec<Subscriber>>,
}

impl DispatchBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive every envelope published from now on.
    pub fn subscribe(&self) -> Receiver<DispatchEnvelope> {
        self.add_subscriber(false)
    }

    /// Receive only envelopes for signal-only actions.
    pub fn subscribe_signals(&self) -> Receiver<DispatchEnvelope> {
        self.add_subscriber(true)
    }

    fn add_subscriber(&self, signals_only: bool) -> Receiver<DispatchEnvelope> {
        let (sender, receiver) = channel();
        self.subscribers.lock().push(Subscriber {
            sender,
            signals_only,
        });
        receiver
    }

    /// Deliver `envelope` to interested subscribers, dropping the ones whose
    /// receiver is gone. Returns the number of deliveries.
    pub fn publish(&self, envelope: &DispatchEnvelope) -> usize {
        let mut subscribers = self.subscribers.lock();
        let mut delivered = 0;
        subscribers.retain(|sub| {
            if sub.signals_only && !envelope.is_signal() {
                return true;
            }
            match sub.sender.send(envelope.clone()) {
                Ok(()) => {
                    delivered += 1;
                    true
                }
                Err(_) => false,
            }
        });
        trace!(
            action = %envelope.action_type,
            seq = envelope.seq,
            delivered,
            "Published dispatch envelope"
        );
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    /// Drop every sender; receivers observe disconnection once drained.
    pub fn close(&self) {
        self.subscribers.lock().clear();
    }
}
