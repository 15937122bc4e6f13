//! Non-blocking FIFO from the caller thread to the simulation loop
//!
//! Backed by an unbounded crossbeam channel: `push` never blocks, `pop` never blocks.
//! Ordering is only guaranteed per producer thread.

use crate::message::Message;
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use thiserror::Error;

/// Every producer handle was dropped while the consumer still expected messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("interaction channel closed without a stop message")]
pub struct ChannelClosed;

/// Producer half, owned by the caller thread
#[derive(Clone, Debug)]
pub struct MessageSender {
    tx: Sender<Message>,
}

/// Consumer half, owned by the simulation thread
#[derive(Debug)]
pub struct MessageReceiver {
    rx: Receiver<Message>,
}

pub fn channel() -> (MessageSender, MessageReceiver) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (MessageSender { tx }, MessageReceiver { rx })
}

impl MessageSender {
    /// Enqueue a message. Messages sent after the loop exited are dropped.
    pub fn push(&self, message: Message) {
        if self.tx.send(message).is_err() {
            log::debug!("simulation loop gone, dropping {:?}", message.kind);
        }
    }
}

impl MessageReceiver {
    /// Next message in FIFO order, `Ok(None)` when the queue is currently empty
    pub fn pop(&self) -> Result<Option<Message>, ChannelClosed> {
        match self.rx.try_recv() {
            Ok(message) => Ok(Some(message)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(ChannelClosed),
        }
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}
