//! Mock implementation of [`dbot_core::Bot`] for relay tests.
//!
//! Records every successfully sent message; can be told to fail the first N sends.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use dbot_core::{Bot, DbotError, OutgoingMessage, Result};

pub struct RecordingBot {
    sent: Mutex<Vec<OutgoingMessage>>,
    /// Remaining sends that fail before the bot starts recording.
    failures_left: AtomicUsize,
    attempts: AtomicUsize,
}

impl RecordingBot {
    pub fn new() -> Self {
        Self::failing_first(0)
    }

    pub fn failing_first(failures: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failures_left: AtomicUsize::new(failures),
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, message: &OutgoingMessage) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let failed = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            return Err(DbotError::Bot("Bad Request: chat not found".to_string()));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
