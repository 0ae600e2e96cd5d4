//! Busy flag serializing clipboard export and import.
//!
//! Clipboard access is asynchronous on the host side. The host takes a
//! ticket before it touches the clipboard and hands it back when done, so a
//! second export or import cannot start while one is in flight.

#[cfg(test)]
#[path = "transfer_test.rs"]
mod transfer_test;

use serde::{Deserialize, Serialize};

use crate::error::SceneError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferKind {
    Export,
    Import,
}

/// Proof of holding the transfer gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferTicket {
    pub id: u64,
    pub kind: TransferKind,
}

#[derive(Debug, Clone, Default)]
pub struct TransferGate {
    active: Option<TransferTicket>,
    next_id: u64,
}

impl TransferGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the gate.
    ///
    /// # Errors
    ///
    /// Returns `TransferInProgress` while another ticket is outstanding.
    pub fn begin(&mut self, kind: TransferKind) -> Result<TransferTicket, SceneError> {
        if self.active.is_some() {
            return Err(SceneError::TransferInProgress);
        }
        self.next_id += 1;
        let ticket = TransferTicket { id: self.next_id, kind };
        self.active = Some(ticket);
        Ok(ticket)
    }

    /// Release the gate.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTransfer` if `ticket` is not the outstanding one.
    pub fn finish(&mut self, ticket: TransferTicket) -> Result<(), SceneError> {
        if self.active != Some(ticket) {
            return Err(SceneError::UnknownTransfer(ticket.id));
        }
        self.active = None;
        Ok(())
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active(&self) -> Option<TransferTicket> {
        self.active
    }
}
