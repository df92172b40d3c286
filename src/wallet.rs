//! Ticket wallet
//!
//! The ticket list both pages share: the picker page appends drafts at
//! purchase, the wallet page pays, cancels, and refunds. Serialized as JSON
//! through the UI's session storage; the storage itself (and the DOM it
//! feeds) is not our concern.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hall::TicketDraft;

/// Payment state of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Unpaid,
    Paid,
}

/// A single ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub movie_name: String,
    /// `YYYY-MM-DD HH:MM`, so lexicographic order is chronological
    pub show_time: String,
    pub seats: Vec<String>,
    pub status: TicketStatus,
}

impl Ticket {
    pub fn new(movie_name: impl Into<String>, show_time: impl Into<String>, seats: Vec<String>) -> Self {
        Self {
            movie_name: movie_name.into(),
            show_time: show_time.into(),
            seats,
            status: TicketStatus::Unpaid,
        }
    }
}

/// Why a wallet operation was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("no such ticket")]
    NoSuchTicket,
    #[error("ticket is already paid")]
    AlreadyPaid,
    #[error("ticket has not been paid")]
    NotPaid,
}

/// Ordered ticket list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wallet {
    pub tickets: Vec<Ticket>,
}

impl Wallet {
    /// Session-storage key the UI stores the wallet under
    pub const STORAGE_KEY: &'static str = "tickets";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Ticket> {
        self.tickets.get(index)
    }

    pub fn add(&mut self, ticket: Ticket) {
        self.tickets.push(ticket);
    }

    /// Turn a purchase draft into an unpaid ticket
    pub fn add_draft(&mut self, draft: TicketDraft, movie_name: &str, show_time: &str) {
        self.add(Ticket::new(movie_name, show_time, draft.seats));
    }

    /// Mark an unpaid ticket paid
    pub fn pay(&mut self, index: usize) -> Result<(), WalletError> {
        let ticket = self
            .tickets
            .get_mut(index)
            .ok_or(WalletError::NoSuchTicket)?;
        if ticket.status == TicketStatus::Paid {
            return Err(WalletError::AlreadyPaid);
        }
        ticket.status = TicketStatus::Paid;
        log::info!("ticket {} paid", index);
        Ok(())
    }

    /// Remove an unpaid ticket (cancelled bookings disappear from the list)
    pub fn cancel(&mut self, index: usize) -> Result<Ticket, WalletError> {
        match self.tickets.get(index) {
            None => Err(WalletError::NoSuchTicket),
            Some(t) if t.status == TicketStatus::Paid => Err(WalletError::AlreadyPaid),
            Some(_) => Ok(self.tickets.remove(index)),
        }
    }

    /// Remove a paid ticket; the caller releases its seats if the hall is
    /// still on screen
    pub fn refund(&mut self, index: usize) -> Result<Ticket, WalletError> {
        match self.tickets.get(index) {
            None => Err(WalletError::NoSuchTicket),
            Some(t) if t.status == TicketStatus::Unpaid => Err(WalletError::NotPaid),
            Some(_) => Ok(self.tickets.remove(index)),
        }
    }

    /// Sort ascending by show time (stable, so same-time tickets keep
    /// insertion order)
    pub fn sort_by_show_time(&mut self) {
        self.tickets.sort_by(|a, b| a.show_time.cmp(&b.show_time));
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.tickets)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self {
            tickets: serde_json::from_str(json)?,
        })
    }

    /// Rebuild the wallet from whatever the storage had; absent or corrupt
    /// data yields an empty wallet
    pub fn pull(stored: Option<&str>) -> Self {
        match stored {
            None => Self::new(),
            Some(json) => Self::from_json(json).unwrap_or_else(|err| {
                log::error!("discarding stored tickets: {}", err);
                Self::new()
            }),
        }
    }
}
