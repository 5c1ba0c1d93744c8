//! Copy Feedback
//!
//! The transient "Link copied!" confirmation. Each copy hands out a ticket;
//! only the latest ticket may clear the confirmation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    shown: Option<u32>,
    generation: u64,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id whose link was most recently copied, while the confirmation is up
    pub fn shown(&self) -> Option<u32> {
        self.shown
    }

    /// Show the confirmation for `id`; any earlier ticket goes stale
    pub fn begin(&mut self, id: u32) -> CopyTicket {
        self.generation = self.generation.wrapping_add(1);
        self.shown = Some(id);
        CopyTicket(self.generation)
    }

    /// Clear the confirmation if `ticket` is still the latest
    pub fn expire(&mut self, ticket: CopyTicket) -> bool {
        if ticket.0 != self.generation || self.shown.is_none() {
            return false;
        }
        self.shown = None;
        true
    }
}
