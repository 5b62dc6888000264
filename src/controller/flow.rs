// src/controller/flow.rs
//! Per-flow request tokens: only the most recently triggered request may
//! write its result back.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowPhase {
    #[default]
    Idle,
    Loading,
    Rendered,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct RequestTokens {
    latest: u64,
    pending: bool,
}

impl RequestTokens {
    /// Issue a token for a new request, superseding any in flight.
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        self.pending = true;
        RequestToken(self.latest)
    }

    /// Settle `token`. Returns false when a newer request was issued since.
    pub fn complete(&mut self, token: RequestToken) -> bool {
        if token.0 != self.latest {
            return false;
        }
        self.pending = false;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
