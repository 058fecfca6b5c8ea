//! List Controller
//!
//! Holds one resource's collection and decides when it is refetched.
//!
//! Loading is split in two halves so it fits an event loop: `begin_load`
//! hands out a sequence-tagged [`LoadTicket`] before the request is sent and
//! `finish_load` applies the response once it arrives. Responses older than
//! the last one applied are dropped, so two overlapping refreshes always
//! settle on the newer data.

use log::{debug, warn};

use crate::client::Mutation;
use crate::error::ClientError;
use crate::notify::NotificationSink;
use crate::record::{RecordId, Resource};

/// Counter whose increments are the only trigger for a refetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RefreshToken(u32);

impl RefreshToken {
    pub fn value(self) -> u32 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Handle for one in-flight list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
}

impl LoadTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Collection replaced.
    Applied { count: usize },
    /// A newer response was already applied; this one was dropped.
    Stale,
    /// Fetch failed; the previous collection is kept.
    Failed,
}

#[derive(Debug, Clone)]
pub struct ListController<R> {
    items: Vec<R>,
    refresh: RefreshToken,
    state: LoadState,
    /// Sequence of the newest ticket handed out
    issued: u64,
    /// Sequence of the newest response applied
    applied: u64,
}

impl<R> Default for ListController<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            refresh: RefreshToken::default(),
            state: LoadState::Idle,
            issued: 0,
            applied: 0,
        }
    }
}

impl<R: Resource> ListController<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &RecordId) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.find(id).is_some()
    }

    pub fn refresh_token(&self) -> RefreshToken {
        self.refresh
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Bumps the refresh token; whoever watches it starts a load.
    pub fn request_refresh(&mut self) -> RefreshToken {
        self.refresh = self.refresh.next();
        debug!("{} refresh requested ({})", R::PATH, self.refresh.value());
        self.refresh
    }

    /// First half of a load: call right before sending the list request.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        self.state = LoadState::Loading;
        LoadTicket { seq: self.issued }
    }

    /// Second half of a load: apply (or drop) the response for `ticket`.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<R>, ClientError>,
        sink: &mut impl NotificationSink,
    ) -> LoadOutcome {
        if ticket.seq == self.issued {
            self.state = LoadState::Idle;
        }
        if ticket.seq <= self.applied {
            debug!(
                "{} load #{} dropped, #{} already applied",
                R::PATH,
                ticket.seq,
                self.applied
            );
            return LoadOutcome::Stale;
        }
        match result {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                self.applied = ticket.seq;
                debug!("{} load #{} applied {} records", R::PATH, ticket.seq, count);
                LoadOutcome::Applied { count }
            }
            Err(err) => {
                warn!("{} load #{} failed: {}", R::PATH, ticket.seq, err);
                sink.show_errors(&err.messages());
                LoadOutcome::Failed
            }
        }
    }

    /// Routes the result of any create/update/delete: success shows the
    /// server message and requests a refresh, failure shows every message.
    pub fn apply_mutation(
        &mut self,
        result: Result<Mutation<R>, ClientError>,
        sink: &mut impl NotificationSink,
    ) -> bool {
        match result {
            Ok(mutation) => {
                sink.show_success(&mutation.message);
                self.request_refresh();
                true
            }
            Err(err) => {
                warn!("{} write failed: {}", R::PATH, err);
                sink.show_errors(&err.messages());
                false
            }
        }
    }
}
