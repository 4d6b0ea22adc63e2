//! Request/response state machine for a screen.
//!
//! A screen may start a new fetch before the previous one has answered (for
//! instance when the class filter changes). Each fetch gets a
//! [`RequestTicket`]; only the result carrying the most recent ticket is
//! committed, older ones are discarded.
//!
//! This is the client-side half of the admin screens: the HTTP layer is
//! stateless and a frontend consuming the JSON API keeps one controller per
//! screen, falling back to [`ScreenController::view_or_default`] while a
//! fetch is pending or has failed.

use std::fmt::Display;

/// Lifecycle of the data shown by one screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ScreenState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

/// Handle identifying one fetch issued by a [`ScreenController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Owns the state of one screen and applies the supersede rule.
#[derive(Debug)]
pub struct ScreenController<T> {
    name: &'static str,
    state: ScreenState<T>,
    generation: u64,
}

impl<T> ScreenController<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: ScreenState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ScreenState<T> {
        &self.state
    }

    /// Starts a fetch, superseding any fetch still in flight.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        self.state = ScreenState::Loading;
        RequestTicket(self.generation)
    }

    /// Whether `ticket` belongs to the latest fetch.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Applies the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when a newer fetch has
    /// been started since. An error replaces previously shown data.
    pub fn commit<E: Display>(&mut self, ticket: RequestTicket, result: Result<T, E>) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "Discarding stale response #{} for {} screen (latest is #{})",
                ticket.0,
                self.name,
                self.generation
            );
            return false;
        }

        self.state = match result {
            Ok(data) => ScreenState::Success(data),
            Err(err) => {
                log::error!("Failed to load {} screen: {err}", self.name);
                ScreenState::Error(err.to_string())
            }
        };
        true
    }

    /// Runs `fetch` as a new request and commits its result.
    pub fn load<E, F>(&mut self, fetch: F) -> &ScreenState<T>
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        let ticket = self.begin();
        self.commit(ticket, fetch());
        &self.state
    }

    /// Committed data, if the last fetch succeeded.
    pub fn data(&self) -> Option<&T> {
        match &self.state {
            ScreenState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ScreenState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ScreenState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T: Clone + Default> ScreenController<T> {
    /// Data to render: the committed view model, or the zeroed one while
    /// idle, loading or failed.
    pub fn view_or_default(&self) -> T {
        self.data().cloned().unwrap_or_default()
    }
}
