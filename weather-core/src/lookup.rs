//! The lookup form's state: the query being typed, and what is on display.

use tracing::{debug, warn};

use crate::{LookupError, Observation, Query, WeatherProvider};

/// What the form currently shows below the inputs.
///
/// An observation and an error message are never shown together.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DisplayState {
    /// Nothing submitted yet.
    #[default]
    Empty,
    Observation(Observation),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pending,
}

/// Handle for one in-flight submission.
#[derive(Debug, Clone)]
pub struct Ticket {
    seq: u64,
    query: Query,
}

impl Ticket {
    /// The query as it was when the submission was made.
    pub fn query(&self) -> &Query {
        &self.query
    }
}

/// Result of handing an outcome back to [`WeatherLookup::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    /// A newer submission was issued after this one; the outcome was dropped.
    Stale,
}

#[derive(Debug, Default)]
pub struct WeatherLookup {
    query: Query,
    display: DisplayState,
    issued: u64,
    settled: u64,
}

impl WeatherLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.query.city = city.into();
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.query.country = country.into();
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn observation(&self) -> Option<&Observation> {
        match &self.display {
            DisplayState::Observation(obs) => Some(obs),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.display {
            DisplayState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.issued == self.settled { Phase::Idle } else { Phase::Pending }
    }

    /// Start a submission of the current query. No validation happens here:
    /// empty fields are submitted as they are.
    pub fn begin_submit(&mut self) -> Ticket {
        self.issued += 1;
        debug!(seq = self.issued, location = %self.query.location(), "submitting query");

        Ticket { seq: self.issued, query: self.query.clone() }
    }

    /// Apply the outcome of a submission.
    ///
    /// Only the most recently issued ticket is applied; anything older is
    /// reported as [`Settled::Stale`] and leaves the state untouched.
    pub fn settle(
        &mut self,
        ticket: Ticket,
        outcome: Result<Observation, LookupError>,
    ) -> Settled {
        if ticket.seq != self.issued {
            debug!(seq = ticket.seq, latest = self.issued, "dropping stale response");
            return Settled::Stale;
        }
        self.settled = ticket.seq;

        match outcome {
            Ok(obs) => {
                self.display = DisplayState::Observation(obs);
                self.query.clear();
            }
            Err(err) => {
                warn!(error = %err, location = %ticket.query.location(), "weather lookup failed");
                self.display = DisplayState::Error(err.user_message().to_string());
            }
        }

        Settled::Applied
    }

    /// Submit the current query to `provider` and wait for the answer.
    pub async fn submit(&mut self, provider: &dyn WeatherProvider) -> &DisplayState {
        let ticket = self.begin_submit();
        let outcome = provider.fetch(ticket.query()).await;
        self.settle(ticket, outcome);
        &self.display
    }
}
