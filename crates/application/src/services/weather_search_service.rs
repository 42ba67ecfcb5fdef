//! Weather search service
//!
//! Drives one search from user input to the display: geocoding, then the
//! current weather, then the presenter. Every failure ends in the
//! placeholder display.

use std::{future::Future, sync::Arc, time::Duration};

use domain::{LocationRecord, SearchQuery, WeatherRecord};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

use super::presenter::DisplayState;
use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, WeatherPort, WeatherView},
};

/// Default per-step timeout in seconds
const DEFAULT_STEP_TIMEOUT_SECS: u64 = 15;

/// Configuration for the search service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Timeout for each of the two network steps in seconds, 0 disables it (default: 15)
    #[serde(default = "default_step_timeout")]
    pub timeout_secs: u64,
}

const fn default_step_timeout() -> u64 {
    DEFAULT_STEP_TIMEOUT_SECS
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_step_timeout(),
        }
    }
}

impl SearchConfig {
    /// Step timeout, `None` if disabled
    #[must_use]
    pub const fn step_timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}

/// Whether a search is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchState {
    Idle,
    Searching,
}

/// Result of one search
#[derive(Debug)]
pub enum SearchOutcome {
    /// Both steps succeeded and the display was rendered
    Completed {
        location: LocationRecord,
        weather: WeatherRecord,
        display: DisplayState,
    },
    /// A step failed and the placeholder display was rendered
    Failed {
        error: ApplicationError,
        display: DisplayState,
    },
    /// A newer search started; nothing was rendered
    Superseded,
}

impl SearchOutcome {
    /// The display that was rendered, if any
    #[must_use]
    pub const fn display(&self) -> Option<&DisplayState> {
        match self {
            Self::Completed { display, .. } | Self::Failed { display, .. } => Some(display),
            Self::Superseded => None,
        }
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

#[derive(Debug)]
struct Ticket {
    generation: u64,
    state: SearchState,
}

/// Resets the state to idle if a search is dropped before it finished
struct InFlight<'a> {
    ticket: &'a Mutex<Ticket>,
    generation: u64,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut ticket = self.ticket.lock();
        if ticket.generation == self.generation && ticket.state == SearchState::Searching {
            debug!(generation = self.generation, "Search dropped before completion");
            ticket.state = SearchState::Idle;
        }
    }
}

/// Orchestrates geocoding, weather lookup and rendering
pub struct WeatherSearchService {
    geocoding: Arc<dyn GeocodingPort>,
    weather: Arc<dyn WeatherPort>,
    view: Arc<dyn WeatherView>,
    config: SearchConfig,
    ticket: Mutex<Ticket>,
}

impl std::fmt::Debug for WeatherSearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherSearchService")
            .field("config", &self.config)
            .field("ticket", &*self.ticket.lock())
            .finish_non_exhaustive()
    }
}

impl WeatherSearchService {
    #[must_use]
    pub fn new(
        geocoding: Arc<dyn GeocodingPort>,
        weather: Arc<dyn WeatherPort>,
        view: Arc<dyn WeatherView>,
        config: SearchConfig,
    ) -> Self {
        Self {
            geocoding,
            weather,
            view,
            config,
            ticket: Mutex::new(Ticket {
                generation: 0,
                state: SearchState::Idle,
            }),
        }
    }

    /// Current state of the service
    #[must_use]
    pub fn state(&self) -> SearchState {
        self.ticket.lock().state
    }

    /// Run a search from raw city and postal code input
    pub async fn submit(&self, city: &str, postal_code: &str) -> SearchOutcome {
        self.search(SearchQuery::from_inputs(city, postal_code)).await
    }

    /// Run a search and render its result
    ///
    /// Starting a search supersedes any search still in flight. Dropping
    /// the future before it resolves returns the service to idle without
    /// rendering.
    #[instrument(skip(self), fields(city = ?query.city(), postal_code = ?query.postal_code()))]
    pub async fn search(&self, query: SearchQuery) -> SearchOutcome {
        let generation = self.begin();
        let _in_flight = InFlight {
            ticket: &self.ticket,
            generation,
        };

        let location = match self.step("geocoding", self.geocoding.resolve(&query)).await {
            Ok(location) => location,
            Err(error) => return self.fail(generation, error),
        };

        if !self.is_current(generation) {
            debug!(generation, "Search superseded after geocoding");
            return SearchOutcome::Superseded;
        }

        let weather = match self
            .step("weather", self.weather.fetch_current(&location))
            .await
        {
            Ok(weather) => weather,
            Err(error) => return self.fail(generation, error),
        };

        self.complete(generation, location, weather)
    }

    fn begin(&self) -> u64 {
        let mut ticket = self.ticket.lock();
        ticket.generation = ticket.generation.wrapping_add(1);
        ticket.state = SearchState::Searching;
        ticket.generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.ticket.lock().generation == generation
    }

    async fn step<T, F>(&self, step: &'static str, fut: F) -> Result<T, ApplicationError>
    where
        F: Future<Output = Result<T, ApplicationError>>,
    {
        match self.config.step_timeout() {
            Some(limit) => timeout(limit, fut)
                .await
                .map_err(|_| ApplicationError::Timeout {
                    step,
                    timeout_secs: self.config.timeout_secs,
                })?,
            None => fut.await,
        }
    }

    fn complete(
        &self,
        generation: u64,
        location: LocationRecord,
        weather: WeatherRecord,
    ) -> SearchOutcome {
        let display_state = DisplayState::from_records(&location, &weather);

        let mut ticket = self.ticket.lock();
        if ticket.generation != generation {
            debug!(generation, "Search superseded before rendering");
            return SearchOutcome::Superseded;
        }
        self.view.render(&display_state);
        ticket.state = SearchState::Idle;
        drop(ticket);

        info!(
            location = %display_state.location,
            temperature = %display_state.temperature,
            "Search completed"
        );

        SearchOutcome::Completed {
            location,
            weather,
            display: display_state,
        }
    }

    fn fail(&self, generation: u64, error: ApplicationError) -> SearchOutcome {
        let mut ticket = self.ticket.lock();
        if ticket.generation != generation {
            debug!(generation, error = %error, "Superseded search failed");
            return SearchOutcome::Superseded;
        }
        let display = DisplayState::placeholder();
        self.view.render(&display);
        ticket.state = SearchState::Idle;
        drop(ticket);

        warn!(error = %error, "Weather search failed");

        SearchOutcome::Failed { error, display }
    }
}
