//! # Restaurant Screen
//!
//! Owns one [`ScreenState`] and is the only place it changes. Mounting spawns the
//! location flow and the restaurant fetch as two independent tasks; they, and the
//! text input (through a [`ScreenHandle`]), post [`ScreenEvent`]s onto one queue that
//! the screen drains in order. Either task may finish first, or never.
//!
//! Dropping the screen aborts whatever is still running and drops the queue, so a
//! result that arrives after unmount is discarded instead of applied.

use std::mem;
use std::sync::Arc;
use std::time::Duration;

use restomap_common::restaurant::RestaurantRecord;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::application::services::location::{LocationOutcome, LocationResolver};
use crate::application::services::restaurants::RestaurantLoader;
use crate::domain::screen::ScreenState;
use crate::domain::view::ScreenView;
use crate::ports::outbound::location_provider::LocationProvider;
use crate::ports::outbound::restaurant_source::{FetchError, RestaurantSource};
use crate::ports::outbound::surface::{DetailRenderer, ScreenSurface};

#[derive(Debug)]
pub enum ScreenEvent {
    /// The search field now holds this full text.
    QueryChanged(String),
    Location(LocationOutcome),
    Restaurants(Result<Vec<RestaurantRecord>, FetchError>),
    Close,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("screen is no longer mounted")]
pub struct ScreenClosed;

/// Cloneable entry point for input events.
#[derive(Clone)]
pub struct ScreenHandle {
    events: mpsc::UnboundedSender<ScreenEvent>,
}

impl ScreenHandle {
    /// Text-input change event carrying the whole new value.
    pub fn set_query(&self, text: impl Into<String>) -> Result<(), ScreenClosed> {
        self.post(ScreenEvent::QueryChanged(text.into()))
    }

    /// The search field's clear action.
    pub fn clear_query(&self) -> Result<(), ScreenClosed> {
        self.set_query(String::new())
    }

    /// Ends [`RestaurantScreen::run`].
    pub fn close(&self) -> Result<(), ScreenClosed> {
        self.post(ScreenEvent::Close)
    }

    pub fn post(&self, event: ScreenEvent) -> Result<(), ScreenClosed> {
        self.events.send(event).map_err(|_| ScreenClosed)
    }
}

pub struct RestaurantScreen {
    state: ScreenState,
    events: mpsc::UnboundedReceiver<ScreenEvent>,
    sender: mpsc::UnboundedSender<ScreenEvent>,
    tasks: Vec<JoinHandle<()>>,
    location_settled: bool,
    restaurants_settled: bool,
    closed: bool,
}

impl RestaurantScreen {
    /// Starts both initialization flows. Must be called from within a tokio runtime.
    pub fn mount(location: Arc<dyn LocationProvider>, source: Arc<dyn RestaurantSource>) -> Self {
        let (sender, events) = mpsc::unbounded_channel();

        let resolver = LocationResolver::new(location);
        let location_tx = sender.clone();
        let location_task = tokio::spawn(async move {
            let outcome = resolver.resolve().await;
            if location_tx.send(ScreenEvent::Location(outcome)).is_err() {
                debug!("Screen unmounted before the location flow finished");
            }
        });

        let loader = RestaurantLoader::new(source);
        let restaurants_tx = sender.clone();
        let restaurants_task = tokio::spawn(async move {
            let result = loader.load().await;
            if restaurants_tx.send(ScreenEvent::Restaurants(result)).is_err() {
                debug!("Screen unmounted before the restaurant fetch finished");
            }
        });

        Self {
            state: ScreenState::new(),
            events,
            sender,
            tasks: vec![location_task, restaurants_task],
            location_settled: false,
            restaurants_settled: false,
            closed: false,
        }
    }

    pub fn handle(&self) -> ScreenHandle {
        ScreenHandle {
            events: self.sender.clone(),
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn view(&self) -> ScreenView<'_> {
        ScreenView::compose(&self.state)
    }

    /// Both flows have reported back, successfully or not.
    pub fn is_settled(&self) -> bool {
        self.location_settled && self.restaurants_settled
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Applies one event to the state.
    ///
    /// Returns `true` when the screen needs to be drawn again.
    pub fn dispatch(&mut self, event: ScreenEvent) -> bool {
        match event {
            ScreenEvent::QueryChanged(query) => self.transition(|state| state.apply_query(query)),
            ScreenEvent::Location(outcome) => {
                self.location_settled = true;
                match outcome {
                    LocationOutcome::Resolved(coordinates) => {
                        self.transition(|state| state.apply_location(coordinates))
                    }
                    LocationOutcome::PermissionDenied => {
                        self.transition(ScreenState::apply_permission_denied)
                    }
                    LocationOutcome::Failed(e) => {
                        self.transition(|state| state.apply_position_failure(e))
                    }
                }
            }
            ScreenEvent::Restaurants(result) => {
                self.restaurants_settled = true;
                self.transition(|state| state.apply_fetch_result(result))
            }
            ScreenEvent::Close => {
                self.closed = true;
                return false;
            }
        }
        true
    }

    /// Waits for the next queued event. `None` once the screen was closed.
    pub async fn next_event(&mut self) -> Option<ScreenEvent> {
        if self.closed {
            return None;
        }
        self.events.recv().await
    }

    /// Draws the screen, then redraws after every state change until closed.
    pub async fn run(&mut self, surface: &mut dyn ScreenSurface, details: &dyn DetailRenderer) {
        self.view().draw(surface, details);

        while let Some(event) = self.next_event().await {
            if self.dispatch(event) {
                self.view().draw(surface, details);
            }
        }
    }

    /// Processes events until both flows have reported back, the screen is closed,
    /// or `timeout` elapses. Returns whether the screen settled.
    pub async fn settle(&mut self, timeout: Duration) -> bool {
        let drain = async {
            while !self.is_settled() {
                match self.next_event().await {
                    Some(event) => {
                        self.dispatch(event);
                    }
                    None => break,
                }
            }
        };

        if tokio::time::timeout(timeout, drain).await.is_err() {
            warn!("Screen did not settle within {:.1}s", timeout.as_secs_f64());
        }
        self.is_settled()
    }

    /// Tears the screen down; pending flows are aborted.
    pub fn unmount(self) {}

    fn transition(&mut self, apply: impl FnOnce(ScreenState) -> ScreenState) {
        let state = mem::take(&mut self.state);
        self.state = apply(state);
    }
}

impl Drop for RestaurantScreen {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
        self.events.close();
        debug!("Screen unmounted");
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
