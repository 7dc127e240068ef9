//! Test doubles for the outbound ports, shared by the integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use restomap_common::location::{Accuracy, Coordinates, MapRegion, PermissionStatus};
use restomap_common::restaurant::RestaurantRecord;
use restomap_core::ports::outbound::location_provider::{LocationError, LocationProvider};
use restomap_core::ports::outbound::restaurant_source::{FetchError, RestaurantSource};
use restomap_core::ports::outbound::surface::{DetailRenderer, ScreenSurface};
use serde_json::json;
use tokio::sync::oneshot;

pub fn restaurants(names: &[&str]) -> Vec<RestaurantRecord> {
    names
        .iter()
        .map(|name| RestaurantRecord::new(json!({ "name": name, "address": format!("{name} street") })))
        .collect()
}

pub fn names(records: &[RestaurantRecord]) -> Vec<&str> {
    records.iter().map(RestaurantRecord::name).collect()
}

/// Holds a port call until the test opens it.
pub struct Gate {
    rx: Mutex<Option<oneshot::Receiver<()>>>,
}

impl Gate {
    /// The gate, and the sender that opens it.
    pub fn pair() -> (Arc<Gate>, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        (Arc::new(Gate { rx: Mutex::new(Some(rx)) }), tx)
    }

    async fn wait(&self) {
        let rx = self.rx.lock().unwrap().take();
        if let Some(rx) = rx {
            // A dropped sender opens the gate too.
            let _ = rx.await;
        }
    }
}

pub struct ScriptedLocation {
    status: PermissionStatus,
    position: Result<Coordinates, LocationError>,
    gate: Option<Arc<Gate>>,
    pub permission_requests: AtomicUsize,
    pub position_requests: AtomicUsize,
    /// Position requests that got past the gate and answered.
    pub positions_answered: AtomicUsize,
}

impl ScriptedLocation {
    pub fn granted(position: Coordinates) -> Self {
        Self::new(PermissionStatus::Granted, Ok(position))
    }

    pub fn denied() -> Self {
        Self::new(
            PermissionStatus::Denied,
            Err(LocationError::Unavailable("should not be asked".into())),
        )
    }

    pub fn failing(reason: &str) -> Self {
        Self::new(PermissionStatus::Granted, Err(LocationError::Unavailable(reason.into())))
    }

    /// The position request waits for `gate` before answering.
    pub fn gated(mut self, gate: Arc<Gate>) -> Self {
        self.gate = Some(gate);
        self
    }

    fn new(status: PermissionStatus, position: Result<Coordinates, LocationError>) -> Self {
        Self {
            status,
            position,
            gate: None,
            permission_requests: AtomicUsize::new(0),
            position_requests: AtomicUsize::new(0),
            positions_answered: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl LocationProvider for ScriptedLocation {
    async fn request_foreground_permission(&self) -> PermissionStatus {
        self.permission_requests.fetch_add(1, Ordering::SeqCst);
        self.status
    }

    async fn current_position(&self, _accuracy: Accuracy) -> Result<Coordinates, LocationError> {
        self.position_requests.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.wait().await;
        }
        self.positions_answered.fetch_add(1, Ordering::SeqCst);
        self.position.clone()
    }
}

pub struct StaticSource {
    records: Option<Vec<RestaurantRecord>>,
    failure: Option<String>,
    gate: Option<Arc<Gate>>,
    pub fetches: AtomicUsize,
    /// Fetches that got past the gate and answered.
    pub fetches_answered: AtomicUsize,
}

impl StaticSource {
    pub fn ok(records: Vec<RestaurantRecord>) -> Self {
        Self {
            records: Some(records),
            failure: None,
            gate: None,
            fetches: AtomicUsize::new(0),
            fetches_answered: AtomicUsize::new(0),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            records: None,
            failure: Some(reason.to_string()),
            gate: None,
            fetches: AtomicUsize::new(0),
            fetches_answered: AtomicUsize::new(0),
        }
    }

    pub fn gated(mut self, gate: Arc<Gate>) -> Self {
        self.gate = Some(gate);
        self
    }
}

#[async_trait::async_trait]
impl RestaurantSource for StaticSource {
    async fn fetch_restaurants(&self) -> Result<Vec<RestaurantRecord>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.wait().await;
        }
        self.fetches_answered.fetch_add(1, Ordering::SeqCst);
        match (&self.records, &self.failure) {
            (Some(records), _) => Ok(records.clone()),
            (None, Some(reason)) => Err(FetchError::Request(reason.clone())),
            (None, None) => Ok(Vec::new()),
        }
    }
}

/// One drawn frame, as seen by a [`RecordingSurface`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub query: String,
    pub map: Option<MapRegion>,
    pub loading: bool,
    pub separators: usize,
    pub items: usize,
}

#[derive(Default)]
pub struct RecordingSurface {
    pub frames: Vec<Frame>,
    current: Frame,
}

impl ScreenSurface for RecordingSurface {
    fn begin_frame(&mut self) {
        self.current = Frame::default();
    }

    fn search_input(&mut self, query: &str, _placeholder: &str) {
        self.current.query = query.to_string();
    }

    fn map(&mut self, region: &MapRegion) {
        self.current.map = Some(*region);
    }

    fn loading_indicator(&mut self) {
        self.current.loading = true;
    }

    fn separator(&mut self, _height: u16) {
        self.current.separators += 1;
    }

    fn end_frame(&mut self, item_count: usize) {
        self.current.items = item_count;
        self.frames.push(std::mem::take(&mut self.current));
    }
}

#[derive(Default)]
pub struct RecordingDetails {
    pub rendered: Mutex<Vec<(usize, String)>>,
}

impl DetailRenderer for RecordingDetails {
    fn render(&self, record: &RestaurantRecord, index: usize) {
        self.rendered
            .lock()
            .unwrap()
            .push((index, record.name().to_string()));
    }
}
