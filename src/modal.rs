use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Handle naming the component a modal should display
///
/// Only used to route rendering; this crate never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModalComponent(String);

impl ModalComponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModalComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the modal slot currently shows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalState {
    pub is_open: bool,
    pub component: Option<ModalComponent>,
    pub title: String,
    pub props: Map<String, Value>,
}

/// Opens and closes the single modal slot of an application
///
/// Clones share one slot: create the controller once and hand clones to
/// every consumer. Opening while a modal is showing replaces it.
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    state: Arc<Mutex<ModalState>>,
}

impl ModalController {
    /// Creates a controller with a fresh, closed slot
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, ModalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn open(&self, component: ModalComponent, props: Map<String, Value>, title: impl Into<String>) {
        let title = title.into();
        tracing::debug!(component = %component, title = %title, "opening modal");

        let mut slot = self.slot();
        slot.is_open = true;
        slot.component = Some(component);
        slot.title = title;
        slot.props = props;
    }

    /// Opens `component` with no props and an empty title
    pub fn open_component(&self, component: ModalComponent) {
        self.open(component, Map::new(), String::new());
    }

    /// Closes the modal and clears everything it displayed
    pub fn close(&self) {
        *self.slot() = ModalState::default();
    }

    pub fn is_open(&self) -> bool {
        self.slot().is_open
    }

    /// Snapshot of the slot
    pub fn state(&self) -> ModalState {
        self.slot().clone()
    }
}
