//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.
//! - One busy flag guards every user-triggered network operation.

use crate::core::errors::OperationError;
use crate::core::session::SessionState;
use std::cell::RefCell;
use std::rc::Rc;
use yewdux::store::Store;

/// Global application store.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Authentication state.
    pub session: SessionSlice,
    /// In-flight operation tracking.
    pub activity: ActivitySlice,
    /// Latest operation failure, cleared when a new attempt starts.
    pub error: Option<OperationError>,
    /// Transient notices.
    pub notices: NoticeSlice,
}

/// Session slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSlice {
    /// Current session state.
    pub state: SessionState,
    /// Whether a probe is awaiting its response.
    pub probing: bool,
}

/// Operation currently holding the busy flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Report retrieval.
    Download,
    /// Logout call.
    Logout,
}

/// Busy-flag slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivitySlice {
    /// Set for the whole lifetime of a download or logout.
    pub busy: bool,
    /// Which operation holds the flag.
    pub operation: Option<Operation>,
}

/// Transient success notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Identifier used to dismiss the toast.
    pub id: u64,
    /// Rendered text.
    pub message: String,
}

/// Toast slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeSlice {
    /// Toasts currently shown, oldest first.
    pub toasts: Vec<Toast>,
    next_id: u64,
}

/// Show a toast and return its id.
pub fn push_toast(store: &mut AppStore, message: impl Into<String>) -> u64 {
    store.notices.next_id += 1;
    let id = store.notices.next_id;
    store.notices.toasts.push(Toast {
        id,
        message: message.into(),
    });
    id
}

/// Remove a toast; unknown ids are ignored.
pub fn dismiss_toast(store: &mut AppStore, id: u64) {
    store.notices.toasts.retain(|toast| toast.id != id);
}

/// Claim the busy flag for `operation`; `false` when already held or while a
/// session probe is awaiting its response.
///
/// Also clears the previous error, since a new attempt is starting.
pub fn begin_operation(store: &mut AppStore, operation: Operation) -> bool {
    if store.activity.busy || store.session.probing {
        return false;
    }
    store.activity.busy = true;
    store.activity.operation = Some(operation);
    store.error = None;
    true
}

/// Release the busy flag.
pub fn finish_operation(store: &mut AppStore) {
    store.activity.busy = false;
    store.activity.operation = None;
}

/// Read/write access to the [`AppStore`], independent of where it lives.
pub trait StateStore: Clone + 'static {
    /// Current state.
    fn snapshot(&self) -> Rc<AppStore>;

    /// Apply a mutation and return its result.
    fn reduce<R>(&self, f: impl FnOnce(&mut AppStore) -> R) -> R;
}

impl StateStore for yewdux::dispatch::Dispatch<AppStore> {
    fn snapshot(&self) -> Rc<AppStore> {
        self.get()
    }

    fn reduce<R>(&self, f: impl FnOnce(&mut AppStore) -> R) -> R {
        let mut result = None;
        self.reduce_mut(|store| {
            result = Some(f(store));
        });
        result.unwrap_or_else(|| unreachable!("reduce_mut runs its closure synchronously"))
    }
}

/// Store held in plain memory, for headless use and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Rc<AppStore>>>,
}

impl MemoryStore {
    /// Wrap an initial state.
    #[must_use]
    pub fn new(initial: AppStore) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Rc::new(initial))),
        }
    }
}

impl StateStore for MemoryStore {
    fn snapshot(&self) -> Rc<AppStore> {
        Rc::clone(&self.inner.borrow())
    }

    fn reduce<R>(&self, f: impl FnOnce(&mut AppStore) -> R) -> R {
        let mut slot = self.inner.borrow_mut();
        f(Rc::make_mut(&mut slot))
    }
}
