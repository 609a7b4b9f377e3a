use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use bitflags::bitflags;

bitflags! {
    /// Flags indicating what aspects of rendering need to be updated
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// Widget needs layout recalculation (size/position may change)
        const NEEDS_LAYOUT = 0b01;
        /// Widget needs repainting (visual appearance changed)
        const NEEDS_PAINT  = 0b10;
    }
}

/// Unique identifier for a widget
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WidgetId(u64);

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

impl WidgetId {
    /// Generate a new unique widget ID
    pub fn next() -> Self {
        WidgetId(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Request that this widget be re-laid out.
    ///
    /// A layout request always implies a repaint: the host paints every frame
    /// that follows a layout pass.
    pub fn request_layout(&self) {
        mark(*self, ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT);
    }

    /// Request that this widget be repainted (without layout)
    pub fn request_paint(&self) {
        mark(*self, ChangeFlags::NEEDS_PAINT);
    }
}

fn mark(id: WidgetId, flags: ChangeFlags) {
    APP_STATE.with(|state| {
        let mut state = state.borrow_mut();
        state.change_flags |= flags;
        state.dirty_widgets.insert(id);
    });
}

/// Pending invalidation state for the current UI thread.
#[derive(Debug)]
pub struct AppState {
    /// Global change flags
    pub change_flags: ChangeFlags,
    /// Set of widgets that asked for layout or paint since the last frame
    pub dirty_widgets: HashSet<WidgetId>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            change_flags: ChangeFlags::empty(),
            dirty_widgets: HashSet::new(),
        }
    }

    pub fn needs_layout(&self) -> bool {
        self.change_flags.contains(ChangeFlags::NEEDS_LAYOUT)
    }

    pub fn needs_paint(&self) -> bool {
        self.change_flags.contains(ChangeFlags::NEEDS_PAINT)
    }

    pub fn is_dirty(&self, id: WidgetId) -> bool {
        self.dirty_widgets.contains(&id)
    }
}

thread_local! {
    static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

pub fn with_app_state<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    APP_STATE.with(|state| f(&state.borrow()))
}

pub fn with_app_state_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    APP_STATE.with(|state| f(&mut state.borrow_mut()))
}

/// Take the pending flags and dirty set, leaving a clean state behind.
/// Called by the host once per frame.
pub fn take_changes() -> AppState {
    APP_STATE.with(|state| std::mem::take(&mut *state.borrow_mut()))
}
