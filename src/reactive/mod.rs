pub mod invalidation;

pub use invalidation::{
    take_changes, with_app_state, with_app_state_mut, AppState, ChangeFlags, WidgetId,
};
