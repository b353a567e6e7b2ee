//! View state and the container that owns it.

mod store;
mod view_state;

pub use store::{
    BookStore, ReloadHandles, ADD_FAILED_MESSAGE, LOAD_FAILED_MESSAGE, VALIDATION_MESSAGE,
};
pub use view_state::{InvalidViewMode, ViewMode, ViewState};
