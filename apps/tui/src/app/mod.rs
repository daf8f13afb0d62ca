// App module for climate-atlas
// Holds view state and dispatches store actions

pub mod actions;
pub mod input;
pub mod state;

pub use actions::{build_store, AppActions, Store};
pub use input::handle_input;
pub use state::{App, MapPanel};
