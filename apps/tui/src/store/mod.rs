// Climate store: selection, cached API data and the actions that fill it

pub mod climate;
pub mod requests;
pub mod selection;
pub mod state;

pub use climate::{ClimateStore, DEFAULT_GLOBAL_LIMIT, DEFAULT_HOTSPOT_THRESHOLD};
pub use requests::RequestTracker;
pub use selection::{Selection, DEFAULT_COUNTRY, DEFAULT_SECTOR};
pub use state::{unit_risk, Statistics, StoreState};
