//! # ziovate-app
//!
//! The application layer of the ziovate adherence client: session lifecycle,
//! role → dashboard dispatch, dashboard view models, and the drug-tracker
//! action controller. Rendering proper (mobile screens, the demo CLI) lives
//! outside this crate.

pub mod session;
pub mod tracker;
pub mod views;

pub use session::SessionContext;
pub use tracker::DrugTracker;
pub use views::{AdminDashboardView, Dashboard, DoctorDashboardView, DrugTrackerView};
