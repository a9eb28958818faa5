//! Region-resolution and metrics-synchronization core.
//!
//! Three asynchronous inputs race against each other in a session: the
//! region catalog load, manual selection events, and a one-shot geolocation
//! auto-detect. This crate reconciles them into a single consistent
//! "current selection → current snapshot" state.
//!
//! The model is events in, effects out: every completion and every manual
//! action arrives as an [`Event`], and [`DashboardController::handle`]
//! returns the [`Effect`]s to run. The crate performs no I/O itself, so the
//! arbitration rules (the `user_interacted` latch and the request sequence
//! numbers) are testable without any async machinery.

pub mod event;
pub mod hub;
pub mod notice;
pub mod resolver;
pub mod selection;

pub use event::{Coordinates, Effect, Event, FetchSeq, LocationError};
pub use hub::DashboardController;
pub use notice::{Notice, NoticeBus, Severity};
pub use resolver::{LocationResolver, ResolverPhase};
pub use selection::Selection;
