//! Admin console logic that does not depend on the browser: the list core
//! behind every table, form builders, session persistence, routing and the
//! API error taxonomy.

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod routes;
pub mod session;
pub mod table;

pub use config::ConsoleConfig;
pub use dashboard::DashboardStats;
pub use error::{ApiError, FormError};
pub use routes::{resolve, Route, RouteDecision};
pub use session::{KeyValueStore, MemoryStore, Session, SessionStore, SessionUser};
pub use table::{Column, ListController, ListView, Record, SortDirection};
