//! Domain-based type organization
//!
//! - connection: session record of the connectivity check
//! - page: page collaborators (CSV export, form input rows)

pub mod connection;
pub mod page;

pub use connection::*;
pub use page::*;
