//! Foxtab Session Parsing
//!
//! Firefox writes its session state as one JSON document:
//! windows, each holding tabs, each holding a history of navigation entries.
//! Only `windows` is required; everything below it is optional and defaulted.
//! Positions are assigned by visitation order, never read from the document.

mod error;
mod parser;
mod schema;

pub use error::SessionError;
pub use parser::{parse_session, tabs_from_document};
pub use schema::{NavigationEntry, SessionDocument, TabEntry, WindowEntry};

pub type Result<T> = std::result::Result<T, SessionError>;
