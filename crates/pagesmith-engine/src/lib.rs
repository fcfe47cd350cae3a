//! # pagesmith-engine
//!
//! Document tree model and view/export pipeline of the pagesmith page
//! builder.
//!
//! ```text
//! host event → Controller → Cmd → Session → rebuild view → rebuild index
//!                                     └──→ export (read only)
//! ```
//!
//! - [`models`]: element nodes, ids, the style map and the layout preset table
//! - [`editing`]: session state, tree navigation and the command algebra
//! - [`view`]: host surface traits, full-rebuild renderer, index panel
//! - [`export`]: markup and stylesheet generation
//! - [`io`]: writing an export to disk

pub mod controller;
pub mod editing;
pub mod export;
pub mod io;
pub mod models;
pub mod view;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use controller::{Controller, Event};
pub use editing::{Cmd, InsertionTarget, Patch, Session};
pub use export::{ExportedPage, export_page};
pub use models::{ElementId, ElementNode, ElementType, LayoutKind, StyleMap, StyleProperty};
pub use view::{ClickAction, Host, IndexEntry, RetainedSurface, Surface};
