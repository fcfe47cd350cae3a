//! # View synchronization
//!
//! The host owns a live presentation of the page. After every change to the
//! page tree the presentation is discarded and rebuilt from the model
//! ([`render::rebuild`]), then the index panel is rebuilt
//! ([`index::rebuild`]). Interaction is attached per element at render time
//! as a [`ClickAction`].

pub mod index;
pub mod render;
pub mod retained;
pub mod surface;

pub use index::IndexEntry;
pub use retained::{RetainedSurface, ViewElement, ViewHandle};
pub use surface::{ClickAction, Host, IndexPanel, Surface, Viewer};
