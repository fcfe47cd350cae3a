//! # Editing
//!
//! The page is a forest of [`ElementNode`](crate::models::ElementNode)s owned
//! by a [`Session`]. Every change is expressed as a [`Cmd`]; applying it
//! returns a [`Patch`] describing what moved, which the controller uses to
//! decide how to resynchronize the host.
//!
//! - **`tree`**: depth-first lookup, removal and pre-order traversal
//! - **`targeting`**: resolution of the remembered insertion target
//! - **`session`**: page state, counters, target and selection
//! - **`commands`** / **`patch`**: the edit algebra and its results

pub mod commands;
pub mod patch;
pub mod session;
pub mod targeting;
pub mod tree;

pub use commands::Cmd;
pub use patch::Patch;
pub use session::Session;
pub use targeting::InsertionTarget;
