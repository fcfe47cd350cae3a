pub mod counters;
pub mod element;
pub mod presets;
pub mod style;

pub use counters::IdCounters;
pub use element::{
    ElementId, ElementNode, ElementType, LayoutKind, ParseElementTypeError, ParseLayoutKindError,
};
pub use style::{StyleMap, StyleProperty};
