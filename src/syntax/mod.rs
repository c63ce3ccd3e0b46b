//! DOT syntax layer: identifier quoting, attribute formatting and the
//! statement builders that produce individual source lines.

pub mod attrs;
pub mod quote;
pub mod statements;
pub mod types;

pub use attrs::{Attributes, OrderedAttributes, UnorderedAttributes};
pub use types::{AttrTarget, Compass, Endpoint, Kind};
