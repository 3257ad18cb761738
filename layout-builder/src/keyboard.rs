mod controls;
mod flow;
mod key;
mod layout;

pub use controls::{ArrowCluster, TrackpadButtons};
pub use flow::render;
pub use key::Key;
pub use layout::{KeyCap, Layout, Row};
