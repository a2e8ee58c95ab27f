#![allow(clippy::module_inception)]

mod collection;
mod geometry;
mod output;
mod reduce;
mod types;

pub use collection::*;
pub use geometry::*;
pub use output::*;
pub use types::*;
