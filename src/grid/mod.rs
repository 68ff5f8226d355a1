//! Grid module: named-area templates and their resolved regions.
//!
//! A template is written as rows of area labels:
//!
//! ```text
//! A B B B
//! C D D D
//! X Y Y Y
//! ```
//!
//! Each distinct label becomes one rectangular [`GridRegion`]. Regions are
//! resolved once, when the template is defined, and looked up by label when
//! cells are declared.

mod region;
mod template;

pub use region::{compute_regions, AreaShape, GridRegion, ResolvedGrid};
pub use template::{normalize_label, GridTemplate};
