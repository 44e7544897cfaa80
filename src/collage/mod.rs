// SPDX-License-Identifier: MPL-2.0
//! Collage domain: templates, slots, the layout model and its geometry.
//!
//! Nothing in this module can fail. Every operation is a total function over
//! well-formed templates, slots and photos; failures belong to the media
//! collaborators that produce photos or consume snapshots.

pub mod geometry;
pub mod layout;
pub mod orientation;
pub mod snapshot;
pub mod template;

pub use geometry::GridGeometry;
pub use layout::Layout;
pub use orientation::{Axis, Orientation};
pub use snapshot::{export_snapshot, GridStyle};
pub use template::{Slot, Template};
