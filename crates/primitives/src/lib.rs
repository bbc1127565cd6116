//! Core value types shared by vellum UI extensions: selections, style spans,
//! and the client-space geometry used to anchor floating panels.

/// Client-space geometry: anchor points and rendered rectangles.
pub mod geometry;
/// Style spans (marks) attached to runs of inline content.
pub mod mark;
/// Selection values describing the user's focus in the document.
pub mod selection;

pub use geometry::{Anchor, ClientRect};
pub use mark::{Attrs, Mark};
pub use selection::{DocPos, Selection};
