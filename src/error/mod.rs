//! Error handling for everything around painting.
//!
//! Painting itself cannot fail: contract breaches are assertions and missing
//! data degrades to placeholder visuals. The outside edges of the crate
//! (loading style/palette/fixture files, encoding images, driving the
//! terminal preview) report failures through [`RenderError`].
//!
//! | Category | Description |
//! |----------|-------------|
//! | Configuration | Malformed palette/style/fixture input |
//! | System | Filesystem and terminal failures |
//! | Client | Image encoding failures |

mod category;
mod render_error;
mod result;

pub use category::ErrorCategory;
pub use render_error::RenderError;
pub use result::{RenderResult, ResultExt};
