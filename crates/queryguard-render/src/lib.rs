//! Rendering of guard reports for humans (Markdown for PR comments, plain text for terminals).

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::render_markdown;
pub use model::{RenderableData, RenderableRejection, RenderableReport, RenderableVerdict};
pub use text::render_text;
