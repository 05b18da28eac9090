pub mod content;
pub mod options;
pub use content::{AudioContent, CodeContent, TextContent, VisualContent};
pub use options::{AudioLength, ContentVariant, DepthLevel};
