//! Domain model - pure value types independent of parsing and I/O

pub mod release;
pub mod tail;
pub mod template;
pub mod version;

pub use release::ReleaseType;
pub use tail::{split_tail, Tail};
pub use template::{SuffixKind, Template};
pub use version::{Field, Version};
