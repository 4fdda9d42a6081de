use std::fmt;

use crate::domain::{Field, Template};

/// Non-fatal notes produced while composing a version.
/// These are reported to the user but never stop composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeWarning {
    /// A supplied suffix was replaced by `rc` because the format demands it
    SuffixForcedToRc { supplied: String },
    /// A supplied value has no slot in the resolved format
    Dropped {
        field: Field,
        value: String,
        template: Template,
    },
    /// An exclude flag was overridden because the resolved format requires the part
    ExclusionOverridden { field: Field, template: Template },
}

impl fmt::Display for ComposeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeWarning::SuffixForcedToRc { supplied } => {
                write!(f, "Suffix '{}' replaced by 'rc'", supplied)
            }
            ComposeWarning::Dropped {
                field,
                value,
                template,
            } => {
                write!(
                    f,
                    "Ignoring {} '{}': format '{}' has no {}",
                    field, value, template, field
                )
            }
            ComposeWarning::ExclusionOverridden { field, template } => {
                write!(
                    f,
                    "Format '{}' requires a {}; exclusion ignored",
                    template, field
                )
            }
        }
    }
}
