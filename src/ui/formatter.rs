//! Pure formatting functions for CLI output.
//!
//! Nothing here prints. Styled messages are built with `console` and written by the
//! reporting functions in the parent module; value dumps are plain text for scripts.

use console::style;

use crate::domain::{Field, Template, Version};

/// Styled "ERROR:" line for stderr.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().for_stderr(), message)
}

/// Styled warning line for stderr.
pub fn format_warning(message: &str) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow().for_stderr(), message)
}

/// Styled status line for stderr.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow().for_stderr(), message)
}

/// Render requested fields of a parsed version.
///
/// A single field prints as its bare value so it can be captured directly; several fields
/// print one `name=value` line each, in the order requested. An empty request dumps every
/// field.
pub fn format_fields(version: &Version, fields: &[Field]) -> Vec<String> {
    match fields {
        [field] => vec![version.get(*field)],
        [] => format_fields(version, &Field::ALL),
        fields => fields
            .iter()
            .map(|field| format!("{}={}", field, version.get(*field)))
            .collect(),
    }
}

/// Render every field as `PREFIX_FIELD=value` lines for consumption by later processes.
pub fn format_exports(version: &Version, var_prefix: &str) -> Vec<String> {
    Field::ALL
        .iter()
        .map(|field| {
            format!(
                "{}_{}={}",
                var_prefix,
                field.name().to_uppercase(),
                version.get(*field)
            )
        })
        .collect()
}

/// One line per named template with the release type it describes.
pub fn format_template_table() -> Vec<String> {
    let width = Template::ALL
        .iter()
        .map(|t| t.to_string().len())
        .max()
        .unwrap_or(0);
    Template::ALL
        .iter()
        .map(|t| format!("{:<width$}  {}", t.to_string(), t.release_type(), width = width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_single_field_is_bare() {
        assert_eq!(
            format_fields(&v("v1.2.3-rc"), &[Field::Suffix]),
            vec!["rc".to_string()]
        );
    }

    #[test]
    fn test_several_fields_are_named() {
        assert_eq!(
            format_fields(&v("v1.2.3-rc"), &[Field::Major, Field::Type]),
            vec!["major=1".to_string(), "type=rc".to_string()]
        );
    }

    #[test]
    fn test_no_fields_dumps_all() {
        let lines = format_fields(&v("1.2.3-abcdef"), &[]);
        assert_eq!(lines.len(), Field::ALL.len());
        assert_eq!(lines[0], "prefix=");
        assert_eq!(lines[5], "hash=abcdef");
        assert_eq!(lines[7], "format=X.YY.Z-HASH");
    }

    #[test]
    fn test_exports() {
        let lines = format_exports(&v("v1.2.3-beta-abc1234"), "VERSION");
        assert!(lines.contains(&"VERSION_PREFIX=v".to_string()));
        assert!(lines.contains(&"VERSION_SUFFIX=beta".to_string()));
        assert!(lines.contains(&"VERSION_TYPE=custom-dev".to_string()));
        assert!(lines.contains(&"VERSION_FORMAT=vX.YY.Z-<suffix>-HASH".to_string()));
    }

    #[test]
    fn test_template_table_lists_all() {
        let lines = format_template_table();
        assert_eq!(lines.len(), 12);
        assert!(lines[0].starts_with("X.YY.Z "));
        assert!(lines[0].ends_with("release"));
        assert!(lines[11].ends_with("custom-dev"));
    }

    #[test]
    fn test_styled_messages_keep_text() {
        assert!(format_error("boom").contains("boom"));
        assert!(format_warning("careful").contains("careful"));
        assert!(format_status("working").contains("working"));
    }
}
