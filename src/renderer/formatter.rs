use super::size::SizeFormat;

/// Connector for an entry that has siblings after it
pub const BRANCH: &str = "├── ";
/// Connector for the last entry among its siblings, and for the root
pub const LAST_BRANCH: &str = "└── ";

const HEADER_RULE_WIDTH: usize = 30;

/// One line of the diagram, before it is turned into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine<'a> {
    pub prefix: &'a str,
    pub is_last: bool,
    pub name: &'a str,
    pub is_dir: bool,
    /// File size, when sizes are shown and it could be read
    pub size: Option<u64>,
}

impl RenderLine<'_> {
    pub fn format(&self, size_format: SizeFormat) -> String {
        let connector = if self.is_last { LAST_BRANCH } else { BRANCH };
        let suffix = if self.is_dir { "/" } else { "" };
        let annotation = self
            .size
            .map(|bytes| size_format.annotation(bytes))
            .unwrap_or_default();

        format!(
            "{}{}{}{}{}",
            self.prefix, connector, self.name, suffix, annotation
        )
    }
}

/// Format the two header lines (label line and rule), without a trailing newline.
pub fn format_header(label: &str, root_name: &str) -> String {
    format!("{}: {}\n{}", label, root_name, "=".repeat(HEADER_RULE_WIDTH))
}

/// Indentation for the children of an entry rendered with `prefix`.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}
