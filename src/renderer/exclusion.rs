use std::collections::BTreeSet;

/// Names and name prefixes that are skipped at every depth of a render.
///
/// An excluded directory is never descended into, so nothing below it is
/// read from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionConfig {
    names: BTreeSet<String>,
    prefixes: BTreeSet<String>,
}

impl ExclusionConfig {
    /// Build an exclusion set from exact names and name prefixes.
    ///
    /// Malformed entries are dropped: empty strings (an empty prefix would
    /// hide every entry) and anything containing a path separator, which can
    /// never match a base name.
    pub fn new<N, P>(names: N, prefixes: P) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            names: sanitize(names, "name"),
            prefixes: sanitize(prefixes, "prefix"),
        }
    }

    /// An exclusion set that lets every entry through.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build an exclusion set from comma-separated user input.
    pub fn from_lists(names: &str, prefixes: &str) -> Self {
        Self::new(parse_list(names), parse_list(prefixes))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.prefixes.is_empty()
    }

    /// Check whether an entry with this base name is skipped.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.names.contains(name) || self.prefixes.iter().any(|p| name.starts_with(p.as_str()))
    }
}

/// Split a comma-separated list, trimming whitespace and dropping empty tokens.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn sanitize<I>(values: I, kind: &str) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    values
        .into_iter()
        .map(Into::into)
        .filter(|value| {
            if value.is_empty() {
                tracing::warn!("Ignoring empty exclusion {}", kind);
                return false;
            }
            if value.contains(std::path::is_separator) {
                tracing::warn!(
                    value = %value,
                    "Ignoring exclusion {} containing a path separator",
                    kind
                );
                return false;
            }
            true
        })
        .collect()
}
