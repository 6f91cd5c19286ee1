use super::exclusion::ExclusionConfig;
use super::size::SizeFormat;

/// Header label used when none is configured.
pub const DEFAULT_HEADER_LABEL: &str = "Estructura de";

/// Options for one render. Built fresh by the caller for every call.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Annotate file lines with their size
    pub show_sizes: bool,

    /// How size annotations are written
    pub size_format: SizeFormat,

    /// Render symlinks to directories as directories and descend into them
    pub follow_symlinks: bool,

    /// Text before the root name in the header line
    pub header_label: String,

    /// Names and prefixes to skip
    pub exclusions: ExclusionConfig,
}

impl RenderOptions {
    /// Create options with the given exclusions and every other setting at
    /// its default.
    pub fn new(exclusions: ExclusionConfig) -> Self {
        Self {
            show_sizes: false,
            size_format: SizeFormat::default(),
            follow_symlinks: true,
            header_label: DEFAULT_HEADER_LABEL.to_string(),
            exclusions,
        }
    }

    /// Set whether file sizes are shown
    pub fn with_sizes(mut self, show: bool) -> Self {
        self.show_sizes = show;
        self
    }

    /// Set the size annotation format
    pub fn with_size_format(mut self, format: SizeFormat) -> Self {
        self.size_format = format;
        self
    }

    /// Set whether symbolic links are followed
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Set the header label
    pub fn with_header_label(mut self, label: impl Into<String>) -> Self {
        self.header_label = label.into();
        self
    }
}
