pub mod render;
pub mod subdirs;

use crate::cli::ExclusionArgs;
use crate::config::Config;
use crate::renderer::{parse_list, ExclusionConfig};

/// Exclusions for a command. A list given on the command line replaces the
/// configured one; the other list still comes from config.
pub fn exclusions(args: &ExclusionArgs, config: &Config) -> ExclusionConfig {
    if args.no_excludes {
        return ExclusionConfig::none();
    }

    let names = if args.exclude.is_empty() {
        config.exclude.names.clone()
    } else {
        args.exclude.iter().flat_map(|list| parse_list(list)).collect()
    };
    let prefixes = if args.exclude_prefix.is_empty() {
        config.exclude.prefixes.clone()
    } else {
        args.exclude_prefix
            .iter()
            .flat_map(|list| parse_list(list))
            .collect()
    };

    ExclusionConfig::new(names, prefixes)
}
