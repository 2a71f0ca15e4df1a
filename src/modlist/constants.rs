//! Constants shared by the mod-list resolution layer

/// Substring marking a location or fragment as a full URL / URL prefix
pub const FULL_URL_MARKER: &str = "https";

/// Separator between arguments of a descriptor's post-download action
pub const ACTION_ARG_SEPARATOR: char = '?';

/// Directory names
pub const CONFIG_DIR: &str = "modlist-resolver";

/// File names
pub const CONFIG_FILE: &str = "config.toml";

/// Redirects followed by the HTTP fetcher before giving up
pub const MAX_REDIRECTS: usize = 10;
