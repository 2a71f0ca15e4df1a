pub mod modlist;
pub mod util;

pub use modlist::ModListService;
pub use modlist::config::ModListConfig;
pub use modlist::error::{ModListError, Result};
pub use modlist::types::{ModDescriptor, ModListDocument};
