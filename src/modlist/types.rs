//! Data model for mod-list documents
//!
//! Field names on the wire follow the installer's JSON format (`ModId`,
//! `RawName`, `Modlist`, ...). Every field is optional on input and decodes
//! to an empty value when absent or `null`.

use crate::modlist::constants::ACTION_ARG_SEPARATOR;
use crate::util::{deserialize_null_default, deserialize_string_lenient};
use serde::{Deserialize, Serialize};

/// One mod entry in a mod list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModDescriptor {
    /// Key referenced by other descriptors' dependency lists and by the UI
    #[serde(
        rename = "ModId",
        default,
        deserialize_with = "deserialize_string_lenient"
    )]
    pub mod_id: String,

    #[serde(
        rename = "Name",
        default,
        deserialize_with = "deserialize_string_lenient"
    )]
    pub name: String,

    /// File name of the mod once downloaded
    #[serde(
        rename = "RawName",
        default,
        deserialize_with = "deserialize_string_lenient"
    )]
    pub raw_name: String,

    #[serde(
        rename = "Author",
        default,
        deserialize_with = "deserialize_null_default"
    )]
    pub authors: Vec<String>,

    #[serde(
        rename = "Version",
        default,
        deserialize_with = "deserialize_string_lenient"
    )]
    pub version: String,

    #[serde(
        rename = "Description",
        default,
        deserialize_with = "deserialize_string_lenient"
    )]
    pub description: String,

    /// Download location, combined with `raw_name` by the installer
    #[serde(
        rename = "Path",
        default,
        deserialize_with = "deserialize_string_lenient"
    )]
    pub download_path_fragment: String,

    #[serde(
        rename = "Website",
        default,
        deserialize_with = "deserialize_string_lenient"
    )]
    pub website: String,

    /// `?`-separated command for the installer, e.g.
    /// `moveToFolder?ComradeKolbasa.zip?Mods/?ComradeKolbasa.zip`
    #[serde(
        rename = "Arguments",
        default,
        deserialize_with = "deserialize_string_lenient"
    )]
    pub post_download_action: String,

    /// `mod_id`s this mod depends on. Not resolved here.
    #[serde(
        rename = "Dependencies",
        default,
        deserialize_with = "deserialize_null_default"
    )]
    pub dependency_ids: Vec<String>,

    #[serde(
        rename = "DelInfo",
        default,
        deserialize_with = "deserialize_string_lenient"
    )]
    pub deletion_info: String,
}

impl ModDescriptor {
    /// Full download URL as the installer assembles it
    pub fn download_url(&self) -> String {
        format!("{}{}", self.download_path_fragment, self.raw_name)
    }

    /// Split the post-download action into its command and arguments.
    ///
    /// Returns an empty vector when no action is set.
    pub fn action_args(&self) -> Vec<&str> {
        if self.post_download_action.is_empty() {
            return Vec::new();
        }
        self.post_download_action
            .split(ACTION_ARG_SEPARATOR)
            .collect()
    }
}

/// One loaded mod list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModListDocument {
    #[serde(
        rename = "Modlist",
        default,
        deserialize_with = "deserialize_null_default"
    )]
    pub entries: Vec<ModDescriptor>,

    #[serde(
        rename = "ModListName",
        default,
        deserialize_with = "deserialize_string_lenient"
    )]
    pub list_name: String,

    #[serde(
        rename = "ModListID",
        default,
        deserialize_with = "deserialize_string_lenient"
    )]
    pub list_id: String,
}

impl ModListDocument {
    /// Look up an entry by `mod_id`
    pub fn find_mod(&self, mod_id: &str) -> Option<&ModDescriptor> {
        self.entries.iter().find(|entry| entry.mod_id == mod_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(mod_id: &str) -> ModDescriptor {
        ModDescriptor {
            mod_id: mod_id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_download_url() {
        let entry = ModDescriptor {
            raw_name: "ComradeKolbasa.zip".to_string(),
            download_path_fragment: "https://example.org/mods/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            entry.download_url(),
            "https://example.org/mods/ComradeKolbasa.zip"
        );
    }

    #[test]
    fn test_action_args() {
        let entry = ModDescriptor {
            post_download_action: "moveToFolder?ComradeKolbasa.zip?Mods/?ComradeKolbasa.zip"
                .to_string(),
            ..Default::default()
        };
        assert_eq!(
            entry.action_args(),
            vec![
                "moveToFolder",
                "ComradeKolbasa.zip",
                "Mods/",
                "ComradeKolbasa.zip"
            ]
        );
        assert!(descriptor("empty").action_args().is_empty());
    }

    #[test]
    fn test_find_mod() {
        let document = ModListDocument {
            entries: vec![descriptor("alpha"), descriptor("beta")],
            ..Default::default()
        };
        assert_eq!(
            document.find_mod("beta").map(|m| m.mod_id.as_str()),
            Some("beta")
        );
        assert!(document.find_mod("gamma").is_none());
    }
}
