//! Resolver settings read from `conf.ini`.

use super::ini::IniDocument;

/// File name of the configuration expected next to the executable.
pub const CONFIG_FILE_NAME: &str = "conf.ini";

/// Section every setting is looked up in.
pub const CONFIG_SECTION: &str = "resolver";

/// A recognized setting and its built-in default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingKey {
    pub name: &'static str,
    pub default: &'static str,
}

/// Log file name, relative to the executable directory.
pub const LOG_FILE: SettingKey = SettingKey { name: "log_file", default: "last.log" };

/// Meta tag `name` that marks the local file pointer.
pub const META_NAME: SettingKey = SettingKey { name: "meta_name", default: "t29.localfile" };

/// Editor command the target file is appended to.
pub const EDITOR: SettingKey = SettingKey { name: "notepad", default: "notepad.exe" };

/// Result of one configuration lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingValue {
    pub section: String,
    pub key: String,
    pub value: String,
    pub defaulted: bool,
}

impl SettingValue {
    /// Transcript line recording this lookup.
    pub fn log_line(&self) -> String {
        let mut line =
            format!("Read ini setting '{}/{}' = '{}'", self.section, self.key, self.value);
        if self.defaulted {
            line.push_str(" (default)");
        }
        line
    }
}

/// Read-only view over one section of `conf.ini`.
#[derive(Debug, Clone)]
pub struct Config {
    document: IniDocument,
    section: String,
}

impl Config {
    pub fn new(document: IniDocument, section: impl Into<String>) -> Self {
        Self { document, section: section.into() }
    }

    /// Parse `conf.ini` text scoped to the resolver section.
    pub fn from_ini(content: &str) -> Self {
        Self::new(IniDocument::parse(content), CONFIG_SECTION)
    }

    /// Look up `key`, falling back to `default` when the key or section is absent.
    pub fn get(&self, key: &str, default: &str) -> SettingValue {
        let found = self.document.get(&self.section, key);
        SettingValue {
            section: self.section.clone(),
            key: key.to_string(),
            value: found.unwrap_or(default).to_string(),
            defaulted: found.is_none(),
        }
    }

    /// Look up a recognized setting with its built-in default.
    pub fn setting(&self, key: SettingKey) -> SettingValue {
        self.get(key.name, key.default)
    }
}
