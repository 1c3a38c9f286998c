pub mod command_line;
pub mod config;
pub mod error;
pub mod ini;
pub mod paths;
pub mod tag_scanner;

pub use command_line::EditorCommand;
pub use config::{CONFIG_SECTION, Config, EDITOR, LOG_FILE, META_NAME, SettingKey, SettingValue};
pub use error::AppError;
pub use ini::IniDocument;
pub use paths::{InstallPaths, RunContext, dirname_of};
pub use tag_scanner::{LineMatch, ScanResult, classify_line, extract_content_value};
