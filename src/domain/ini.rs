//! Minimal INI document model.
//!
//! Only what `conf.ini` needs: `[section]` headers, `key=value` entries and
//! `;`/`#` comment lines. Section and key names compare ASCII case-insensitively.

/// Parsed INI document, entries kept in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    entries: Vec<IniEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct IniEntry {
    section: String,
    key: String,
    value: String,
}

impl IniDocument {
    /// Parse INI text. Malformed lines are skipped rather than rejected.
    pub fn parse(content: &str) -> Self {
        let mut entries = Vec::new();
        let mut section: Option<String> = None;

        for raw in content.lines() {
            let line = raw.trim().trim_start_matches('\u{feff}');
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                section = rest.find(']').map(|end| rest[..end].trim().to_string());
                continue;
            }

            // Entries before the first header belong to no section and are unreachable.
            let Some(current) = &section else {
                continue;
            };
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }

            entries.push(IniEntry {
                section: current.clone(),
                key: key.to_string(),
                value: unquote(value.trim()).to_string(),
            });
        }

        Self { entries }
    }

    /// Value of `key` in `section`; the first occurrence wins.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.section.eq_ignore_ascii_case(section) && e.key.eq_ignore_ascii_case(key))
            .map(|e| e.value.as_str())
    }
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
