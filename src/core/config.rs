use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Well-known config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "config.json";

/* ============================ Configuration store ========================== */

/// Startup configuration. Read once; seeded with defaults when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub included_extensions: Vec<String>,
    pub ignored_patterns: Vec<String>,
    pub language_mapping: BTreeMap<String, Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let strs = |xs: &[&str]| xs.iter().map(ToString::to_string).collect::<Vec<_>>();
        let mut mapping = BTreeMap::new();
        mapping.insert("Python".to_string(), strs(&["py"]));
        mapping.insert("TypeScript".to_string(), strs(&["ts", "tsx"]));
        mapping.insert("JavaScript".to_string(), strs(&["js", "jsx"]));
        mapping.insert("C#".to_string(), strs(&["cs"]));
        mapping.insert("Godot (GDScript)".to_string(), strs(&["gd"]));
        mapping.insert("HTML".to_string(), strs(&["html"]));
        mapping.insert("CSS".to_string(), strs(&["css"]));

        Self {
            included_extensions: strs(&["py", "ts", "js", "cs", "gd", "html", "css"]),
            ignored_patterns: strs(&["node_modules", "dist", "venv", ".git", "__pycache__"]),
            language_mapping: mapping,
        }
    }
}

impl AppConfig {
    /// Reads the config file, or writes the defaults and returns them when it
    /// does not exist yet. A present-but-unparseable file is a hard error:
    /// startup propagates it instead of silently falling back.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let bytes = fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            // Tolerate a UTF-8 BOM on read.
            let bytes = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(&bytes);
            return serde_json::from_slice(bytes)
                .with_context(|| format!("failed to parse {}", path.display()));
        }

        let defaults = Self::default();
        defaults
            .write_pretty(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(defaults)
    }

    /// 4-space-indented JSON, non-ASCII preserved as-is.
    fn write_pretty(&self, path: &Path) -> Result<()> {
        let mut buf = Vec::new();
        let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
        self.serialize(&mut ser)?;
        fs::write(path, buf)?;
        Ok(())
    }
}
