use std::{fs, io, path::PathBuf};

use serde::{Deserialize, Serialize};

/* ============================= Session settings ============================ */

/// Last-edited filter texts, persisted across runs. Each key is independent:
/// a missing key falls back to the config defaults at startup.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SessionSettings {
    #[serde(default)]
    pub included_extensions: Option<String>,
    #[serde(default)]
    pub ignored_patterns: Option<String>,
}

/// Per-user settings file under the platform's standard config directory.
#[must_use]
pub fn settings_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("code-exporter").join("settings.json"))
}

#[must_use]
pub fn load_settings(path: &PathBuf) -> Option<SessionSettings> {
    let data = fs::read(path).ok()?;
    serde_json::from_slice::<SessionSettings>(&data).ok()
}

pub fn save_settings(path: &PathBuf, settings: &SessionSettings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("json.tmp");

    let data = serde_json::to_vec_pretty(settings).map_err(|e| io::Error::other(e.to_string()))?;

    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
