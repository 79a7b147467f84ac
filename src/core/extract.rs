use std::{fs, path::Path};

use crate::core::FileEntry;

/// Suggested file name for the save dialog.
pub const DEFAULT_OUTPUT_NAME: &str = "code_for_gpt.txt";

/* ================================ Extractor ================================ */

/// Concatenates every included entry into one text document.
///
/// Entries are taken in stored order; visibility plays no role here, only
/// `included`. Each surviving file becomes a block: a `// <rel path>` header
/// line, an opening fence tagged with the file's extension, the content with
/// leading/trailing whitespace trimmed, and the closing fence. Blocks are
/// joined by exactly one blank line. A file that vanished, is
/// not a regular file, or cannot be read is skipped with a warning; the
/// remaining entries still extract. Every call re-reads every file, there is
/// no caching.
#[must_use]
pub fn extract(root: &Path, entries: &[FileEntry]) -> String {
    let mut blocks: Vec<String> = Vec::new();

    for entry in entries.iter().filter(|e| e.included) {
        let path = root.join(&entry.rel_path);
        if !path.is_file() {
            log::warn!("{}: missing or not a regular file, skipped", entry.rel_path);
            continue;
        }
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(err) => {
                log::warn!("{}: read failed, skipped: {err}", entry.rel_path);
                continue;
            }
        };
        // Lenient decode; invalid sequences are replaced, never fatal.
        let contents = String::from_utf8_lossy(&bytes);

        let ext = path
            .extension()
            .map(|os| os.to_string_lossy().into_owned())
            .unwrap_or_default();

        blocks.push(format!(
            "// {}\n```{}\n{}\n```",
            entry.rel_path,
            ext,
            contents.trim()
        ));
    }

    blocks.join("\n\n")
}
