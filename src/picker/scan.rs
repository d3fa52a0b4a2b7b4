use std::path::Path;

use walkdir::WalkDir;

use crate::config::PickerSettings;

use super::Entry;

fn has_media_extension(path: &Path, exts: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// List media files under `dir`, sorted case-insensitively by relative path.
pub fn scan(dir: &Path, settings: &PickerSettings) -> Vec<Entry> {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut entries: Vec<Entry> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|e| match e {
            Ok(e) => Some(e),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file() || e.path().is_file())
        .filter(|e| has_media_extension(e.path(), &exts))
        .map(|e| {
            let path = e.path().to_path_buf();
            let display = path
                .strip_prefix(dir)
                .unwrap_or(&path)
                .display()
                .to_string();
            Entry { path, display }
        })
        .collect();

    entries.sort_by(|a, b| a.display.to_lowercase().cmp(&b.display.to_lowercase()));
    tracing::debug!(dir = %dir.display(), found = entries.len(), "scanned for media");
    entries
}
