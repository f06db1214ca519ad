//! Path utilities: expand ~ and resolve paths relative to the config directory.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Absolute paths are kept, relative ones are anchored at `base`.
pub fn resolve_in(base: &Path, path: &str) -> PathBuf {
    let p = expand_tilde(path);
    if p.is_absolute() { p } else { base.join(p) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_are_anchored() {
        let base = Path::new("/srv/pauses");
        assert_eq!(resolve_in(base, "pauses.json"), base.join("pauses.json"));
        assert_eq!(resolve_in(base, "/tmp/p.json"), PathBuf::from("/tmp/p.json"));
    }
}
