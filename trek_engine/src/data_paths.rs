use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable that, when set, names the data directory outright.
pub const DATA_DIR_ENV: &str = "TREK_DATA_DIR";

/// Cached path to the directory containing the game's data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// The resolved data directory.
pub fn data_dir() -> &'static Path {
    DATA_ROOT.as_path()
}

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the data directory.
fn detect_data_root() -> PathBuf {
    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|value| !value.is_empty()) {
        return PathBuf::from(dir);
    }

    let mut candidates = vec![PathBuf::from("trek_engine/data"), PathBuf::from("data")];

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("trek_engine/data"));
        candidates.push(dir.join("data"));

        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("trek_engine/data"));
            candidates.push(parent.join("data"));
        }
    }

    first_existing_dir(candidates).unwrap_or_else(|| PathBuf::from("trek_engine/data"))
}

fn first_existing_dir(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|candidate| candidate.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_directory_that_exists() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let present = dir.path().join("present");
        std::fs::create_dir(&present).unwrap();
        assert_eq!(first_existing_dir(vec![missing.clone(), present.clone()]), Some(present));
        assert_eq!(first_existing_dir(vec![missing]), None);
    }

    #[test]
    fn data_path_joins_onto_root() {
        assert_eq!(data_path("game.toml"), data_dir().join("game.toml"));
    }
}
