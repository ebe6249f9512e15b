use std::fs;
use std::path::Path;

use crate::errors::ExtractError;

/// Write the category list as a pretty-printed JSON array of strings
/// (2-space indentation), creating or truncating the file. Returns the
/// number of items written.
pub fn write_categories_file(categories: &[String], path: &Path) -> Result<usize, ExtractError> {
    let write_err = |source: std::io::Error| ExtractError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let pretty = serde_json::to_vec_pretty(categories).map_err(|err| write_err(err.into()))?;
    fs::write(path, pretty).map_err(write_err)?;

    Ok(categories.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn round_trips_through_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("categories.json");
        let categories: Vec<String> = ["Art", "Biology", "History"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let written = write_categories_file(&categories, &path).unwrap();
        assert_eq!(written, 3);

        let parsed: Vec<String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, categories);
    }

    #[test]
    fn writes_an_empty_array_for_no_categories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("categories.json");
        assert_eq!(write_categories_file(&[], &path).unwrap(), 0);

        let parsed: Vec<String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn uses_two_space_indentation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("categories.json");
        write_categories_file(&["Fiction".to_string()], &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"Fiction\""));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out/categories.json");
        write_categories_file(&["History".to_string()], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn overwrites_an_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("categories.json");
        write_categories_file(&["Old".to_string(), "Stale".to_string()], &path).unwrap();
        write_categories_file(&["New".to_string()], &path).unwrap();

        let parsed: Vec<String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, vec!["New"]);
    }

    #[test]
    fn unwritable_paths_surface_as_output_errors() {
        let dir = tempdir().unwrap();
        // the target's parent is a file, so the write must fail
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let path = blocker.join("categories.json");

        let err = write_categories_file(&["History".to_string()], &path).unwrap_err();
        assert!(matches!(err, ExtractError::OutputWrite { .. }));
    }
}
