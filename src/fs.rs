//! File system utilities.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Writes content to a file, creating it or truncating what is there.
///
/// Symlinks are followed, so the file they point to is updated. On Unix a
/// newly created file gets mode `0644`.
pub fn write_file(file_path: impl AsRef<Path>, content: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(file_path)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_file_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        write_file(&file_path, "Hello, World!").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "Hello, World!");
    }

    #[test]
    fn test_write_file_truncates_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        fs::write(&file_path, "Original content that is longer").unwrap();
        write_file(&file_path, "New content").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "New content");
    }

    #[test]
    fn test_write_file_leaves_siblings_alone() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        let sibling = temp_dir.path().join(".test.txt.tmp");
        fs::write(&sibling, "unrelated").unwrap();

        write_file(&file_path, "content").unwrap();

        assert_eq!(fs::read_to_string(&sibling).unwrap(), "unrelated");
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_write_file_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing").join("test.txt");

        assert!(write_file(&file_path, "content").is_err());
        assert!(!file_path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_file_follows_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real.txt");
        let link = temp_dir.path().join("link.txt");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_file(&link, "new").unwrap();

        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        write_file(&file_path, "content").unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode();
        // The process umask can only remove bits.
        assert_eq!(mode & 0o7133, 0);
        assert_eq!(mode & 0o600, 0o600);
    }
}
