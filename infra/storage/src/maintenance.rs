use crate::engine::TMP_MARKER;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::info;
use walkdir::{DirEntry, WalkDir};

const STALE_AFTER: Duration = Duration::from_secs(300);

pub(crate) fn purge_tmp(root: &Path) {
    let (removed, failed) = remove_stale(root, SystemTime::now(), STALE_AFTER);
    if removed > 0 || failed > 0 {
        info!(removed, failed, "Cleaned up temporary files");
    }
}

fn remove_stale(root: &Path, now: SystemTime, threshold: Duration) -> (usize, usize) {
    let mut removed = 0;
    let mut failed = 0;

    WalkDir::new(root)
        .into_iter()
        .flatten()
        .filter(|entry| is_tmp(entry) && is_stale(entry, now, threshold))
        .for_each(|entry| match std::fs::remove_file(entry.path()) {
            Ok(()) => removed += 1,
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), error = %e, "Stale temp removal failed");
                failed += 1;
            },
        });

    (removed, failed)
}

fn is_tmp(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry.file_name().to_str().is_some_and(|name| name.contains(TMP_MARKER))
}

fn is_stale(entry: &DirEntry, now: SystemTime, threshold: Duration) -> bool {
    entry
        .metadata()
        .ok()
        .and_then(|m| m.modified().ok())
        .and_then(|modified| now.duration_since(modified).ok())
        .map_or(true, |age| age > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn stale_temp_files_are_removed_and_data_is_kept() {
        let dir = tempdir().expect("tempdir");
        let tmp = dir.path().join(format!("student_data.txt{TMP_MARKER}1.1"));
        let data = dir.path().join("student_data.txt");
        fs::write(&tmp, b"half").expect("write tmp");
        fs::write(&data, b"full").expect("write data");

        let later = SystemTime::now() + Duration::from_secs(3600);
        let (removed, failed) = remove_stale(dir.path(), later, STALE_AFTER);

        assert_eq!((removed, failed), (1, 0));
        assert!(!tmp.exists());
        assert!(data.exists());
    }

    #[test]
    fn fresh_temp_files_survive() {
        let dir = tempdir().expect("tempdir");
        let tmp = dir.path().join(format!("student_picture.jpg{TMP_MARKER}1.7"));
        fs::write(&tmp, b"in flight").expect("write tmp");

        let soon = SystemTime::now() + Duration::from_secs(1);
        let (removed, _) = remove_stale(dir.path(), soon, STALE_AFTER);

        assert_eq!(removed, 0);
        assert!(tmp.exists());
    }
}
