//! File-backed session storage adapter.
//!
//! Each key becomes one file inside a capability-scoped directory. Writes
//! go through a temporary file and rename so the target file is never
//! partially written; a crash mid-write leaves the previous value intact,
//! which the store's restore path then reads normally.

use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};

use crate::domain::ports::{SessionStorage, SessionStorageError};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Durable session storage keeping one file per key.
#[derive(Debug)]
pub struct FileSessionStorage {
    dir: Dir,
}

impl FileSessionStorage {
    /// Open (creating if needed) the profile directory holding session
    /// files.
    ///
    /// # Errors
    ///
    /// Returns the I/O failure when the directory cannot be created or
    /// opened.
    pub fn open(root: impl AsRef<Path>) -> io::Result<Self> {
        std::fs::create_dir_all(root.as_ref())?;
        let dir = Dir::open_ambient_dir(root.as_ref(), ambient_authority())?;
        Ok(Self { dir })
    }

    /// Keys map directly to file names, so reject anything that would
    /// escape the directory.
    fn checked_key(key: &str) -> Result<&str, SessionStorageError> {
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(SessionStorageError::write(
                key,
                "session key must be a bare file name",
            ));
        }
        Ok(key)
    }

    fn write_atomic(&self, file_name: &str, contents: &str) -> io::Result<()> {
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos());
        let tmp_name = format!(".{file_name}.tmp.{}.{stamp}.{counter}", std::process::id());

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        let mut file = self.dir.open_with(&tmp_name, &options)?;

        let written = file
            .write_all(contents.as_bytes())
            .and_then(|()| file.sync_all());
        drop(file);
        if let Err(err) = written {
            drop(self.dir.remove_file(&tmp_name));
            return Err(err);
        }

        if let Err(err) = self.dir.rename(&tmp_name, &self.dir, file_name) {
            drop(self.dir.remove_file(&tmp_name));
            return Err(err);
        }
        Ok(())
    }
}

impl SessionStorage for FileSessionStorage {
    fn read(&self, key: &str) -> Result<Option<String>, SessionStorageError> {
        match self.dir.read_to_string(key) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SessionStorageError::read(key, err.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionStorageError> {
        let file_name = Self::checked_key(key)?;
        self.write_atomic(file_name, value)
            .map_err(|err| SessionStorageError::write(key, err.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), SessionStorageError> {
        match self.dir.remove_file(key) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionStorageError::remove(key, err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use crate::domain::ports::{PROFILE_KEY, TOKEN_KEY};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn root() -> TempDir {
        TempDir::new().expect("create temp dir")
    }

    #[rstest]
    fn values_survive_reopening_the_directory(root: TempDir) {
        {
            let storage = FileSessionStorage::open(root.path()).expect("open storage");
            storage.write(TOKEN_KEY, "abc").expect("write token");
            storage
                .write(PROFILE_KEY, r#"{"name":"U","email":"u@example.com"}"#)
                .expect("write profile");
        }

        let reopened = FileSessionStorage::open(root.path()).expect("reopen storage");
        assert_eq!(
            reopened.read(TOKEN_KEY).expect("read token"),
            Some("abc".to_owned())
        );
    }

    #[rstest]
    fn write_replaces_previous_value(root: TempDir) {
        let storage = FileSessionStorage::open(root.path()).expect("open storage");
        storage.write(TOKEN_KEY, "first").expect("first write");
        storage.write(TOKEN_KEY, "second").expect("second write");
        assert_eq!(
            storage.read(TOKEN_KEY).expect("read token"),
            Some("second".to_owned())
        );
    }

    #[rstest]
    fn absent_keys_read_as_none_and_remove_cleanly(root: TempDir) {
        let storage = FileSessionStorage::open(root.path()).expect("open storage");
        assert_eq!(storage.read(TOKEN_KEY).expect("read"), None);
        storage.remove(TOKEN_KEY).expect("remove absent key");
    }

    #[rstest]
    fn no_temp_files_remain_after_writes(root: TempDir) {
        let storage = FileSessionStorage::open(root.path()).expect("open storage");
        storage.write(TOKEN_KEY, "abc").expect("write token");

        let leftovers: Vec<String> = std::fs::read_dir(root.path())
            .expect("list dir")
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.contains(".tmp."))
            .collect();
        assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
    }

    #[rstest]
    #[case("")]
    #[case("../escape")]
    #[case("nested/key")]
    fn keys_with_path_components_are_rejected(root: TempDir, #[case] key: &str) {
        let storage = FileSessionStorage::open(root.path()).expect("open storage");
        assert!(storage.write(key, "v").is_err());
    }
}
