use crate::config::ScanConfig;
use crate::error::{AppError, Argument, Result};
use std::collections::HashSet;
use std::path::Path;

/// Digests of known illicit content, compared byte for byte.
#[derive(Debug, Clone, Default)]
pub struct Blocklist {
    digests: HashSet<Vec<u8>>,
}

impl Blocklist {
    /// Loads the list named on the command line, or the default one if present.
    ///
    /// An explicit path that is not a file is an `InvalidArgument`; a missing
    /// default only produces a warning and an empty list.
    pub fn resolve(config: &ScanConfig, work_dir: &Path) -> Result<Self> {
        let path = match &config.blocklist {
            Some(list) => {
                let path = work_dir.join(list);
                if !path.is_file() {
                    return Err(AppError::invalid_argument(Argument::List, list));
                }
                path
            }
            None => work_dir.join(&config.defaults.blocklist),
        };

        if !path.is_file() {
            log::warn!("No hash list found. Cannot check if content is illicit");
            return Ok(Self::default());
        }

        let blocklist = Self::load(&path)?;
        log::info!("Loaded {} digests from {:?}", blocklist.len(), path);
        log::debug!("Hash list: {:?}", blocklist.sorted());
        Ok(blocklist)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| AppError::io(path, e))?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Splits raw content into lines, tolerating `\r\n` endings.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let digests = bytes
            .split(|b| *b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(<[u8]>::to_vec)
            .collect();
        Self { digests }
    }

    pub fn contains(&self, digest: &str) -> bool {
        self.digests.contains(digest.as_bytes())
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    /// `Some(listed)` when there is anything to compare against.
    pub fn check(&self, digest: &str) -> Option<bool> {
        if self.is_empty() {
            None
        } else {
            Some(self.contains(digest))
        }
    }

    fn sorted(&self) -> Vec<String> {
        let mut entries: Vec<String> = self
            .digests
            .iter()
            .map(|d| String::from_utf8_lossy(d).into_owned())
            .collect();
        entries.sort();
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const DIGEST: &str = "d41d8cd98f00b204e9800998ecf8427e";

    #[test]
    fn parses_unix_and_windows_line_endings() {
        let list = Blocklist::from_bytes(b"aaa\r\nbbb\n\nccc");
        assert_eq!(list.len(), 3);
        assert!(list.contains("aaa"));
        assert!(list.contains("bbb"));
        assert!(list.contains("ccc"));
        assert!(!list.contains(""));
    }

    #[test]
    fn matching_is_exact() {
        let list = Blocklist::from_bytes(DIGEST.as_bytes());
        assert!(list.contains(DIGEST));
        assert!(!list.contains(&DIGEST.to_uppercase()));
        assert!(!list.contains(&format!(" {}", DIGEST)));
    }

    #[test]
    fn check_is_absent_for_empty_list() {
        assert_eq!(Blocklist::default().check(DIGEST), None);

        let list = Blocklist::from_bytes(DIGEST.as_bytes());
        assert_eq!(list.check(DIGEST), Some(true));
        assert_eq!(list.check("0123"), Some(false));
    }

    #[test]
    fn missing_default_list_is_empty() {
        let dir = tempdir().expect("failed to create temp dir");
        let list = Blocklist::resolve(&ScanConfig::default(), dir.path()).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn default_list_is_picked_up_from_work_dir() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("hash_list.txt"), format!("{}\n", DIGEST)).unwrap();

        let list = Blocklist::resolve(&ScanConfig::default(), dir.path()).unwrap();
        assert_eq!(list.len(), 1);
        assert!(list.contains(DIGEST));
    }

    #[test]
    fn explicit_list_must_be_a_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let config = ScanConfig {
            blocklist: Some(PathBuf::from("nope.txt")),
            ..ScanConfig::default()
        };

        let err = Blocklist::resolve(&config, dir.path()).unwrap_err();
        assert_eq!(err.exit_code(), 3);

        let config = ScanConfig {
            blocklist: Some(dir.path().to_path_buf()),
            ..ScanConfig::default()
        };
        let err = Blocklist::resolve(&config, dir.path()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
