use crate::error::{AppError, Result};
use std::path::Path;

/// Name of the account that owns `path`.
///
/// Falls back to the numeric uid when the user database has no entry for it.
#[cfg(unix)]
pub fn find_owner(path: &Path) -> Result<String> {
    use std::os::unix::fs::MetadataExt;

    let uid = std::fs::metadata(path)
        .map_err(|e| AppError::io(path, e))?
        .uid();
    match uzers::get_user_by_uid(uid) {
        Some(user) => Ok(user.name().to_string_lossy().into_owned()),
        None => {
            log::debug!("No user database entry for uid {} owning {:?}", uid, path);
            Ok(uid.to_string())
        }
    }
}

#[cfg(not(unix))]
pub fn find_owner(path: &Path) -> Result<String> {
    std::fs::metadata(path).map_err(|e| AppError::io(path, e))?;
    Ok("unknown".to_string())
}
