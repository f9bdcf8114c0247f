//! Locating and vetting the `vmrun` executable.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Name of the VMware command-line tool the local server drives.
pub const VMRUN_NAME: &str = "vmrun";

/// Reasons a candidate `vmrun` path is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmrunPathError {
    /// Nothing exists at the given path.
    #[error("\"{path}\" does not exist")]
    PathNotFound { path: String },
    /// The path exists but the current user may not execute it.
    #[error("{name} is not an executable")]
    NotExecutable { name: String },
}

/// Check that `path` exists and the current user may execute it.
pub fn check_vmrun_path(path: &Path) -> Result<(), VmrunPathError> {
    if path.as_os_str().is_empty() || !path.exists() {
        return Err(VmrunPathError::PathNotFound {
            path: path.display().to_string(),
        });
    }
    if !is_executable(path) {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        return Err(VmrunPathError::NotExecutable { name });
    }
    Ok(())
}

#[cfg(not(target_os = "windows"))]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = std::ffi::CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `c_path` is a valid NUL-terminated string that outlives the call.
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

#[cfg(target_os = "windows")]
fn is_executable(path: &Path) -> bool {
    path.exists()
}

/// Search the process `PATH` for an executable called `name`.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    let search_path = std::env::var_os("PATH")?;
    find_in_dirs(std::env::split_paths(&search_path), name)
}

fn find_in_dirs(dirs: impl IntoIterator<Item = PathBuf>, name: &str) -> Option<PathBuf> {
    dirs.into_iter()
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidate_names(name).into_iter().map(move |file| dir.join(file)))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

#[cfg(target_os = "windows")]
fn candidate_names(name: &str) -> Vec<OsString> {
    let extensions = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".into());
    let mut names = Vec::new();
    if Path::new(name).extension().is_some() {
        names.push(OsString::from(name));
    }
    names.extend(
        extensions
            .split(';')
            .filter(|ext| !ext.is_empty())
            .map(|ext| OsString::from(format!("{name}{}", ext.to_ascii_lowercase()))),
    );
    names
}

#[cfg(not(target_os = "windows"))]
fn candidate_names(name: &str) -> Vec<OsString> {
    vec![OsString::from(name)]
}

/// Lexically clean up a path: drop `.` segments, collapse repeated
/// separators, fold `..` into the preceding directory and render with the
/// platform separator.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() && !path.as_os_str().is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
