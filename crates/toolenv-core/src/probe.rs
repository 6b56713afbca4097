//! Filesystem probes
//!
//! Synchronous existence and executability checks used while validating
//! toolchain directories and searching PATH.

use std::path::Path;

/// Result of probing a candidate executable path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Nothing exists at the path
    Missing,
    /// Something exists but is not an executable regular file
    NotExecutable,
    /// A regular file the current user may execute
    Executable,
}

/// Whether anything exists at `path` (following symlinks)
pub fn path_exists(path: &Path) -> bool {
    path.exists()
}

/// Probe a candidate executable
pub fn probe_executable(path: &Path) -> Probe {
    if !path.exists() {
        return Probe::Missing;
    }
    if path.is_file() && is_executable(path) {
        Probe::Executable
    } else {
        Probe::NotExecutable
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };

    // access(2) checks against the real uid, matching what exec will allow
    let result = unsafe { libc::access(c_path.as_ptr(), libc::X_OK) };
    result == 0
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
