use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Search path used for tool lookup. `None` reads `PATH` at lookup time.
#[derive(Debug, Clone, Default)]
pub struct SearchPath(Option<OsString>);

impl SearchPath {
    pub fn from_env() -> Self {
        Self(None)
    }

    pub fn explicit(value: impl Into<OsString>) -> Self {
        Self(Some(value.into()))
    }

    fn value(&self) -> Option<OsString> {
        match &self.0 {
            Some(v) => Some(v.clone()),
            None => std::env::var_os("PATH"),
        }
    }

    /// First executable named `name` along the search path.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.contains(std::path::MAIN_SEPARATOR) {
            let p = PathBuf::from(name);
            return is_executable(&p).then_some(p);
        }
        let paths = self.value()?;
        std::env::split_paths(&paths)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.join(exe_name(name)))
            .find(|candidate| is_executable(candidate))
    }
}

#[cfg(windows)]
fn exe_name(name: &str) -> OsString {
    let mut n = OsString::from(name);
    if Path::new(name).extension().is_none() {
        n.push(".exe");
    }
    n
}

#[cfg(not(windows))]
fn exe_name(name: &str) -> &OsStr {
    OsStr::new(name)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match std::fs::metadata(path) {
        Ok(m) => m.is_file() && m.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Names from `tools` that do not resolve, in input order.
pub fn missing_tools(tools: &[String], search: &SearchPath) -> Vec<String> {
    tools
        .iter()
        .filter(|t| match search.resolve(t) {
            Some(found) => {
                tracing::debug!(tool = %t, path = %found.display(), "tool resolved");
                false
            }
            None => {
                tracing::debug!(tool = %t, "tool not found on search path");
                true
            }
        })
        .cloned()
        .collect()
}
