//! Context types for rule execution.

use std::path::{Path, PathBuf};

use crate::paths::normalize_separators;

/// Context provided to import rules for the file being checked.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root, used for reporting.
    pub relative_path: PathBuf,
    /// Absolute path with `/` separators, used for layer and glob matching.
    pub normalized_path: String,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);
        let normalized_path = normalize_separators(&path.to_string_lossy());

        Self {
            path,
            content,
            relative_path,
            normalized_path,
        }
    }

    /// Context for a file checked outside of any project root.
    #[must_use]
    pub fn standalone(path: &'a Path, content: &'a str) -> Self {
        Self {
            path,
            content,
            relative_path: path.to_path_buf(),
            normalized_path: normalize_separators(&path.to_string_lossy()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_is_stripped_from_root() {
        let ctx = FileContext::new(
            Path::new("/work/app/src/entities/User/index.ts"),
            "",
            Path::new("/work/app"),
        );
        assert_eq!(ctx.relative_path, PathBuf::from("src/entities/User/index.ts"));
        assert_eq!(ctx.normalized_path, "/work/app/src/entities/User/index.ts");
    }

    #[test]
    fn path_outside_root_is_kept() {
        let ctx = FileContext::new(Path::new("/tmp/a.ts"), "", Path::new("/work/app"));
        assert_eq!(ctx.relative_path, PathBuf::from("/tmp/a.ts"));
    }

    #[test]
    fn windows_separators_are_normalized() {
        let ctx = FileContext::standalone(Path::new(r"C:\app\src\pages\Main\ui\Main.tsx"), "");
        assert_eq!(ctx.normalized_path, "C:/app/src/pages/Main/ui/Main.tsx");
    }
}
