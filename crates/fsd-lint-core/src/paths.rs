//! Path algebra for module specifiers and source file paths.
//!
//! Everything here works on `/`-separated strings rather than [`std::path::Path`]
//! because import specifiers are not file system paths, and file paths coming
//! from Windows hosts are normalized to forward slashes first.

/// Default name of the folder that holds the layered sources.
pub const DEFAULT_SOURCE_ROOT: &str = "src";

/// Returns true if `path` is a relative module specifier.
///
/// Relative specifiers are exactly `.` or `..`, or start with `./` or `../`.
///
/// ```
/// use fsd_lint_core::paths::is_relative;
///
/// assert!(is_relative("./model"));
/// assert!(is_relative("../Article"));
/// assert!(!is_relative("entities/Article"));
/// assert!(!is_relative(".hidden/file"));
/// ```
#[must_use]
pub fn is_relative(path: &str) -> bool {
    path == "." || path == ".." || path.starts_with("./") || path.starts_with("../")
}

/// Removes a bundler alias from the front of a module specifier.
///
/// The alias is stripped only as a literal `"{alias}/"` prefix, at most once.
/// An empty alias leaves the specifier untouched.
#[must_use]
pub fn strip_alias<'a>(specifier: &'a str, alias: Option<&str>) -> &'a str {
    match alias {
        Some(alias) if !alias.is_empty() => specifier
            .strip_prefix(alias)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(specifier),
        _ => specifier,
    }
}

/// Converts backslash separators to forward slashes.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Splits a path into its non-empty `/`-separated segments.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// A path split into `layer / slice / rest...`.
///
/// Built either from an import specifier ([`LogicalLocation::parse`]) or from
/// the absolute path of the importing file ([`locate`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLocation {
    segments: Vec<String>,
}

impl LogicalLocation {
    /// Splits a project-relative path into segments.
    ///
    /// Empty segments are dropped, so `entities//Article/` and
    /// `entities/Article` produce the same location. A plain `split('/')`
    /// would count the trailing empty segment and treat `entities/Article/`
    /// as a deep import; here it is the slice entry point.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self {
            segments: segments(path).map(String::from).collect(),
        }
    }

    /// First segment (e.g. `entities`).
    #[must_use]
    pub fn layer(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Second segment (e.g. `Article`).
    #[must_use]
    pub fn slice(&self) -> Option<&str> {
        self.segments.get(1).map(String::as_str)
    }

    /// Segments below the slice.
    #[must_use]
    pub fn rest(&self) -> &[String] {
        self.segments.get(2..).unwrap_or_default()
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path had no segments at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Absolute form of the parent directory (`/entities/Article/ui` for
    /// `entities/Article/ui/Card.tsx`).
    #[must_use]
    pub fn parent_dir(&self) -> String {
        let parent = self
            .segments
            .split_last()
            .map_or(&[][..], |(_, parent)| parent);
        format!("/{}", parent.join("/"))
    }

    /// Absolute form of the whole location (`/entities/Article/model`).
    #[must_use]
    pub fn to_absolute(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Locates a source file inside the layered project.
///
/// Separators are normalized, then the first segment equal to `source_root`
/// is searched for. Everything after it becomes the [`LogicalLocation`].
/// Returns `None` when the marker is absent, in which case no layer-based
/// decision can be made for the file.
///
/// ```
/// use fsd_lint_core::paths::locate;
///
/// let loc = locate(r"C:\work\app\src\entities\Article\ui\Card.tsx", "src").unwrap();
/// assert_eq!(loc.layer(), Some("entities"));
/// assert_eq!(loc.slice(), Some("Article"));
/// assert!(locate("/work/app/lib/index.ts", "src").is_none());
/// ```
#[must_use]
pub fn locate(absolute_path: &str, source_root: &str) -> Option<LogicalLocation> {
    let normalized = normalize_separators(absolute_path);
    let mut parts = segments(&normalized);
    parts.by_ref().find(|s| *s == source_root)?;
    Some(LogicalLocation {
        segments: parts.map(String::from).collect(),
    })
}

/// Resolves `.` and `..` segments of an absolute `/`-path.
fn resolve(path: &str) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for seg in segments(path) {
        match seg {
            "." => {}
            ".." => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Computes the relative path from directory `from` to `to`.
///
/// Both arguments are absolute `/`-paths. Returns an empty string when they
/// resolve to the same directory.
///
/// ```
/// use fsd_lint_core::paths::relative_path;
///
/// assert_eq!(relative_path("/entities/Article/ui", "/entities/Article/model"), "../model");
/// assert_eq!(relative_path("/entities/Article", "/entities/Article/model"), "model");
/// ```
#[must_use]
pub fn relative_path(from: &str, to: &str) -> String {
    let from = resolve(from);
    let to = resolve(to);

    let common = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let ups = std::iter::repeat("..").take(from.len() - common);
    let downs = to[common..].iter().copied();
    ups.chain(downs).collect::<Vec<_>>().join("/")
}

/// Joins a relative specifier onto an absolute directory and resolves it.
#[must_use]
pub fn join_resolved(dir: &str, specifier: &str) -> String {
    format!("/{}", resolve(&format!("{dir}/{specifier}")).join("/"))
}
