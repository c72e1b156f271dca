//! Path utilities.
//!
//! Scanned paths arrive from different operating systems and mount styles. All
//! of them are reduced to one forward-slash form here so equal logical paths
//! compare equal, and so the parser can look at the folders between a library
//! root and a file without touching the disk.

use std::fmt;

/// A path with forward slashes, no repeated separators and a lower-case drive
/// letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath(String);

impl NormalizedPath {
    /// The normalised path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// The last path component (the bare file name).
    ///
    /// # Examples
    ///
    /// ```
    /// use tankobon_common::paths::normalize_path;
    ///
    /// assert_eq!(normalize_path("/manga/Naruto/Naruto v01.cbz").file_name(), "Naruto v01.cbz");
    /// assert_eq!(normalize_path("Naruto v01.cbz").file_name(), "Naruto v01.cbz");
    /// ```
    pub fn file_name(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// Everything before the last component, if there is anything.
    pub fn parent(&self) -> Option<&str> {
        let idx = self.0.rfind('/')?;
        if idx == 0 {
            return Some("/");
        }
        Some(&self.0[..idx])
    }

    /// Folder names between `root` and the file, nearest folder first.
    ///
    /// Without a root, or when the path does not live under `root`, only the
    /// immediate parent folder is returned. A file sitting directly in the root
    /// has no folders.
    ///
    /// # Examples
    ///
    /// ```
    /// use tankobon_common::paths::normalize_path;
    ///
    /// let path = normalize_path("/manga/Naruto/Vol 01/c001.cbz");
    /// assert_eq!(path.folders_till_root(Some("/manga")), vec!["Vol 01", "Naruto"]);
    /// assert_eq!(path.folders_till_root(None), vec!["Vol 01"]);
    /// ```
    pub fn folders_till_root(&self, root: Option<&str>) -> Vec<String> {
        let Some(parent) = self.parent() else {
            return Vec::new();
        };

        if let Some(root) = root {
            let root = normalize_path(root);
            if let Some(rest) = strip_root(parent, root.as_str()) {
                return rest
                    .split('/')
                    .filter(|segment| !segment.is_empty())
                    .rev()
                    .map(str::to_string)
                    .collect();
            }
            tracing::trace!(path = %self, root = %root, "path is outside the library root");
        }

        match parent.rsplit('/').next() {
            Some(folder) if !folder.is_empty() && !is_drive(folder) => vec![folder.to_string()],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalise a path to forward slashes.
///
/// Backslashes become `/`, runs of separators collapse to one (a leading `//`
/// UNC prefix is kept), a drive letter is lower-cased and a trailing separator
/// is dropped.
///
/// # Examples
///
/// ```
/// use tankobon_common::paths::normalize_path;
///
/// assert_eq!(normalize_path(r"C:\Books\\Dune.epub").as_str(), "c:/Books/Dune.epub");
/// assert_eq!(normalize_path("/data//manga/").as_str(), "/data/manga");
/// assert_eq!(normalize_path(r"\\nas\share\a.cbz").as_str(), "//nas/share/a.cbz");
/// ```
pub fn normalize_path(path: &str) -> NormalizedPath {
    let replaced = path.trim().replace('\\', "/");
    let (prefix, body) = match replaced.strip_prefix("//") {
        Some(rest) => ("//", rest),
        None => ("", replaced.as_str()),
    };

    let mut out = String::with_capacity(replaced.len());
    out.push_str(prefix);
    let mut last_was_slash = !prefix.is_empty();
    for ch in body.chars() {
        if ch == '/' {
            if last_was_slash {
                continue;
            }
            last_was_slash = true;
        } else {
            last_was_slash = false;
        }
        out.push(ch);
    }

    if out.len() > 1 && out.ends_with('/') && !out.ends_with(":/") && out != "//" {
        out.pop();
    }

    let mut chars = out.chars();
    if let (Some(drive), Some(':')) = (chars.next(), chars.next()) {
        if drive.is_ascii_alphabetic() {
            out.replace_range(0..1, &drive.to_ascii_lowercase().to_string());
        }
    }

    NormalizedPath(out)
}

fn strip_root<'a>(parent: &'a str, root: &str) -> Option<&'a str> {
    let rest = parent.strip_prefix(root)?;
    if rest.is_empty() || rest.starts_with('/') || root.ends_with('/') {
        Some(rest)
    } else {
        None
    }
}

fn is_drive(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
