use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path without touching the filesystem.
///
/// Drops `.` components, folds `name/..` pairs and trailing separators.
/// An empty result becomes `.`, and `..` directly under the root is dropped.
///
/// # Examples
///
/// - `"./"` becomes `"."`
/// - `"src/../lib/"` becomes `"lib"`
/// - `"../x"` stays `"../x"`
#[must_use]
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}

/// The last component of a cleaned path, as shown in tree headings.
///
/// `.` resolves to the name of the working directory when it can be
/// determined.
#[must_use]
pub fn base_name(path: &Path) -> String {
    let cleaned = clean_path(path);
    if let Some(name) = cleaned.file_name() {
        return name.to_string_lossy().into_owned();
    }

    dunce::canonicalize(&cleaned)
        .ok()
        .and_then(|abs| abs.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| cleaned.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_current_dir_forms() {
        assert_eq!(clean_path(Path::new("./")), PathBuf::from("."));
        assert_eq!(clean_path(Path::new("")), PathBuf::from("."));
        assert_eq!(clean_path(Path::new("././")), PathBuf::from("."));
    }

    #[test]
    fn clean_trailing_separator() {
        assert_eq!(clean_path(Path::new("testdata/")), PathBuf::from("testdata"));
    }

    #[test]
    fn clean_folds_parent_components() {
        assert_eq!(clean_path(Path::new("src/../lib/")), PathBuf::from("lib"));
        assert_eq!(clean_path(Path::new("a/b/../../c")), PathBuf::from("c"));
    }

    #[test]
    fn clean_keeps_leading_parent() {
        assert_eq!(clean_path(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(clean_path(Path::new("../../x")), PathBuf::from("../../x"));
    }

    #[test]
    fn clean_drops_parent_of_root() {
        assert_eq!(clean_path(Path::new("/..")), PathBuf::from("/"));
    }

    #[test]
    fn base_name_of_nested_path() {
        assert_eq!(base_name(Path::new("a/b/tree/")), "tree");
    }
}
