use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions recognized as annotatable source files.
pub const SOURCE_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

/// Recursive source-file enumerator with an extension allow-list.
///
/// Directories, files with other extensions, and unreadable entries are
/// silently skipped.
pub struct SourceWalker {
    root: PathBuf,
    extensions: Vec<String>,
}

impl SourceWalker {
    /// Creates a walker rooted at `root` with the default extension set
    /// ([`SOURCE_EXTENSIONS`]).
    pub fn new(root: PathBuf) -> SourceWalker {
        SourceWalker {
            root,
            extensions: SOURCE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replaces the extension allow-list.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> SourceWalker {
        self.extensions = extensions;
        self
    }

    /// Walks the tree and returns every matching file path, in traversal
    /// order.
    ///
    /// # Returns
    ///
    /// * A `Vec<PathBuf>` of regular files whose extension is on the
    ///   allow-list. A missing root yields an empty list.
    pub fn walk(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root).into_iter().filter_map(|e| e.ok()) {
            if entry.file_type().is_file() && self.should_process(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }

        files
    }

    fn should_process(&self, path: &Path) -> bool {
        match path.extension() {
            Some(ext) => {
                let ext = ext.to_string_lossy();
                self.extensions.iter().any(|e| e.as_str() == ext.as_ref())
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SourceWalker;
    use std::fs;

    #[test]
    fn finds_only_allowed_extensions() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let root = tmp.path();

        fs::write(root.join("App.tsx"), "export default function App() {}")
            .expect("failed to write App.tsx");
        fs::write(root.join("util.js"), "function helper() {}").expect("failed to write util.js");
        fs::write(root.join("styles.css"), "body {}").expect("failed to write styles.css");
        fs::write(root.join("README"), "notes").expect("failed to write README");

        let files = SourceWalker::new(root.to_path_buf()).walk();

        let mut names: Vec<String> = files
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
            .collect();
        names.sort();

        assert_eq!(names, vec!["App.tsx", "util.js"]);
    }

    #[test]
    fn recurses_into_subdirectories() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let nested = tmp.path().join("components").join("buttons");
        fs::create_dir_all(&nested).expect("failed to create nested dirs");
        fs::write(nested.join("Button.jsx"), "export const Button = () => {};")
            .expect("failed to write Button.jsx");

        let files = SourceWalker::new(tmp.path().to_path_buf()).walk();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("components/buttons/Button.jsx"));
    }

    #[test]
    fn missing_root_yields_no_files() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let gone = tmp.path().join("no-such-dir");

        let files = SourceWalker::new(gone).walk();

        assert!(files.is_empty());
    }

    #[test]
    fn extension_override_is_respected() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        fs::write(tmp.path().join("script.mjs"), "function f() {}")
            .expect("failed to write script.mjs");
        fs::write(tmp.path().join("script.js"), "function g() {}")
            .expect("failed to write script.js");

        let files = SourceWalker::new(tmp.path().to_path_buf())
            .with_extensions(vec![String::from("mjs")])
            .walk();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("script.mjs"));
    }
}
