//! Virtual folder hierarchy for build-configuration files.

use cbexport_core::{relative_path, split_path};
use cbexport_graph::BuildSettings;

/// Name of the top-level virtual folder.
pub const ROOT_FOLDER: &str = "CMake Files";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TrieNode {
    label: String,
    children: Vec<TrieNode>,
    files: Vec<String>,
}

impl TrieNode {
    fn labeled(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..Self::default()
        }
    }

    fn insert(&mut self, segments: &[String], file_name: &str) {
        let Some((head, rest)) = segments.split_first() else {
            self.files.push(file_name.to_string());
            return;
        };

        let idx = match self.children.iter().position(|c| c.label == *head) {
            Some(idx) => idx,
            None => {
                self.children.push(TrieNode::labeled(head));
                self.children.len() - 1
            }
        };
        self.children[idx].insert(rest, file_name);
    }

    fn collect_folders(&self, prefix: &str, out: &mut Vec<String>) {
        for child in &self.children {
            let path = format!("{}{}", prefix, child.label);
            out.push(path.clone());
            child.collect_folders(&format!("{}\\", path), out);
        }
    }

    fn collect_files(&self, folder: &str, fs_prefix: &str, out: &mut Vec<FileEntry>) {
        for file in &self.files {
            out.push(FileEntry {
                path: format!("{}{}", fs_prefix, file),
                virtual_folder: format!("{}\\{}", ROOT_FOLDER, folder),
            });
        }
        for child in &self.children {
            child.collect_files(
                &format!("{}{}\\", folder, child.label),
                &format!("{}{}/", fs_prefix, child.label),
                out,
            );
        }
    }
}

/// A file placed in the virtual folder hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Filesystem path of the file.
    pub path: String,
    /// Backslash-separated folder, always ending in `\`.
    pub virtual_folder: String,
}

/// Groups relative file paths into a folder tree.
///
/// Siblings keep insertion order, so rendering the same insertions always
/// yields the same text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTrie {
    root: TrieNode,
}

impl PathTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `file_name` under the directory described by `segments`.
    ///
    /// Files with no segments attach to the root folder.
    pub fn insert_path<S: AsRef<str>>(&mut self, segments: &[S], file_name: &str) {
        let segments: Vec<String> = segments.iter().map(|s| s.as_ref().to_string()).collect();
        self.root.insert(&segments, file_name);
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty() && self.root.files.is_empty()
    }

    /// Every folder path below the root, depth-first (`a`, `a\b`, ...).
    pub fn folder_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.root.collect_folders("", &mut out);
        out
    }

    /// The `virtualFolders` declaration: the root folder followed by every
    /// folder path, each terminated by `;`.
    pub fn render_folder_declaration(&self) -> String {
        let mut decl = format!("{}\\;", ROOT_FOLDER);
        for path in self.folder_paths() {
            decl.push_str(ROOT_FOLDER);
            decl.push('\\');
            decl.push_str(&path);
            decl.push_str("\\;");
        }
        decl
    }

    /// One entry per file, in the same traversal order as the folders.
    pub fn render_file_entries(&self, base_path: &str) -> Vec<FileEntry> {
        let mut out = Vec::new();
        self.root.collect_files("", base_path, &mut out);
        out
    }

    /// Build the trie from the list files of a project.
    ///
    /// Files below the module root and files inside `CMakeFiles`
    /// directories are skipped. Paths are taken relative to the home
    /// directory; files directly in it are kept only when
    /// `include_root` is set.
    pub fn from_list_files<S: AsRef<str>>(
        list_files: &[S],
        settings: &BuildSettings,
        include_root: bool,
    ) -> Self {
        let mut trie = Self::new();
        for file in list_files {
            let file = file.as_ref();
            if let Some(root) = settings.module_root.as_deref()
                && !root.is_empty()
                && file.starts_with(root)
            {
                continue;
            }

            let relative = relative_path(&settings.home_directory, file);
            if relative.contains("CMakeFiles") {
                continue;
            }

            let mut segments = split_path(&relative);
            let Some(file_name) = segments.pop() else {
                continue;
            };
            if segments.is_empty() && !include_root {
                continue;
            }
            trie.insert_path(&segments, &file_name);
        }
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PathTrie {
        let mut trie = PathTrie::new();
        trie.insert_path(&["a", "b"], "f1");
        trie.insert_path(&["a", "b"], "f2");
        trie.insert_path(&["a", "c"], "f3");
        trie
    }

    #[test]
    fn test_shared_prefix_shares_nodes() {
        let trie = sample();
        assert_eq!(trie.root.children.len(), 1);
        let a = &trie.root.children[0];
        assert_eq!(a.label, "a");
        assert_eq!(a.children.len(), 2);
        assert_eq!(a.children[0].files, vec!["f1", "f2"]);
        assert_eq!(a.children[1].files, vec!["f3"]);
    }

    #[test]
    fn test_folder_paths_listed_once() {
        assert_eq!(sample().folder_paths(), vec!["a", "a\\b", "a\\c"]);
    }

    #[test]
    fn test_folder_declaration() {
        assert_eq!(
            sample().render_folder_declaration(),
            "CMake Files\\;CMake Files\\a\\;CMake Files\\a\\b\\;CMake Files\\a\\c\\;"
        );
        assert_eq!(PathTrie::new().render_folder_declaration(), "CMake Files\\;");
    }

    #[test]
    fn test_file_entries() {
        let entries = sample().render_file_entries("/src/");
        let pairs: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.path.as_str(), e.virtual_folder.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("/src/a/b/f1", "CMake Files\\a\\b\\"),
                ("/src/a/b/f2", "CMake Files\\a\\b\\"),
                ("/src/a/c/f3", "CMake Files\\a\\c\\"),
            ]
        );
    }

    #[test]
    fn test_root_level_file() {
        let mut trie = PathTrie::new();
        trie.insert_path::<&str>(&[], "CMakeLists.txt");
        assert!(trie.folder_paths().is_empty());
        assert_eq!(
            trie.render_file_entries("/src/"),
            vec![FileEntry {
                path: "/src/CMakeLists.txt".into(),
                virtual_folder: "CMake Files\\".into(),
            }]
        );
    }

    #[test]
    fn test_from_list_files_filters() {
        let mut settings = BuildSettings::new("/src", "/build");
        settings.module_root = Some("/usr/share/cmake".into());
        let files = [
            "/src/CMakeLists.txt",
            "/src/lib/CMakeLists.txt",
            "/src/lib/sub/CMakeLists.txt",
            "/usr/share/cmake/Modules/FindZLIB.cmake",
            "/src/build/CMakeFiles/3.28/CMakeSystem.cmake",
            "/opt/ext/config.cmake",
        ];

        let trie = PathTrie::from_list_files(&files, &settings, false);
        assert_eq!(trie.folder_paths(), vec!["lib", "lib\\sub", "..", "..\\opt", "..\\opt\\ext"]);

        let with_root = PathTrie::from_list_files(&files, &settings, true);
        let entries = with_root.render_file_entries("/src/");
        assert_eq!(entries[0].path, "/src/CMakeLists.txt");
        assert_eq!(entries[0].virtual_folder, "CMake Files\\");
    }
}
