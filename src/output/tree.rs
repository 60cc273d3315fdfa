// src/output/tree.rs

//! The optional project-structure header.
//!
//! A [`FileLister`] supplies the paths, [`render_tree`] draws them the way
//! `tree(1)` does, and [`build_tree_header`] wraps the drawing in a fenced block.
//! A header is always produced: when no listing is available it is the
//! [`TREE_UNAVAILABLE`] placeholder.

use crate::config::{TreeOptions, TreeSource};
use crate::constants::{FENCE, TREE_HEADER_TITLE, TREE_UNAVAILABLE};
use crate::core_types::CandidateFile;
use crate::errors::Result;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::Path;

/// Supplies the file paths drawn in the tree.
pub trait FileLister {
    /// Lists files below `root` as POSIX paths relative to it.
    ///
    /// # Errors
    /// Returns `Error::Listing` when no listing can be obtained.
    fn list(&self, root: &Path) -> Result<Vec<String>>;

    /// A one-line note written after the tree naming what it shows.
    fn note(&self) -> &'static str;
}

/// Lists the files tracked in the git index of the repository containing the root.
#[cfg(feature = "git")]
#[derive(Debug, Default, Clone, Copy)]
pub struct GitLister;

#[cfg(feature = "git")]
impl FileLister for GitLister {
    fn list(&self, root: &Path) -> Result<Vec<String>> {
        use crate::errors::Error;
        use git2::Repository;

        let listing_error = |e: git2::Error| Error::Listing(e.message().to_string());
        let repo = Repository::discover(root).map_err(listing_error)?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| Error::Listing("repository has no working directory".to_string()))?;
        let workdir = workdir
            .canonicalize()
            .map_err(|e| Error::Listing(format!("{}: {}", workdir.display(), e)))?;
        let root = root
            .canonicalize()
            .map_err(|e| Error::Listing(format!("{}: {}", root.display(), e)))?;
        let prefix = match root.strip_prefix(&workdir) {
            Ok(rel) if rel.as_os_str().is_empty() => String::new(),
            Ok(rel) => format!("{}/", crate::core_types::posix_path(rel)),
            Err(_) => return Err(Error::Listing("root is outside the repository".to_string())),
        };

        let index = repo.index().map_err(listing_error)?;
        let files: Vec<String> = index
            .iter()
            .filter_map(|entry| {
                let path = String::from_utf8_lossy(&entry.path).into_owned();
                path.strip_prefix(&prefix).map(str::to_string)
            })
            .collect();
        debug!("Git index lists {} files below '{}'", files.len(), prefix);
        Ok(files)
    }

    fn note(&self) -> &'static str {
        "Note: This structure includes only Git-tracked files."
    }
}

/// Lists the files selected for this run.
#[derive(Debug, Clone)]
pub struct SelectionLister {
    files: Vec<String>,
}

impl SelectionLister {
    pub fn new(selected: &[CandidateFile]) -> Self {
        Self {
            files: selected.iter().map(CandidateFile::display_path).collect(),
        }
    }
}

impl FileLister for SelectionLister {
    fn list(&self, _root: &Path) -> Result<Vec<String>> {
        Ok(self.files.clone())
    }

    fn note(&self) -> &'static str {
        "Note: This structure includes only the selected files."
    }
}

/// Picks the lister for `source`.
///
/// Without the `git` feature the selection is always used.
pub fn lister_for(source: TreeSource, selected: &[CandidateFile]) -> Box<dyn FileLister> {
    match source {
        #[cfg(feature = "git")]
        TreeSource::Git => Box::new(GitLister),
        #[cfg(not(feature = "git"))]
        TreeSource::Git => {
            debug!("Built without git support, drawing the tree from the selection");
            Box::new(SelectionLister::new(selected))
        }
        TreeSource::Selection => Box::new(SelectionLister::new(selected)),
    }
}

#[derive(Default)]
struct Node {
    children: BTreeMap<String, Node>,
}

impl Node {
    fn insert(&mut self, path: &str) {
        let mut node = self;
        for part in path.split('/').filter(|p| !p.is_empty()) {
            node = node.children.entry(part.to_string()).or_default();
        }
    }

    fn is_dir(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Default)]
struct Counts {
    dirs: usize,
    files: usize,
}

/// Draws `paths` as a tree rooted at `.`, followed by a summary line.
///
/// Entries more than `max_depth` levels below the root are left out and not counted.
///
/// # Examples
///
/// ```
/// use promptctx::output::tree::render_tree;
///
/// let paths = vec!["src/main.py".to_string(), "README.md".to_string()];
/// let expected = ".\n├── README.md\n└── src\n    └── main.py\n\n1 directory, 2 files\n";
/// assert_eq!(render_tree(&paths, None), expected);
/// ```
pub fn render_tree(paths: &[String], max_depth: Option<usize>) -> String {
    let mut root = Node::default();
    for path in paths {
        root.insert(path);
    }

    let mut out = String::from(".\n");
    let mut counts = Counts::default();
    draw(&root, "", 1, max_depth, &mut out, &mut counts);

    out.push('\n');
    out.push_str(&format!(
        "{} {}, {} {}\n",
        counts.dirs,
        if counts.dirs == 1 { "directory" } else { "directories" },
        counts.files,
        if counts.files == 1 { "file" } else { "files" },
    ));
    out
}

fn draw(
    node: &Node,
    prefix: &str,
    depth: usize,
    max_depth: Option<usize>,
    out: &mut String,
    counts: &mut Counts,
) {
    if max_depth.is_some_and(|max| depth > max) {
        return;
    }
    let last_index = node.children.len().saturating_sub(1);
    for (i, (name, child)) in node.children.iter().enumerate() {
        let is_last = i == last_index;
        out.push_str(prefix);
        out.push_str(if is_last { "└── " } else { "├── " });
        out.push_str(name);
        out.push('\n');

        if child.is_dir() {
            counts.dirs += 1;
            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            draw(child, &child_prefix, depth + 1, max_depth, out, counts);
        } else {
            counts.files += 1;
        }
    }
}

/// Builds the tree header for the scan `root`.
///
/// Never fails: a lister error or an empty listing yields the placeholder.
pub fn build_tree_header(options: &TreeOptions, root: &Path, lister: &dyn FileLister) -> String {
    let paths = match lister.list(root) {
        Ok(paths) if !paths.is_empty() => paths,
        Ok(_) => {
            warn!("Failed to generate tree structure: listing is empty");
            return TREE_UNAVAILABLE.to_string();
        }
        Err(e) => {
            warn!("Failed to generate tree structure: {}", e);
            return TREE_UNAVAILABLE.to_string();
        }
    };

    let tree = render_tree(&paths, options.max_depth);
    format!(
        "{}\n{}\n{}{}\n\n{}\n\n",
        TREE_HEADER_TITLE,
        FENCE,
        tree,
        FENCE,
        lister.note()
    )
}
