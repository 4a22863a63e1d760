//! Vocabulary archives turned into a selectable tree of word-list files.

use std::collections::HashMap;
use std::io::{Cursor, Read};

use include_dir::{include_dir, Dir};
use itertools::Itertools;
use tracing::{debug, warn};
use zip::ZipArchive;

use super::{decode_words, WordItem};
use crate::error::{Error, Result};
use crate::selection::SelectionTree;

static SAMPLE_DIR: Dir = include_dir!("src/vocab/sample");

/// Directory name that roots the bundled sample library.
pub const BUNDLED_LIBRARY_DIR: &str = "vocabularyLib";

/// A tree of word-list files plus their raw bytes.
pub trait VocabularySource {
    fn tree(&self) -> &SelectionTree;
    /// `Ok(None)` for ids that are not files; an error when the file's bytes
    /// could not be read out of the archive.
    fn contents(&self, leaf: &str) -> Result<Option<&[u8]>>;
}

#[derive(Debug, Clone)]
enum FileContents {
    Bytes(Vec<u8>),
    Unreadable(String),
}

#[derive(Debug, Clone)]
struct ArchiveEntry {
    path: String,
    is_dir: bool,
    contents: FileContents,
}

#[derive(Debug, Clone)]
pub struct VocabularyLibrary {
    tree: SelectionTree,
    files: HashMap<String, FileContents>,
}

impl VocabularyLibrary {
    /// Parses an in-memory ZIP archive and roots the tree at the first
    /// directory named `library_dir`.
    pub fn from_zip_bytes(bytes: &[u8], library_dir: &str) -> Result<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let mut entries = Vec::with_capacity(archive.len());

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let path = file.name().trim_end_matches('/').to_string();
            let is_dir = file.is_dir();
            let mut bytes = Vec::new();
            let contents = match file.read_to_end(&mut bytes) {
                Ok(_) => FileContents::Bytes(bytes),
                Err(err) => {
                    warn!(path = %path, error = %err, "unreadable archive entry");
                    FileContents::Unreadable(err.to_string())
                }
            };
            entries.push(ArchiveEntry {
                path,
                is_dir,
                contents,
            });
        }

        Self::from_entries(entries, library_dir)
    }

    /// The small library compiled into the binary.
    pub fn bundled() -> Result<Self> {
        let mut entries = Vec::new();
        collect_dir(&SAMPLE_DIR, &mut entries);
        Self::from_entries(entries, BUNDLED_LIBRARY_DIR)
    }

    fn from_entries(entries: Vec<ArchiveEntry>, library_dir: &str) -> Result<Self> {
        let root = find_library_root(&entries, library_dir)
            .ok_or_else(|| Error::LibraryNotFound(library_dir.to_string()))?;
        let prefix = format!("{root}/");

        let mut tree = SelectionTree::new();
        let mut files = HashMap::new();
        tree.add_group(&root, library_dir, None)?;

        for entry in entries {
            let Some(rest) = entry.path.strip_prefix(&prefix) else {
                continue;
            };
            match place_entry(&mut tree, &root, rest, entry.is_dir) {
                Ok(Some(leaf)) => {
                    files.insert(leaf, entry.contents);
                }
                Ok(None) => {}
                Err(err) => warn!(path = %entry.path, error = %err, "skipping archive entry"),
            }
        }

        tree.sort_groups_first();
        debug!(nodes = tree.len(), files = files.len(), "vocabulary library built");
        Ok(Self { tree, files })
    }
}

impl VocabularySource for VocabularyLibrary {
    fn tree(&self) -> &SelectionTree {
        &self.tree
    }

    fn contents(&self, leaf: &str) -> Result<Option<&[u8]>> {
        match self.files.get(leaf) {
            None => Ok(None),
            Some(FileContents::Bytes(bytes)) => Ok(Some(bytes.as_slice())),
            Some(FileContents::Unreadable(reason)) => Err(Error::Unreadable {
                leaf: leaf.to_string(),
                reason: reason.clone(),
            }),
        }
    }
}

// Adds the groups and leaf for one path below the root and returns the leaf
// id for files. A path that needs a file where a directory already is (or
// the reverse) is a conflict and adds nothing.
fn place_entry(tree: &mut SelectionTree, root: &str, rest: &str, is_dir: bool) -> Result<Option<String>> {
    let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
    let mut parent = root.to_string();

    for (i, segment) in segments.iter().enumerate() {
        let id = format!("{parent}/{segment}");
        let wants_leaf = i + 1 == segments.len() && !is_dir;
        match tree.node(&id).map(|node| node.is_group()) {
            None if wants_leaf => tree.add_leaf(&id, segment, Some(&parent))?,
            None => tree.add_group(&id, segment, Some(&parent))?,
            Some(true) if wants_leaf => return Err(Error::NotALeaf(id)),
            Some(false) if !wants_leaf => return Err(Error::NotAGroup(id)),
            Some(_) => {}
        }
        parent = id;
    }

    Ok((!is_dir && !segments.is_empty()).then_some(parent))
}

// Shallowest match wins, then the lexically smallest path.
fn find_library_root(entries: &[ArchiveEntry], library_dir: &str) -> Option<String> {
    entries
        .iter()
        .filter_map(|entry| {
            let segments: Vec<&str> = entry.path.split('/').collect();
            segments.iter().enumerate().find_map(|(i, segment)| {
                let names_dir = i + 1 < segments.len() || entry.is_dir;
                (*segment == library_dir && names_dir).then(|| segments[..=i].join("/"))
            })
        })
        .min_by(|a, b| {
            let depth = |p: &str| p.matches('/').count();
            depth(a.as_str())
                .cmp(&depth(b.as_str()))
                .then_with(|| a.cmp(b))
        })
}

fn collect_dir(dir: &Dir<'_>, entries: &mut Vec<ArchiveEntry>) {
    for sub in dir.dirs() {
        entries.push(ArchiveEntry {
            path: slash_path(sub.path()),
            is_dir: true,
            contents: FileContents::Bytes(Vec::new()),
        });
        collect_dir(sub, entries);
    }
    for file in dir.files() {
        entries.push(ArchiveEntry {
            path: slash_path(file.path()),
            is_dir: false,
            contents: FileContents::Bytes(file.contents().to_vec()),
        });
    }
}

fn slash_path(path: &std::path::Path) -> String {
    path.iter().map(|c| c.to_string_lossy()).join("/")
}

/// Label shown for a tree node: word-list files lose their `.json` suffix.
pub fn display_name(label: &str) -> &str {
    let cut = label.len().saturating_sub(".json".len());
    match label.get(cut..) {
        Some(ext) if ext.eq_ignore_ascii_case(".json") => &label[..cut],
        _ => label,
    }
}

/// What to do when a selected file cannot be read or does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnDecodeError {
    #[default]
    Skip,
    Abort,
}

/// Reads every selected file and concatenates its words. Words repeated
/// across files are kept, so they come up proportionally more often.
pub fn resolve_targets<V, S>(source: &V, selected: &[S], on_error: OnDecodeError) -> Result<Vec<WordItem>>
where
    V: VocabularySource + ?Sized,
    S: AsRef<str>,
{
    let mut words = Vec::new();
    for leaf in selected {
        let leaf = leaf.as_ref();
        let decoded = match source.contents(leaf) {
            Ok(Some(bytes)) => decode_words(leaf, bytes),
            Ok(None) => {
                warn!(leaf, "selected file has no contents");
                continue;
            }
            Err(err) => Err(err),
        };
        match decoded {
            Ok(decoded) => words.extend(decoded),
            Err(err) if on_error == OnDecodeError::Skip => {
                warn!(error = %err, "skipping word list");
            }
            Err(err) => return Err(err),
        }
    }
    Ok(words)
}
