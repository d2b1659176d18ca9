//! Folder tree of a document repository, built from `.metadata` entries.

use log::warn;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::models::metadata::DocumentMetadata;

/// A folder or document in the repository tree. The root has an empty uuid
/// and no metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoNode {
    pub uuid: String,
    pub metadata: Option<DocumentMetadata>,
    /// Sorted by visible name.
    pub children: Vec<RepoNode>,
}

impl RepoNode {
    fn root() -> Self {
        Self {
            uuid: String::new(),
            metadata: None,
            children: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.metadata.is_none()
    }

    pub fn visible_name(&self) -> &str {
        self.metadata
            .as_ref()
            .map(|m| m.visible_name.as_str())
            .unwrap_or("")
    }
}

/// Builds the tree from `(uuid, metadata)` pairs.
///
/// Entries in the trash are dropped. Entries whose parent chain never
/// reaches the root are dropped with a warning.
pub fn build_tree(entries: Vec<(String, DocumentMetadata)>) -> RepoNode {
    let mut by_parent: HashMap<String, Vec<(String, DocumentMetadata)>> = HashMap::new();
    let mut total = 0;
    for (uuid, metadata) in entries {
        if metadata.is_trashed() {
            continue;
        }
        total += 1;
        by_parent
            .entry(metadata.parent.clone())
            .or_default()
            .push((uuid, metadata));
    }

    let mut root = RepoNode::root();
    let mut placed = HashSet::new();
    attach_children(&mut root, &mut by_parent, &mut placed);

    if placed.len() < total {
        let orphans: Vec<&str> = by_parent
            .values()
            .flatten()
            .map(|(uuid, _)| uuid.as_str())
            .collect();
        warn!(
            "Dropping {} entries not reachable from the repository root: {:?}",
            total - placed.len(),
            orphans
        );
    }
    root
}

fn attach_children(
    node: &mut RepoNode,
    by_parent: &mut HashMap<String, Vec<(String, DocumentMetadata)>>,
    placed: &mut HashSet<String>,
) {
    let Some(children) = by_parent.remove(&node.uuid) else {
        return;
    };
    for (uuid, metadata) in children {
        if !placed.insert(uuid.clone()) {
            continue;
        }
        let mut child = RepoNode {
            uuid,
            metadata: Some(metadata),
            children: Vec::new(),
        };
        attach_children(&mut child, by_parent, placed);
        node.children.push(child);
    }
    node.children
        .sort_by(|a, b| a.visible_name().cmp(b.visible_name()));
}

/// One line per entry: indentation (two spaces per depth), uuid, the raw
/// last-modified milliseconds and the visible name.
pub fn render_listing(root: &RepoNode) -> String {
    let mut out = String::new();
    write_listing(&mut out, root, 0);
    out
}

fn write_listing(out: &mut String, node: &RepoNode, depth: usize) {
    if let Some(metadata) = &node.metadata {
        out.push_str(&format!(
            "{} {} {} {}\n",
            "  ".repeat(depth),
            node.uuid,
            metadata.last_modified,
            metadata.visible_name
        ));
    }
    for child in &node.children {
        write_listing(out, child, depth + 1);
    }
}

/// A document that should be rendered to `output`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionJob {
    pub uuid: String,
    pub output: PathBuf,
    /// Milliseconds since the Unix epoch.
    pub last_modified: u64,
}

/// Lists every document with its output path: folders become directories
/// under `outdir`, documents become `<name>.pdf`, spaces replaced by `_`.
pub fn plan_conversions(root: &RepoNode, outdir: &Path) -> Vec<ConversionJob> {
    let mut jobs = Vec::new();
    collect_jobs(root, outdir, &mut jobs);
    jobs
}

fn collect_jobs(node: &RepoNode, dir: &Path, jobs: &mut Vec<ConversionJob>) {
    let mut dir = dir.to_path_buf();
    if let Some(metadata) = &node.metadata {
        let name = metadata.visible_name.replace(' ', "_");
        if metadata.is_folder() {
            dir.push(name);
        } else {
            jobs.push(ConversionJob {
                uuid: node.uuid.clone(),
                output: dir.join(format!("{}.pdf", name)),
                last_modified: metadata.last_modified,
            });
        }
    }
    for child in &node.children {
        collect_jobs(child, &dir, jobs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::metadata::EntryType;

    fn meta(name: &str, parent: &str, entry_type: EntryType, ts: u64) -> DocumentMetadata {
        DocumentMetadata {
            visible_name: name.to_string(),
            parent: parent.to_string(),
            entry_type,
            last_modified: ts,
            deleted: false,
            pinned: false,
        }
    }

    fn sample_entries() -> Vec<(String, DocumentMetadata)> {
        vec![
            ("d2".into(), meta("Zebra notes", "f1", EntryType::DocumentType, 3)),
            ("f1".into(), meta("Work", "", EntryType::CollectionType, 1)),
            ("d1".into(), meta("Agenda", "f1", EntryType::DocumentType, 2)),
            ("d3".into(), meta("Diary", "", EntryType::DocumentType, 4)),
            ("t1".into(), meta("Old", "trash", EntryType::DocumentType, 5)),
            ("o1".into(), meta("Lost", "missing", EntryType::DocumentType, 6)),
        ]
    }

    #[test]
    fn tree_is_sorted_and_skips_trash() {
        let root = build_tree(sample_entries());
        assert!(root.is_root());
        let top: Vec<&str> = root.children.iter().map(|c| c.visible_name()).collect();
        assert_eq!(top, vec!["Diary", "Work"]);
        let work: Vec<&str> = root.children[1]
            .children
            .iter()
            .map(|c| c.uuid.as_str())
            .collect();
        assert_eq!(work, vec!["d1", "d2"]);
    }

    #[test]
    fn listing_indents_by_depth() {
        let listing = render_listing(&build_tree(sample_entries()));
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(
            lines,
            vec![
                "   d3 4 Diary",
                "   f1 1 Work",
                "     d1 2 Agenda",
                "     d2 3 Zebra notes",
            ]
        );
    }

    #[test]
    fn conversion_plan_mirrors_folders() {
        let jobs = plan_conversions(&build_tree(sample_entries()), Path::new("out"));
        let outputs: Vec<PathBuf> = jobs.iter().map(|j| j.output.clone()).collect();
        assert_eq!(
            outputs,
            vec![
                PathBuf::from("out/Diary.pdf"),
                PathBuf::from("out/Work/Agenda.pdf"),
                PathBuf::from("out/Work/Zebra_notes.pdf"),
            ]
        );
        assert_eq!(jobs[2].last_modified, 3);
    }
}
