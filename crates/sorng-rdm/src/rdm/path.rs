//! Group path resolution.
//!
//! A record's `Group` field names the chain of containers from the tree
//! root to the record's parent, e.g. `Servers\Production`. Resolution walks
//! that chain one segment at a time and never fails: a segment with no
//! matching child container leaves the walk where it was.

use log::debug;

use super::tree::{ConnectionTree, NodeId};

/// Split a group path into its non-empty segments.
pub fn split_segments(path: &str, separator: char) -> impl Iterator<Item = &str> {
    path.split(separator).filter(|s| !s.is_empty())
}

/// Resolve `path` starting at `start`, returning the deepest container that
/// could be reached. An absent or empty path resolves to `start` itself.
pub fn resolve_group_path(
    tree: &ConnectionTree,
    start: NodeId,
    path: Option<&str>,
    separator: char,
) -> NodeId {
    let Some(path) = path else {
        return start;
    };

    split_segments(path, separator).fold(start, |current, segment| {
        match tree.find_child_container(current, segment) {
            Some(found) => found,
            None => {
                debug!("Group segment '{}' of '{}' not found, keeping '{}'", segment, path, tree.node(current).name());
                current
            }
        }
    })
}

/// Remove `suffix` from the end of `input` when present.
///
/// A group record's path ends with the group's own name; stripping it
/// leaves the path of the group's parent. Plain suffix match, so
/// `"MyGroup1"` minus `"Group1"` is `"My"`.
pub fn trim_own_name<'a>(input: &'a str, suffix: Option<&str>) -> &'a str {
    match suffix {
        Some(suffix) => input.strip_suffix(suffix).unwrap_or(input),
        None => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdm::tree::RootNodeType;

    fn sample_tree() -> (ConnectionTree, NodeId, NodeId, NodeId) {
        let mut tree = ConnectionTree::new();
        let root = tree.add_root_node("Connections", RootNodeType::Connection);
        let a = tree.add_container(root, "A");
        let b = tree.add_container(a, "B");
        (tree, root, a, b)
    }

    #[test]
    fn test_resolves_full_path() {
        let (tree, root, _, b) = sample_tree();
        assert_eq!(resolve_group_path(&tree, root, Some("A\\B"), '\\'), b);
    }

    #[test]
    fn test_unmatched_segment_keeps_last_good_container() {
        let (tree, root, a, b) = sample_tree();
        assert_eq!(resolve_group_path(&tree, root, Some("A\\X"), '\\'), a);
        assert_eq!(resolve_group_path(&tree, root, Some("X"), '\\'), root);
        // later segments still match below the last good container
        assert_eq!(resolve_group_path(&tree, root, Some("A\\X\\B"), '\\'), b);
    }

    #[test]
    fn test_empty_or_absent_path_is_noop() {
        let (tree, root, a, _) = sample_tree();
        assert_eq!(resolve_group_path(&tree, root, None, '\\'), root);
        assert_eq!(resolve_group_path(&tree, root, Some(""), '\\'), root);
        assert_eq!(resolve_group_path(&tree, a, Some("\\\\"), '\\'), a);
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        let (tree, root, _, b) = sample_tree();
        assert_eq!(resolve_group_path(&tree, root, Some("\\A\\\\B\\"), '\\'), b);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let (tree, root, _, _) = sample_tree();
        assert_eq!(resolve_group_path(&tree, root, Some("a"), '\\'), root);
    }

    #[test]
    fn test_custom_separator() {
        let (tree, root, _, b) = sample_tree();
        assert_eq!(resolve_group_path(&tree, root, Some("A/B"), '/'), b);
    }

    #[test]
    fn test_trim_own_name() {
        assert_eq!(trim_own_name("Parent\\Group1", Some("Group1")), "Parent\\");
        assert_eq!(trim_own_name("Group1", Some("Group1")), "");
        assert_eq!(trim_own_name("MyGroup1", Some("Group1")), "My");
        assert_eq!(trim_own_name("Parent", Some("Group1")), "Parent");
        assert_eq!(trim_own_name("Parent", None), "Parent");
    }
}
