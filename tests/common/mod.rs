use std::fs;
use std::path::{Path, PathBuf};

use treelab::Tree;

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

#[allow(dead_code)]
pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("TREELAB_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set TREELAB_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}

/// The five-element BST used throughout the scenarios: 5 -> {3 -> {1, 4}, 8}
#[allow(dead_code)]
pub fn sample_tree() -> Tree<i32> {
    Tree::ordered("Sample", [5, 3, 8, 1, 4])
}

/// Copy the in-order listing out of a tree
#[allow(dead_code)]
pub fn in_order_values<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    tree.in_order().into_iter().cloned().collect()
}
