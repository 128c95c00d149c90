mod content;
mod node;

pub use content::Content;
pub use node::{Element, ElementKind, Key};

/// Find the first element carrying `key`, depth first.
pub fn find_by_key<'a>(root: &'a Element, key: &Key) -> Option<&'a Element> {
    if root.key.as_ref() == Some(key) {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_by_key(child, key))
}
