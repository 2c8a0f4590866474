//! Default items loaded at startup

use crate::store::Item;

/// The five items a fresh server starts with
pub fn default_items() -> Vec<Item> {
    [
        ("1", "first"),
        ("2", "second"),
        ("3", "third"),
        ("4", "fourth"),
        ("5", "fifth"),
    ]
    .into_iter()
    .map(|(id, ordinal)| {
        Item::new(
            id,
            format!("Default Item {}", id),
            format!("This is the {} item", ordinal),
        )
    })
    .collect()
}
