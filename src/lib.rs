//! An ordered map and set implemented with a self-adjusting splay tree.

extern crate serde;
#[macro_use]
extern crate serde_derive;

mod entry;
pub mod arena;
pub mod splay_tree;
