//! The IDE project document: nodes, the products registry, and assembly.
//!
//! Only the parts of the document owned by project assembly live here. Build
//! phases, link steps and the wire format are produced by later phases from
//! the [`Products`] tables returned by [`create_products`].

pub mod assemble;
pub mod node;
pub mod products;

pub use assemble::{create_products, PRODUCTS_GROUP_NAME};
pub use node::{BuildFile, FileReference, Group, Node, SourceTree};
pub use products::{ProductId, ProductKeys, Products};
