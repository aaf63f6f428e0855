//! Product rule storage and loading

mod data;
pub mod loader;

pub use data::{Bracket, ProductRule};
pub use loader::{find_product, load_default_rules, load_rules, load_rules_from_reader};
