//! List data and the render-data provider contract.

pub mod list;
pub mod source;

pub use list::ListModel;
pub use source::{CellContent, HeaderContent, ListSource};
