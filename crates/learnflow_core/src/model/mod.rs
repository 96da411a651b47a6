mod category;
mod list;
mod rows;

pub use category::{Category, Domain, DomainRef, IconRef};
pub use list::ExpandableListModel;
pub use rows::{Activation, FlatRow, RowTarget};
