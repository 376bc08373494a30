use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    #[strum(serialize = "asc", ascii_case_insensitive)]
    Ascending,
    #[serde(rename = "desc")]
    #[strum(serialize = "desc", ascii_case_insensitive)]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Column identifier accepted by a collection endpoint as `sortBy`
pub trait SortableColumn: Copy + Debug + Eq + Hash + Send + Sync + 'static {
    /// field name as understood by the server
    fn field(&self) -> &'static str;
}

/// Record listed by a table view
///
/// The controller only relies on the identifier; every other field is reached
/// through the column descriptors declared by the view.
pub trait ListEntity: Clone + Debug + Send + Sync + 'static {
    type Id: Clone + Debug + Display + Eq + Hash + Send + Sync + 'static;
    /// body of create/update requests
    type Payload: Debug + Send + Sync + 'static;

    fn id(&self) -> Self::Id;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListSorting<SortableColumn> {
    pub column: SortableColumn,
    pub direction: SortDirection,
}
