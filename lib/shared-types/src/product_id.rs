use serde::{Deserialize, Serialize};

use crate::macros::impls_for_i64_newtype;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ProductId(i64);

impls_for_i64_newtype!(ProductId);
