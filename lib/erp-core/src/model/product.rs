use shared_types::ProductId;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::common::{ListEntity, SortableColumn};

#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: i32,
    pub category: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub in_stock: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductPayload {
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: i32,
    pub category: String,
    pub image_url: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum ProductSortableColumn {
    Sku,
    Name,
    Category,
    StockQuantity,
}

impl SortableColumn for ProductSortableColumn {
    fn field(&self) -> &'static str {
        (*self).into()
    }
}

impl ListEntity for Product {
    type Id = ProductId;
    type Payload = ProductPayload;

    fn id(&self) -> ProductId {
        self.id
    }
}
