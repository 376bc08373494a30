use shared_types::{ProductId, SaleId};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::common::{ListEntity, SortableColumn};

#[derive(Clone, Debug, PartialEq)]
pub struct Sale {
    pub id: SaleId,
    pub sale_number: String,
    pub user_id: Option<i64>,
    pub user_name: Option<String>,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub items: Vec<SaleItem>,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub discount_amount: f64,
    pub total_amount: f64,
    pub payment_method: PaymentMethod,
    pub status: SaleStatus,
    pub sale_date: String,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SaleItem {
    pub id: i64,
    pub product_id: ProductId,
    pub product_name: String,
    pub product_sku: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub discount_percent: f64,
    pub line_total: f64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
    BankTransfer,
    Other,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleStatus {
    Pending,
    Completed,
    Cancelled,
    Refunded,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SalePayload {
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<SaleItemPayload>,
    pub tax_amount: f64,
    pub discount_amount: f64,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SaleItemPayload {
    pub product_id: ProductId,
    pub quantity: i32,
    pub discount_percent: f64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum SaleSortableColumn {
    SaleNumber,
    CustomerName,
    TotalAmount,
    SaleDate,
}

impl SortableColumn for SaleSortableColumn {
    fn field(&self) -> &'static str {
        (*self).into()
    }
}

impl ListEntity for Sale {
    type Id = SaleId;
    type Payload = SalePayload;

    fn id(&self) -> SaleId {
        self.id
    }
}
