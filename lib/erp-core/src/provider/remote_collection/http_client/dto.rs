use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use shared_types::{ProductId, SaleId};

use super::RestEntity;
use crate::model::page::PageResult;
use crate::model::product::{Product, ProductPayload};
use crate::model::sale::{
    PaymentMethod, Sale, SaleItem, SaleItemPayload, SalePayload, SaleStatus,
};

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponseRestDTO<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub first: bool,
    pub last: bool,
}

impl<T> PagedResponseRestDTO<T> {
    pub(super) fn into_page<E>(self) -> PageResult<E>
    where
        T: Into<E>,
    {
        PageResult {
            items: self.content.into_iter().map(Into::into).collect(),
            page_index: self.page,
            page_size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            is_first: self.first,
            is_last: self.last,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Into)]
#[into(Product)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponseRestDTO {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: i32,
    pub category: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub in_stock: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, From)]
#[from(ProductPayload)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequestRestDTO {
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: i32,
    pub category: String,
    pub image_url: Option<String>,
}

impl RestEntity for Product {
    type ResponseRestDTO = ProductResponseRestDTO;
    type RequestRestDTO = ProductRequestRestDTO;
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, From, Into)]
#[from(PaymentMethod)]
#[into(PaymentMethod)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethodRestEnum {
    Cash,
    Card,
    BankTransfer,
    Other,
}

#[derive(Clone, Copy, Debug, Deserialize, Into)]
#[into(SaleStatus)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleStatusRestEnum {
    Pending,
    Completed,
    Cancelled,
    Refunded,
}

#[derive(Clone, Debug, Deserialize, Into)]
#[into(Sale)]
#[serde(rename_all = "camelCase")]
pub struct SaleResponseRestDTO {
    pub id: SaleId,
    pub sale_number: String,
    pub user_id: Option<i64>,
    pub user_name: Option<String>,
    #[serde(default)]
    pub customer_name: String,
    pub customer_phone: Option<String>,
    #[serde(default)]
    #[into(with_fn = convert_inner)]
    pub items: Vec<SaleItemResponseRestDTO>,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub discount_amount: f64,
    pub total_amount: f64,
    pub payment_method: PaymentMethodRestEnum,
    pub status: SaleStatusRestEnum,
    pub sale_date: String,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Into)]
#[into(SaleItem)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemResponseRestDTO {
    pub id: i64,
    pub product_id: ProductId,
    pub product_name: String,
    pub product_sku: String,
    pub quantity: i32,
    pub unit_price: f64,
    #[serde(default)]
    pub discount_percent: f64,
    pub line_total: f64,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, From)]
#[from(SalePayload)]
#[serde(rename_all = "camelCase")]
pub struct SaleRequestRestDTO {
    pub customer_name: String,
    pub customer_phone: String,
    #[from(with_fn = convert_inner)]
    pub items: Vec<SaleItemRequestRestDTO>,
    pub tax_amount: f64,
    pub discount_amount: f64,
    pub payment_method: PaymentMethodRestEnum,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, From)]
#[from(SaleItemPayload)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemRequestRestDTO {
    pub product_id: ProductId,
    pub quantity: i32,
    pub discount_percent: f64,
}

impl RestEntity for Sale {
    type ResponseRestDTO = SaleResponseRestDTO;
    type RequestRestDTO = SaleRequestRestDTO;
}
