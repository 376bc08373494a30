use one_dto_mapper::{Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::ProductId;
use time::Date;

use crate::model::report::{DailySales, PaymentMethodTotal, SalesSummary, TopProduct};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SalesSummaryQueryRestDTO {
    #[serde(with = "iso_date")]
    pub start_date: Date,
    #[serde(with = "iso_date")]
    pub end_date: Date,
}

#[derive(Clone, Debug, Deserialize, Into)]
#[into(SalesSummary)]
#[serde(rename_all = "camelCase")]
pub(super) struct SalesSummaryResponseRestDTO {
    #[serde(with = "iso_date")]
    pub start_date: Date,
    #[serde(with = "iso_date")]
    pub end_date: Date,
    #[serde(default)]
    pub total_sales: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_tax: f64,
    #[serde(default)]
    pub total_discount: f64,
    #[serde(default)]
    pub average_sale_amount: f64,
    #[serde(default)]
    #[into(with_fn = convert_inner)]
    pub daily_summary: Vec<DailySalesRestDTO>,
    #[serde(default)]
    #[into(with_fn = convert_inner)]
    pub top_products: Vec<TopProductRestDTO>,
    #[serde(default)]
    #[into(with_fn = convert_inner)]
    pub payment_method_breakdown: Vec<PaymentMethodTotalRestDTO>,
}

#[derive(Clone, Debug, Deserialize, Into)]
#[into(DailySales)]
#[serde(rename_all = "camelCase")]
pub(super) struct DailySalesRestDTO {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub sales_count: u64,
    pub revenue: f64,
}

#[derive(Clone, Debug, Deserialize, Into)]
#[into(TopProduct)]
#[serde(rename_all = "camelCase")]
pub(super) struct TopProductRestDTO {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity_sold: u64,
    pub revenue: f64,
}

#[derive(Clone, Debug, Deserialize, Into)]
#[into(PaymentMethodTotal)]
#[serde(rename_all = "camelCase")]
pub(super) struct PaymentMethodTotalRestDTO {
    pub payment_method: String,
    pub count: u64,
    pub amount: f64,
}
