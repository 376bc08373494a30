use shared_types::ProductId;
use time::Date;

#[derive(Clone, Debug, PartialEq)]
pub struct SalesSummary {
    pub start_date: Date,
    pub end_date: Date,
    pub total_sales: u64,
    pub total_revenue: f64,
    pub total_tax: f64,
    pub total_discount: f64,
    pub average_sale_amount: f64,
    pub daily_summary: Vec<DailySales>,
    pub top_products: Vec<TopProduct>,
    pub payment_method_breakdown: Vec<PaymentMethodTotal>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DailySales {
    pub date: Date,
    pub sales_count: u64,
    pub revenue: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TopProduct {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity_sold: u64,
    pub revenue: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaymentMethodTotal {
    pub payment_method: String,
    pub count: u64,
    pub amount: f64,
}
