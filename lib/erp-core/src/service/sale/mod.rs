use std::sync::Arc;

use shared_types::SaleId;
use time::PrimitiveDateTime;
use time::format_description::well_known::Iso8601;
use time::macros::format_description;

use crate::config::core_config::TableConfig;
use crate::model::common::{ListSorting, SortDirection};
use crate::model::sale::{Sale, SaleSortableColumn};
use crate::provider::http_client::HttpClient;
use crate::provider::remote_collection::http_client::HTTPRemoteCollection;
use crate::service::table::TableController;
use crate::service::table::dto::ActionIntent;
use crate::service::view::column::{CellValue, ColumnDescriptor};
use crate::service::view::{FilterMode, TableView};

pub mod validator;


/// `POST /sales/{id}/cancel`
pub const CANCEL_ACTION: &str = "cancel";

pub type SaleTable = TableController<Sale, SaleSortableColumn>;

pub fn sale_table(http_client: Arc<dyn HttpClient>, base_url: &str, config: TableConfig) -> SaleTable {
    let view = Arc::new(sales_view());
    let remote = Arc::new(HTTPRemoteCollection::<Sale>::new(
        http_client,
        base_url,
        view.collection_path,
    ));

    TableController::new(remote, view, config)
}

/// Cancel of a sale, performed once the user confirmed it
pub fn cancel_intent(id: SaleId) -> ActionIntent<SaleId> {
    ActionIntent::new(id, CANCEL_ACTION)
}

pub fn sales_view() -> TableView<Sale, SaleSortableColumn> {
    TableView {
        entity_name: "sales",
        collection_path: "sales",
        default_sorting: ListSorting {
            column: SaleSortableColumn::SaleDate,
            direction: SortDirection::Descending,
        },
        filter: FilterMode::Client {
            fields: vec![customer_name, sale_number],
        },
        columns: vec![
            ColumnDescriptor::new("saleNumber", "Sale #", |s: &Sale| {
                CellValue::Text(s.sale_number.clone())
            })
            .sortable(SaleSortableColumn::SaleNumber)
            .pinned(),
            ColumnDescriptor::new("customerName", "Customer", |s: &Sale| {
                CellValue::Text(s.customer_name.clone())
            })
            .sortable(SaleSortableColumn::CustomerName),
            ColumnDescriptor::new("userName", "Sales Person", |s: &Sale| {
                CellValue::from(s.user_name.clone())
            }),
            ColumnDescriptor::new("items", "Items", |s: &Sale| {
                CellValue::Integer(s.items.len() as i64)
            })
            .render_with(render_item_count),
            ColumnDescriptor::new("totalAmount", "Total Amount", |s: &Sale| {
                CellValue::Amount(s.total_amount)
            })
            .sortable(SaleSortableColumn::TotalAmount),
            ColumnDescriptor::new("paymentMethod", "Payment Method", |s: &Sale| {
                CellValue::Text(s.payment_method.to_string())
            }),
            ColumnDescriptor::new("status", "Status", |s: &Sale| {
                CellValue::Text(s.status.to_string())
            }),
            ColumnDescriptor::new("saleDate", "Sale Date", |s: &Sale| {
                CellValue::Text(s.sale_date.clone())
            })
            .sortable(SaleSortableColumn::SaleDate)
            .render_with(render_sale_date),
        ],
        validate_payload: validator::validate_sale_payload,
    }
}

fn customer_name(sale: &Sale) -> &str {
    &sale.customer_name
}

fn sale_number(sale: &Sale) -> &str {
    &sale.sale_number
}

fn render_item_count(_: &CellValue, sale: &Sale) -> String {
    match sale.items.len() {
        1 => "1 item".to_string(),
        count => format!("{count} items"),
    }
}

/// Server timestamps carry no offset; unparseable values are shown as received
fn render_sale_date(_: &CellValue, sale: &Sale) -> String {
    PrimitiveDateTime::parse(&sale.sale_date, &Iso8601::DEFAULT)
        .ok()
        .and_then(|date| {
            date.format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
                .ok()
        })
        .unwrap_or_else(|| sale.sale_date.clone())
}
