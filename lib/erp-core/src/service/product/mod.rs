use std::sync::Arc;

use crate::config::core_config::TableConfig;
use crate::model::common::{ListSorting, SortDirection};
use crate::model::product::{Product, ProductSortableColumn};
use crate::provider::http_client::HttpClient;
use crate::provider::remote_collection::http_client::HTTPRemoteCollection;
use crate::service::table::TableController;
use crate::service::view::column::{CellValue, ColumnDescriptor};
use crate::service::view::{FilterMode, TableView};

pub mod validator;


pub type ProductTable = TableController<Product, ProductSortableColumn>;

pub fn product_table(
    http_client: Arc<dyn HttpClient>,
    base_url: &str,
    config: TableConfig,
) -> ProductTable {
    let view = Arc::new(product_view());
    let remote = Arc::new(HTTPRemoteCollection::<Product>::new(
        http_client,
        base_url,
        view.collection_path,
    ));

    TableController::new(remote, view, config)
}

pub fn product_view() -> TableView<Product, ProductSortableColumn> {
    TableView {
        entity_name: "products",
        collection_path: "products",
        default_sorting: ListSorting {
            column: ProductSortableColumn::Name,
            direction: SortDirection::Ascending,
        },
        filter: FilterMode::Client {
            fields: vec![product_name, product_sku],
        },
        columns: vec![
            ColumnDescriptor::new("sku", "SKU", |p: &Product| CellValue::Text(p.sku.clone()))
                .sortable(ProductSortableColumn::Sku),
            ColumnDescriptor::new("name", "Name", |p: &Product| CellValue::Text(p.name.clone()))
                .sortable(ProductSortableColumn::Name)
                .pinned(),
            ColumnDescriptor::new("category", "Category", |p: &Product| {
                CellValue::Text(p.category.clone())
            })
            .sortable(ProductSortableColumn::Category),
            ColumnDescriptor::new("price", "Price", |p: &Product| CellValue::Amount(p.price)),
            ColumnDescriptor::new("stockQuantity", "Stock", |p: &Product| {
                CellValue::Integer(p.stock_quantity.into())
            })
            .sortable(ProductSortableColumn::StockQuantity),
            ColumnDescriptor::new("inStock", "In Stock", |p: &Product| CellValue::Flag(p.in_stock)),
            ColumnDescriptor::new("isActive", "Active", |p: &Product| CellValue::Flag(p.is_active))
                .render_with(render_active),
        ],
        validate_payload: validator::validate_product_payload,
    }
}

fn product_name(product: &Product) -> &str {
    &product.name
}

fn product_sku(product: &Product) -> &str {
    &product.sku
}

fn render_active(_: &CellValue, product: &Product) -> String {
    if product.is_active {
        "Active".to_string()
    } else {
        "Inactive".to_string()
    }
}
