use std::fmt::Display;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use erp_core::model::product::Product;
use erp_core::model::report::SalesSummary;
use erp_core::model::sale::Sale;
use erp_core::service::view::column::format_currency;
use erp_core::service::view::pagination::{PageLink, PaginationControls};
use erp_core::service::view::projection::TableProjection;
use itertools::Itertools;

pub fn print_projection<Id: Display>(projection: &TableProjection<Id>, page_size_options: &[u32]) {
    let mut table = new_table();
    table.set_header(
        std::iter::once(header_cell("#"))
            .chain(projection.columns.iter().map(header_cell))
            .collect::<Vec<_>>(),
    );

    for row in &projection.rows {
        let marker = if row.selected {
            Cell::new(format!("* {}", row.id)).add_attribute(Attribute::Bold)
        } else {
            dim_cell(&row.id)
        };
        table.add_row(std::iter::once(marker).chain(row.cells.iter().map(Cell::new)));
    }

    if projection.rows.is_empty() {
        println!("No results.");
    } else {
        println!("{table}");
    }
    println!("{}", projection.counts);
    println!("{}", pagination_line(&projection.pagination));
    println!(
        "Rows per page: {}",
        page_size_options.iter().join(" / ")
    );
}

pub fn print_product(product: &Product) {
    let mut table = new_table();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    table.add_row(vec![Cell::new("ID"), Cell::new(product.id)]);
    table.add_row(vec![Cell::new("SKU"), Cell::new(&product.sku)]);
    table.add_row(vec![Cell::new("Name"), Cell::new(&product.name)]);
    table.add_row(vec![
        Cell::new("Description"),
        optional_cell(product.description.as_deref()),
    ]);
    table.add_row(vec![Cell::new("Category"), Cell::new(&product.category)]);
    table.add_row(vec![
        Cell::new("Price"),
        Cell::new(format_currency(product.price)),
    ]);
    table.add_row(vec![
        Cell::new("Stock"),
        Cell::new(product.stock_quantity),
    ]);
    table.add_row(vec![
        Cell::new("Image URL"),
        optional_cell(product.image_url.as_deref()),
    ]);
    table.add_row(vec![
        Cell::new("Status"),
        if product.is_active {
            Cell::new("Active").fg(Color::Green)
        } else {
            Cell::new("Inactive").fg(Color::Red)
        },
    ]);
    println!("{table}");
}

pub fn print_sale(sale: &Sale) {
    println!("Sale {} ({})", sale.sale_number, sale.status);
    println!("Date: {}", sale.sale_date);
    println!(
        "Customer: {}{}",
        sale.customer_name,
        sale.customer_phone
            .as_deref()
            .map(|phone| format!(", {phone}"))
            .unwrap_or_default()
    );
    if let Some(user_name) = &sale.user_name {
        println!("Sales person: {user_name}");
    }
    println!("Payment method: {}", sale.payment_method);

    let mut table = new_table();
    table.set_header(vec![
        header_cell("Product"),
        header_cell("SKU"),
        header_cell("Qty"),
        header_cell("Unit Price"),
        header_cell("Discount"),
        header_cell("Line Total"),
    ]);
    for item in &sale.items {
        table.add_row(vec![
            Cell::new(&item.product_name),
            Cell::new(&item.product_sku),
            Cell::new(item.quantity),
            Cell::new(format_currency(item.unit_price)),
            if item.discount_percent > 0.0 {
                Cell::new(format!("{}%", item.discount_percent))
            } else {
                dim_cell("-")
            },
            Cell::new(format_currency(item.line_total)),
        ]);
    }
    align_columns(&mut table, &[2, 3, 4, 5], CellAlignment::Right);
    println!("{table}");

    println!("Subtotal: {}", format_currency(sale.subtotal));
    if sale.discount_amount > 0.0 {
        println!("Discount: -{}", format_currency(sale.discount_amount));
    }
    println!("Tax: {}", format_currency(sale.tax_amount));
    println!("Total: {}", format_currency(sale.total_amount));
    if let Some(notes) = &sale.notes {
        println!("Notes: {notes}");
    }
}

pub fn print_summary(summary: &SalesSummary) {
    println!("Sales summary {} to {}", summary.start_date, summary.end_date);

    let mut totals = new_table();
    totals.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    totals.add_row(vec![Cell::new("Sales"), Cell::new(summary.total_sales)]);
    totals.add_row(vec![
        Cell::new("Revenue"),
        Cell::new(format_currency(summary.total_revenue)),
    ]);
    totals.add_row(vec![
        Cell::new("Average sale"),
        Cell::new(format_currency(summary.average_sale_amount)),
    ]);
    totals.add_row(vec![
        Cell::new("Tax"),
        Cell::new(format_currency(summary.total_tax)),
    ]);
    totals.add_row(vec![
        Cell::new("Discounts"),
        Cell::new(format_currency(summary.total_discount)),
    ]);
    align_columns(&mut totals, &[1], CellAlignment::Right);
    println!("{totals}");

    if !summary.daily_summary.is_empty() {
        let mut daily = new_table();
        daily.set_header(vec![
            header_cell("Date"),
            header_cell("Sales"),
            header_cell("Revenue"),
        ]);
        for day in &summary.daily_summary {
            daily.add_row(vec![
                Cell::new(day.date),
                Cell::new(day.sales_count),
                Cell::new(format_currency(day.revenue)),
            ]);
        }
        align_columns(&mut daily, &[1, 2], CellAlignment::Right);
        println!("{daily}");
    }

    if !summary.top_products.is_empty() {
        let mut products = new_table();
        products.set_header(vec![
            header_cell("Top Product"),
            header_cell("Sold"),
            header_cell("Revenue"),
        ]);
        for product in &summary.top_products {
            products.add_row(vec![
                Cell::new(&product.product_name),
                Cell::new(product.quantity_sold),
                Cell::new(format_currency(product.revenue)),
            ]);
        }
        align_columns(&mut products, &[1, 2], CellAlignment::Right);
        println!("{products}");
    }

    if !summary.payment_method_breakdown.is_empty() {
        let mut methods = new_table();
        methods.set_header(vec![
            header_cell("Payment Method"),
            header_cell("Count"),
            header_cell("Amount"),
        ]);
        for method in &summary.payment_method_breakdown {
            methods.add_row(vec![
                Cell::new(&method.payment_method),
                Cell::new(method.count),
                Cell::new(format_currency(method.amount)),
            ]);
        }
        align_columns(&mut methods, &[1, 2], CellAlignment::Right);
        println!("{methods}");
    }
}

/// e.g. `< 1 … 5 [6] 7 … 10 >   Page 6 of 10`
pub fn pagination_line(pagination: &PaginationControls) -> String {
    if !pagination.has_links() {
        return pagination.to_string();
    }

    let links = pagination
        .links
        .iter()
        .map(|link| match link {
            PageLink::Page {
                number,
                current: true,
            } => format!("[{number}]"),
            PageLink::Page { number, .. } => number.to_string(),
            PageLink::Ellipsis => "…".to_string(),
        })
        .join(" ");

    format!(
        "{} {links} {}   {pagination}",
        if pagination.previous_enabled { "<" } else { " " },
        if pagination.next_enabled { ">" } else { " " },
    )
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(label: impl Display) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(value: impl Display) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) if !value.trim().is_empty() => Cell::new(value),
        _ => dim_cell("-"),
    }
}

fn align_columns(table: &mut Table, indices: &[usize], alignment: CellAlignment) {
    for index in indices {
        if let Some(column) = table.column_mut(*index) {
            column.set_cell_alignment(alignment);
        }
    }
}

#[cfg(test)]
mod tests {
    use erp_core::model::page::PageResult;
    use erp_core::service::view::pagination::PaginationControls;

    use super::pagination_line;

    fn page(page_index: u32, total_pages: u32) -> PageResult<u32> {
        PageResult {
            items: vec![1],
            page_index,
            page_size: 10,
            total_elements: u64::from(total_pages) * 10,
            total_pages,
            is_first: page_index == 0,
            is_last: page_index + 1 >= total_pages,
        }
    }

    #[test]
    fn test_single_page_has_no_links() {
        let controls = PaginationControls::new(0, Some(&page(0, 1)));
        assert_eq!(pagination_line(&controls), "Page 1 of 1");
    }

    #[test]
    fn test_links_around_current_page() {
        let controls = PaginationControls::new(5, Some(&page(5, 10)));
        assert_eq!(
            pagination_line(&controls),
            "< 1 … 5 [6] 7 … 10 >   Page 6 of 10"
        );
    }

    #[test]
    fn test_first_page_disables_previous() {
        let controls = PaginationControls::new(0, Some(&page(0, 3)));
        assert_eq!(pagination_line(&controls), "  [1] 2 3 >   Page 1 of 3");
    }
}
