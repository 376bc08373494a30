use std::sync::Arc;

use anyhow::bail;
use clap::{Args, Subcommand};
use erp_core::config::core_config::CoreConfig;
use erp_core::model::common::{ListEntity, SortableColumn};
use erp_core::model::fetch_status::FetchStatus;
use erp_core::provider::http_client::HttpClient;
use erp_core::provider::http_client::reqwest_client::ReqwestClient;
use erp_core::service::product::product_table;
use erp_core::service::report::ReportService;
use erp_core::service::sale::{cancel_intent, sale_table};
use erp_core::service::table::TableController;
use erp_core::service::table::dto::DeleteIntent;
use shared_types::{ProductId, SaleId};
use time::Date;
use time::macros::format_description;

use crate::render;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Product catalog
    #[command(subcommand)]
    Products(ProductCommand),
    /// Sales history
    #[command(subcommand)]
    Sales(SaleCommand),
    /// Sales summary for a date range
    Summary {
        /// first day, `YYYY-MM-DD`
        #[arg(long, value_parser = parse_date)]
        start: Option<Date>,
        /// last day, `YYYY-MM-DD`
        #[arg(long, value_parser = parse_date)]
        end: Option<Date>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProductCommand {
    List(ListArgs),
    Show {
        id: ProductId,
    },
    Delete {
        id: ProductId,
        /// confirm the delete
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SaleCommand {
    List(ListArgs),
    Show {
        id: SaleId,
    },
    Cancel {
        id: SaleId,
        /// confirm the cancellation
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long)]
    size: Option<u32>,
    /// column id; repeat to flip the direction, like clicking a header again
    #[arg(long)]
    sort: Vec<String>,
    /// narrows the fetched page
    #[arg(long)]
    filter: Option<String>,
    /// column id to hide
    #[arg(long)]
    hide: Vec<String>,
}

impl Command {
    pub async fn run(self, config: &CoreConfig) -> anyhow::Result<()> {
        config.table.validate()?;
        let base_url = config.api.normalized_base_url()?;
        let http_client: Arc<dyn HttpClient> = Arc::new(ReqwestClient::from_config(&config.api)?);

        match self {
            Command::Products(command) => {
                let table = product_table(http_client, &base_url, config.table.clone());
                match command {
                    ProductCommand::List(args) => list(&table, args).await,
                    ProductCommand::Show { id } => {
                        render::print_product(&table.get(&id).await?);
                        Ok(())
                    }
                    ProductCommand::Delete { id, yes } => {
                        let intent = DeleteIntent::new(id);
                        if !yes {
                            println!("Product {} not deleted; re-run with --yes to confirm", intent.id());
                            return Ok(());
                        }

                        let outcome = table.delete(intent.confirm()).await?;
                        println!("Product {id} deleted");
                        report_refresh(&outcome.refresh);
                        Ok(())
                    }
                }
            }
            Command::Sales(command) => {
                let table = sale_table(http_client, &base_url, config.table.clone());
                match command {
                    SaleCommand::List(args) => list(&table, args).await,
                    SaleCommand::Show { id } => {
                        render::print_sale(&table.get(&id).await?);
                        Ok(())
                    }
                    SaleCommand::Cancel { id, yes } => {
                        if !yes {
                            println!("Sale {id} not cancelled; re-run with --yes to confirm");
                            return Ok(());
                        }

                        let outcome = table.perform(cancel_intent(id).confirm()).await?;
                        println!(
                            "Sale {} is now {}",
                            outcome.entity.sale_number, outcome.entity.status
                        );
                        report_refresh(&outcome.refresh);
                        Ok(())
                    }
                }
            }
            Command::Summary { start, end } => {
                let service = ReportService::from_http_client(http_client, &base_url);
                let summary = service.get_sales_summary(start, end).await?;
                render::print_summary(&summary);
                Ok(())
            }
        }
    }
}

async fn list<E, C>(table: &TableController<E, C>, args: ListArgs) -> anyhow::Result<()>
where
    E: ListEntity,
    C: SortableColumn,
{
    let mut status = table.refresh().await;

    if let Some(size) = args.size {
        status = table.set_page_size(size).await?;
    }
    for column in &args.sort {
        status = table.set_sort(table.view().sortable_column(column)?).await;
    }
    if let Some(filter) = args.filter {
        status = table.set_filter_text(filter).await;
    }
    if args.page > 1 {
        status = table.set_page_index(args.page - 1).await;
    }
    for column in &args.hide {
        table.toggle_column(column).await?;
    }

    if let FetchStatus::Error(message) = status {
        bail!(message);
    }

    render::print_projection(&table.project().await, table.page_size_options());
    Ok(())
}

fn report_refresh(status: &FetchStatus) {
    if let Some(message) = status.error_message() {
        println!("Table not refreshed: {message}");
    }
}

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|error| format!("invalid date `{value}`, expected YYYY-MM-DD: {error}"))
}
