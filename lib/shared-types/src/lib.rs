mod macros;
mod product_id;
mod sale_id;

pub use product_id::ProductId;
pub use sale_id::SaleId;
