use std::fmt;

use itertools::Itertools;

/// Raw value of one cell, before rendering
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Amount(f64),
    Flag(bool),
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(value) => f.write_str(value),
            CellValue::Integer(value) => write!(f, "{value}"),
            CellValue::Amount(value) => f.write_str(&format_currency(*value)),
            CellValue::Flag(true) => f.write_str("Yes"),
            CellValue::Flag(false) => f.write_str("No"),
            CellValue::Empty => f.write_str("-"),
        }
    }
}

impl From<Option<String>> for CellValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(value) if !value.is_empty() => CellValue::Text(value),
            _ => CellValue::Empty,
        }
    }
}

/// Declarative table column: what to show and whether the header sorts
pub struct ColumnDescriptor<E, C> {
    pub id: &'static str,
    pub header: &'static str,
    pub accessor: fn(&E) -> CellValue,
    /// server-side sort column behind the header, `None` for static headers
    pub sort_by: Option<C>,
    pub hideable: bool,
    pub render: fn(&CellValue, &E) -> String,
}

impl<E, C: Copy> ColumnDescriptor<E, C> {
    pub fn new(id: &'static str, header: &'static str, accessor: fn(&E) -> CellValue) -> Self {
        Self {
            id,
            header,
            accessor,
            sort_by: None,
            hideable: true,
            render: render_plain::<E>,
        }
    }

    pub fn sortable(mut self, column: C) -> Self {
        self.sort_by = Some(column);
        self
    }

    /// Column that cannot be hidden
    pub fn pinned(mut self) -> Self {
        self.hideable = false;
        self
    }

    pub fn render_with(mut self, render: fn(&CellValue, &E) -> String) -> Self {
        self.render = render;
        self
    }

    pub fn is_sortable(&self) -> bool {
        self.sort_by.is_some()
    }

    pub fn cell(&self, entity: &E) -> String {
        (self.render)(&(self.accessor)(entity), entity)
    }
}

fn render_plain<E>(value: &CellValue, _entity: &E) -> String {
    value.to_string()
}

/// `1234.5` -> `$1,234.50`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let digits: Vec<char> = (cents / 100).to_string().chars().collect();
    let grouped = digits
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().collect::<String>())
        .join(",");

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}
