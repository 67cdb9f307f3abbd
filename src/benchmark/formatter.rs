use std::collections::BTreeMap;
use std::error::Error;
use std::time::Duration;

use tabled::{Table, Tabled, settings::Style};

/// A row that can be rendered both as a table line and as a CSV record.
pub trait Formattable: Tabled {
    fn to_csv_row(&self) -> Vec<String>;

    fn csv_headers() -> Vec<&'static str>;
}

/// Pretty table formatter using the tabled library
pub struct PrettyFormatter;

impl PrettyFormatter {
    pub fn format<T: Formattable>(items: &[T]) -> String {
        if items.is_empty() {
            return String::new();
        }

        let mut table = Table::new(items);
        table.with(Style::rounded());
        table.to_string()
    }

    /// One table per group, headed by the group name.
    pub fn format_grouped<T: Formattable>(groups: &BTreeMap<String, Vec<T>>) -> String {
        let mut buffer = String::new();

        for (name, items) in groups {
            buffer.push_str(&format!("\n--- {name} ---\n\n"));
            buffer.push_str(&Self::format(items));
            buffer.push('\n');
        }

        buffer
    }
}

pub struct CsvFormatter;

impl CsvFormatter {
    pub fn format<T: Formattable>(items: &[T]) -> Result<String, Box<dyn Error>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(T::csv_headers())?;
        for item in items {
            writer.write_record(item.to_csv_row())?;
        }
        let bytes = writer.into_inner().map_err(|err| err.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }
}

pub(crate) fn format_duration(duration: &Duration) -> String {
    format!("{:?}", duration)
}

/// Durations go into CSV as whole nanoseconds.
pub(crate) fn format_duration_csv(duration: &Duration) -> String {
    duration.as_nanos().to_string()
}
