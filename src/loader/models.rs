use serde::Deserialize;

/// One CSV row. Rows sharing an `alternative_id` must be contiguous and form
/// the steps of that alternative in travel order. Alternative level columns
/// are read from the first row of each group.
#[derive(Debug, Deserialize)]
pub struct CsvStep {
    pub alternative_id: String,
    pub category: String,
    pub label: Option<String>,
    /// Separated by `Config::highlight_separator`.
    pub highlights: Option<String>,
    pub estimated_fare: u32,
    pub first_bus: String,
    pub last_bus: String,
    pub mode: String,
    pub route: Option<String>,
    pub from: String,
    pub to: String,
    pub duration_min: u32,
}
