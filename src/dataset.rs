//! CSV dataset loading: head preview plus a quick numeric summary

use crate::error::{PortfolioError, Result};
use serde::Serialize;
use std::path::Path;

/// First rows of a dataset plus per-column statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetPreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
    pub summary: Vec<ColumnSummary>,
}

/// Descriptive statistics for one numeric column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; undefined for a single value
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl DatasetPreview {
    pub async fn load(path: &Path, preview_rows: usize) -> Result<Self> {
        let bytes = tokio::fs::read(path).await.map_err(|source| PortfolioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&bytes, preview_rows).map_err(|source| PortfolioError::Csv {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse CSV bytes. The first row is the header; ragged rows are an error.
    pub fn parse(bytes: &[u8], preview_rows: usize) -> std::result::Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(bytes);
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();

        let mut columns = vec![NumericColumn::default(); headers.len()];
        let mut rows = Vec::with_capacity(preview_rows);
        let mut total_rows = 0;

        for record in reader.records() {
            let record = record?;
            if rows.len() < preview_rows {
                rows.push(record.iter().map(str::to_owned).collect());
            }
            for (column, value) in columns.iter_mut().zip(record.iter()) {
                column.push(value);
            }
            total_rows += 1;
        }

        let summary = headers
            .iter()
            .zip(columns)
            .filter_map(|(name, column)| column.summarize(name))
            .collect();

        Ok(Self { headers, rows, total_rows, summary })
    }
}

/// Accumulates the values of one column while it still looks numeric
#[derive(Default, Clone)]
struct NumericColumn {
    values: Vec<f64>,
    non_numeric: bool,
}

impl NumericColumn {
    fn push(&mut self, raw: &str) {
        if self.non_numeric {
            return;
        }
        let raw = raw.trim();
        if raw.is_empty() {
            return;
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_nan() => {}
            Ok(v) => self.values.push(v),
            Err(_) => {
                self.non_numeric = true;
                self.values = Vec::new();
            }
        }
    }

    fn summarize(mut self, name: &str) -> Option<ColumnSummary> {
        if self.non_numeric || self.values.is_empty() {
            return None;
        }
        self.values.sort_by(f64::total_cmp);
        let v = &self.values;
        let n = v.len();
        let mean = v.iter().sum::<f64>() / n as f64;
        let std = (n > 1).then(|| {
            let var = v.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            var.sqrt()
        });

        Some(ColumnSummary {
            name: name.to_string(),
            count: n,
            mean,
            std,
            min: v[0],
            q25: quantile(v, 0.25),
            median: quantile(v, 0.5),
            q75: quantile(v, 0.75),
            max: v[n - 1],
        })
    }
}

/// Linear-interpolated quantile of sorted, non-empty values
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}
