//! Aligns a subject property and its comparables into shared tables.
//!
//! Row 0 of every table is the subject; comparables follow in the order they
//! were supplied. Appraisal relies on that ordering.

use crate::{
    extract::Extraction,
    record::{Cell, FeaturesRecord, Field, ManualEntry, PriceRecord, PropertyRecord},
};
use serde::Serialize;

#[derive(Debug, Clone)]
pub enum Subject {
    Extracted(Extraction),
    Manual(ManualEntry),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedTables {
    pub properties: Vec<PropertyRecord>,
    pub prices: Vec<PriceRecord>,
    pub features: Vec<FeaturesRecord>,
    pub is_rental: bool,
}

impl CombinedTables {
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Living Sq Ft of the subject row, as written in the source.
    pub fn subject_living_sq_ft(&self) -> Option<&str> {
        self.properties.first()?.living_sq_ft.as_text()
    }

    pub fn property_table(&self) -> Table {
        Table::build(&PropertyRecord::COLUMNS, &self.properties, |r, f| r.get(f))
    }

    pub fn price_table(&self) -> Table {
        Table::build(&PriceRecord::COLUMNS, &self.prices, |r, f| r.get(f))
    }

    pub fn features_table(&self) -> Table {
        let columns: Vec<Field> = FeaturesRecord::COLUMNS
            .into_iter()
            .filter(|f| self.features.iter().any(|r| r.has(*f)))
            .collect();
        Table::build(&columns, &self.features, |r, f| r.get(f))
    }

    fn append(&mut self, ex: Extraction) {
        self.is_rental |= ex.is_rental;
        self.properties.extend(ex.properties);
        self.prices.extend(ex.prices);
        self.features.extend(ex.features);
    }
}

/// Concatenates the subject's rows with every comparison's rows.
///
/// Either side may be missing. `None` when nothing at all contributed a row.
pub fn combine(subject: Option<Subject>, comparisons: Vec<Extraction>) -> Option<CombinedTables> {
    let mut out = CombinedTables {
        properties: Vec::new(),
        prices: Vec::new(),
        features: Vec::new(),
        is_rental: false,
    };
    let mut manual_rental = None;

    match subject {
        Some(Subject::Extracted(ex)) => out.append(ex),
        Some(Subject::Manual(entry)) => {
            manual_rental = Some(entry.is_rental);
            let records = entry.into_records();
            out.properties.push(records.property);
            out.prices.push(records.price);
            out.features.push(records.features);
        }
        None => {}
    }

    for ex in comparisons.into_iter().filter(|ex| !ex.is_empty()) {
        out.append(ex);
    }

    if let Some(flag) = manual_rental {
        out.is_rental = flag;
    }

    (!out.is_empty()).then_some(out)
}

/// A column-aligned view of one record list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    fn build<R>(columns: &[Field], records: &[R], get: impl Fn(&R, Field) -> Option<&Cell>) -> Self {
        let rows = records
            .iter()
            .map(|r| {
                columns
                    .iter()
                    .map(|f| get(r, *f).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();
        Self {
            columns: columns.iter().map(|f| f.label()).collect(),
            rows,
        }
    }

    pub fn column(&self, label: &str) -> Option<Vec<&Cell>> {
        let idx = self.columns.iter().position(|c| *c == label)?;
        Some(self.rows.iter().map(|r| &r[idx]).collect())
    }

    /// Render as a GitHub-flavored markdown table.
    pub fn to_markdown(&self) -> String {
        if self.columns.is_empty() {
            return String::new();
        }

        let mut md = String::new();
        md.push('|');
        for col in &self.columns {
            md.push_str(&format!(" {col} |"));
        }
        md.push('\n');

        md.push('|');
        for _ in &self.columns {
            md.push_str(" --- |");
        }
        md.push('\n');

        for row in &self.rows {
            md.push('|');
            for cell in row {
                let text = cell.display().replace('|', "\\|");
                md.push_str(&format!(" {text} |"));
            }
            md.push('\n');
        }

        md
    }
}
