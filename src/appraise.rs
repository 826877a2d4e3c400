use crate::{
    error::AppraisalError,
    numeric::{coerce, group_thousands},
    record::PriceRecord,
};
use serde::Serialize;

const SUBJECT_FALLBACK: &str = "the subject property";

/// Figures behind the narrative sentences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Appraisal {
    pub subject: String,
    pub is_rental: bool,
    pub comparisons: usize,
    pub comparison_mean: f64,
    pub sq_ft: i64,
    pub estimated_value: f64,
    pub subject_list_price: f64,
    pub ratio: f64,
}

impl Appraisal {
    pub fn sentences(&self) -> Vec<String> {
        let basis = if self.is_rental { "list" } else { "sold" };
        vec![
            format!(
                "Using the {} comparable properties, the average {basis} $/sq ft = ${:.2}.",
                self.comparisons, self.comparison_mean
            ),
            format!(
                "Applying this to {}'s {} sq ft yields an estimated value of ~ ${:.2}.",
                self.subject, self.sq_ft, self.estimated_value
            ),
            format!(
                "{} ask of ${} is {:.2} times the estimated value.",
                self.subject,
                group_thousands(self.subject_list_price),
                self.ratio
            ),
        ]
    }
}

/// Strict integer parse of a square footage string; only `,` separators and
/// surrounding whitespace are tolerated.
pub fn parse_sq_ft(raw: &str) -> Result<i64, AppraisalError> {
    raw.replace(',', "")
        .trim()
        .parse::<i64>()
        .map_err(|_| AppraisalError::InvalidSqFt {
            raw: raw.to_string(),
        })
}

/// Values the subject from the mean $/sqft of rows `1..`; row 0 is the subject
/// and never contributes to the mean.
pub fn compute(
    prices: &[PriceRecord],
    subject_sq_ft: &str,
    is_rental: bool,
) -> Result<Appraisal, AppraisalError> {
    let sq_ft = parse_sq_ft(subject_sq_ft)?;
    let (subject, comparisons) = prices.split_first().ok_or(AppraisalError::EmptyTable)?;

    let per_sq_ft: Vec<f64> = comparisons
        .iter()
        .filter_map(|row| {
            let cell = if is_rental {
                &row.list_price_per_sq_ft
            } else {
                &row.sold_price_per_sq_ft
            };
            coerce(cell).as_number()
        })
        .collect();

    if per_sq_ft.is_empty() {
        return Err(AppraisalError::UndefinedComparisonMean {
            comparisons: comparisons.len(),
        });
    }
    let comparison_mean = per_sq_ft.iter().sum::<f64>() / per_sq_ft.len() as f64;

    let subject_list_price =
        coerce(&subject.list_price)
            .as_number()
            .ok_or_else(|| AppraisalError::SubjectPriceMissing {
                raw: subject.list_price.display(),
            })?;

    let estimated_value = sq_ft as f64 * comparison_mean;
    if estimated_value == 0.0 {
        return Err(AppraisalError::ZeroEstimate);
    }

    let subject_name = subject
        .address
        .as_text()
        .filter(|a| !a.is_empty())
        .unwrap_or(SUBJECT_FALLBACK)
        .to_string();

    Ok(Appraisal {
        subject: subject_name,
        is_rental,
        comparisons: comparisons.len(),
        comparison_mean,
        sq_ft,
        estimated_value,
        subject_list_price,
        ratio: subject_list_price / estimated_value,
    })
}

pub fn appraise(
    prices: &[PriceRecord],
    subject_sq_ft: &str,
    is_rental: bool,
) -> Result<Vec<String>, AppraisalError> {
    compute(prices, subject_sq_ft, is_rental).map(|a| a.sentences())
}
