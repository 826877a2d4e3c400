use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no pages supplied")]
    NoPages,

    #[error("text unreadable: all {pages} page(s) are blank")]
    Unreadable { pages: usize },

    #[error("invalid extraction rule pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Error)]
pub enum AppraisalError {
    #[error("no subject property row; comparables alone cannot be appraised")]
    NoSubject,

    #[error("price table is empty; no subject row")]
    EmptyTable,

    #[error("subject living sq ft is not an integer: {raw:?}")]
    InvalidSqFt { raw: String },

    #[error("comparison mean is undefined: {comparisons} comparison row(s), none numeric")]
    UndefinedComparisonMean { comparisons: usize },

    #[error("subject list price is not numeric: {raw:?}")]
    SubjectPriceMissing { raw: String },

    #[error("estimated value is zero; ratio undefined")]
    ZeroEstimate,
}
