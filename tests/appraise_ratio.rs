use mls_comps::{
    appraise::{appraise, compute, parse_sq_ft},
    error::AppraisalError,
    numeric::{coerce, group_thousands, parse_amount},
    record::{Cell, PriceRecord},
};

fn sale_row(address: &str, list: &str, sold_per_sq_ft: &str) -> PriceRecord {
    PriceRecord {
        address: Cell::text(address),
        list_price: Cell::text(list),
        sold_price_per_sq_ft: Cell::text(sold_per_sq_ft),
        ..PriceRecord::default()
    }
}

fn sale_table() -> Vec<PriceRecord> {
    vec![
        sale_row("123 Palm Way", "$400,000", ""),
        sale_row("2 Alpha Ave", "$390,000", "$200.00"),
        sale_row("3 Beta Blvd", "$410,000", "220.00"),
    ]
}

#[test]
fn sale_appraisal_figures() {
    let a = compute(&sale_table(), "1000", false).unwrap();
    assert_eq!(a.comparisons, 2);
    assert!((a.comparison_mean - 210.0).abs() < 1e-9);
    assert!((a.estimated_value - 210_000.0).abs() < 1e-6);
    assert_eq!(format!("{:.2}", a.ratio), "1.90");
}

#[test]
fn sale_appraisal_sentences() {
    let sentences = appraise(&sale_table(), "1,000", false).unwrap();
    assert_eq!(
        sentences,
        vec![
            "Using the 2 comparable properties, the average sold $/sq ft = $210.00.".to_string(),
            "Applying this to 123 Palm Way's 1000 sq ft yields an estimated value of ~ $210000.00."
                .to_string(),
            "123 Palm Way ask of $400,000 is 1.90 times the estimated value.".to_string(),
        ]
    );
}

#[test]
fn subject_row_never_joins_the_mean() {
    let mut table = sale_table();
    table[0].sold_price_per_sq_ft = Cell::text("$9,999.00");
    let a = compute(&table, "1000", false).unwrap();
    assert!((a.comparison_mean - 210.0).abs() < 1e-9);
}

#[test]
fn rental_uses_list_price_per_sq_ft() {
    let table = vec![
        PriceRecord {
            address: Cell::text("45 Bay Dr #3"),
            list_price: Cell::text("$2,000"),
            list_price_per_sq_ft: Cell::Number(2.0),
            ..PriceRecord::default()
        },
        PriceRecord {
            list_price_per_sq_ft: Cell::Number(1.5),
            ..PriceRecord::default()
        },
        PriceRecord {
            list_price_per_sq_ft: Cell::Number(2.5),
            ..PriceRecord::default()
        },
        PriceRecord {
            list_price_per_sq_ft: Cell::NotANumber,
            ..PriceRecord::default()
        },
    ];
    let a = compute(&table, "1,000", true).unwrap();
    assert_eq!(a.comparisons, 3);
    assert!((a.comparison_mean - 2.0).abs() < 1e-9);
    assert_eq!(
        a.sentences()[0],
        "Using the 3 comparable properties, the average list $/sq ft = $2.00."
    );
    assert_eq!(
        a.sentences()[2],
        "45 Bay Dr #3 ask of $2,000 is 1.00 times the estimated value."
    );
}

#[test]
fn zero_comparisons_is_an_error() {
    let table = vec![sale_row("123 Palm Way", "$400,000", "")];
    let err = appraise(&table, "1000", false).unwrap_err();
    assert!(matches!(
        err,
        AppraisalError::UndefinedComparisonMean { comparisons: 0 }
    ));
}

#[test]
fn all_non_numeric_comparisons_is_an_error() {
    let table = vec![
        sale_row("123 Palm Way", "$400,000", ""),
        sale_row("2 Alpha Ave", "$390,000", "n/a"),
        sale_row("3 Beta Blvd", "$410,000", ""),
    ];
    assert!(matches!(
        compute(&table, "1000", false),
        Err(AppraisalError::UndefinedComparisonMean { comparisons: 2 })
    ));
}

#[test]
fn bad_sq_ft_is_fatal() {
    assert!(matches!(
        appraise(&sale_table(), "about 1000", false),
        Err(AppraisalError::InvalidSqFt { .. })
    ));
    assert!(matches!(
        appraise(&sale_table(), "", false),
        Err(AppraisalError::InvalidSqFt { .. })
    ));
    assert_eq!(parse_sq_ft(" 2,140 ").unwrap(), 2140);
    assert!(parse_sq_ft("2140.5").is_err());
}

#[test]
fn empty_table_and_missing_subject_price() {
    assert!(matches!(
        compute(&[], "1000", false),
        Err(AppraisalError::EmptyTable)
    ));

    let mut table = sale_table();
    table[0].list_price = Cell::Empty;
    assert!(matches!(
        compute(&table, "1000", false),
        Err(AppraisalError::SubjectPriceMissing { .. })
    ));
}

#[test]
fn zero_estimate_is_an_error() {
    let mut table = sale_table();
    table[1].sold_price_per_sq_ft = Cell::text("0");
    table[2].sold_price_per_sq_ft = Cell::text("0");
    assert!(matches!(
        compute(&table, "1000", false),
        Err(AppraisalError::ZeroEstimate)
    ));
}

#[test]
fn unnamed_subject_falls_back() {
    let mut table = sale_table();
    table[0].address = Cell::Empty;
    let sentences = appraise(&table, "1000", false).unwrap();
    assert!(sentences[1].starts_with("Applying this to the subject property's 1000 sq ft"));
}

#[test]
fn coercion_is_total() {
    assert_eq!(coerce(&Cell::text("$1,234.50")), Cell::Number(1234.5));
    assert_eq!(coerce(&Cell::Number(3.0)), Cell::Number(3.0));
    assert_eq!(coerce(&Cell::text("call agent")), Cell::NotANumber);
    assert_eq!(coerce(&Cell::Empty), Cell::NotANumber);
    assert_eq!(coerce(&Cell::NotANumber), Cell::NotANumber);
    assert_eq!(parse_amount("inf"), None);
}

#[test]
fn thousands_grouping() {
    assert_eq!(group_thousands(400_000.0), "400,000");
    assert_eq!(group_thousands(1_234_567.4), "1,234,567");
    assert_eq!(group_thousands(999.0), "999");
    assert_eq!(group_thousands(0.0), "0");
    assert_eq!(group_thousands(-2_500.0), "-2,500");
}
