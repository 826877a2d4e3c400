use mls_comps::variant::{ReportVariant, classify, has_report_title};

#[test]
fn residential_title_any_case() {
    for text in [
        "Residential Customer Report 1 Main St, Town",
        "RESIDENTIAL CUSTOMER REPORT",
        "header\nresidential customer report\nfooter",
    ] {
        assert_eq!(classify(text), ReportVariant::Residential, "{text}");
    }
}

#[test]
fn everything_else_is_rental() {
    for text in [
        "Rental Customer Report 45 Bay Dr, Naples",
        "Commercial Listing Summary",
        "",
        "residential customer",
    ] {
        assert_eq!(classify(text), ReportVariant::Rental, "{text}");
    }
}

#[test]
fn report_title_detection() {
    assert!(has_report_title("Rental Customer Report"));
    assert!(has_report_title("residential customer report"));
    assert!(!has_report_title("LIVSQFT: 2,140"));
}
