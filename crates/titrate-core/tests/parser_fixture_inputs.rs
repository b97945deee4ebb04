use titrate_core::analysis::{parse_series_source, parse_series_source_with_count};
use titrate_core::domain::TitrationError;

const REFERENCE_SOURCE: &str = "\
# weak acid vs strong base
0.0, 2.0
1.0, 2.1
2.0, 2.3
3.0, 2.8
4.0, 7.0
5.0, 11.0
6.0, 11.3
7.0, 11.5
8.0, 11.6
";

#[test]
fn reference_fixture_parses_into_nine_pairs() {
    let series = parse_series_source(REFERENCE_SOURCE).expect("valid source");
    assert_eq!(series.len(), 9);
    assert_eq!(series.volumes()[4], 4.0);
    assert_eq!(series.phs()[4], 7.0);
}

#[test]
fn mixed_separators_and_blank_lines_are_accepted() {
    let source = "0 2.0\n\n1.0,2.5\n  2.0 ,  3.0\n3.0\t4.5\n";
    let series = parse_series_source(source).expect("valid source");
    assert_eq!(series.volumes(), &[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(series.phs(), &[2.0, 2.5, 3.0, 4.5]);
}

#[test]
fn declared_count_gates_the_analysis_input() {
    let error = parse_series_source_with_count(REFERENCE_SOURCE, Some(10))
        .expect_err("wrong declared count should fail");
    assert_eq!(
        error,
        TitrationError::InputLengthMismatch {
            declared: 10,
            volumes: 9,
            phs: 9,
        }
    );

    let series = parse_series_source_with_count(REFERENCE_SOURCE, Some(9))
        .expect("matching declared count");
    assert_eq!(series.len(), 9);
}

#[test]
fn empty_source_fails_series_validation() {
    let error =
        parse_series_source("# only comments\n").expect_err("empty data should fail");
    assert_eq!(error, TitrationError::InsufficientPoints { actual: 0 });
}

#[test]
fn extra_columns_are_reported_with_the_offending_line() {
    let error = parse_series_source("0.0 2.0\n1.0 2.5 extra\n")
        .expect_err("three fields should fail");
    assert_eq!(
        error,
        TitrationError::MalformedSeriesLine {
            line: 2,
            reason: "expected 2 values, got 3".to_string(),
        }
    );
}

#[test]
fn unsorted_volumes_are_rejected_after_parsing() {
    let error = parse_series_source("0.0 2.0\n2.0 2.5\n1.0 3.0\n")
        .expect_err("unsorted volumes should fail");
    assert_eq!(
        error,
        TitrationError::NonIncreasingVolume {
            index: 2,
            previous: 2.0,
            current: 1.0,
        }
    );
}
