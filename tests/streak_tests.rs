use chrono::NaiveDate;
use habitrack::core::streak::{StreakSummary, calculate};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

#[test]
fn empty_input_has_no_streak() {
    assert_eq!(calculate(&[]), StreakSummary::default());
}

#[test]
fn single_day_is_a_streak_of_one() {
    let got = calculate(&[d("2025-03-10")]);
    assert_eq!(got.total, 1);
    assert_eq!(got.streak, 1);
}

#[test]
fn three_consecutive_days() {
    let got = calculate(&[d("2025-03-10"), d("2025-03-11"), d("2025-03-12")]);
    assert_eq!(got.total, 3);
    assert_eq!(got.streak, 3);
}

#[test]
fn order_of_input_does_not_matter() {
    let sorted = calculate(&[d("2025-03-10"), d("2025-03-11"), d("2025-03-12")]);
    let shuffled = calculate(&[d("2025-03-12"), d("2025-03-10"), d("2025-03-11")]);
    assert_eq!(sorted, shuffled);
}

#[test]
fn one_day_gap_breaks_the_run() {
    let got = calculate(&[d("2025-03-10"), d("2025-03-12")]);
    assert_eq!(got.total, 2);
    assert_eq!(got.streak, 1);
}

#[test]
fn longest_run_may_be_the_trailing_one() {
    let got = calculate(&[
        d("2025-03-01"),
        d("2025-03-02"),
        d("2025-03-06"),
        d("2025-03-07"),
        d("2025-03-08"),
    ]);
    assert_eq!(got.total, 5);
    assert_eq!(got.streak, 3);
}

#[test]
fn longest_run_may_be_the_leading_one() {
    let got = calculate(&[
        d("2025-03-01"),
        d("2025-03-02"),
        d("2025-03-03"),
        d("2025-03-07"),
        d("2025-03-08"),
    ]);
    assert_eq!(got.streak, 3);
}

#[test]
fn duplicate_days_do_not_extend_or_double_count() {
    // A repeated day is not "the next day"
    let got = calculate(&[d("2025-03-10"), d("2025-03-10"), d("2025-03-10")]);
    assert_eq!(got.total, 1);
    assert_eq!(got.streak, 1);
}

#[test]
fn duplicates_inside_a_run_are_tolerated() {
    let got = calculate(&[d("2025-03-10"), d("2025-03-11"), d("2025-03-11")]);
    assert_eq!(got.total, 2);
}

#[test]
fn month_boundary_is_still_consecutive() {
    let got = calculate(&[d("2025-02-27"), d("2025-02-28"), d("2025-03-01")]);
    assert_eq!(got.streak, 3);
}
