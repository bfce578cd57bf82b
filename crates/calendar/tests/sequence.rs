use jiff::ToSpan;
use jiff::civil::{Weekday, date};
use usdm_calendar::{CalendarError, DateSequence, align_to_weekday, weekly_dates};

#[test]
fn consecutive_elements_differ_by_exactly_seven_days() {
    let seq =
        DateSequence::generate(date(2000, 1, 4), date(2003, 6, 30), Weekday::Tuesday).unwrap();
    for pair in seq.as_slice().windows(2) {
        let gap = pair[1] - pair[0];
        assert_eq!(gap.get_days(), 7, "{} -> {}", pair[0], pair[1]);
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn first_element_is_earliest_aligned_date_on_or_after_anchor() {
    for offset in 0..7 {
        let anchor = date(2000, 1, 2).checked_add(offset.days()).unwrap();
        let seq =
            DateSequence::generate(anchor, date(2000, 12, 31), Weekday::Tuesday).unwrap();
        let first = seq.first();
        assert_eq!(first.weekday(), Weekday::Tuesday);
        assert!(first >= anchor);
        assert!((first - anchor).get_days() < 7);
    }
}

#[test]
fn no_element_past_the_upper_bound() {
    let last = date(2020, 7, 7);
    let seq = DateSequence::generate(date(2000, 1, 4), last, Weekday::Tuesday).unwrap();
    assert_eq!(seq.last(), last);
    assert!(seq.iter().all(|d| d <= last));
}

#[test]
fn every_element_on_release_weekday() {
    let seq =
        DateSequence::generate(date(2000, 1, 1), date(2001, 12, 31), Weekday::Tuesday).unwrap();
    assert!(seq.iter().all(|d| d.weekday() == Weekday::Tuesday));
}

#[test]
fn spring_forward_week_neither_skipped_nor_duplicated() {
    // US Eastern spring-forward on Sunday 2024-03-10 sits between the
    // Tuesdays Mar 5 and Mar 12. Civil-day stepping must produce each
    // surrounding Tuesday exactly once.
    let seq =
        DateSequence::generate(date(2024, 2, 1), date(2024, 4, 1), Weekday::Tuesday).unwrap();
    let march: Vec<_> = seq.iter().filter(|d| d.month() == 3).collect();
    assert_eq!(
        march,
        vec![
            date(2024, 3, 5),
            date(2024, 3, 12),
            date(2024, 3, 19),
            date(2024, 3, 26),
        ]
    );
}

#[test]
fn fall_back_week_neither_skipped_nor_duplicated() {
    // Fall-back on Sunday 2024-11-03 sits between Oct 29 and Nov 5.
    let seq =
        DateSequence::generate(date(2024, 10, 1), date(2024, 11, 30), Weekday::Tuesday).unwrap();
    let around: Vec<_> = seq
        .iter()
        .filter(|d| *d >= date(2024, 10, 22) && *d <= date(2024, 11, 12))
        .collect();
    assert_eq!(
        around,
        vec![
            date(2024, 10, 22),
            date(2024, 10, 29),
            date(2024, 11, 5),
            date(2024, 11, 12),
        ]
    );
}

#[test]
fn alignment_and_generation_agree() {
    let anchor = date(2010, 6, 3);
    let aligned = align_to_weekday(anchor, Weekday::Tuesday).unwrap();
    let dates = weekly_dates(anchor, date(2010, 8, 1), Weekday::Tuesday).unwrap();
    assert_eq!(dates[0], aligned);
}

#[test]
fn bound_before_aligned_anchor_is_an_error() {
    let err =
        DateSequence::generate(date(2024, 3, 6), date(2024, 3, 11), Weekday::Tuesday).unwrap_err();
    assert!(matches!(err, CalendarError::EmptyRange { .. }));
}
