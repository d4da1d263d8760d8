use datecalc_core::{difference, CalendarDate, PeriodBreakdown};

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::from_ymd(y, m, d).unwrap()
}

fn starts() -> Vec<CalendarDate> {
    let first = date(2023, 11, 25);
    (0..120).map(|n| first.add_days(n * 7 + n % 5).unwrap()).collect()
}

const OFFSETS: [i64; 12] = [0, 1, 2, 27, 28, 29, 30, 31, 59, 364, 365, 1500];

#[test]
fn inclusive_count_is_exclusive_plus_one() {
    for start in starts() {
        for offset in OFFSETS {
            let end = start.add_days(offset).unwrap();
            let inclusive = difference(start, end, true);
            let exclusive = difference(start, end, false);
            assert_eq!(inclusive.raw_days, offset);
            assert_eq!(exclusive.raw_days, offset);
            assert_eq!(inclusive.day_count, exclusive.day_count + 1);
            assert_eq!(exclusive.day_count, offset);
        }
    }
}

#[test]
fn breakdown_reconstructs_the_breakdown_end() {
    for start in starts() {
        for offset in OFFSETS {
            let end = start.add_days(offset).unwrap();

            let exclusive = difference(start, end, false).breakdown;
            assert_eq!(exclusive.apply_to(start), Some(end), "{start:?} -> {end:?}");
            assert!(exclusive.months < 12);

            let inclusive = difference(start, end, true).breakdown;
            let end_plus_one = end.add_days(1).unwrap();
            assert_eq!(inclusive.apply_to(start), Some(end_plus_one));
        }
    }
}

#[test]
fn breakdown_days_stay_below_the_next_month_step() {
    for start in starts() {
        for offset in OFFSETS {
            let end = start.add_days(offset).unwrap();
            let breakdown = difference(start, end, false).breakdown;
            let one_more_month = PeriodBreakdown {
                years: breakdown.years,
                months: breakdown.months + 1,
                days: 0,
            };
            let next_anchor = one_more_month.apply_to(start).unwrap();
            assert!(next_anchor > end, "{start:?} -> {end:?} gave {breakdown:?}");
        }
    }
}

#[test]
fn same_day_counts() {
    let d = date(2025, 7, 14);
    assert_eq!(difference(d, d, true).day_count, 1);
    assert_eq!(difference(d, d, false).day_count, 0);
    assert_eq!(difference(d, d, false).breakdown.to_string(), "(0 dias)");
    assert_eq!(difference(d, d, true).breakdown.to_string(), "(1 dia)");
}

#[test]
fn first_to_tenth_of_january() {
    let start = date(2025, 1, 1);
    let end = date(2025, 1, 10);

    let inclusive = difference(start, end, true);
    assert_eq!(inclusive.day_count, 10);
    assert_eq!(
        inclusive.breakdown,
        PeriodBreakdown {
            years: 0,
            months: 0,
            days: 10
        }
    );
    assert_eq!(inclusive.breakdown.to_string(), "(10 dias)");

    let exclusive = difference(start, end, false);
    assert_eq!(exclusive.day_count, 9);
    assert_eq!(exclusive.breakdown.to_string(), "(9 dias)");
}

#[test]
fn multi_year_span_renders_every_unit() {
    let span = difference(date(2020, 2, 29), date(2023, 4, 30), false);
    assert_eq!(
        span.breakdown,
        PeriodBreakdown {
            years: 3,
            months: 2,
            days: 1
        }
    );
    assert_eq!(span.breakdown.to_string(), "(3 anos, 2 meses e 1 dia)");
}

#[test]
fn inclusive_mode_can_complete_a_month() {
    // 01/01 .. 31/01 counted both ends is exactly one month.
    let span = difference(date(2025, 1, 1), date(2025, 1, 31), true);
    assert_eq!(span.day_count, 31);
    assert_eq!(span.breakdown.to_string(), "(1 mês)");
}
