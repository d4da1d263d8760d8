use datecalc_core::{format_date, CalcError, CalendarDate, WEEKDAY_NAMES};

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::from_ymd(y, m, d).unwrap()
}

/// Every day from 2023-01-01 through 2025-12-31.
fn sample_days() -> Vec<CalendarDate> {
    let first = date(2023, 1, 1);
    (0..1096).map(|n| first.add_days(n).unwrap()).collect()
}

#[test]
fn parse_then_format_preserves_the_calendar_day() {
    for day in sample_days() {
        let text = day.to_short_string();
        let parsed = CalendarDate::parse(&text, "Data inicial").unwrap();
        assert_eq!(parsed, day);

        let rendered = format_date(parsed);
        assert!(rendered.starts_with(&text), "{rendered} should start with {text}");
        assert!(rendered.ends_with(&format!("({})", parsed.weekday_name())));
    }
}

#[test]
fn impossible_day_is_invalid_date_format() {
    let err = CalendarDate::parse("31/02/2025", "Data inicial").unwrap_err();
    assert_eq!(
        err,
        CalcError::InvalidDateFormat {
            field: "Data inicial".to_string(),
            input: "31/02/2025".to_string(),
        }
    );
    assert!(err.to_string().contains("31/02/2025"));
    assert!(err.to_string().starts_with("Data inicial"));
}

#[test]
fn weekday_table_is_monday_first() {
    // 2024-12-30 was a Monday.
    let monday = date(2024, 12, 30);
    for (offset, name) in WEEKDAY_NAMES.iter().enumerate() {
        let day = monday.add_days(offset as i64).unwrap();
        assert_eq!(day.weekday_index(), offset);
        assert_eq!(day.weekday_name(), *name);
    }
}

#[test]
fn add_days_has_an_additive_inverse() {
    for day in sample_days().into_iter().step_by(37) {
        for n in [0_i64, 1, 9, 28, 29, 30, 31, 365, 366, 1000, -1, -59, -400, 100_000] {
            let moved = day.add_days(n).unwrap();
            assert_eq!(moved.add_days(-n).unwrap(), day, "day={day:?} n={n}");
            assert_eq!(day.days_until(moved), n);
        }
    }
}

#[test]
fn serde_uses_short_text_and_validates_on_read() {
    let json = serde_json::to_value(date(2025, 1, 10)).unwrap();
    assert_eq!(json, "10/01/2025");

    let decoded: CalendarDate = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, date(2025, 1, 10));

    let err = serde_json::from_value::<CalendarDate>(serde_json::json!("30/02/2024")).unwrap_err();
    assert!(err.to_string().contains("30/02/2024"), "unexpected error: {err}");
}

#[test]
fn serde_round_trips_the_supported_year_bounds() {
    for text in ["01/01/0001", "31/12/9999"] {
        let parsed = CalendarDate::parse(text, "Data inicial").unwrap();
        let json = serde_json::to_string(&parsed).unwrap();
        let decoded: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, parsed);
        assert_eq!(decoded.to_short_string(), text);
    }
    assert!(serde_json::from_value::<CalendarDate>(serde_json::json!("01/01/0000")).is_err());
}
