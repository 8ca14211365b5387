#![cfg(all(feature = "chrono", feature = "uuid"))]

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use pgrest::core::render_filter;
use pgrest::prelude::*;
use uuid::Uuid;

#[allow(dead_code)]
#[derive(PostgrestModel)]
#[table(name = "events")]
struct Event {
    #[column(primary_key)]
    id: Uuid,
    starts_at: chrono::DateTime<Utc>,
    local_time: NaiveDateTime,
    day: NaiveDate,
    at: NaiveTime,
}

fn render(predicate: Predicate<Event>) -> (String, String) {
    let filter = pgrest::core::compile_predicate(predicate, Event::schema()).unwrap();
    render_filter(&filter)
}

#[test]
fn test_uuid_literal_is_hyphenated_lowercase() {
    let id = Uuid::parse_str("67E55044-10B1-426F-9247-BB680E5FE0C8").unwrap();
    assert_eq!(
        render(Event::ID.eq(id)),
        ("id".into(), "eq.67e55044-10b1-426f-9247-bb680e5fe0c8".into())
    );
}

#[test]
fn test_datetime_literals_are_iso8601() {
    let utc = Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).unwrap();
    assert_eq!(
        render(Event::STARTS_AT.gte(utc)),
        ("starts_at".into(), "gte.2024-03-09T14:30:00Z".into())
    );

    let offset = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 9, 16, 30, 0)
        .unwrap();
    assert_eq!(
        Value::from(offset),
        Value::Scalar("2024-03-09T16:30:00+02:00".into())
    );

    let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    assert_eq!(render(Event::DAY.eq(day)), ("day".into(), "eq.2024-02-29".into()));

    let local = day.and_hms_milli_opt(8, 5, 3, 250).unwrap();
    assert_eq!(
        render(Event::LOCAL_TIME.lt(local)),
        ("local_time".into(), "lt.2024-02-29T08:05:03.250".into())
    );

    let at = NaiveTime::from_hms_opt(23, 59, 1).unwrap();
    assert_eq!(render(Event::AT.eq(at)), ("at".into(), "eq.23:59:01".into()));
}

#[test]
fn test_datetime_lists() {
    let days = [
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
    ];
    assert_eq!(
        render(Event::DAY.in_list(days)),
        ("day".into(), r#"in.("2024-01-01","2024-01-02")"#.into())
    );
}
