// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading localization bundles from JSON.

#![cfg(feature = "serde")]

use understory_datetime::{Content, FirstDayOfWeek};

#[test]
fn german_bundle_from_json() {
    let json = r#"{
        "days_short": ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
        "days_full": ["Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag"],
        "months": ["Januar", "Februar", "März", "April", "Mai", "Juni", "Juli",
                   "August", "September", "Oktober", "November", "Dezember"],
        "months_short": ["Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul",
                         "Aug", "Sep", "Okt", "Nov", "Dez"],
        "today": "Heute",
        "now": "Jetzt",
        "am": "vorm.",
        "pm": "nachm."
    }"#;

    let content: Content = serde_json::from_str(json).unwrap();
    assert_eq!(content.month_name(3), Some("März"));
    assert_eq!(
        content.weekday_headers(FirstDayOfWeek::Monday),
        ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"]
    );

    let back: Content = serde_json::from_str(&serde_json::to_string(&content).unwrap()).unwrap();
    assert_eq!(back, content);
}

#[test]
fn first_day_of_week_is_an_index() {
    assert_eq!(serde_json::to_string(&FirstDayOfWeek::Monday).unwrap(), "1");
    assert_eq!(
        serde_json::from_str::<FirstDayOfWeek>("0").unwrap(),
        FirstDayOfWeek::Sunday
    );
    assert!(serde_json::from_str::<FirstDayOfWeek>("7").is_err());
}

#[test]
fn short_day_lists_are_rejected() {
    let json = r#"{"days_short": ["S"], "days_full": [], "months": [], "months_short": [],
        "today": "", "now": "", "am": "", "pm": ""}"#;
    assert!(serde_json::from_str::<Content>(json).is_err());
}
