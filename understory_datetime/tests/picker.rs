// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavioral tests for the `Datetime` picker.
//!
//! Each test drives the picker only through its public transitions and props,
//! the way a host toolkit would.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use understory_datetime::{
    CalendarProps, Content, DateSelect, Datetime, DatetimeProps, EventKind, FirstDayOfWeek,
    Interaction, OverlayState, RawDate, UiEvent,
};

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Shared record of notifications, in arrival order.
#[derive(Clone, Default)]
struct Journal(Rc<RefCell<Vec<String>>>);

impl Journal {
    fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    fn count(&self, entry: &str) -> usize {
        self.0.borrow().iter().filter(|e| *e == entry).count()
    }
}

fn journaled(journal: &Journal) -> DatetimeProps {
    let (open, close, change) = (journal.clone(), journal.clone(), journal.clone());
    DatetimeProps::<UiEvent>::new()
        .on_open(move |_, _| open.push("open"))
        .on_close(move |_, _| close.push("close"))
        .on_change(move |_, data| change.push(format!("change {}", data.value)))
}

#[test]
fn uncontrolled_open_then_close_notifies_once_each_in_order() {
    let journal = Journal::default();
    let mut picker = Datetime::new(journaled(&journal));
    let mut event = UiEvent::click();

    picker.open(&mut event);
    assert_eq!(picker.state(), OverlayState::Open);
    picker.close(&mut event);
    assert_eq!(picker.state(), OverlayState::Closed);

    assert_eq!(journal.entries(), ["open", "close"]);
}

#[test]
fn disabled_open_neither_transitions_nor_notifies() {
    let journal = Journal::default();
    let mut picker = Datetime::new(journaled(&journal).disabled(true));
    let revision = picker.revision();

    picker.open(&mut UiEvent::click());
    picker.handle_activation(&mut UiEvent::click());

    assert_eq!(picker.state(), OverlayState::Closed);
    assert_eq!(journal.count("open"), 0);
    assert_eq!(picker.revision(), revision);
}

#[test]
fn on_change_receives_props_and_proposed_value() {
    let observed = Rc::new(RefCell::new(Vec::new()));
    let sink = observed.clone();
    let props = DatetimeProps::new().on_change(move |_: &mut UiEvent, data| {
        sink.borrow_mut().push((data.value, data.props.default_value));
    });
    let mut picker = Datetime::new(props.default_value(at(2024, 1, 1)));

    picker.handle_date_selection(at(2024, 5, 6), &mut UiEvent::select());

    assert_eq!(*observed.borrow(), [(at(2024, 5, 6), Some(at(2024, 1, 1)))]);
    assert_eq!(picker.value(), Some(at(2024, 5, 6)));
}

#[test]
fn uncontrolled_selection_updates_value_and_closes() {
    let journal = Journal::default();
    let mut picker = Datetime::new(journaled(&journal).default_open(true));

    picker.handle_date_selection("2024-03-09", &mut UiEvent::select());

    assert_eq!(picker.value(), Some(at(2024, 3, 9)));
    assert_eq!(picker.state(), OverlayState::Closed);
    assert_eq!(journal.count("close"), 1);
    assert_eq!(journal.count("change 2024-03-09 00:00:00"), 1);
}

#[test]
fn controlled_selection_keeps_value_but_still_notifies() {
    let journal = Journal::default();
    let props = journaled(&journal).value(at(2024, 1, 1)).default_open(true);
    let mut picker = Datetime::new(props);

    picker.handle_date_selection(at(2024, 2, 2), &mut UiEvent::select());

    assert_eq!(picker.value(), Some(at(2024, 1, 1)));
    assert_eq!(picker.state(), OverlayState::Closed);
    assert_eq!(journal.entries(), ["change 2024-02-02 00:00:00", "close"]);
}

#[test]
fn selection_stops_propagation() {
    let mut picker: Datetime = Datetime::new(DatetimeProps::new().default_open(true));
    let mut event = UiEvent::select();
    picker.select_date(RawDate::TimestampMillis(0), &mut event);

    assert!(event.is_propagation_stopped());
    assert_eq!(picker.value(), Some(at(1970, 1, 1)));
}

#[test]
fn end_to_end_selection_updates_the_trigger_text() {
    let mut picker: Datetime = Datetime::new(
        DatetimeProps::new()
            .default_value(at(2024, 1, 1))
            .date_formatter(|v| v.format("%d.%m.%Y").to_string()),
    );
    assert_eq!(picker.formatted_date().as_deref(), Some("01.01.2024"));

    picker.open(&mut UiEvent::click());
    assert_eq!(picker.state(), OverlayState::Open);
    let day = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
    picker.handle_date_selection(day, &mut UiEvent::select());

    assert_eq!(picker.view().field.text, "10.02.2024");
    assert_eq!(picker.state(), OverlayState::Closed);
}

#[test]
fn time_mode_joins_date_and_time() {
    let value = NaiveDate::from_ymd_opt(2024, 7, 4)
        .unwrap()
        .and_hms_opt(18, 30, 0)
        .unwrap();
    let mut picker: Datetime = Datetime::new(DatetimeProps::new().value(value));
    assert_eq!(picker.formatted_date().as_deref(), Some("2024-07-04"));

    picker.set_props(DatetimeProps::new().value(value).time(true));
    assert_eq!(picker.formatted_date().as_deref(), Some("2024-07-04 18:30"));
}

#[test]
fn parent_takes_over_and_releases_open() {
    let mut picker: Datetime = Datetime::new(DatetimeProps::new());
    picker.open(&mut UiEvent::click());
    assert!(picker.is_open());

    let report = picker.set_props(DatetimeProps::new().open(false));
    assert!(report.changed());
    assert!(!picker.is_open());

    picker.toggle(&mut UiEvent::click());
    assert!(!picker.is_open());

    // Released: the last synced value stays, and the picker owns it again.
    picker.set_props(DatetimeProps::new());
    assert!(!picker.is_open());
    picker.toggle(&mut UiEvent::click());
    assert!(picker.is_open());
}

#[test]
fn repeated_renders_do_not_signal_changes() {
    let props: DatetimeProps = DatetimeProps::new().value(at(2024, 1, 1)).open(true);
    let mut picker = Datetime::new(props.clone());
    let revision = picker.revision();

    let first = picker.set_props(props.clone());
    let second = picker.set_props(props);

    assert!(!first.changed());
    assert!(!second.changed());
    assert_eq!(picker.revision(), revision);
}

#[test]
fn opening_click_is_invisible_to_click_away() {
    let mut picker: Datetime = Datetime::new(DatetimeProps::new());
    let mut click = UiEvent::click();

    picker.handle_activation(&mut click);
    assert!(!picker.handle_document_click(&mut click));
    assert!(picker.is_open());

    assert!(picker.handle_document_click(&mut UiEvent::click()));
    assert!(!picker.is_open());
}

#[test]
fn trigger_notifications_arrive_in_interaction_order() {
    let journal = Journal::default();
    let (down, focus, click, open, blur) = (
        journal.clone(),
        journal.clone(),
        journal.clone(),
        journal.clone(),
        journal.clone(),
    );
    let props = DatetimeProps::<UiEvent>::new()
        .on_mouse_down(move |_, _| down.push("mouse_down"))
        .on_focus(move |_, _| focus.push("focus"))
        .on_click(move |event, _| {
            click.push(format!("click stopped={}", event.is_propagation_stopped()));
        })
        .on_open(move |event, _| {
            open.push(format!("open stopped={}", event.is_propagation_stopped()));
        })
        .on_blur(move |_, _| blur.push("blur"));
    let mut picker = Datetime::new(props);

    picker.handle_mouse_down(&mut UiEvent::new(EventKind::MouseDown));
    picker.handle_focus(&mut UiEvent::new(EventKind::Focus));
    picker.handle_activation(&mut UiEvent::click());
    picker.handle_blur(&mut UiEvent::new(EventKind::Blur));

    assert_eq!(
        journal.entries(),
        [
            "mouse_down",
            "focus",
            "click stopped=false",
            "open stopped=true",
            "blur",
        ]
    );
    // Neither focus nor blur transitions without opting in.
    assert_eq!(picker.state(), OverlayState::Open);
}

#[test]
fn on_click_fires_when_closing_too() {
    let journal = Journal::default();
    let clicks = journal.clone();
    let props = journaled(&journal)
        .default_open(true)
        .on_click(move |_, _| clicks.push("click"));
    let mut picker = Datetime::new(props);

    picker.handle_activation(&mut UiEvent::click());

    assert_eq!(journal.entries(), ["click", "close"]);
    assert_eq!(picker.state(), OverlayState::Closed);
}

#[test]
fn calendar_receives_props_unchanged() {
    let mut content = Content::default();
    content.days_short = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"].map(String::from);
    content.today = String::from("Now-ish");
    let content = Rc::new(content);

    let picker: Datetime = Datetime::new(
        DatetimeProps::new()
            .range(true)
            .time(true)
            .first_day_of_week(FirstDayOfWeek::Monday)
            .content(content.clone()),
    );

    let expected = CalendarProps {
        content: content.clone(),
        first_day_of_week: FirstDayOfWeek::Monday,
        time: true,
        range: true,
    };
    assert_eq!(picker.calendar_props(), expected);
    assert_eq!(picker.view().calendar, expected);
    assert!(Rc::ptr_eq(&picker.calendar_props().content, &content));
    assert_eq!(picker.calendar_props().weekday_headers()[0], "Mo");
}

#[test]
fn calendar_defaults_are_single_month_sunday_first() {
    let picker: Datetime = Datetime::new(DatetimeProps::new());
    let calendar = picker.calendar_props();

    assert!(!calendar.range);
    assert!(!calendar.time);
    assert_eq!(calendar.first_day_of_week, FirstDayOfWeek::Sunday);
    assert_eq!(*calendar.content, Content::default());
}

#[derive(Clone, Debug)]
enum Action {
    Open,
    Close,
    Toggle,
    Activate,
    DocumentClick,
    Select(i64),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Open),
        Just(Action::Close),
        Just(Action::Toggle),
        Just(Action::Activate),
        Just(Action::DocumentClick),
        (0_i64..4_000_000_000_000).prop_map(Action::Select),
    ]
}

fn run(picker: &mut Datetime, action: &Action) {
    let mut event = UiEvent::click();
    match action {
        Action::Open => picker.open(&mut event),
        Action::Close => picker.close(&mut event),
        Action::Toggle => picker.toggle(&mut event),
        Action::Activate => picker.handle_activation(&mut event),
        Action::DocumentClick => {
            picker.handle_document_click(&mut event);
        }
        Action::Select(millis) => {
            picker.handle_date_selection(RawDate::TimestampMillis(*millis), &mut event);
        }
    }
}

proptest! {
    #[test]
    fn controlled_open_always_wins(
        open in any::<bool>(),
        actions in proptest::collection::vec(action(), 0..24),
    ) {
        let mut picker: Datetime = Datetime::new(DatetimeProps::new().open(open));
        for action in &actions {
            run(&mut picker, action);
            prop_assert_eq!(picker.is_open(), open);
        }
    }

    #[test]
    fn controlled_value_always_wins(
        day in 1_u32..28,
        actions in proptest::collection::vec(action(), 0..24),
    ) {
        let value = at(2023, 6, day);
        let mut picker: Datetime = Datetime::new(DatetimeProps::new().value(value));
        for action in &actions {
            run(&mut picker, action);
            prop_assert_eq!(picker.value(), Some(value));
        }
    }
}
