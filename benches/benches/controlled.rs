// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_controlled` + `understory_datetime`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Once;
use std::vec::Vec;

use chrono::NaiveDate;
use understory_controlled::{
    ControlledKey, ControlledPropSet, ExternalProps, ShadowState, StateUpdate, initialize,
    reconcile, try_set,
};
use understory_datetime::{Datetime, DatetimeProps, UiEvent};

struct Fixture {
    set: ControlledPropSet,
    keys: Vec<ControlledKey<u32>>,
}

fn fixture(n: usize) -> Fixture {
    let mut set = ControlledPropSet::new();
    let keys = (0..n)
        .map(|i| {
            let name: &'static str = Box::leak(format!("k{i}").into_boxed_str());
            set.declare(name, 0_u32)
        })
        .collect();
    Fixture { set, keys }
}

/// Controls every other key; the rest get a default.
fn half_controlled(f: &Fixture, value: u32) -> ExternalProps {
    let mut props = ExternalProps::new();
    for (i, key) in f.keys.iter().enumerate() {
        if i % 2 == 0 {
            props.set_controlled(*key, value);
        } else {
            props.set_default(*key, value);
        }
    }
    props
}

fn bench_engine(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: ShadowState={} ExternalProps={} ErasedValue={}",
            core::mem::size_of::<ShadowState>(),
            core::mem::size_of::<ExternalProps>(),
            core::mem::size_of::<understory_controlled::ErasedValue>(),
        );
    });

    let mut group = c.benchmark_group("controlled/engine");
    for n in [2_usize, 8, 32] {
        let f = fixture(n);
        let props = half_controlled(&f, 1);
        let next = half_controlled(&f, 2);

        group.bench_function(BenchmarkId::new("initialize", n), |b| {
            b.iter(|| black_box(initialize(&f.set, &props)))
        });

        group.bench_function(BenchmarkId::new("reconcile_noop", n), |b| {
            let mut shadow = initialize(&f.set, &props);
            b.iter(|| black_box(reconcile(&f.set, &props, &props, &mut shadow)))
        });

        group.bench_function(BenchmarkId::new("reconcile_sync", n), |b| {
            b.iter_batched(
                || initialize(&f.set, &props),
                |mut shadow| black_box(reconcile(&f.set, &props, &next, &mut shadow)),
                BatchSize::SmallInput,
            )
        });

        group.bench_function(BenchmarkId::new("try_set_all", n), |b| {
            let mut shadow = initialize(&f.set, &props);
            b.iter_batched(
                || {
                    let mut update = StateUpdate::new();
                    for key in &f.keys {
                        update.insert(*key, 7);
                    }
                    update
                },
                |update| black_box(try_set(update, &f.set, &props, &mut shadow)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_picker(c: &mut Criterion) {
    let day = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
    let mut group = c.benchmark_group("datetime/picker");

    group.bench_function("activate_and_select", |b| {
        b.iter_batched(
            || Datetime::new(DatetimeProps::<UiEvent>::new()),
            |mut picker| {
                picker.handle_activation(&mut UiEvent::click());
                picker.handle_date_selection(day, &mut UiEvent::select());
                black_box(picker.revision())
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("view", |b| {
        let picker = Datetime::new(
            DatetimeProps::<UiEvent>::new()
                .time(true)
                .default_value(day.and_hms_opt(9, 30, 0).unwrap()),
        );
        b.iter(|| black_box(picker.view()))
    });

    group.finish();
}

criterion_group!(benches, bench_engine, bench_picker);
criterion_main!(benches);
