use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use metron::area::Area;
use metron::length::{Length, CENTIMETER, KILOMETER};
use metron::mass::Mass;
use metron::mechanics::{Energy, Velocity};
use metron::temperature::{Temperature, CELSIUS, FAHRENHEIT};
use metron::time::Time;
use metron::volume::Volume;
use metron::{times, Measure, UnitRegistry};
use std::hint::black_box;

fn bench_unit_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit_conversion");

    group.bench_function("kilometer_to_centimeter", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let d = Measure::<Length>::in_unit(black_box(i as f64 * 0.5), &KILOMETER);
                black_box(d.amount_in(&CENTIMETER));
            }
        });
    });

    group.bench_function("celsius_to_fahrenheit", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let t = Measure::<Temperature>::in_unit(black_box(i as f64 * 0.1), &CELSIUS);
                black_box(t.amount_in(&FAHRENHEIT));
            }
        });
    });

    group.finish();
}

fn bench_checked_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("checked_arithmetic");

    let area = Measure::<Area>::new(2.0);
    let length = Measure::<Length>::new(3.0);
    group.bench_function("times_volume", |b| {
        b.iter(|| times::<Volume, _, _>(black_box(area), black_box(length)));
    });

    let mass = Measure::<Mass>::new(4.0);
    let speed = Measure::<Length>::new(100.0)
        .divide::<Velocity, _>(Measure::<Time>::new(20.0))
        .unwrap();
    group.bench_function("product_kinetic_energy", |b| {
        b.iter(|| {
            metron::product::<Energy, _>((black_box(mass).raised(1), black_box(speed).raised(2)))
        });
    });

    group.finish();
}

fn bench_symbol_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("symbol_resolution");

    let registry = UnitRegistry::standard().unwrap();
    for symbol in ["cm", "CM", "°C", "kWh"] {
        group.bench_with_input(BenchmarkId::new("resolve", symbol), &symbol, |b, input| {
            b.iter(|| registry.resolve(black_box(input)));
        });
    }

    group.bench_function("parse_measure", |b| {
        b.iter(|| registry.parse_measure(black_box("12.5 cm")));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_unit_conversion,
    bench_checked_arithmetic,
    bench_symbol_resolution
);
criterion_main!(benches);
