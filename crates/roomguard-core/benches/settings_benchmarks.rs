//! Performance benchmarks for roomguard-core.
//!
//! Run with: cargo bench -p roomguard-core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use roomguard_core::config::Config;
use roomguard_core::settings::{
    ListSetting, NumberSetting, ProtectionSetting, Settings, StringListSetting,
};

/// Benchmark number parsing and validation.
fn bench_number_parse_validate(c: &mut Criterion) {
    let setting = NumberSetting::new(10.0, Some(1.0), Some(1000.0));

    c.bench_function("number_parse_validate", |b| {
        b.iter(|| {
            setting
                .from_string(black_box("500"))
                .is_some_and(|n| setting.validate(&n))
        });
    });
}

/// Benchmark list add/remove at different list sizes.
fn bench_list_add_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_add_remove");

    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("entries", size), size, |b, &size| {
            let setting =
                StringListSetting::new((0..size).map(|i| format!("@user{i}:example.org")));
            let missing = "@nobody:example.org".to_string();

            b.iter(|| {
                let added = setting.add_value(black_box(missing.clone()));
                let removed = setting.remove_value(black_box(&missing));
                (added.len(), removed.len())
            });
        });
    }

    group.finish();
}

/// Benchmark applying a parsed config onto a settings set.
fn bench_config_apply(c: &mut Criterion) {
    let config: Config = json5::from_str(
        r#"{ protections: { Flood: { settings: {
            maxPerMinute: 25,
            allowlist: ["@a:example.org", "@b:example.org", "@c:example.org"],
        } } } }"#,
    )
    .unwrap();

    let template = Settings::new()
        .with(
            "maxPerMinute",
            NumberSetting::new(10.0, Some(1.0), Some(1000.0)),
        )
        .with("allowlist", StringListSetting::default());

    c.bench_function("config_apply", |b| {
        b.iter_with_setup(
            || template.clone(),
            |mut settings| config.apply(black_box("Flood"), &mut settings).unwrap(),
        );
    });
}

criterion_group!(
    benches,
    bench_number_parse_validate,
    bench_list_add_remove,
    bench_config_apply,
);
criterion_main!(benches);
