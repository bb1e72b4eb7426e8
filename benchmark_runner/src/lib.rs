use criterion::{black_box, BenchmarkId, Criterion};
use std::time::Duration;

macro_rules! run_group {
    ($crit:ident, $group:literal, $inputs:expr, $label:expr, $($name:literal -> $fun:expr),+,) => {{
        let mut group = $crit.benchmark_group($group);
        for input in $inputs {
            $(
                let id = BenchmarkId::new($name, $label(&input));
                group.bench_with_input(id, &input, |b, input| {
                    b.iter(|| $fun(black_box(*input)))
                });
            )+
        }
        group.finish();
    }};
}

fn input_label(input: &&str) -> String {
    input.to_string()
}

fn pair_label((left, right): &(&str, &str)) -> String {
    format!("{} vs {}", left, right)
}

fn compare_benchmarks(c: &mut Criterion) {
    run_group!(c, "compare", ::benchmarks::PAIRS.iter().copied(), pair_label,
        "software_version" -> ::benchmarks::software_version_compare,
        "version_compare" -> ::benchmarks::version_compare,
        "semver" -> ::benchmarks::semver,
    );
}

fn sort_benchmarks(c: &mut Criterion) {
    let mega = ::benchmarks::mega_input();
    let mut group = c.benchmark_group("sort");

    group.bench_with_input(BenchmarkId::new("cached", "mega"), &mega, |b, mega| {
        b.iter(|| ::benchmarks::sort_versions(black_box(mega)))
    });
    group.bench_with_input(BenchmarkId::new("uncached", "mega"), &mega, |b, mega| {
        b.iter(|| ::benchmarks::sort_uncached(black_box(mega)))
    });
    group.bench_with_input(
        BenchmarkId::new("version_compare", "mega"),
        &mega,
        |b, mega| b.iter(|| ::benchmarks::sort_version_compare(black_box(mega))),
    );

    group.finish();
}

fn crate_benchmarks(c: &mut Criterion) {
    run_group!(c, "crate_tokenize", ::benchmarks::INPUTS.iter().copied(), input_label,
        "tokenize" -> ::benchmarks::software_version_tokens,
    );
    run_group!(c, "crate_compare", ::benchmarks::PAIRS.iter().copied(), pair_label,
        "compare" -> ::benchmarks::software_version_compare,
    );
}

fn criterion(crate_only: bool) -> Criterion {
    let mut criterion = Criterion::default().with_plots();
    if crate_only {
        criterion = criterion
            .sample_size(1_000)
            .confidence_level(0.98)
            .warm_up_time(Duration::from_secs(10))
            .measurement_time(Duration::from_secs(20))
    };
    criterion.configure_from_args()
}

pub fn main() {
    let crate_only = std::env::args().any(|a| &*a == "crate");
    let mut criterion = criterion(crate_only);
    crate_benchmarks(&mut criterion);
    if !crate_only {
        compare_benchmarks(&mut criterion);
        sort_benchmarks(&mut criterion);
    }
    criterion.final_summary();
}
