use std::{borrow::Cow, time::Duration};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use slugger::{
    SlugOptions,
    context::Context,
    stage::{
        Stage, collapse_separators::CollapseSeparators, limit_words::LimitWords,
        lower_case::LowerCase, resolve::Resolve, strip_delimiter::StripDelimiter, trim::Trim,
    },
};
use std::hint::black_box;

const SAMPLES: &[&str] = &[
    "already-a-clean-slug",
    "  Hello   World -- Again  ",
    "Straße nach Łódź über Århus",
    "I ♥ ☢ and ☃ for €5",
];

// S is the concrete stage type (e.g. Trim, LowerCase, ...)
fn stage_bench<S: Stage>(c: &mut Criterion, stage: S, options: &SlugOptions) {
    let ctx = Context::new(options);
    let mut group = c.benchmark_group(stage.name());
    group.measurement_time(Duration::from_secs(2));
    for (i, &text) in SAMPLES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("needs_apply", i), text, |b, t| {
            b.iter(|| stage.needs_apply(black_box(t), &ctx))
        });
        group.bench_with_input(BenchmarkId::new("apply", i), text, |b, t| {
            b.iter(|| stage.apply(Cow::Borrowed(black_box(t)), &ctx).len())
        });
    }
    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let defaults = SlugOptions::default();
    let limited = SlugOptions {
        limit: std::num::NonZeroUsize::new(2),
        ..SlugOptions::default()
    };
    // Load the symbol table before measuring.
    let _ = slugger::slug("☢");

    stage_bench(c, Resolve, &defaults);
    stage_bench(c, LimitWords, &limited);
    stage_bench(c, Trim, &defaults);
    stage_bench(c, CollapseSeparators, &defaults);
    stage_bench(c, StripDelimiter, &defaults);
    stage_bench(c, LowerCase, &defaults);
}

criterion_group!(benches, bench_stages);
criterion_main!(benches);
