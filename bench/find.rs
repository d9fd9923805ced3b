use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use scanpat::Context;
use scanpat::cursor::Text;

static HAYSTACK: &str =
    "the quick brown fox jumps over the lazy dog while an apple and an orange sit on the table";

fn bench_find(c: &mut Criterion) {
    let ctx = Context::init();
    let pattern = ctx
        .compile(Text::chars("( 'apple' | 'orange' | 'pear' )"))
        .expect("pattern compiles");

    c.bench_function("str find", {
        move |b| b.iter(|| black_box(HAYSTACK).find("apple").is_some())
    });

    c.bench_function("scanpat find", {
        move |b| {
            b.iter(|| {
                let mut scanner = ctx.start(pattern.clone(), Text::chars(black_box(HAYSTACK)));
                scanner.find().is_some()
            })
        }
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().configure_from_args();
    targets = bench_find
);

criterion_main!(benches);
