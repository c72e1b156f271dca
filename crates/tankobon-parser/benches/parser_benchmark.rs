//! Benchmarks for tankobon-parser.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tankobon_parser::{parse, rules, LibraryType, ParseContext, ParseEngine};

const MANGA_SAMPLES: &[&str] = &[
    "/manga/Naruto/Naruto v01.cbz",
    "/manga/One Piece/One Piece c0982.cbz",
    "/manga/Gintama/Gintama v01c001.cbz",
    "/manga/Tower of God/Tower of God S01 014.cbz",
    "/manga/[Group] Vinland Saga - Vol 03 [Digital].cbz",
];

const COMIC_SAMPLES: &[&str] = &[
    "/comics/Batman/Batman #12.cbz",
    "/comics/Batman/Batman 2016 005.cbr",
    "/comics/Asterix/Asterix T01.cbz",
    "/comics/Batman/Batman 001 (2016).cbz",
];

const FALLBACK_SAMPLES: &[&str] = &[
    "/manga/Berserk/Vol 02/001.cbz",
    "/manga/Berserk/Specials/Artbook.cbz",
    "/manga/Some Series/Some Series SP01.cbz",
];

fn bench_parse_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_single");

    group.bench_function("volume", |b| {
        b.iter(|| parse(black_box("/manga/Naruto/Naruto v01.cbz"), LibraryType::Manga))
    });

    group.bench_function("chapter", |b| {
        b.iter(|| parse(black_box("/manga/One Piece/One Piece c0982.cbz"), LibraryType::Manga))
    });

    group.bench_function("comic_issue", |b| {
        b.iter(|| parse(black_box("/comics/Batman/Batman #12.cbz"), LibraryType::Comic))
    });

    group.finish();
}

fn bench_parse_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_batch");

    group.throughput(Throughput::Elements(MANGA_SAMPLES.len() as u64));
    group.bench_function("manga", |b| {
        b.iter(|| {
            for sample in MANGA_SAMPLES {
                black_box(parse(black_box(sample), LibraryType::Manga));
            }
        })
    });

    group.throughput(Throughput::Elements(COMIC_SAMPLES.len() as u64));
    group.bench_function("comics", |b| {
        b.iter(|| {
            for sample in COMIC_SAMPLES {
                black_box(parse(black_box(sample), LibraryType::Comic));
            }
        })
    });

    let engine = ParseEngine::basic();
    let ctx = ParseContext::builder().library_root("/manga").build();
    group.throughput(Throughput::Elements(FALLBACK_SAMPLES.len() as u64));
    group.bench_function("folder_fallback", |b| {
        b.iter(|| {
            for sample in FALLBACK_SAMPLES {
                black_box(engine.parse(black_box(sample), &ctx, None));
            }
        })
    });

    group.finish();
}

fn bench_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules");

    for lt in [LibraryType::Manga, LibraryType::Comic, LibraryType::Book] {
        group.bench_with_input(
            BenchmarkId::new("series_volume_chapter", lt),
            &lt,
            |b, &lt| {
                b.iter(|| {
                    let text = black_box("[Group] Vinland Saga - Vol 03 Ch 12 [Digital]");
                    (
                        rules::parse_series(text, lt),
                        rules::parse_volume(text, lt),
                        rules::parse_chapter(text, lt),
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse_single, bench_parse_batch, bench_rules);

criterion_main!(benches);
