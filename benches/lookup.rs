use criterion::{black_box, criterion_group, criterion_main, Criterion};

use unichar::{character, traverse, UnicodeBlock, UnicodeScript};

const TEXT: &str = "Lorem ipsum dolor sit amet, \u{3053}\u{3093}\u{306B}\u{3061}\u{306F}, \
\u{41F}\u{440}\u{438}\u{432}\u{435}\u{442} \u{1F600}\u{1D400}\u{1D401} \u{5B9}\u{5D0}\u{5D1} 0123456789";

fn classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    group.bench_function("get_type/bmp", |b| {
        b.iter(|| {
            let mut n = 0u32;
            for cp in 0..0x10000 {
                n += u32::from(character::get_type(black_box(cp)).to_u8());
            }
            n
        });
    });
    group.bench_function("is_letter/latin1", |b| {
        b.iter(|| (0..0x100).filter(|&cp| character::is_letter(black_box(cp))).count());
    });
    group.bench_function("is_letter/all", |b| {
        b.iter(|| {
            (0..=0x10FFFF)
                .step_by(17)
                .filter(|&cp| character::is_letter(black_box(cp)))
                .count()
        });
    });
    group.bench_function("to_upper_case/bmp", |b| {
        b.iter(|| {
            (0..0x10000)
                .map(|cp| character::to_upper_case(black_box(cp)))
                .fold(0u32, u32::wrapping_add)
        });
    });
    group.finish();
}

fn traversal(c: &mut Criterion) {
    let units: Vec<u16> = TEXT.repeat(64).encode_utf16().collect();
    let mut group = c.benchmark_group("traverse");
    group.bench_function("code_point_count", |b| {
        b.iter(|| traverse::code_point_count(black_box(units.as_slice()), 0, units.len()));
    });
    group.bench_function("code_points", |b| {
        b.iter(|| traverse::code_points(black_box(units.as_slice())).count());
    });
    group.bench_function("offset_by_code_points", |b| {
        let n = traverse::code_point_count(units.as_slice(), 0, units.len()).unwrap();
        b.iter(|| traverse::offset_by_code_points(black_box(units.as_slice()), 0, n as isize));
    });
    group.finish();
}

fn index(c: &mut Criterion) {
    let mut group = c.benchmark_group("index");
    group.bench_function("UnicodeBlock::of", |b| {
        b.iter(|| {
            (0..=0x10FFFF)
                .step_by(31)
                .filter_map(|cp| UnicodeBlock::of(black_box(cp)).ok().flatten())
                .count()
        });
    });
    group.bench_function("UnicodeScript::of", |b| {
        b.iter(|| {
            (0..=0x10FFFF)
                .step_by(31)
                .filter_map(|cp| UnicodeScript::of(black_box(cp)).ok())
                .count()
        });
    });
    group.bench_function("UnicodeBlock::for_name", |b| {
        let names = ["Basic Latin", "CJK_UNIFIED_IDEOGRAPHS", "greekandcoptic", "Hiragana"];
        b.iter(|| {
            names
                .iter()
                .filter(|name| UnicodeBlock::for_name(black_box(name)).is_ok())
                .count()
        });
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(std::time::Duration::from_millis(100))
        .measurement_time(std::time::Duration::from_millis(500))
        .sample_size(10);
    targets = classify, traversal, index
}
criterion_main!(benches);
