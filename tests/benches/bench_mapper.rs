use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pathmap::{Bindings, PathMapper};

static PATTERN: &str = "/hello/world/[element]/[...element].page.json";
static PATH: &str = "/hello/world/2014-menu/additional-test/some.page.json";

pub fn compile_pattern(c: &mut Criterion) {
    c.bench_function("compile pattern", |b| {
        b.iter(|| black_box(PathMapper::new(black_box(PATTERN))).unwrap())
    });
}

pub fn test_path(c: &mut Criterion) {
    let mapper = PathMapper::new(PATTERN).unwrap();
    c.bench_function("test path", |b| b.iter(|| mapper.test(black_box(PATH))));
}

pub fn match_path(c: &mut Criterion) {
    let mapper = PathMapper::new(PATTERN).unwrap();
    c.bench_function("match path", |b| {
        b.iter(|| black_box(mapper.match_path(black_box(PATH))).unwrap())
    });
}

pub fn stringify_bindings(c: &mut Criterion) {
    let mapper = PathMapper::new(PATTERN).unwrap();
    let bindings = Bindings::from([("element", "2014-menu"), ("element", "additional-test/some")]);
    c.bench_function("stringify bindings", |b| {
        b.iter(|| black_box(mapper.stringify(black_box(&bindings))).unwrap())
    });
}

criterion_group!(
    bench_mapper,
    compile_pattern,
    test_path,
    match_path,
    stringify_bindings
);
criterion_main!(bench_mapper);
