use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathkit::path::{file_name, parent, resolve, split, subpath, trim_path};
use pathkit::split::split_any;

fn bench_trim_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("trim_path");

    group.bench_function("clean_absolute", |b| {
        b.iter(|| trim_path(black_box("/absolute/path/to/file")));
    });

    group.bench_function("with_dots", |b| {
        b.iter(|| trim_path(black_box("/a/b/../c/./d")));
    });

    group.bench_function("many_dots", |b| {
        b.iter(|| trim_path(black_box("/a/b/c/d/../../e/f")));
    });

    group.bench_function("repeated_separators", |b| {
        b.iter(|| trim_path(black_box("//a///b////c/////")));
    });

    group.bench_function("malformed", |b| {
        b.iter(|| trim_path(black_box("/a/../../b")));
    });

    group.finish();
}

fn bench_trim_path_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("trim_path_depth");

    for depth in [1, 5, 10, 20, 50] {
        let path = "/dir".repeat(depth) + "/..";
        group.bench_with_input(BenchmarkId::from_parameter(depth), &path, |b, path| {
            b.iter(|| trim_path(black_box(path)));
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    group.bench_function("relative", |b| {
        b.iter(|| resolve(black_box("src/../lib/mod.rs"), black_box("/home/user/project")));
    });

    group.bench_function("absolute", |b| {
        b.iter(|| resolve(black_box("/etc/./hosts"), black_box("/home/user/project")));
    });

    group.finish();
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");
    let path = "/usr/local/share/doc/pathkit/README";

    group.bench_function("split", |b| b.iter(|| split(black_box(path))));
    group.bench_function("parent", |b| b.iter(|| parent(black_box(path))));
    group.bench_function("file_name", |b| b.iter(|| file_name(black_box(path))));
    group.bench_function("subpath", |b| b.iter(|| subpath(black_box(path))));

    group.bench_function("parent_chain", |b| {
        b.iter(|| {
            let mut current = black_box(path);
            let mut steps = 0;
            while !current.is_empty() {
                current = parent(current);
                steps += 1;
            }
            steps
        });
    });

    group.finish();
}

fn bench_split_any(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_any");

    group.bench_function("single_delimiter", |b| {
        b.iter(|| split_any(black_box("/usr/local/bin:/usr/bin:/bin"), black_box(":")));
    });

    group.bench_function("multiple_delimiters", |b| {
        b.iter(|| split_any(black_box("a,b;;c d,,e"), black_box(",; ")));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_trim_path,
    bench_trim_path_depth,
    bench_resolve,
    bench_decompose,
    bench_split_any
);
criterion_main!(benches);
