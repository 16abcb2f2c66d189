use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use loc_report_core::{Language, classify};
use loc_report_engine::{ScanConfig, run};
use std::fs;
use std::hint::black_box;
use tempfile::TempDir;

const SOURCE: &str = "// header\nfn main() {\n    let x = 1;\n\n    println!(\"{x}\");\n}\n";

fn synthetic_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    for a in 0..8 {
        for b in 0..8 {
            let sub = dir.path().join(format!("d{a}/e{b}"));
            fs::create_dir_all(&sub).unwrap();
            for f in 0..8 {
                fs::write(sub.join(format!("f{f}.rs")), SOURCE.repeat(20)).unwrap();
            }
        }
    }
    dir
}

fn benchmark_classify(c: &mut Criterion) {
    let content = SOURCE.repeat(1000);
    c.bench_function("classify_rust_6k_lines", |b| {
        b.iter(|| black_box(classify(black_box(&content), Language::Rust)));
    });
}

fn benchmark_scan(c: &mut Criterion) {
    let tree = synthetic_tree();
    let mut group = c.benchmark_group("scan_512_files");
    for workers in [1usize, 4, 8] {
        let config = ScanConfig::builder()
            .roots(vec![tree.path().to_path_buf()])
            .workers(workers)
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(workers), &config, |b, config| {
            b.iter(|| black_box(run(config).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_classify, benchmark_scan);
criterion_main!(benches);
