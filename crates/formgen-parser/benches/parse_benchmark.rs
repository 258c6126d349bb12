//! Parser benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use formgen_parser::parse_header;

const SIMPLE_HEADER: &str = r#"
struct FormatStyle {
  bool SortIncludes;
  unsigned ColumnLimit;
};
"#;

fn medium_header() -> String {
    let mut source = String::from("namespace clang {\nstruct FormatStyle {\n");
    for i in 0..200 {
        source.push_str(&format!(
            "  /// Option number {i}.\n  enum Kind{i} : int8_t {{ K{i}_A, K{i}_B, K{i}_C }};\n  Kind{i} Option{i};\n"
        ));
        source.push_str(&format!("  std::vector<std::string> List{i};\n"));
    }
    source.push_str("};\n}\n");
    source
}

fn parse_simple(c: &mut Criterion) {
    c.bench_function("parse_simple", |b| {
        b.iter(|| parse_header(black_box(SIMPLE_HEADER)))
    });
}

fn parse_medium(c: &mut Criterion) {
    let source = medium_header();
    c.bench_function("parse_medium", |b| {
        b.iter(|| parse_header(black_box(&source)))
    });
}

criterion_group!(benches, parse_simple, parse_medium);
criterion_main!(benches);
