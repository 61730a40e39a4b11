use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use registry_explorer::parsers::{escape_bare_ampersands, parse_history_document, salvage_entries};

/// Generate a history document with N loans
fn generate_history(num_loans: usize, corrupt: bool) -> String {
    let mut content = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<history>\n");
    for i in 0..num_loans {
        let bank = if corrupt && i % 10 == 0 { "Smith & Sons" } else { "Alfa Bank" };
        content.push_str(&format!(
            "  <loan>\n    <id>{}</id>\n    <bank>{}</bank>\n    <amount>{}</amount>\n  </loan>\n",
            i,
            bank,
            i * 100
        ));
    }
    if !corrupt {
        content.push_str("</history>\n");
    }
    content
}

fn bench_parse_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_parsing");

    for size in [10, 100, 1_000].iter() {
        let clean = generate_history(*size, false);
        let corrupt = generate_history(*size, true);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("strict", size), size, |b, _| {
            b.iter(|| parse_history_document(black_box(&clean)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("sanitize_and_salvage", size), size, |b, _| {
            b.iter(|| {
                let sanitized = escape_bare_ampersands(black_box(&corrupt));
                match parse_history_document(&sanitized) {
                    Ok(entries) => entries.len(),
                    Err(_) => salvage_entries(&sanitized).len(),
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_history);
criterion_main!(benches);
