//! Benchmarks for the hot inspection paths: signature lookup against a
//! populated store, burst scanning over a long event log, and a rule-set
//! membership check.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use escudo::anomaly::BurstDetector;
use escudo::portrule::PortRuleSet;
use escudo::signature::SignatureStore;

fn bench_signature_lookup(c: &mut Criterion) {
    let signatures: Vec<String> = (0..1024).map(|i| format!("sig-{i:04}.bin")).collect();
    let store = SignatureStore::from_signatures(&signatures);

    let mut group = c.benchmark_group("signature_lookup");
    group.throughput(Throughput::Elements(1));
    group.bench_function("hit", |b| {
        b.iter(|| store.contains(black_box("sig-0512.bin")))
    });
    group.bench_function("miss_late", |b| {
        b.iter(|| store.contains(black_box("sig-0512.exe")))
    });
    group.bench_function("miss_early", |b| {
        b.iter(|| store.contains(black_box("unrelated-text")))
    });
    group.finish();
}

fn bench_burst_scan(c: &mut Criterion) {
    // Stride through a prime-sized code space so no window ever repeats and
    // the scan runs the full sequence.
    let events: Vec<i64> = (0..4096).map(|i| (i * 7 % 97) as i64).collect();
    let detector = BurstDetector::new(32, 8).unwrap();

    let mut group = c.benchmark_group("burst_scan");
    group.throughput(Throughput::Elements(events.len() as u64));
    group.bench_function("4k_events_no_hit", |b| {
        b.iter(|| detector.detect(black_box(&events)))
    });
    group.finish();
}

fn bench_port_check(c: &mut Criterion) {
    let rules = PortRuleSet::from_spec("20-22,80,443,8000-8999").unwrap();

    c.bench_function("port_check", |b| {
        b.iter(|| rules.is_allowed(black_box(8080)))
    });
}

criterion_group!(
    benches,
    bench_signature_lookup,
    bench_burst_scan,
    bench_port_check
);
criterion_main!(benches);
