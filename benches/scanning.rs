use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reclist::{from_str, to_string, Record, Scanner, Writer};

fn planet(i: usize) -> Record {
    let mut rec = Record::new("planet", &format!("Planet {}", i)).unwrap();
    rec.set("radius", &format!("{}.{}", i % 11, i));
    rec.set("mass", &format!("{}", i * 17));
    rec.set("gravity", "0.38");
    rec.set("moons", "Phobos Deimos");
    rec.set(
        "descrip",
        "A rocky planet with a thin atmosphere.\nIt is often referred as the \"Red Planet\".",
    );
    rec
}

fn corpus(size: usize) -> String {
    let records: Vec<Record> = (0..size).map(planet).collect();
    to_string(&records)
}

fn benchmark_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    for size in [10, 100, 1000].iter() {
        let text = corpus(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| Scanner::from_str(black_box(text)).count())
        });
    }
    group.finish();
}

fn benchmark_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write");

    for size in [10, 100, 1000].iter() {
        let records: Vec<Record> = (0..*size).map(planet).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| {
                let mut writer = Writer::new(Vec::with_capacity(64 * 1024));
                writer.write_all(black_box(records)).unwrap();
                writer.into_inner().unwrap()
            })
        });
    }
    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let text = corpus(100);

    c.bench_function("roundtrip_100", |b| {
        b.iter(|| {
            let records = from_str(black_box(&text)).unwrap();
            to_string(&records)
        })
    });
}

criterion_group!(benches, benchmark_scan, benchmark_write, benchmark_roundtrip);
criterion_main!(benches);
