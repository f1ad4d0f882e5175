use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tsvchart::{Chart, Dataset, OptionTree, OptionValue, Series};

fn make_chart(rows: usize, series: usize) -> Chart {
    let mut options = OptionTree::new();
    options.insert("chart", "width", OptionValue::from(700i64));
    options.insert("chart", "title", OptionValue::from("Monthly Revenue"));
    options.insert("xAxis", "title", OptionValue::from("Amount"));
    options.insert("yAxis", "max", OptionValue::from(9000.5));
    Chart {
        data: Dataset {
            categories: (0..rows).map(|r| format!("row{}", r)).collect(),
            series: (0..series)
                .map(|i| Series {
                    name: format!("series{}", i),
                    data: (0..rows).map(|r| Some((r * series + i).to_string())).collect(),
                })
                .collect(),
        },
        options,
    }
}

pub fn encode_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_chart");
    for (name, chart) in [("small", make_chart(3, 2)), ("rows_1k", make_chart(1000, 4))] {
        let size = tsvchart::encode_to_string(&chart).unwrap().len();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(name, |b| {
            b.iter(|| black_box(tsvchart::encode_to_string(black_box(&chart)).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, encode_benchmarks);
criterion_main!(benches);
