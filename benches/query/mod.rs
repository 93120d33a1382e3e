use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use interval_avl::{Interval, IntervalMap, IntervalTree};

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("query");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the map.
    let mut rand = Lfsr::default();
    let mut t = IntervalMap::new();

    for _i in 0..n_values {
        t.insert(rand.next_interval(), 42_usize);
    }

    bench_iter(n_values, g, &t);
    bench_containing_point(n_values, g, &t);
    bench_containing_interval(n_values, g, &t);
    bench_overlapping_interval(n_values, g, &t);
    bench_contained_by_interval(n_values, g, &t);
    bench_deoverlap(n_values, g, &t);
}

fn bench_iter<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &IntervalMap<u16, usize>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "iter",
    };

    g.throughput(Throughput::Elements(n_values as _));
    // Values per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for v in t.iter() {
                black_box(v);
            }
        })
    });
}

macro_rules! query_bench {
    (
        $name:ident, $query:expr
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &IntervalMap<u16, usize>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                let query = $query;

                g.throughput(Throughput::Elements(n_values as _));
                // Values per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| {
                        for v in t.$name(&query) {
                            black_box(v);
                        }
                    })
                });
            }
        }
    };
}

query_bench!(containing_point, 4_200_u16);
query_bench!(containing_interval, Interval::new(4_200_u16, 4_300));
query_bench!(overlapping_interval, Interval::new(4_200_u16, 10_000));
query_bench!(contained_by_interval, Interval::new(4_200_u16, 30_000));

/// Merge a copy of all intervals in `t` into a set of non-overlapping
/// intervals.
fn bench_deoverlap<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &IntervalMap<u16, usize>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "deoverlap",
    };

    let t = t.iter().map(|(k, _)| *k).collect::<IntervalTree<_>>();

    g.throughput(Throughput::Elements(n_values as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| black_box(t.deoverlap()))
    });
}
