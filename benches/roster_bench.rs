//! Benchmarks for Markbook roster operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use markbook::Roster;

fn populated_roster(count: usize) -> Roster {
    let mut roster = Roster::new();
    for i in 0..count {
        roster
            .add(
                &format!("S{:04}", i),
                &format!("Student {}", i),
                [(i % 21) as u32, ((i * 7) % 21) as u32, ((i * 13) % 21) as u32],
                ((i * 31) % 101) as u32,
            )
            .unwrap();
    }
    roster
}

fn roster_benchmarks(c: &mut Criterion) {
    c.bench_function("add_1000", |b| {
        b.iter(|| black_box(populated_roster(1000).len()))
    });

    let roster = populated_roster(1000);

    c.bench_function("search_1000", |b| {
        b.iter(|| black_box(roster.search("Student 50").len()))
    });

    c.bench_function("statistics_1000", |b| {
        b.iter(|| black_box(roster.statistics().unwrap().average))
    });

    c.bench_function("sort_1000", |b| {
        b.iter(|| {
            let mut roster = populated_roster(1000);
            roster.sort_by_percentage(true);
            black_box(roster.len())
        })
    });
}

criterion_group!(benches, roster_benchmarks);
criterion_main!(benches);
