//! Basic benchmarks for the `fixed_list` crate.
//!
//! The allocation report printed at the end is expected to show zero bytes for every operation.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::iter;
use std::time::Instant;

use alloc_tracker::Allocator;
use criterion::{Criterion, criterion_group, criterion_main};
use fixed_list::FixedList;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

type TestItem = usize;
const TEST_VALUE: TestItem = 1024;

const CAPACITY: usize = 128;

type TestList = FixedList<TestItem, CAPACITY>;

fn full_list() -> TestList {
    iter::repeat_n(TEST_VALUE, CAPACITY).collect()
}

fn entrypoint(c: &mut Criterion) {
    let allocs = alloc_tracker::Session::new();

    let mut group = c.benchmark_group("fl_basic");

    let allocs_op = allocs.operation("build_empty");
    group.bench_function("build_empty", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(TestList::new()));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("push_first");
    group.bench_function("push_first", |b| {
        b.iter_custom(|iters| {
            let mut lists = iter::repeat_with(TestList::new)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for list in &mut lists {
                _ = black_box(list.push(black_box(TEST_VALUE)));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("queue_first");
    group.bench_function("queue_first", |b| {
        b.iter_custom(|iters| {
            let mut lists = iter::repeat_with(TestList::new)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for list in &mut lists {
                _ = black_box(list.queue(black_box(TEST_VALUE)));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("push_pop");
    group.bench_function("push_pop", |b| {
        b.iter_custom(|iters| {
            let mut list = TestList::new();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(list.push(black_box(TEST_VALUE)));
                _ = black_box(list.pop());
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("push_full");
    group.bench_function("push_full", |b| {
        b.iter_custom(|iters| {
            let mut list = full_list();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(list.push(black_box(TEST_VALUE)));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("contains_missing");
    group.bench_function("contains_missing", |b| {
        b.iter_custom(|iters| {
            let list = full_list();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(list.contains(black_box(&0)));
            }

            start.elapsed()
        });
    });

    group.finish();

    let mut group = c.benchmark_group("fl_slow");

    let allocs_op = allocs.operation("dequeue_full");
    group.bench_function("dequeue_full", |b| {
        // Removing from the back scans the whole list to find the predecessor of the tail.
        b.iter_custom(|iters| {
            let mut lists = iter::repeat_with(full_list)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for list in &mut lists {
                _ = black_box(list.dequeue());
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("fill_and_drain");
    group.bench_function("fill_and_drain", |b| {
        b.iter_custom(|iters| {
            let mut list = TestList::new();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                for _ in 0..CAPACITY {
                    _ = black_box(list.queue(black_box(TEST_VALUE)));
                }

                while black_box(list.pop()).is_some() {}
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("iter_full");
    group.bench_function("iter_full", |b| {
        b.iter_custom(|iters| {
            let list = full_list();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                for item in &list {
                    _ = black_box(item);
                }
            }

            start.elapsed()
        });
    });

    group.finish();

    allocs.print_to_stdout();
}
