// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_mouse::binding::Bindings;
use understory_mouse::callback::Callback;
use understory_mouse::hit::{GeometryProvider, resolve_hover_target};
use understory_mouse::registry::Registry;
use understory_mouse::types::{Operation, SelectionSet};

struct Grid {
    n: usize,
    cell: f64,
}

impl GeometryProvider<usize> for Grid {
    fn region_of(&self, item: &usize) -> Option<Rect> {
        let x = (item % self.n) as f64 * self.cell;
        let y = (item / self.n) as f64 * self.cell;
        Some(Rect::new(x, y, x + self.cell, y + self.cell))
    }
}

fn registry(count: usize, op: Operation) -> Registry<usize> {
    let cb = Callback::new(|_, _| Ok(()));
    let bindings = Bindings::new().on(op, SelectionSet::all(), cb);
    let mut r = Registry::new();
    for id in 0..count {
        r.apply(id, &bindings);
    }
    r
}

fn bench_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover_resolution");
    for n in [8_usize, 32, 128] {
        let grid = Grid { n, cell: 10.0 };
        let reg = registry(n * n, Operation::Hover);
        let far = Point::new(n as f64 * 10.0 - 1.0, n as f64 * 10.0 - 1.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("last_of_{}", n * n), |b| {
            b.iter(|| resolve_hover_target(&reg, &grid, black_box(far)));
        });
        group.bench_function(format!("miss_{}", n * n), |b| {
            b.iter(|| resolve_hover_target(&reg, &grid, black_box(Point::new(-5.0, -5.0))));
        });
    }
    group.finish();
}

fn bench_click_only_registry(c: &mut Criterion) {
    // Click-only items are skipped without consulting geometry.
    let grid = Grid { n: 128, cell: 10.0 };
    let reg = registry(128 * 128, Operation::Click);
    c.bench_function("hover_resolution/click_only_16384", |b| {
        b.iter(|| resolve_hover_target(&reg, &grid, black_box(Point::new(5.0, 5.0))));
    });
}

criterion_group!(benches, bench_hover, bench_click_only_registry);
criterion_main!(benches);
