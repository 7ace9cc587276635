// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use understory_mouse::binding::Bindings;
use understory_mouse::callback::Callback;
use understory_mouse::hit::GeometryProvider;
use understory_mouse::manager::{MouseManager, WindowHost};
use understory_mouse::types::{OperationSet, Selection, SelectionSet};

struct Row {
    items: usize,
}

impl GeometryProvider<usize> for Row {
    fn region_of(&self, item: &usize) -> Option<Rect> {
        let x = *item as f64 * 20.0;
        Some(Rect::new(x, 0.0, x + 20.0, 20.0))
    }
}

impl WindowHost<usize> for Row {
    fn owns(&self, item: &usize) -> bool {
        *item < self.items
    }
    fn attach(&mut self) {}
    fn detach(&mut self) {}
    fn request_refresh(&mut self) {}
}

fn manager(items: usize) -> MouseManager<usize, Row> {
    let cb = Callback::new(|_, _| Ok(()));
    let bindings = Bindings::new().on(OperationSet::all(), SelectionSet::all(), cb);
    let mut m = MouseManager::new(Row { items });
    for id in 0..items {
        m.add(id, &bindings).unwrap();
    }
    m.enable(true);
    m
}

fn bench_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_cycle");
    for items in [16_usize, 256] {
        let target = items - 1;
        let at = Point::new(target as f64 * 20.0 + 5.0, 5.0);
        group.bench_function(format!("press_drag_release_{items}"), |b| {
            b.iter_batched(
                || manager(items),
                |mut m| {
                    m.button_down(at, Selection::Normal, Some(&target)).unwrap();
                    for dx in 0..8 {
                        m.motion(black_box(at + Vec2::new(f64::from(dx), 0.0))).unwrap();
                    }
                    m.button_up(at).unwrap();
                    m
                },
                BatchSize::SmallInput,
            );
        });
        let mut m = manager(items);
        group.bench_function(format!("hover_sweep_{items}"), |b| {
            b.iter(|| {
                for x in (0..items).step_by(4) {
                    m.motion(black_box(Point::new(x as f64 * 20.0 + 1.0, 1.0)))
                        .unwrap();
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cycle);
criterion_main!(benches);
