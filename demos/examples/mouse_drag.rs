// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragging an item.
//!
//! The window's geometry lives in shared state so the drag callback can move the
//! box it is dragging; the manager keeps reporting the press region until release
//! and picks up the new geometry on the next hover.
//!
//! Run:
//! - `cargo run -p understory_mouse_demos --example mouse_drag`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Point, Rect};
use understory_mouse::binding::Bindings;
use understory_mouse::callback::Callback;
use understory_mouse::hit::GeometryProvider;
use understory_mouse::manager::{MouseManager, WindowHost};
use understory_mouse::types::{Operation, OperationSet, Selection, SelectionSet};

type Scene = Rc<RefCell<Vec<Rect>>>;

struct Window {
    scene: Scene,
}

impl GeometryProvider<usize> for Window {
    fn region_of(&self, item: &usize) -> Option<Rect> {
        self.scene.borrow().get(*item).copied()
    }
}

impl WindowHost<usize> for Window {
    fn owns(&self, item: &usize) -> bool {
        *item < self.scene.borrow().len()
    }
    fn attach(&mut self) {}
    fn detach(&mut self) {}
    fn request_refresh(&mut self) {}
}

fn main() {
    let scene: Scene = Rc::new(RefCell::new(vec![
        Rect::new(0.0, 0.0, 20.0, 20.0),
        Rect::new(100.0, 0.0, 120.0, 20.0),
    ]));
    let mut manager = MouseManager::new(Window {
        scene: Rc::clone(&scene),
    });

    let last = Rc::new(Cell::new(Point::ORIGIN));
    let on_press = {
        let last = Rc::clone(&last);
        Callback::new(move |_item: Option<&usize>, event| {
            last.set(event.position);
            Ok(())
        })
    };
    let on_drag = {
        let last = Rc::clone(&last);
        let scene = Rc::clone(&scene);
        Callback::new(move |item: Option<&usize>, event| {
            let delta = event.position - last.replace(event.position);
            if let Some(&idx) = item {
                let mut scene = scene.borrow_mut();
                scene[idx] = scene[idx] + delta;
                println!("  drag    box {idx} -> {:?}", scene[idx]);
            }
            Ok(())
        })
    };
    let on_hover = Callback::new(|item: Option<&usize>, event| {
        println!("  hover   box {item:?} region={:?}", event.region);
        Ok(())
    });

    for idx in 0..2 {
        manager
            .add(
                idx,
                &Bindings::new()
                    .on(Operation::Click, Selection::Normal, on_press.clone())
                    .on(OperationSet::DRAG, SelectionSet::NORMAL, on_drag.clone())
                    .on(Operation::Hover, SelectionSet::all(), on_hover.clone()),
            )
            .unwrap();
    }
    manager.enable(true);

    println!("== Drag box 0 by (+50, +5) ==");
    manager
        .button_down(Point::new(10.0, 10.0), Selection::Normal, Some(&0))
        .unwrap();
    manager.motion(Point::new(30.0, 12.0)).unwrap();
    manager.motion(Point::new(60.0, 15.0)).unwrap();
    manager.button_up(Point::new(60.0, 15.0)).unwrap();

    println!("== Hover where box 0 used to be ==");
    manager.motion(Point::new(10.0, 10.0)).unwrap();

    assert_eq!(scene.borrow()[0], Rect::new(50.0, 5.0, 70.0, 25.0));
}
