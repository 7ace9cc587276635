// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse manager basics.
//!
//! Two overlapping buttons, per-selection click handlers, hover feedback, and a
//! default hover for empty space. A double click on `ok` unregisters `cancel`
//! from inside its callback through the manager's registrar. A scripted event
//! sequence is fed through the manager and every callback prints what it received.
//!
//! Run:
//! - `cargo run -p understory_mouse_demos --example mouse_basics`
//! - `RUST_LOG=understory_mouse=trace cargo run -p understory_mouse_demos --example mouse_basics`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_mouse::binding::Bindings;
use understory_mouse::callback::Callback;
use understory_mouse::hit::GeometryProvider;
use understory_mouse::manager::{MouseManager, WindowHost};
use understory_mouse::types::{Operation, OperationSet, PointerEvent, Selection, SelectionSet};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
struct Button(u32);

struct Window {
    buttons: Vec<(Button, Rect)>,
    refreshes: usize,
}

impl GeometryProvider<Button> for Window {
    fn region_of(&self, item: &Button) -> Option<Rect> {
        self.buttons.iter().find(|(b, _)| b == item).map(|(_, r)| *r)
    }
}

impl WindowHost<Button> for Window {
    fn owns(&self, item: &Button) -> bool {
        self.buttons.iter().any(|(b, _)| b == item)
    }
    fn attach(&mut self) {
        println!("  [window] event slots attached");
    }
    fn detach(&mut self) {
        println!("  [window] event slots detached");
    }
    fn request_refresh(&mut self) {
        self.refreshes += 1;
    }
}

fn printer(label: &'static str) -> Callback<Button> {
    Callback::new(move |item, event| {
        println!(
            "  {label:<8} {:<7} item={:?} sel={:?} at=({}, {})",
            event.operation, item, event.selection, event.position.x, event.position.y
        );
        Ok(())
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let ok = Button(1);
    let cancel = Button(2);
    let window = Window {
        buttons: vec![
            (ok, Rect::new(10.0, 10.0, 110.0, 40.0)),
            (cancel, Rect::new(100.0, 10.0, 200.0, 40.0)),
        ],
        refreshes: 0,
    };

    let mut manager = MouseManager::new(window);
    let registrar = manager.registrar();
    let retire_cancel = Callback::new(move |item: Option<&Button>, event| {
        println!("  ok-dbl   {:<7} item={item:?} retiring cancel", event.operation);
        registrar.remove(cancel);
        Ok(())
    });
    manager
        .add(
            ok,
            &Bindings::new()
                .on(Operation::Click, Selection::Normal, printer("ok"))
                .on(Operation::Click, Selection::Open, retire_cancel)
                .on(OperationSet::RELEASE | OperationSet::HOVER, SelectionSet::all(), printer("ok")),
        )
        .unwrap();
    manager
        .add(
            cancel,
            &Bindings::new().on(OperationSet::all(), SelectionSet::all(), printer("cancel")),
        )
        .unwrap();
    manager.set_default_hover(Some(printer("window")));
    manager.enable(true);

    let script = [
        PointerEvent::Move { position: Point::new(5.0, 5.0) },
        // Overlap region: `ok` was registered first and wins the hover scan.
        PointerEvent::Move { position: Point::new(105.0, 20.0) },
        // The host says `cancel` is on top, so the press goes there.
        PointerEvent::Down {
            position: Point::new(105.0, 20.0),
            selection: Selection::Normal,
            current_object: Some(cancel),
        },
        PointerEvent::Move { position: Point::new(150.0, 25.0) },
        PointerEvent::Up { position: Point::new(150.0, 25.0) },
        PointerEvent::Down {
            position: Point::new(20.0, 20.0),
            selection: Selection::Open,
            current_object: Some(ok),
        },
        PointerEvent::Up { position: Point::new(20.0, 20.0) },
        // `cancel` is gone; its area now falls through to the default hover.
        PointerEvent::Move { position: Point::new(150.0, 25.0) },
    ];

    println!("== Dispatch ==");
    for event in script {
        manager.handle(event).unwrap();
    }
    println!("== Refreshes requested: {} ==", manager.host().refreshes);

    manager.enable(false);
}
