// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Token-form registration.
//!
//! Registers callbacks with loose `click`/`normal`-style words and shows the
//! errors raised for malformed argument lists. Failed calls leave the registry
//! untouched.
//!
//! Run:
//! - `cargo run -p understory_mouse_demos --example mouse_tokens`

use kurbo::Rect;
use understory_mouse::Error;
use understory_mouse::binding::Arg;
use understory_mouse::callback::Callback;
use understory_mouse::hit::GeometryProvider;
use understory_mouse::manager::{MouseManager, WindowHost};

struct Window;

impl GeometryProvider<u32> for Window {
    fn region_of(&self, _item: &u32) -> Option<Rect> {
        Some(Rect::new(0.0, 0.0, 50.0, 50.0))
    }
}

impl WindowHost<u32> for Window {
    fn owns(&self, item: &u32) -> bool {
        *item < 10
    }
    fn attach(&mut self) {}
    fn detach(&mut self) {}
    fn request_refresh(&mut self) {}
}

fn main() {
    let mut manager = MouseManager::new(Window);
    let cb: Callback<u32> = Callback::new(|_, _| Ok(()));

    let attempts: [(&str, u32, Vec<Arg<'_, u32>>); 6] = [
        (
            "click+drag on normal/extend, then clear open",
            1,
            vec![
                Arg::Words(&["click", "drag"]),
                Arg::Words(&["normal", "extend"]),
                Arg::Call(cb.clone()),
                Arg::Word("open"),
                Arg::Clear,
            ],
        ),
        ("everything", 2, vec![Arg::Call(cb.clone())]),
        ("unknown word", 1, vec![Arg::Word("press"), Arg::Call(cb.clone())]),
        ("axis twice", 1, vec![Arg::Word("click"), Arg::Word("hover"), Arg::Clear]),
        ("no terminator", 1, vec![Arg::Call(cb.clone()), Arg::Word("hover")]),
        ("foreign item", 42, vec![Arg::Call(cb.clone())]),
    ];

    for (label, item, args) in attempts {
        match manager.add_args(item, &args) {
            Ok(managed) => println!("  ok      {label}: item {item} managed={managed}"),
            Err(err @ (Error::AmbiguousOrInvalidArgument { .. } | Error::MalformedArgumentList)) => {
                println!("  parse   {label}: {err}");
            }
            Err(err) => println!("  reject  {label}: {err}"),
        }
    }
    println!("== Managed items: {} ==", manager.registry().len());

    // Clearing every slot drops the item.
    manager.add_args(2, &[Arg::Clear]).unwrap();
    assert!(!manager.registry().contains(&2));

    assert_eq!(
        manager.set_default_hover_arg(Arg::Word("hover")),
        Err(Error::InvalidCallback)
    );
}
