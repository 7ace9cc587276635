// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit resolution against managed items.
//!
//! ## Overview
//!
//! Two strategies, used at different points of the dispatch cycle:
//!
//! - [`resolve_click_target`] trusts the host: the host reports the topmost
//!   object under the cursor at press time (it knows occlusion and stacking),
//!   and the resolver only checks that object is managed.
//! - [`resolve_hover_target`] scans managed items in registration order and
//!   returns the first hover-active item whose region contains the pointer.
//!   There is no z-order awareness; registration order is the only tie-break.
//!
//! Geometry is supplied by a [`GeometryProvider`]. Regions are tested with
//! [`region_contains`], which is inclusive on every edge.

use kurbo::{Point, Rect};

use crate::registry::Registry;

/// Supplies the current window-space bounding region of a managed item.
///
/// Consulted on every hover resolution and on click-target resolution.
pub trait GeometryProvider<K> {
    /// Returns the bounding region of `item`, or `None` if it has none right now.
    fn region_of(&self, item: &K) -> Option<Rect>;
}

/// A resolved target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit<K> {
    /// Identity of the managed item that was hit.
    pub item: K,
    /// Region of the item in window coordinates, when known.
    pub region: Option<Rect>,
}

/// Whether `pt` lies within `region`, edges included.
pub fn region_contains(region: Rect, pt: Point) -> bool {
    let r = region.abs();
    r.x0 <= pt.x && pt.x <= r.x1 && r.y0 <= pt.y && pt.y <= r.y1
}

/// Match the host's current object against the registry by identity.
pub fn resolve_click_target<K, G>(
    registry: &Registry<K>,
    geometry: &G,
    current_object: Option<&K>,
) -> Option<Hit<K>>
where
    K: Copy + Eq,
    G: GeometryProvider<K> + ?Sized,
{
    let item = registry.get(current_object?)?;
    Some(Hit {
        item: item.id(),
        region: geometry.region_of(&item.id()),
    })
}

/// First hover-active item, in registration order, whose region contains `pt`.
pub fn resolve_hover_target<K, G>(registry: &Registry<K>, geometry: &G, pt: Point) -> Option<Hit<K>>
where
    K: Copy + Eq,
    G: GeometryProvider<K> + ?Sized,
{
    registry
        .iter()
        .filter(|item| item.is_hover_active())
        .find_map(|item| {
            let region = geometry.region_of(&item.id())?;
            region_contains(region, pt).then_some(Hit {
                item: item.id(),
                region: Some(region),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::Bindings;
    use crate::callback::Callback;
    use crate::types::{Operation, SelectionSet};

    struct Regions(&'static [(u32, Rect)]);
    impl GeometryProvider<u32> for Regions {
        fn region_of(&self, item: &u32) -> Option<Rect> {
            self.0.iter().find(|(id, _)| id == item).map(|(_, r)| *r)
        }
    }

    fn register(r: &mut Registry<u32>, id: u32, op: Operation) {
        let cb = Callback::new(|_, _| Ok(()));
        r.apply(id, &Bindings::new().on(op, SelectionSet::all(), cb));
    }

    const OVERLAP: &[(u32, Rect)] = &[
        (1, Rect::new(0.0, 0.0, 10.0, 10.0)),
        (2, Rect::new(5.0, 5.0, 15.0, 15.0)),
    ];

    #[test]
    fn containment_is_inclusive() {
        let r = Rect::from_origin_size((2.0, 3.0), (4.0, 5.0));
        assert!(region_contains(r, Point::new(2.0, 3.0)));
        assert!(region_contains(r, Point::new(6.0, 8.0)));
        assert!(!region_contains(r, Point::new(6.000_1, 8.0)));
        assert!(!region_contains(r, Point::new(1.999, 4.0)));
    }

    #[test]
    fn hover_prefers_first_registered_on_overlap() {
        let mut reg = Registry::new();
        register(&mut reg, 1, Operation::Hover);
        register(&mut reg, 2, Operation::Hover);
        let hit = resolve_hover_target(&reg, &Regions(OVERLAP), Point::new(7.0, 7.0)).unwrap();
        assert_eq!(hit.item, 1);
        assert_eq!(hit.region, Some(OVERLAP[0].1));

        let mut reg = Registry::new();
        register(&mut reg, 2, Operation::Hover);
        register(&mut reg, 1, Operation::Hover);
        let hit = resolve_hover_target(&reg, &Regions(OVERLAP), Point::new(7.0, 7.0)).unwrap();
        assert_eq!(hit.item, 2);
    }

    #[test]
    fn hover_skips_items_without_hover_or_scroll() {
        let mut reg = Registry::new();
        register(&mut reg, 1, Operation::Click);
        register(&mut reg, 2, Operation::Scroll);
        let hit = resolve_hover_target(&reg, &Regions(OVERLAP), Point::new(7.0, 7.0)).unwrap();
        assert_eq!(hit.item, 2);
        assert!(resolve_hover_target(&reg, &Regions(OVERLAP), Point::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn hover_skips_items_without_geometry() {
        let mut reg = Registry::new();
        register(&mut reg, 3, Operation::Hover);
        assert!(resolve_hover_target(&reg, &Regions(OVERLAP), Point::new(7.0, 7.0)).is_none());
    }

    #[test]
    fn click_target_is_an_identity_match() {
        let mut reg = Registry::new();
        register(&mut reg, 1, Operation::Click);
        // Position plays no role; the host already picked the object.
        let hit = resolve_click_target(&reg, &Regions(OVERLAP), Some(&1)).unwrap();
        assert_eq!(hit.item, 1);
        assert_eq!(hit.region, Some(OVERLAP[0].1));
        assert!(resolve_click_target(&reg, &Regions(OVERLAP), Some(&2)).is_none());
        assert!(resolve_click_target(&reg, &Regions(OVERLAP), None).is_none());
    }
}
