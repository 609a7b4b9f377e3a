//! Tap a form to rotate it.
//!
//! Each tap adds 360 + 120 degrees. The first form snaps to right angles, so
//! it visibly turns by a quarter turn per tap at most; the second accepts any
//! angle and grows to fit its rotated bounding box.
//!
//! Run with `RUST_LOG=debug` to see the geometry being recomputed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rotate_layout::prelude::*;

const TAPS: usize = 4;

fn run_form(name: &str, snap: bool) {
    let taps = Arc::new(AtomicUsize::new(0));
    let counter = taps.clone();

    let form = block(240, 120)
        .color(Color::from_hex(0x3F51B5))
        .on_click(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    let layout = RotateLayout::new()
        .snap_to_right_angles(snap)
        .child(form);

    let mut host = Host::with_config(
        HostConfig {
            width: 480,
            height: 480,
        },
        layout,
    );
    host.frame();

    for _ in 0..TAPS {
        // Tap the middle of whatever the form currently covers
        let (x, y) = host.root().frame().center();
        host.dispatch(Event::PointerDown {
            x,
            y,
            button: MouseButton::Left,
        });
        host.dispatch(Event::PointerUp {
            x,
            y,
            button: MouseButton::Left,
        });

        if taps.swap(0, Ordering::SeqCst) > 0 {
            let angle = host.root().get_angle() + 360 + 120;
            host.root_mut().set_angle(angle);
        }
        host.frame();

        let root = host.root();
        let surface = host
            .paint_context()
            .commands()
            .first()
            .map(|c| c.surface_bounds());
        println!(
            "{name}: angle {:>5}  container {:?}  painted {:?}",
            root.get_angle(),
            root.frame().size(),
            surface
        );
    }
}

fn main() {
    env_logger::init();

    run_form("snapped", true);
    run_form("free", false);
}
