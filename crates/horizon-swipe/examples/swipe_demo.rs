//! Horizon Swipe Demo
//!
//! Headless walkthrough of a todo list with swipe-to-delete rows:
//! - One row is dragged a little and snaps back
//! - One row is dragged past the threshold, collapses and is removed
//!
//! Frames are driven by the real system clock at roughly 60 Hz.
//!
//! Run with: RUST_LOG=horizon_swipe=debug cargo run -p horizon-swipe --example swipe_demo

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use horizon_swipe::ClockAnimator;
use horizon_swipe::prelude::*;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);
const ROW: Size = Size::new(320.0, 48.0);

/// Drive a row until it stops animating.
fn settle(item: &mut SwipeableListItem<String, ScriptedGestures>) -> Result<(), SwipeError> {
    loop {
        item.process()?;
        let frame = item.frame();
        println!(
            "  {:<13} {:<20} {}",
            format!("{:?}", item.status()),
            frame.front_transform(),
            frame.item_style()
        );
        if matches!(item.status(), SwipeStatus::Idle | SwipeStatus::Removed) {
            return Ok(());
        }
        thread::sleep(FRAME);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let todos = ["Buy milk", "Walk the dog", "File taxes"];
    let removed: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let mut rows: Vec<SwipeableListItem<String, ScriptedGestures>> = todos
        .iter()
        .map(|todo| -> Result<_, SwipeError> {
            let mut item = SwipeableListItem::with_animator(
                todo.to_string(),
                "Delete".to_string(),
                ClockAnimator::system(),
            )
            .with_class_name("todo-row");
            item.mount(ScriptedGestures::new())?;
            item.set_front_size(ROW);

            let removed = removed.clone();
            let label = todo.to_string();
            item.action_triggered
                .connect(move |_| removed.lock().push(label.clone()));
            Ok(item)
        })
        .collect::<Result<_, _>>()?;

    println!("{} (class=\"{}\")", todos[0], rows[0].class_names());
    println!("drag 60px of 320px and release:");
    if let Some(source) = rows[0].gesture_source_mut() {
        source.push_drag(&[20.0, 40.0, 60.0]);
    }
    settle(&mut rows[0])?;

    println!("{}", todos[1]);
    println!("drag 180px of 320px and release:");
    if let Some(source) = rows[1].gesture_source_mut() {
        source.push_drag(&[60.0, 120.0, 180.0]);
    }
    settle(&mut rows[1])?;

    rows.retain(|row| row.status() != SwipeStatus::Removed);

    println!("removed: {:?}", removed.lock());
    println!(
        "remaining: {:?}",
        rows.iter().map(|row| row.front().as_str()).collect::<Vec<_>>()
    );
    Ok(())
}
