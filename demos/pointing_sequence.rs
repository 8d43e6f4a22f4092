//! Pointing Sequence
//!
//! This example drives a two-stage gesture sequence with scripted frames.
//!
//! Key concepts:
//! - Declaring stages with `gesture_stages!`
//! - Ticking a tracker by hand instead of through the poller
//! - Writing stage codes line by line, as a serial device would receive them
//!
//! Run with: cargo run --example pointing_sequence

use gesture_stage::builder::TrackerBuilder;
use gesture_stage::core::HandPose;
use gesture_stage::effects::WriterSink;
use gesture_stage::gesture_stages;

fn main() {
    println!("=== Pointing Sequence ===\n");

    let mut tracker = TrackerBuilder::new()
        .stages(gesture_stages![
            [NotExtended, Extended, NotExtended, NotExtended, NotExtended],
            [NotExtended, Extended, Extended, Extended, Extended],
        ])
        .build(None::<HandPose>, WriterSink::new(std::io::stdout()))
        .unwrap();

    let point = HandPose::new([false, true, false, false, false]);
    let four = HandPose::new([false, true, true, true, true]);

    let frames = [
        ("no hand", None),
        ("pointing", Some(point)),
        ("pointing", Some(point)),
        ("fist", Some(HandPose::fist())),
        ("four fingers", Some(four)),
        ("four fingers", Some(four)),
        ("hand lost", None),
    ];

    for (label, frame) in frames {
        *tracker.source_mut() = frame;
        let result = tracker.tick();
        println!(
            "tick {:>2} {:<13} -> level {:>2} {:?}",
            tracker.ticks(),
            label,
            tracker.level_index(),
            result
        );
    }

    println!("\nLevel path: {:?}", tracker.history().get_path());
    println!("Completions: {}", tracker.history().completions());

    println!("\n=== Example Complete ===");
}
