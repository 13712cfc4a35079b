//! Prints capacity transitions while an array grows and then drains.
//!
//! Run with `cargo run -p larray-bench --example resize_trace`.

use larray::DynamicArray;

fn main() {
    println!("=== LArray resize trace ===\n");

    let mut array = DynamicArray::new();
    let mut last_cap = array.capacity();
    println!("start: len 0, capacity {last_cap}");

    for i in 0..20 {
        array.append(i);
        if array.capacity() != last_cap {
            println!(
                "append #{:>2}: capacity {:>2} -> {:>2}",
                i + 1,
                last_cap,
                array.capacity()
            );
            last_cap = array.capacity();
        }
    }

    println!("\nfull: {array}");

    while let Ok(v) = array.pop() {
        if array.capacity() != last_cap {
            println!(
                "pop {:>2}: len {:>2}, capacity {:>2} -> {:>2}",
                v,
                array.len(),
                last_cap,
                array.capacity()
            );
            last_cap = array.capacity();
        }
    }

    let stats = array.stats();
    println!(
        "\n{} grows, {} shrinks, {} elements moved, peak capacity {}",
        stats.grow_events, stats.shrink_events, stats.elements_moved, stats.peak_capacity
    );
}
