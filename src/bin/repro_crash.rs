//! Reproduce AFL crashes without AFL instrumentation
//!
//! Usage: cargo run --bin repro_crash -- <crash_file>

use std::fs;

use reweave::graph::diff_slices;

const MAX_LEN: usize = 64;
const ALPHABET: u8 = 8;

fn decode(data: &[u8]) -> Option<(Vec<u8>, Vec<u8>)> {
    if data.is_empty() {
        return None;
    }

    let rest = &data[1..];
    let split = (data[0] as usize) % (rest.len() + 1);
    let (old_raw, new_raw) = rest.split_at(split);

    let old: Vec<u8> = old_raw.iter().take(MAX_LEN).map(|b| b % ALPHABET).collect();
    let new: Vec<u8> = new_raw.iter().take(MAX_LEN).map(|b| b % ALPHABET).collect();
    Some((old, new))
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("usage: repro_crash <crash_file>");
    let data = fs::read(&path).expect("failed to read crash file");

    let Some((old, new)) = decode(&data) else {
        println!("input too short to decode, nothing to do");
        return;
    };

    println!("old ({} elements): {:?}", old.len(), old);
    println!("new ({} elements): {:?}", new.len(), new);

    let script = diff_slices(&old, &new);
    println!("script ({} ops, cost {}): {:?}", script.len(), script.cost(), script.ops());

    let rebuilt = script
        .rebuild(&old, &new)
        .expect("lengths match by construction");
    println!("rebuilt: {:?}", rebuilt);
    assert_eq!(rebuilt, new, "round-trip failure");
    println!("round-trip ok");
}
