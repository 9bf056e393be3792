use reweave::graph::diff_slices;

fn main() {
    let old: Vec<char> = "kitten".chars().collect();
    let new: Vec<char> = "sitting".chars().collect();

    let script = diff_slices(&old, &new);
    println!("ops:  {:?}", script.ops());
    println!("cost: {} edits", script.cost());

    script.apply(
        |pos, new_pos| println!("insert {:?} at {}", new[new_pos], pos),
        |pos| println!("remove at {}", pos),
    );

    let rebuilt = script.rebuild(&old, &new).unwrap();
    println!("rebuilt: {}", rebuilt.iter().collect::<String>());
}
