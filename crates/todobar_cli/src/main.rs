//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `todobar_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use todobar_core::TaskListStore;

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from the shell/FFI runtime setup.
    println!("todobar_core ping={}", todobar_core::ping());
    println!("todobar_core version={}", todobar_core::core_version());

    // Scripted store walk; prints titles and flags only, so output stays
    // stable across runs.
    let mut store = TaskListStore::new();
    store.add_task("Ship release notes");
    store.add_task("Water the plants");
    store.add_task("Reply to Dana");
    let newest_id = store.tasks().first().map(|task| task.id);
    if let Some(id) = newest_id {
        store.toggle_completion(id);
    }
    store.clear_completed();

    println!("todobar_core tasks={}", store.len());
    for task in store.tasks() {
        let mark = if task.is_completed { "x" } else { " " };
        println!("- [{mark}] {}", task.title);
    }
    println!("todobar_core empty={}", store.is_empty());
}
