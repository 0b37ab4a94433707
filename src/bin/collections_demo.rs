use colored::Colorize;
use linear_collections::{
    AppendList, CollectionError, ContainerConfig, LinkedList, PrependList, Queue, Stack, Streamable,
};
use serde_json::json;
use std::env;
use std::path::Path;
use std::process;

// =============================================================================
// Config-driven run: build the described container and drain it
// =============================================================================

fn run_config(path: &Path) -> Result<(), CollectionError> {
    let config = ContainerConfig::load(path)?;
    let mut container = config.build()?;

    println!("{} {}", "Loaded".green().bold(), container);
    for (position, item) in container.drain_to_strings().into_iter().enumerate() {
        println!("  {} {}", format!("#{position}").dimmed(), item);
    }
    println!("{} {} items left", "Drained:".green(), container.size());
    Ok(())
}

// =============================================================================
// Built-in walkthrough
// =============================================================================

fn run_walkthrough() -> Result<(), CollectionError> {
    println!("{}", "=== Queue ===".bold());
    let mut queue = Queue::new();
    queue.enqueue(1)?;
    queue.enqueue(2)?;
    queue.enqueue(3)?;
    println!("dequeue -> {:?}", queue.dequeue());
    println!("remaining [{queue}]");

    println!("{}", "=== Stack ===".bold());
    let mut stack = Stack::from_items(vec![3, 1, 2])?;
    stack.sort(true);
    println!("sorted [{stack}]");
    let top = stack.pop();
    println!("pop -> {:?}, peek -> {:?}", top, stack.peek());

    println!("{}", "=== Type checks ===".bold());
    let mut dynamic = Queue::new();
    dynamic.enqueue(json!(10))?;
    if let Err(err) = dynamic.enqueue(json!("ten")) {
        println!("{} {}", "rejected:".yellow(), err);
    }

    println!("{}", "=== Streams ===".bold());
    let mut source = Stack::from_items(vec![1, 2, 3])?;
    let drained: Vec<String> = Streamable::new(&mut source).create_stream().collect();
    println!("stack stream -> {}", drained.join(" "));

    println!("{}", "=== Linked lists ===".bold());
    let mut prepend: PrependList<i32> = (1..=3).collect();
    prepend.insert_at(1, 10)?;
    prepend.display();
    let append: AppendList<&str> = ["a", "b", "c"].into_iter().collect();
    println!("index_of(\"c\") -> {:?}", append.index_of(&"c"));

    Ok(())
}

fn main() {
    let result = match env::args().nth(1) {
        Some(path) => run_config(Path::new(&path)),
        None => run_walkthrough(),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".red().bold(), err);
        process::exit(1);
    }
}
