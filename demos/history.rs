extern crate devbook;

use devbook::history::HistoryStack;
use devbook::model::Developer;
use devbook::recent::{RecentEvent, RecentList};
use devbook::store::Store;

fn print_state(dev: &Developer, history: &HistoryStack) {
    println!(
        "  {}: {:?} (snapshots: {}, undo: {}, redo: {})",
        dev.name(),
        dev.languages().names(),
        history.depth(),
        history.can_undo(),
        history.can_redo()
    );
}

fn main() {
    let store = Store::with_fixtures();
    let mut dev = Developer::new();

    let history = HistoryStack::attach(&mut dev);
    let recent = RecentList::attach(&mut dev, RecentList::DEFAULT_LIMIT);

    history.subscribe(|event| println!("  history says: {:?}", event));
    recent.subscribe(|event| {
        let RecentEvent::Add(entry) = event;
        println!("  recent says: visited {} ({})", entry.label, entry.id);
    });

    println!("open developer 1");
    dev.load(1, store.fetch(1).unwrap());
    print_state(&dev, &history);

    println!("remove ruby");
    dev.remove_language(1);
    print_state(&dev, &history);

    println!("undo");
    history.undo(&mut dev);
    print_state(&dev, &history);

    println!("redo");
    history.redo(&mut dev);
    print_state(&dev, &history);

    println!("add go (this burns the redo branch)");
    dev.add_language("go");
    print_state(&dev, &history);

    println!("browse around");
    dev.load(2, store.fetch(2).unwrap());
    dev.load(3, store.fetch(3).unwrap());
    dev.load(1, store.fetch(1).unwrap());

    println!("recently viewed, newest first:");
    for entry in recent.list() {
        println!("  {} {}", entry.id, entry.label);
    }
}
