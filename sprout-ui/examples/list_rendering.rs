//! List rendering example - arrays become keyed rows

use sprout_ui::prelude::*;

#[derive(Clone)]
struct Grocery {
    id: u32,
    label: String,
}

fn shopping_list(items: Vec<Grocery>) -> ListView<Grocery> {
    ListView::new(items)
        .key(|item| item.id.to_string())
        .builder(|item, _| Node::list_item(item.label.clone()))
        .empty_message("No groceries yet.")
}

fn main() {
    let items = vec![
        Grocery { id: 1, label: "Apples".into() },
        Grocery { id: 2, label: "Oat milk".into() },
        Grocery { id: 3, label: "Coffee".into() },
    ];

    let mut stocked = Runtime::mount(shopping_list(items));
    println!("{}", stocked.render().to_json());

    // The same view with nothing in it falls back to the empty state.
    let mut empty = Runtime::mount(shopping_list(Vec::new()));
    println!("{}", empty.render().to_json());
}
