//! The `carcoach facts` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use carcoach_core::config::DataPaths;
use carcoach_core::facts::{load_facts, FactStore};

pub fn execute(paths: &DataPaths, search: Option<String>, topic: Option<String>) -> Result<()> {
    let store = match load_facts(&paths.facts) {
        Ok(store) => store,
        Err(e) if e.is_not_found() => {
            println!("No facts available: {e}.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    match topic {
        Some(topic) => show_topic(&store, &topic),
        None => list_topics(&store, search.as_deref().unwrap_or("")),
    }

    Ok(())
}

fn show_topic(store: &FactStore, topic: &str) {
    let wanted = topic.trim();
    let found = store.explain(wanted).map(|text| (wanted, text)).or_else(|| {
        store
            .topics()
            .into_iter()
            .find(|t| t.eq_ignore_ascii_case(wanted))
            .and_then(|t| store.explain(t).map(|text| (t, text)))
    });

    match found {
        Some((name, text)) => println!("{name}\n\n{text}"),
        None => println!("{wanted}\n\nNo info available."),
    }
}

fn list_topics(store: &FactStore, query: &str) {
    let topics = store.search(query);
    if topics.is_empty() {
        println!("No matches");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Topic", "Summary"]);
    for topic in &topics {
        let summary = store
            .explain(topic)
            .and_then(|text| text.lines().next())
            .unwrap_or("");
        table.add_row(vec![Cell::new(topic), Cell::new(summary)]);
    }

    println!("{table}");
    println!("{} topic(s)", topics.len());
}
