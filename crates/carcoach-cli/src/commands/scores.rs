//! The `carcoach scores` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use carcoach_core::config::DataPaths;
use carcoach_core::scores::{ScoreLog, NO_SCORES};

pub fn execute(paths: &DataPaths, table: bool) -> Result<()> {
    let log = ScoreLog::new(&paths.scores);

    if !table {
        println!("{}", log.read()?);
        return Ok(());
    }

    let records = log.records()?;
    if records.is_empty() {
        println!("{NO_SCORES}");
        return Ok(());
    }

    let mut out = Table::new();
    out.set_header(vec!["Name", "Score", "Percent"]);
    for r in &records {
        let percent = if r.total == 0 {
            0.0
        } else {
            f64::from(r.score) / f64::from(r.total) * 100.0
        };
        out.add_row(vec![
            Cell::new(&r.name),
            Cell::new(format!("{}/{}", r.score, r.total)),
            Cell::new(format!("{percent:.0}%")),
        ]);
    }

    println!("{out}");
    Ok(())
}
