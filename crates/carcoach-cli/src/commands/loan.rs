//! The `carcoach loan` command.

use anyhow::{Context, Result};

use carcoach_core::loan::LoanQuote;

pub fn execute(price: f64, deposit: f64, rate: f64, years: u32, format: String) -> Result<()> {
    let quote = LoanQuote::from_price(price, deposit, rate, years)
        .context("please enter valid values")?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&quote)?),
        "text" => println!("{}", quote.summary()),
        other => anyhow::bail!("unknown format '{other}', expected text or json"),
    }

    Ok(())
}
