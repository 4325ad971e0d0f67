//! `jellyweb params <url>` – list every query parameter.

use anyhow::Result;
use jellyweb_core::query;
use std::collections::BTreeMap;

pub fn run_params(url: &str, json: bool) -> Result<()> {
    let params: BTreeMap<String, String> =
        query::parse_query_parameters(url).into_iter().collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&params)?);
        return Ok(());
    }

    if params.is_empty() {
        println!("No query parameters.");
        return Ok(());
    }
    let width = params.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    for (key, value) in &params {
        println!("{:<width$}  {}", key, value, width = width);
    }
    Ok(())
}
