use anyhow::{Context, Result};
use gdcx_codec::PermutationTable;
use serde::Serialize;

use crate::printing::print_table;

#[derive(Serialize)]
struct Entry<'a> {
    index: u8,
    group: &'a str,
}

pub fn show_table(json: bool) -> Result<()> {
    let table = PermutationTable::build();

    if !json {
        print_table(&table);
        return Ok(());
    }

    let entries = table
        .iter()
        .map(|(index, group)| {
            std::str::from_utf8(group)
                .map(|group| Entry { index, group })
                .context("Table group is not ASCII")
        })
        .collect::<Result<Vec<_>>>()?;
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
