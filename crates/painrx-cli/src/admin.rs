//! Admin mode: interactive catalog editing.

use std::path::Path;

use painrx_core::{Catalog, DrugRecord};

use crate::prompt;

pub fn run(catalog: &mut Catalog, path: &Path) -> anyhow::Result<()> {
    loop {
        println!();
        println!("== Admin menu ==");
        println!("1. List drugs");
        println!("2. Add drug");
        println!("3. Delete drug");
        println!("4. Modify drug");
        println!("5. Save and exit");
        match prompt::read_u32("Choice: ")? {
            1 => list(catalog),
            2 => add(catalog)?,
            3 => delete(catalog)?,
            4 => modify(catalog)?,
            5 => {
                // A failed save is reported but still ends the session; the
                // in-memory catalog is simply discarded.
                match catalog.save(path) {
                    Ok(()) => println!("Catalog saved to {}.", path.display()),
                    Err(err) => println!("Failed to save catalog: {err}"),
                }
                return Ok(());
            }
            _ => println!("Not a valid choice."),
        }
    }
}

fn list(catalog: &Catalog) {
    println!();
    println!("== Drug list ==");
    for (i, drug) in catalog.records().iter().enumerate() {
        println!(
            "[{i:2}] {}  (treats: {}, age: {}-{}, pregnancy-safe: {}, alcohol-safe: {})",
            drug.name,
            drug.efficacy.join(";"),
            drug.min_age,
            drug.max_age,
            drug.pregnancy_safe as u32,
            drug.alcohol_safe as u32,
        );
    }
}

fn add(catalog: &mut Catalog) -> anyhow::Result<()> {
    let record = prompt_record(None)?;
    match catalog.add(record) {
        Ok(()) => println!("Drug added."),
        Err(err) => println!("Cannot add drug: {err}"),
    }
    Ok(())
}

fn delete(catalog: &mut Catalog) -> anyhow::Result<()> {
    list(catalog);
    let index = prompt::read_u32("Index to delete: ")? as usize;
    match catalog.remove(index) {
        Ok(removed) => println!("Deleted {}.", removed.name),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn modify(catalog: &mut Catalog) -> anyhow::Result<()> {
    list(catalog);
    let index = prompt::read_u32("Index to modify: ")? as usize;
    let Some(current) = catalog.get(index).cloned() else {
        println!("no record at index {index}");
        return Ok(());
    };
    let record = prompt_record(Some(&current))?;
    match catalog.update(index, record) {
        Ok(()) => println!("Drug modified."),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

/// Prompt for every record field. When modifying, the prompt shows the
/// current value; a new value must still be entered explicitly.
fn prompt_record(current: Option<&DrugRecord>) -> anyhow::Result<DrugRecord> {
    let label = |field: &str, shown: Option<String>| match shown {
        Some(value) => format!("{field} ({value}): "),
        None => format!("{field}: "),
    };

    let name = prompt::read_nonempty(&label("Name", current.map(|c| c.name.clone())))?;
    let efficacy = split_list(&prompt::read_line(&label(
        "Treats (; separated)",
        current.map(|c| c.efficacy.join(";")),
    ))?);
    let min_age = prompt::read_u32(&label("Minimum age", current.map(|c| c.min_age.to_string())))?;
    let max_age = prompt::read_u32(&label("Maximum age", current.map(|c| c.max_age.to_string())))?;
    let pregnancy_safe = prompt::read_flag(&label(
        "Pregnancy safe (1/0)",
        current.map(|c| (c.pregnancy_safe as u32).to_string()),
    ))?;
    let alcohol_safe = prompt::read_flag(&label(
        "Alcohol safe (1/0)",
        current.map(|c| (c.alcohol_safe as u32).to_string()),
    ))?;
    let interactions = split_list(&prompt::read_line(&label(
        "Interactions (; separated)",
        current.map(|c| c.interactions.join(";")),
    ))?);

    Ok(DrugRecord {
        name,
        efficacy,
        min_age,
        max_age,
        pregnancy_safe,
        alcohol_safe,
        interactions,
    })
}

fn split_list(line: &str) -> Vec<String> {
    line.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
