//! Then steps for record intake BDD scenarios.

use super::world::IntakeWorld;
use rstest_bdd_macros::then;

#[then(r#"the reply reads "{expected}""#)]
fn reply_reads(world: &IntakeWorld, expected: String) -> Result<(), eyre::Report> {
    let reply = world.reply()?;
    if reply.text != expected {
        return Err(eyre::eyre!(
            "expected reply '{expected}', found '{}'",
            reply.text
        ));
    }
    Ok(())
}

#[then(r#"the reply contains "{fragment}""#)]
fn reply_contains(world: &IntakeWorld, fragment: String) -> Result<(), eyre::Report> {
    let reply = world.reply()?;
    if !reply.text.contains(&fragment) {
        return Err(eyre::eyre!(
            "expected reply to contain '{fragment}', found '{}'",
            reply.text
        ));
    }
    Ok(())
}

#[then(r#"the "{table}" table holds {count:usize} row"#)]
fn table_holds_one_row(world: &IntakeWorld, table: String, count: usize) -> Result<(), eyre::Report> {
    assert_row_count(world, &table, count)
}

#[then(r#"the "{table}" table holds {count:usize} rows"#)]
fn table_holds_rows(world: &IntakeWorld, table: String, count: usize) -> Result<(), eyre::Report> {
    assert_row_count(world, &table, count)
}

#[then(r#"the last "{table}" row has {width:usize} fields"#)]
fn last_row_width(world: &IntakeWorld, table: String, width: usize) -> Result<(), eyre::Report> {
    let row = last_row(world, &table)?;
    if row.len() != width {
        return Err(eyre::eyre!(
            "expected {width} fields in last {table} row, found {}",
            row.len()
        ));
    }
    Ok(())
}

#[then(r#"field {position:usize} of the last "{table}" row is empty"#)]
fn last_row_field_empty(
    world: &IntakeWorld,
    position: usize,
    table: String,
) -> Result<(), eyre::Report> {
    let row = last_row(world, &table)?;
    let field = position
        .checked_sub(1)
        .and_then(|index| row.get(index))
        .ok_or_else(|| eyre::eyre!("last {table} row has no field {position}"))?;
    if !field.is_empty() {
        return Err(eyre::eyre!(
            "expected field {position} to be empty, found '{field}'"
        ));
    }
    Ok(())
}

fn assert_row_count(world: &IntakeWorld, table: &str, count: usize) -> Result<(), eyre::Report> {
    let rows = world.store.inner.rows(table);
    if rows.len() != count {
        return Err(eyre::eyre!(
            "expected {count} rows in {table}, found {}",
            rows.len()
        ));
    }
    Ok(())
}

fn last_row(world: &IntakeWorld, table: &str) -> Result<Vec<String>, eyre::Report> {
    world
        .store
        .inner
        .rows(table)
        .pop()
        .ok_or_else(|| eyre::eyre!("{table} table is empty"))
}
