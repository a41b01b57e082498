//! Given steps for record intake BDD scenarios.

use super::world::{IntakeWorld, ScenarioStore};
use rstest_bdd_macros::given;
use tallybook::record::adapters::InMemoryTableStore;

#[given("an empty table store")]
fn empty_table_store(world: &mut IntakeWorld) {
    world.store = ScenarioStore::default();
}

#[given("a table store that rejects appends")]
fn rejecting_table_store(world: &mut IntakeWorld) {
    world.store = ScenarioStore {
        inner: InMemoryTableStore::new(),
        reject_appends: true,
    };
}

#[given(r#"a table store shared at "{location}""#)]
fn shared_table_store(world: &mut IntakeWorld, location: String) {
    world.store = ScenarioStore {
        inner: InMemoryTableStore::new().with_location(location),
        reject_appends: false,
    };
}

#[given(r#"the expense table is named "{name}""#)]
fn expense_table_named(world: &mut IntakeWorld, name: String) {
    world.tables.expense = name;
}

#[given(r#"a message starting with "{command}""#)]
fn message_starting_with(world: &mut IntakeWorld, command: String) {
    world.command = Some(command);
}

#[given(r#"the message body "{body}""#)]
fn message_body(world: &mut IntakeWorld, body: String) {
    world.body = body.split('|').map(str::to_owned).collect();
}
