//! When steps for record intake BDD scenarios.

use super::world::{IntakeWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tallybook::record::services::RecordIntakeService;

#[when("the message is handled")]
fn handle_message(world: &mut IntakeWorld) -> Result<(), eyre::Report> {
    let service =
        RecordIntakeService::with_default_validators(world.shared_store(), world.tables.clone())
            .wrap_err("build intake service")?;
    let message = world.message()?;

    world.last_reply = Some(run_async(service.handle(&message)));
    Ok(())
}
