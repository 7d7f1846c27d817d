//! Given steps for todo API BDD scenarios.

use super::world::TodoApiWorld;
use axum::http::{Method, StatusCode};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use serde_json::json;

#[given("an empty todo service")]
fn empty_todo_service(world: &mut TodoApiWorld) {
    world.created = None;
    world.last_response = None;
    world.seen_ids.clear();
}

#[given("{count:usize} todos have been created")]
fn todos_have_been_created(world: &mut TodoApiWorld, count: usize) -> Result<(), eyre::Report> {
    for index in 1..=count {
        let response = world
            .send(
                Method::POST,
                "/todos",
                Some(json!({ "title": format!("todo {index}") })),
            )
            .wrap_err("create seed todo")?;
        if response.status != StatusCode::CREATED {
            return Err(eyre::eyre!(
                "seeding todo {index} returned {}",
                response.status
            ));
        }
    }
    Ok(())
}
