//! When steps for todo API BDD scenarios.

use super::world::TodoApiWorld;
use axum::http::{Method, StatusCode};
use rstest_bdd_macros::when;
use serde_json::{Value, json};

#[when(r#"a done todo titled "{title}" described as "{description}" is created"#)]
fn create_done_todo(
    world: &mut TodoApiWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let body = json!({ "title": title, "description": description, "status": true });
    let status = world.send(Method::POST, "/todos", Some(body))?.status;
    if status == StatusCode::CREATED {
        world.created = Some(world.last_todo()?);
    }
    Ok(())
}

#[when("a todo without a title is created")]
fn create_untitled_todo(world: &mut TodoApiWorld) -> Result<(), eyre::Report> {
    world.send(
        Method::POST,
        "/todos",
        Some(json!({ "description": "nothing to call it" })),
    )?;
    Ok(())
}

#[when("the todos are listed")]
fn list_todos(world: &mut TodoApiWorld) -> Result<(), eyre::Report> {
    world.send(Method::GET, "/todos", None)?;
    Ok(())
}

#[when("page {page:u32} of size {size:u32} is listed")]
fn list_page(world: &mut TodoApiWorld, page: u32, size: u32) -> Result<(), eyre::Report> {
    if page == 1 {
        world.seen_ids.clear();
    } else {
        let previous = world
            .last()?
            .body
            .get("todos")
            .and_then(Value::as_array)
            .ok_or_else(|| eyre::eyre!("previous response has no todos array"))?
            .iter()
            .filter_map(|todo| todo.get("id").and_then(Value::as_i64))
            .collect::<Vec<_>>();
        world.seen_ids.extend(previous);
    }

    world.send(
        Method::GET,
        &format!("/todos?page={page}&pageSize={size}"),
        None,
    )?;
    Ok(())
}

#[when(
    r#"the created todo is retitled "{title}" described as "{description}" and marked done"#
)]
fn update_created_todo(
    world: &mut TodoApiWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let id = world
        .created
        .as_ref()
        .map(|todo| todo.id)
        .ok_or_else(|| eyre::eyre!("no todo was created in this scenario"))?;
    world.send(
        Method::PUT,
        &format!("/todos/{id}"),
        Some(json!({ "title": title, "description": description, "status": true })),
    )?;
    Ok(())
}

#[when(r#"todo {id:i64} is retitled "{title}""#)]
fn update_todo_by_id(world: &mut TodoApiWorld, id: i64, title: String) -> Result<(), eyre::Report> {
    world.send(
        Method::PUT,
        &format!("/todos/{id}"),
        Some(json!({ "title": title })),
    )?;
    Ok(())
}

#[when("the created todo is deleted")]
fn delete_created_todo(world: &mut TodoApiWorld) -> Result<(), eyre::Report> {
    let id = world
        .created
        .as_ref()
        .map(|todo| todo.id)
        .ok_or_else(|| eyre::eyre!("no todo was created in this scenario"))?;
    world.send(Method::DELETE, &format!("/todos/{id}"), None)?;
    Ok(())
}

#[when("todo {id:i64} is deleted")]
fn delete_todo_by_id(world: &mut TodoApiWorld, id: i64) -> Result<(), eyre::Report> {
    world.send(Method::DELETE, &format!("/todos/{id}"), None)?;
    Ok(())
}
