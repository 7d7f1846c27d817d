//! Then steps for todo API BDD scenarios.

use super::world::TodoApiWorld;
use rstest_bdd_macros::then;
use serde_json::Value;
use todox::http::responses::TodoListEnvelope;

#[then("the response status is {status:u16}")]
fn response_status_is(world: &TodoApiWorld, status: u16) -> Result<(), eyre::Report> {
    let actual = world.last()?.status.as_u16();
    if actual != status {
        return Err(eyre::eyre!(
            "expected status {status}, got {actual}: {}",
            world.last()?.body
        ));
    }
    Ok(())
}

#[then(r#"the response todo has title "{title}""#)]
fn response_todo_has_title(world: &TodoApiWorld, title: String) -> Result<(), eyre::Report> {
    let todo = world.last_todo()?;
    if todo.title != title {
        return Err(eyre::eyre!("expected title {title:?}, got {:?}", todo.title));
    }
    Ok(())
}

#[then("the response todo has a positive id")]
fn response_todo_has_positive_id(world: &TodoApiWorld) -> Result<(), eyre::Report> {
    let todo = world.last_todo()?;
    if todo.id <= 0 {
        return Err(eyre::eyre!("expected a positive id, got {}", todo.id));
    }
    Ok(())
}

#[then("the response todo keeps the original id and creation date")]
fn response_todo_keeps_identity(world: &TodoApiWorld) -> Result<(), eyre::Report> {
    let created = world
        .created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no todo was created in this scenario"))?;
    let updated = world.last_todo()?;

    if updated.id != created.id {
        return Err(eyre::eyre!("id changed from {} to {}", created.id, updated.id));
    }
    if updated.created_date != created.created_date {
        return Err(eyre::eyre!(
            "created_date changed from {} to {}",
            created.created_date,
            updated.created_date
        ));
    }
    if !updated.status {
        return Err(eyre::eyre!("expected the updated todo to be done"));
    }
    Ok(())
}

#[then("the listed todo count is {count:usize}")]
fn listed_todo_count_is(world: &TodoApiWorld, count: usize) -> Result<(), eyre::Report> {
    let envelope: TodoListEnvelope = serde_json::from_value(world.last()?.body.clone())?;
    if envelope.todos.len() != count {
        return Err(eyre::eyre!(
            "expected {count} todos, got {}",
            envelope.todos.len()
        ));
    }
    Ok(())
}

#[then(r#"the response message is "{message}""#)]
fn response_message_is(world: &TodoApiWorld, message: String) -> Result<(), eyre::Report> {
    let actual = world.last()?.body.get("message").and_then(Value::as_str);
    if actual != Some(message.as_str()) {
        return Err(eyre::eyre!("expected message {message:?}, got {actual:?}"));
    }
    Ok(())
}

#[then(r#"the response error is "{error}""#)]
fn response_error_is(world: &TodoApiWorld, error: String) -> Result<(), eyre::Report> {
    let actual = world.last()?.body.get("error").and_then(Value::as_str);
    if actual != Some(error.as_str()) {
        return Err(eyre::eyre!("expected error {error:?}, got {actual:?}"));
    }
    Ok(())
}

#[then("no listed todo appeared on an earlier page")]
fn no_overlap_with_earlier_pages(world: &TodoApiWorld) -> Result<(), eyre::Report> {
    let envelope: TodoListEnvelope = serde_json::from_value(world.last()?.body.clone())?;
    if let Some(repeated) = envelope
        .todos
        .iter()
        .find(|todo| world.seen_ids.contains(&todo.id))
    {
        return Err(eyre::eyre!("todo {} appeared on two pages", repeated.id));
    }
    Ok(())
}
