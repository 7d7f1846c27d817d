//! `PostgreSQL` tests for the filtered, ordered, paginated list statement.

use std::collections::BTreeSet;

use super::helpers::{BoxError, insert_todo, setup_repository};
use chrono::{Duration, Utc};
use todox::todo::{
    domain::{Page, TodoListQuery},
    ports::TodoRepository,
};

#[ignore = "requires TODOX_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn list_orders_newest_first_with_id_tie_break() -> Result<(), BoxError> {
    let (_schema, repository) = setup_repository().await?;
    for index in 1..=4 {
        insert_todo(&repository, &format!("todo {index}"), false).await?;
    }

    let listed = repository.list(&TodoListQuery::new()).await?;
    let titles: Vec<&str> = listed.iter().map(|todo| todo.title()).collect();

    assert_eq!(titles, ["todo 4", "todo 3", "todo 2", "todo 1"]);
    Ok(())
}

#[ignore = "requires TODOX_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn pages_are_disjoint() -> Result<(), BoxError> {
    let (_schema, repository) = setup_repository().await?;
    for index in 1..=5 {
        insert_todo(&repository, &format!("todo {index}"), false).await?;
    }

    let mut seen = BTreeSet::new();
    let mut sizes = Vec::new();
    for number in 1..=3 {
        let query = TodoListQuery::new().with_page(Page::new(number, 2)?);
        let listed = repository.list(&query).await?;
        sizes.push(listed.len());
        for todo in listed {
            assert!(seen.insert(todo.id()), "todo {} repeated", todo.id());
        }
    }

    assert_eq!(sizes, [2, 2, 1]);
    Ok(())
}

#[ignore = "requires TODOX_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn status_and_date_filters_combine() -> Result<(), BoxError> {
    let (_schema, repository) = setup_repository().await?;
    insert_todo(&repository, "open", false).await?;
    let done = insert_todo(&repository, "done", true).await?;
    let window_start = done.created_date() - Duration::minutes(5);
    let window_end = Utc::now() + Duration::minutes(5);

    let query = TodoListQuery::new()
        .created_from(window_start)
        .created_until(window_end)
        .with_status(true);
    let listed = repository.list(&query).await?;

    assert_eq!(listed, vec![done]);
    Ok(())
}

#[ignore = "requires TODOX_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn end_date_before_every_row_returns_nothing() -> Result<(), BoxError> {
    let (_schema, repository) = setup_repository().await?;
    let created = insert_todo(&repository, "recent", false).await?;

    let query = TodoListQuery::new().created_until(created.created_date() - Duration::days(1));
    let listed = repository.list(&query).await?;

    assert!(listed.is_empty());
    Ok(())
}
