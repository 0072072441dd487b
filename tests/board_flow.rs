use std::sync::Arc;

use tempfile::TempDir;
use ticket_board::{
    DragResult, FileStore, Grouping, HttpTicketSource, KanbanBoard, Location, MemoryStore,
    PreferenceStore, ReorderOutcome, Sorting, StaticTicketSource, Ticket, User,
};

fn ids(tickets: &[Ticket]) -> Vec<String> {
    tickets.iter().map(|t| t.id.to_string()).collect()
}

fn mixed_tickets() -> Vec<Ticket> {
    vec![
        Ticket::new(1u32, "Write docs")
            .with_status("Todo")
            .with_priority(1)
            .with_user(User::new("Ana")),
        Ticket::new(2u32, "Fix crash")
            .with_status("In progress")
            .with_priority(4),
        Ticket::new(3u32, "add tests")
            .with_status("Todo")
            .with_priority(3)
            .with_user(User::new("Bo")),
        Ticket::new(4u32, "Bump deps").with_status("Todo").with_priority(3),
        Ticket::new(5u32, "Triage"),
    ]
}

async fn mounted(tickets: Vec<Ticket>) -> KanbanBoard {
    let mut app = KanbanBoard::new(
        Arc::new(MemoryStore::new()),
        Arc::new(StaticTicketSource::new(tickets)),
    )
    .await;
    app.mount().await;
    app
}

#[tokio::test]
async fn test_loads_from_http_and_persists_to_disk() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/tickets")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"id": 1, "title": "B", "description": "first", "status": "todo", "priority": 4},
                {"id": 2, "title": "A", "description": "second", "status": "todo", "priority": 2}
            ]"#,
        )
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(FileStore::new(temp_dir.path()));
    let source = Arc::new(HttpTicketSource::new(format!("{}/v1/tickets", server.url())));

    let mut app = KanbanBoard::new(store.clone(), source).await;
    app.mount().await;

    let view = app.render();
    assert_eq!(view.columns.len(), 1);
    assert_eq!(view.columns[0].title, "todo");
    let by_priority: Vec<&str> = view.columns[0].cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(by_priority, vec!["1", "2"]);

    app.set_sorting(Sorting::Title).await;
    let view = app.render();
    let by_title: Vec<&str> = view.columns[0].cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(by_title, vec!["2", "1"]);

    // A fresh component picks up the saved selectors
    let reopened = KanbanBoard::new(
        Arc::new(FileStore::new(temp_dir.path())),
        Arc::new(StaticTicketSource::default()),
    )
    .await;
    assert_eq!(reopened.preferences().sorting, Sorting::Title);
    assert_eq!(reopened.preferences().grouping, Grouping::Status);
    assert_eq!(store.get("sorting").await.unwrap().as_deref(), Some("title"));
}

#[tokio::test]
async fn test_rejected_fetch_renders_empty_board() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_status(502)
        .create_async()
        .await;

    let mut app = KanbanBoard::new(
        Arc::new(MemoryStore::new()),
        Arc::new(HttpTicketSource::new(server.url())),
    )
    .await;
    app.mount().await;

    assert!(app.board().tickets().is_empty());
    assert!(app.render().columns.is_empty());
}

#[tokio::test]
async fn test_unreachable_feed_renders_empty_board() {
    // Nothing listens on port 9 locally
    let mut app = KanbanBoard::new(
        Arc::new(MemoryStore::new()),
        Arc::new(HttpTicketSource::new("http://127.0.0.1:9/")),
    )
    .await;
    app.mount().await;

    assert!(app.render().columns.is_empty());
}

#[tokio::test]
async fn test_every_grouping_keeps_all_tickets() {
    let mut app = mounted(mixed_tickets()).await;

    for grouping in [Grouping::Status, Grouping::User, Grouping::Priority] {
        app.set_grouping(grouping).await;
        for sorting in [Sorting::Priority, Sorting::Title] {
            app.set_sorting(sorting).await;
            let view = app.render();

            let mut seen: Vec<String> = view
                .columns
                .iter()
                .flat_map(|c| c.cards.iter().map(|card| card.id.to_string()))
                .collect();
            seen.sort();
            assert_eq!(seen, vec!["1", "2", "3", "4", "5"]);
        }
    }
}

#[tokio::test]
async fn test_columns_are_ordered_within() {
    let mut app = mounted(mixed_tickets()).await;

    app.set_grouping(Grouping::Status).await;
    for column in app.render().columns {
        let priorities: Vec<i64> = column
            .cards
            .iter()
            .map(|c| c.priority.unwrap_or(0))
            .collect();
        assert!(priorities.windows(2).all(|w| w[0] >= w[1]));
    }

    app.set_sorting(Sorting::Title).await;
    for column in app.render().columns {
        let titles: Vec<String> = column.cards.iter().map(|c| c.title.to_lowercase()).collect();
        assert!(titles.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[tokio::test]
async fn test_user_grouping_falls_back_to_unassigned() {
    let mut app = mounted(vec![Ticket::new(9u32, "Orphan").with_status("Todo")]).await;
    app.set_grouping(Grouping::User).await;

    let view = app.render();
    assert_eq!(view.columns.len(), 1);
    assert_eq!(view.columns[0].title, "Unassigned");
}

#[tokio::test]
async fn test_reorder_within_column_keeps_membership() {
    let mut app = mounted(mixed_tickets()).await;

    // Todo column sorted by priority: [3 (p3), 4 (p3), 1 (p1)]; swap the tie
    let outcome = app
        .on_reorder(&DragResult::new(
            Location::new("Todo", 1),
            Some(Location::new("Todo", 0)),
        ))
        .unwrap();
    assert_eq!(outcome, ReorderOutcome::Reordered);

    let todo: Vec<String> = app
        .render()
        .columns
        .into_iter()
        .find(|c| c.title == "Todo")
        .unwrap()
        .cards
        .iter()
        .map(|c| c.id.to_string())
        .collect();
    assert_eq!(todo, vec!["4", "3", "1"]);

    assert_eq!(ids(app.board().tickets()), vec!["4", "3", "1", "2", "5"]);
}

#[tokio::test]
async fn test_cross_column_drag_leaves_list_unchanged() {
    let mut app = mounted(mixed_tickets()).await;
    let before = ids(app.board().tickets());

    let outcome = app
        .on_reorder(&DragResult::new(
            Location::new("Todo", 0),
            Some(Location::new("In progress", 0)),
        ))
        .unwrap();

    assert_eq!(outcome, ReorderOutcome::CrossBucketIgnored);
    assert_eq!(ids(app.board().tickets()), before);
}

#[tokio::test]
async fn test_unknown_grouping_from_storage_is_kept() {
    let store = Arc::new(MemoryStore::with_values([("grouping", "team")]));
    let mut app = KanbanBoard::new(store.clone(), Arc::new(StaticTicketSource::new(mixed_tickets()))).await;
    app.mount().await;

    assert_eq!(app.preferences().grouping, Grouping::Other("team".to_string()));
    assert!(app.render().columns.is_empty());
    assert_eq!(store.get("grouping").await.unwrap().as_deref(), Some("team"));
}
