use chrono::Duration;
use recipe_widget::{Provider, RecipeFetcher};

#[tokio::test]
async fn test_timeline_carries_the_fetched_recipe() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{ "meals": [ { "strMeal": "Shakshuka", "strCategory": "Vegetarian", "strArea": "Egyptian", "strMealThumb": "https://example.com/shakshuka.jpg" } ] }"#,
        )
        .create_async()
        .await;

    let fetcher = RecipeFetcher::with_endpoint(format!("{}/random.php", server.url()), None);
    let timeline = Provider.timeline(&fetcher).await;

    assert_eq!(timeline.entries.len(), 1);
    assert_eq!(timeline.entries[0].recipe.name, "Shakshuka");
}

#[tokio::test]
async fn test_fetch_failure_substitutes_the_failed_record() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/random.php")
        .with_status(500)
        .create_async()
        .await;

    let fetcher = RecipeFetcher::with_endpoint(format!("{}/random.php", server.url()), None);
    let timeline = Provider.timeline(&fetcher).await;

    assert_eq!(timeline.entries.len(), 1);
    let recipe = &timeline.entries[0].recipe;
    assert_eq!(recipe.category, "Failed to load");
    assert!(recipe.name.is_empty());
}

#[tokio::test]
async fn test_refresh_is_scheduled_five_minutes_after_the_entry() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "meals": [ { "strMeal": "Toast" } ] }"#)
        .create_async()
        .await;

    let fetcher = RecipeFetcher::with_endpoint(format!("{}/random.php", server.url()), None);
    let timeline = Provider.timeline(&fetcher).await;

    let entry_date = timeline.entries[0].date;
    assert_eq!(timeline.refresh_after - entry_date, Duration::minutes(5));
}

#[tokio::test]
async fn test_configured_refresh_interval_is_honored() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "meals": [ { "strMeal": "Toast" } ] }"#)
        .create_async()
        .await;

    let fetcher = RecipeFetcher::with_endpoint(format!("{}/random.php", server.url()), None);
    let timeline = Provider.timeline_with_interval(&fetcher, 10).await;

    let entry_date = timeline.entries[0].date;
    assert_eq!(timeline.refresh_after - entry_date, Duration::minutes(10));
}
