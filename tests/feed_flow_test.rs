mod common;

use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;
use tokio_util::sync::CancellationToken;

use postfeed::{
    core::{cmd_executor::CmdExecutor, raw_msg::RawMsg, state::AppState},
    domain::query::{FilterKey, SortColumn, SortOrder},
    infrastructure::{api_service::ApiService, config::Config},
    integration::runtime::Runtime,
};

use common::{char_key, key, post_ids, settle_runtime, FakePostsApi};

/// Runtime wired to a running ApiService over `api`, sized to a 100x30 terminal
fn runtime_with(api: FakePostsApi) -> Result<(Runtime, CancellationToken)> {
    let config = Config::embedded()?;
    let mut runtime = Runtime::new(AppState::new_with_config(config));
    let (api_tx, cancel, service) = ApiService::new(api, runtime.get_raw_sender());
    service.run();
    runtime.set_executor(CmdExecutor::new_with_api(api_tx));
    runtime.send_raw_msg(RawMsg::Resize(100, 30));
    Ok((runtime, cancel))
}

fn press(runtime: &mut Runtime, keys: &[crossterm::event::KeyEvent]) {
    for key in keys {
        runtime.send_raw_msg(RawMsg::Key(*key));
    }
}

fn idle_with(count: usize) -> impl Fn(&AppState) -> bool {
    move |state| state.feed.len() == count && !state.feed.is_loading()
}

#[tokio::test]
async fn test_initial_load_is_newest_first() -> Result<()> {
    let api = FakePostsApi::with_posts(50);
    let (mut runtime, cancel) = runtime_with(api.clone())?;

    runtime.send_raw_msg(RawMsg::Init);
    settle_runtime(&mut runtime, idle_with(20)).await?;

    let ids = post_ids(runtime.state());
    assert_eq!(ids.first().map(String::as_str), Some("50"));
    assert_eq!(ids.last().map(String::as_str), Some("31"));
    let requests = api.post_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!((requests[0].offset, requests[0].limit), (0, 20));
    cancel.cancel();
    Ok(())
}

#[tokio::test]
async fn test_scrolling_near_bottom_appends_next_page() -> Result<()> {
    let api = FakePostsApi::with_posts(50);
    let (mut runtime, cancel) = runtime_with(api.clone())?;
    runtime.send_raw_msg(RawMsg::Init);
    settle_runtime(&mut runtime, idle_with(20)).await?;

    // Nine posts fit on screen; the next page is requested within two rows of the end
    press(&mut runtime, &[char_key('j'); 10]);
    runtime.run_update_cycle()?;
    assert_eq!(api.post_requests().len(), 1);

    press(&mut runtime, &[char_key('j'); 10]);
    settle_runtime(&mut runtime, idle_with(40)).await?;

    press(&mut runtime, &[char_key('j'); 20]);
    settle_runtime(&mut runtime, idle_with(50)).await?;

    let offsets: Vec<usize> = api.post_requests().iter().map(|q| q.offset).collect();
    assert_eq!(offsets, vec![0, 20, 40]);
    assert_eq!(post_ids(runtime.state()).last().map(String::as_str), Some("1"));
    cancel.cancel();
    Ok(())
}

#[tokio::test]
async fn test_sort_restarts_from_first_page() -> Result<()> {
    let api = FakePostsApi::with_posts(50);
    let (mut runtime, cancel) = runtime_with(api.clone())?;
    runtime.send_raw_msg(RawMsg::Init);
    settle_runtime(&mut runtime, idle_with(20)).await?;

    // '3' sorts by comments, pressing it again flips the order
    press(&mut runtime, &[char_key('3')]);
    settle_runtime(&mut runtime, idle_with(20)).await?;
    press(&mut runtime, &[char_key('3')]);
    settle_runtime(&mut runtime, idle_with(20)).await?;

    let requests = api.post_requests();
    let last = &requests[requests.len() - 1];
    assert_eq!(last.offset, 0);
    assert_eq!(last.sort.column, SortColumn::Comments);
    assert_eq!(last.sort.order, SortOrder::Asc);
    let comments: Vec<u64> = runtime.state().feed.posts().iter().map(|p| p.comments).collect();
    assert!(comments.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(runtime.state().feed.selected_index(), None);
    cancel.cancel();
    Ok(())
}

#[tokio::test]
async fn test_stale_page_is_discarded() -> Result<()> {
    let api = FakePostsApi::with_posts(50);
    // The initial request answers after the sort request
    api.delay_next([Duration::from_millis(150), Duration::ZERO]);
    let (mut runtime, cancel) = runtime_with(api.clone())?;

    runtime.send_raw_msg(RawMsg::Init);
    runtime.run_update_cycle()?;
    press(&mut runtime, &[char_key('2')]);
    settle_runtime(&mut runtime, idle_with(20)).await?;

    // Let the slow response arrive and be dropped
    tokio::time::sleep(Duration::from_millis(250)).await;
    runtime.run_update_cycle()?;

    assert_eq!(runtime.state().feed.len(), 20);
    assert_eq!(runtime.state().feed.sort().column, SortColumn::Likes);
    let likes: Vec<u64> = runtime.state().feed.posts().iter().map(|p| p.likes).collect();
    assert!(likes.windows(2).all(|w| w[0] >= w[1]));
    cancel.cancel();
    Ok(())
}

#[tokio::test]
async fn test_filter_panel_submit_queries_with_filters() -> Result<()> {
    let api = FakePostsApi::with_posts(50);
    let (mut runtime, cancel) = runtime_with(api.clone())?;
    runtime.send_raw_msg(RawMsg::Init);
    settle_runtime(&mut runtime, idle_with(20)).await?;

    // Open the panel, move to "Likes from", type 450 and submit
    press(
        &mut runtime,
        &[
            char_key('f'),
            key(KeyCode::Tab),
            key(KeyCode::Tab),
            char_key('4'),
            char_key('5'),
            char_key('0'),
            key(KeyCode::Enter),
        ],
    );
    settle_runtime(&mut runtime, idle_with(6)).await?;

    let requests = api.post_requests();
    let last = &requests[requests.len() - 1];
    assert_eq!(last.filters.get(FilterKey::LikesMin), Some("450"));
    assert!(!runtime.state().filter.is_visible());
    assert_eq!(
        post_ids(runtime.state()),
        vec!["50", "49", "48", "47", "46", "45"]
    );

    // Clearing filters goes back to the full feed
    press(&mut runtime, &[char_key('x')]);
    settle_runtime(&mut runtime, idle_with(20)).await?;
    let requests = api.post_requests();
    assert!(requests[requests.len() - 1].filters.is_empty());
    cancel.cancel();
    Ok(())
}

#[tokio::test]
async fn test_invalid_filter_is_reported_and_ignored() -> Result<()> {
    let api = FakePostsApi::with_posts(50);
    let (mut runtime, cancel) = runtime_with(api.clone())?;
    runtime.send_raw_msg(RawMsg::Init);
    settle_runtime(&mut runtime, idle_with(20)).await?;

    // "Date from" accepts digits and dashes, but 2024-13 is not a date
    let mut keys = vec![char_key('f')];
    keys.extend([key(KeyCode::BackTab), key(KeyCode::BackTab)]);
    keys.extend("2024-13".chars().map(char_key));
    keys.push(key(KeyCode::Enter));
    press(&mut runtime, &keys);
    settle_runtime(&mut runtime, idle_with(20)).await?;

    let requests = api.post_requests();
    assert!(requests[requests.len() - 1].filters.is_empty());
    assert_eq!(
        runtime.state().system.status_message().map(String::as_str),
        Some("Ignored invalid filter: Date from")
    );
    cancel.cancel();
    Ok(())
}

#[tokio::test]
async fn test_search_is_debounced() -> Result<()> {
    let api = FakePostsApi::with_posts(5).with_topics(&["cats", "cars", "dogs"]);
    let (mut runtime, cancel) = runtime_with(api.clone())?;

    press(&mut runtime, &[char_key('/'), char_key('c'), char_key('a')]);
    runtime.run_update_cycle()?;
    settle_runtime(&mut runtime, |state| state.search.suggestions().len() == 2).await?;

    // Only the settled query reaches the server
    assert_eq!(api.suggestion_requests(), vec!["ca".to_string()]);

    press(&mut runtime, &[key(KeyCode::Down), key(KeyCode::Enter)]);
    runtime.run_update_cycle()?;
    assert!(!runtime.state().search.is_active());
    assert_eq!(
        runtime.state().system.status_message().map(String::as_str),
        Some("/topic/1")
    );
    cancel.cancel();
    Ok(())
}
