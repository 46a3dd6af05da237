use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use filmfetcher::app::{App, AppMessage, Focus};
use filmfetcher::detail::Selection;
use filmfetcher::models::{MovieDetail, MovieSummary};
use filmfetcher::omdb::{parse_search_response, OmdbApi};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

#[derive(Default)]
struct FakeOmdb {
    searches: HashMap<String, Vec<MovieSummary>>,
    error_bodies: HashMap<String, Value>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl FakeOmdb {
    fn with_search(mut self, term: &str, results: Vec<MovieSummary>) -> Self {
        self.searches.insert(term.to_string(), results);
        self
    }

    fn with_provider_error(mut self, term: &str, message: &str) -> Self {
        self.error_bodies.insert(
            term.to_string(),
            json!({ "Response": "False", "Error": message }),
        );
        self
    }

    fn with_delay(mut self, key: &str, millis: u64) -> Self {
        self.delays
            .insert(key.to_string(), Duration::from_millis(millis));
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn pause_for(&self, key: &str) {
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[async_trait::async_trait]
impl OmdbApi for FakeOmdb {
    async fn search(&self, term: &str) -> anyhow::Result<Vec<MovieSummary>> {
        self.calls.lock().unwrap().push(format!("s={term}"));
        self.pause_for(term).await;
        if let Some(body) = self.error_bodies.get(term) {
            return parse_search_response(body.clone());
        }
        Ok(self.searches.get(term).cloned().unwrap_or_default())
    }

    async fn lookup(&self, imdb_id: &str) -> anyhow::Result<MovieDetail> {
        self.calls.lock().unwrap().push(format!("i={imdb_id}"));
        self.pause_for(imdb_id).await;
        if imdb_id.is_empty() {
            anyhow::bail!("Incorrect IMDb ID.");
        }
        Ok(detail(imdb_id))
    }
}

fn summary(id: &str, title: &str) -> MovieSummary {
    MovieSummary {
        imdb_id: id.to_string(),
        title: title.to_string(),
        poster: format!("https://posters/{id}.jpg"),
        year: "1989".to_string(),
    }
}

fn detail(id: &str) -> MovieDetail {
    MovieDetail {
        imdb_id: id.to_string(),
        title: format!("Title {id}"),
        released: "23 Jun 1989".to_string(),
        runtime: "126 min".to_string(),
        imdb_rating: "7.5".to_string(),
        ..Default::default()
    }
}

fn batman_results() -> Vec<MovieSummary> {
    vec![summary("tt1", "Batman"), summary("tt2", "Batman Returns")]
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

async fn next_message(rx: &mut UnboundedReceiver<AppMessage>) -> AppMessage {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for a settled fetch")
        .expect("channel closed")
}

async fn settle(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>, count: usize) {
    for _ in 0..count {
        let msg = next_message(rx).await;
        app.handle_message(msg);
    }
}

async fn assert_quiet(rx: &mut UnboundedReceiver<AppMessage>) {
    let res = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
    assert!(res.is_err(), "unexpected extra fetch");
}

#[tokio::test]
async fn start_searches_for_the_empty_query() {
    let fake = Arc::new(FakeOmdb::default());
    let (mut app, mut rx) = App::with_channel(fake.clone());

    app.start();
    settle(&mut app, &mut rx, 1).await;

    assert_eq!(fake.calls(), vec!["s=".to_string()]);
    assert!(app.search().results().is_empty());
}

#[tokio::test]
async fn search_results_follow_the_provider_response() {
    let fake = Arc::new(FakeOmdb::default().with_search("batman", batman_results()));
    let (mut app, mut rx) = App::with_channel(fake.clone());

    app.set_query("batman");
    settle(&mut app, &mut rx, 1).await;

    let titles: Vec<&str> = app
        .search()
        .results()
        .iter()
        .map(|m| m.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Batman", "Batman Returns"]);
    assert_eq!(app.highlighted(), Some(0));
}

#[tokio::test]
async fn same_query_does_not_refetch() {
    let fake = Arc::new(FakeOmdb::default().with_search("batman", batman_results()));
    let (mut app, mut rx) = App::with_channel(fake.clone());

    app.set_query("batman");
    settle(&mut app, &mut rx, 1).await;
    app.set_query("batman");
    assert_quiet(&mut rx).await;
    assert_eq!(fake.calls(), vec!["s=batman".to_string()]);
}

#[tokio::test]
async fn slow_response_for_older_query_does_not_win() {
    let fake = Arc::new(
        FakeOmdb::default()
            .with_search("bat", vec![summary("tt7", "Bats")])
            .with_search("batman", batman_results())
            .with_delay("bat", 100),
    );
    let (mut app, mut rx) = App::with_channel(fake.clone());

    app.set_query("bat");
    app.set_query("batman");
    settle(&mut app, &mut rx, 2).await;

    assert_eq!(app.search().query(), "batman");
    assert_eq!(app.search().results(), batman_results().as_slice());
}

#[tokio::test]
async fn shorter_query_with_provider_error_clears_results() {
    let fake = Arc::new(
        FakeOmdb::default()
            .with_search("batman", batman_results())
            .with_provider_error("b", "Too many results."),
    );
    let (mut app, mut rx) = App::with_channel(fake.clone());

    app.set_query("batman");
    settle(&mut app, &mut rx, 1).await;
    assert_eq!(app.highlighted(), Some(0));

    app.set_query("b");
    settle(&mut app, &mut rx, 1).await;
    assert_eq!(app.search().query(), "b");
    assert!(app.search().results().is_empty());
    assert_eq!(app.highlighted(), None);
}

#[tokio::test]
async fn shorter_query_with_no_match_clears_results() {
    let fake = Arc::new(
        FakeOmdb::default()
            .with_search("batman", batman_results())
            .with_provider_error("bat", "Movie not found!"),
    );
    let (mut app, mut rx) = App::with_channel(fake.clone());

    app.set_query("batman");
    settle(&mut app, &mut rx, 1).await;
    app.set_query("bat");
    settle(&mut app, &mut rx, 1).await;
    assert!(app.search().results().is_empty());
    assert_eq!(app.highlighted(), None);
}

#[tokio::test]
async fn modified_chars_do_not_type_into_search() {
    let fake = Arc::new(FakeOmdb::default());
    let (mut app, mut rx) = App::with_channel(fake.clone());

    app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
    app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
    assert_eq!(app.search().query(), "");
    assert_quiet(&mut rx).await;
    assert!(fake.calls().is_empty());

    app.handle_key(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT));
    assert_eq!(app.search().query(), "B");
    settle(&mut app, &mut rx, 1).await;
    assert_eq!(fake.calls(), vec!["s=B".to_string()]);
}

#[tokio::test]
async fn selecting_twice_deselects_without_empty_lookup() {
    let fake = Arc::new(FakeOmdb::default());
    let (mut app, mut rx) = App::with_channel(fake.clone());

    app.select_movie("tt1");
    app.select_movie("tt1");
    settle(&mut app, &mut rx, 1).await;
    assert_quiet(&mut rx).await;

    assert_eq!(app.detail().selected_id(), "");
    assert!(app.detail().detail().is_none());
    assert_eq!(fake.calls(), vec!["i=tt1".to_string()]);
}

#[tokio::test]
async fn switching_selection_keeps_latest_detail() {
    let fake = Arc::new(FakeOmdb::default().with_delay("tt1", 100));
    let (mut app, mut rx) = App::with_channel(fake.clone());

    app.select_movie("tt1");
    app.select_movie("tt2");
    settle(&mut app, &mut rx, 2).await;

    assert_eq!(
        app.detail().selection(),
        &Selection::Selected("tt2".to_string())
    );
    assert_eq!(
        app.detail().detail().map(|d| d.imdb_id.as_str()),
        Some("tt2")
    );
    assert!(fake.calls().contains(&"i=tt2".to_string()));
}

#[tokio::test]
async fn close_always_clears_selection() {
    let fake = Arc::new(FakeOmdb::default());
    let (mut app, mut rx) = App::with_channel(fake);

    app.close_movie();
    assert_eq!(app.detail().selected_id(), "");

    app.select_movie("tt1");
    settle(&mut app, &mut rx, 1).await;
    assert!(app.detail().detail().is_some());

    app.close_movie();
    assert_eq!(app.detail().selected_id(), "");
    assert!(app.detail().detail().is_none());
}

#[tokio::test]
async fn watch_list_appends_without_dedup() {
    let fake = Arc::new(FakeOmdb::default());
    let (mut app, _rx) = App::with_channel(fake);

    let movie = detail("tt1");
    app.add_to_watch(Some(movie.clone()));
    assert_eq!(app.detail().watch_list().entries(), &[Some(movie.clone())]);

    app.add_to_watch(Some(movie.clone()));
    assert_eq!(
        app.detail().watch_list().entries(),
        &[Some(movie.clone()), Some(movie)]
    );

    app.add_to_watch(None);
    assert_eq!(app.detail().watch_list().len(), 3);
}

#[tokio::test]
async fn keyboard_drives_search_select_watch_and_close() {
    let fake = Arc::new(
        FakeOmdb::default()
            .with_search("b", vec![summary("tt0", "B")])
            .with_search("ba", batman_results()),
    );
    let (mut app, mut rx) = App::with_channel(fake.clone());

    app.handle_key(key(KeyCode::Char('b')));
    app.handle_key(key(KeyCode::Char('a')));
    settle(&mut app, &mut rx, 2).await;
    assert_eq!(app.search().query(), "ba");
    assert_eq!(app.search().results(), batman_results().as_slice());

    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.focus(), Focus::Results);
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.highlighted(), Some(1));

    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.detail().selected_id(), "tt2");
    settle(&mut app, &mut rx, 1).await;

    app.handle_key(key(KeyCode::Char('w')));
    assert_eq!(
        app.detail().watch_list().entries(),
        &[Some(detail("tt2"))]
    );

    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.detail().selected_id(), "");

    app.handle_key(key(KeyCode::Char('/')));
    assert_eq!(app.focus(), Focus::Search);
    app.handle_key(key(KeyCode::Backspace));
    settle(&mut app, &mut rx, 1).await;
    assert_eq!(app.search().results(), &[summary("tt0", "B")]);
    assert_eq!(app.highlighted(), Some(0));
}

#[tokio::test]
async fn quit_keys_set_the_flag() {
    let fake = Arc::new(FakeOmdb::default());
    let (mut app, _rx) = App::with_channel(fake.clone());
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());

    let (mut app, _rx) = App::with_channel(fake);
    app.handle_key(key(KeyCode::Char('q')));
    assert!(!app.should_quit(), "q types into the search bar");
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}
