#[path = "common/mod.rs"]
mod common;

use common::{MarqueeTest, MockBackend, seed_movies};

fn this_year() -> String {
    jiff::Zoned::now().year().to_string()
}

fn posted(backend: &MockBackend) -> Vec<String> {
    backend
        .requests()
        .into_iter()
        .filter(|r| r.starts_with("POST") || r.starts_with("DELETE"))
        .collect()
}

// ============================================================================
// Adding movies
// ============================================================================

#[test]
fn test_add_requires_sign_in() {
    let backend = MockBackend::start(seed_movies(), vec![]);
    let marquee = MarqueeTest::with_backend(&backend);

    let stderr = marquee.run_failure(&["add", "--title", "Dune"]);
    assert!(stderr.contains("sign in first"), "{stderr}");
    assert!(posted(&backend).is_empty());
}

#[test]
fn test_add_reports_every_invalid_field() {
    let backend = MockBackend::start(seed_movies(), vec![]);
    let marquee = MarqueeTest::with_backend(&backend);
    marquee.sign_in();

    let stderr = marquee.run_failure(&["add", "--title", "D", "--duration", "45"]);
    assert!(stderr.contains("validation failed"), "{stderr}");
    assert!(stderr.contains("Poster URL is required"), "{stderr}");
    assert!(stderr.contains("Title must be at least 2 characters"), "{stderr}");
    assert!(stderr.contains("Duration must be at least 60 minutes"), "{stderr}");
    assert!(stderr.contains("Please select a genre"), "{stderr}");
    assert!(posted(&backend).is_empty());
}

#[test]
fn test_add_rejects_old_release_year() {
    let backend = MockBackend::start(seed_movies(), vec![]);
    let marquee = MarqueeTest::with_backend(&backend);
    marquee.sign_in();

    let stderr = marquee.run_failure(&[
        "add",
        "--poster",
        "https://img.example.com/heat.jpg",
        "--title",
        "Heat",
        "--genre",
        "drama",
        "--duration",
        "170",
        "--year",
        "1995",
        "--rating",
        "4.5",
        "--summary",
        "A thief and a detective circle each other.",
    ]);
    assert!(
        stderr.contains("Please select a release year from the last 20 years"),
        "{stderr}"
    );
    assert!(posted(&backend).is_empty());
}

#[test]
fn test_add_posts_valid_movie() {
    let backend = MockBackend::start(seed_movies(), vec![]);
    let marquee = MarqueeTest::with_backend(&backend);
    marquee.sign_in();

    let year = this_year();
    let output = marquee.run_json(&[
        "add",
        "--poster",
        "https://img.example.com/dune.jpg",
        "--title",
        "Dune",
        "--genre",
        "sci-fi",
        "--duration",
        "155",
        "--year",
        &year,
        "--rating",
        "4.5",
        "--summary",
        "A noble family becomes embroiled in a war.",
    ]);

    assert_eq!(output["action"], "add");
    assert_eq!(output["done"], true);
    assert_eq!(output["message"], "Movie has been added successfully");
    assert_eq!(output["route"], "home");
    assert_eq!(output["id"], "new1");
    assert_eq!(posted(&backend), vec!["POST /api/movie"]);

    let movies = backend.movies();
    let created = movies.last().unwrap();
    assert_eq!(created["title"], "Dune");
    assert_eq!(created["genre"], "Sci-Fi");
    assert_eq!(created["duration"], 155);
}

// ============================================================================
// Deleting movies
// ============================================================================

#[test]
fn test_rm_without_yes_refuses_non_interactive() {
    let backend = MockBackend::start(seed_movies(), vec![]);
    let marquee = MarqueeTest::with_backend(&backend);
    marquee.sign_in();

    let stderr = marquee.run_failure(&["rm", "m1"]);
    assert!(stderr.contains("pass --yes to proceed"), "{stderr}");
    assert!(posted(&backend).is_empty());
    assert_eq!(backend.movies().len(), 5);
}

#[test]
fn test_rm_requires_sign_in() {
    let backend = MockBackend::start(seed_movies(), vec![]);
    let marquee = MarqueeTest::with_backend(&backend);

    let stderr = marquee.run_failure(&["rm", "m1", "--yes"]);
    assert!(stderr.contains("sign in first"), "{stderr}");
    assert!(posted(&backend).is_empty());
}

#[test]
fn test_rm_with_yes_deletes_and_routes_to_all_movies() {
    let backend = MockBackend::start(seed_movies(), vec![]);
    let marquee = MarqueeTest::with_backend(&backend);
    marquee.sign_in();

    let output = marquee.run_json(&["rm", "m2", "--yes"]);
    assert_eq!(output["done"], true);
    assert_eq!(output["message"], "Movie removed successfully");
    assert_eq!(output["route"], "allmovies");
    assert_eq!(posted(&backend), vec!["DELETE /api/movie/m2"]);
    assert_eq!(backend.movies().len(), 4);
}

#[test]
fn test_rm_nothing_deleted_is_reported() {
    let backend = MockBackend::start(seed_movies(), vec![]);
    backend.state.lock().unwrap().delete_count = Some(0);
    let marquee = MarqueeTest::with_backend(&backend);
    marquee.sign_in();

    let output = marquee.run_json(&["rm", "m2", "--yes"]);
    assert_eq!(output["done"], false);
    assert_eq!(output["cancelled"], false);
    assert_eq!(output["message"], "Movie was not deleted");
    assert!(output["route"].is_null());
}

#[test]
fn test_rm_rejects_malformed_id() {
    let backend = MockBackend::start(seed_movies(), vec![]);
    let marquee = MarqueeTest::with_backend(&backend);
    marquee.sign_in();

    marquee.run_failure(&["rm", "a/b", "--yes"]);
    assert!(posted(&backend).is_empty());
}

// ============================================================================
// Favorites
// ============================================================================

#[test]
fn test_fav_add_copies_catalog_record() {
    let backend = MockBackend::start(seed_movies(), vec![]);
    let marquee = MarqueeTest::with_backend(&backend);
    marquee.sign_in();

    let output = marquee.run_json(&["fav", "add", "m3"]);
    assert_eq!(output["done"], true);
    assert_eq!(output["message"], "Movie added to favourites");
    assert_eq!(output["route"], "home");

    assert_eq!(
        backend.requests(),
        vec!["GET /api/movie/m3", "POST /api/favmovie"]
    );
    let favorites = backend.favorites();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["title"], "Alien");
}

#[test]
fn test_fav_add_missing_movie() {
    let backend = MockBackend::start(seed_movies(), vec![]);
    let marquee = MarqueeTest::with_backend(&backend);
    marquee.sign_in();

    let stderr = marquee.run_failure(&["fav", "add", "nope"]);
    assert!(stderr.contains("movie 'nope' not found"), "{stderr}");
    assert!(posted(&backend).is_empty());
}

#[test]
fn test_fav_rm_routes_to_favorites() {
    let backend = MockBackend::start(vec![], seed_movies());
    let marquee = MarqueeTest::with_backend(&backend);
    marquee.sign_in();

    let output = marquee.run_json(&["fav", "rm", "m1", "--yes"]);
    assert_eq!(output["done"], true);
    assert_eq!(output["message"], "Movie has been removed from favorites");
    assert_eq!(output["route"], "favorites");
    assert_eq!(posted(&backend), vec!["DELETE /api/favmovie/m1"]);
    assert_eq!(backend.favorites().len(), 4);
}

#[test]
fn test_fav_rm_nothing_deleted() {
    let backend = MockBackend::start(vec![], seed_movies());
    backend.state.lock().unwrap().delete_count = Some(0);
    let marquee = MarqueeTest::with_backend(&backend);
    marquee.sign_in();

    let output = marquee.run_json(&["fav", "rm", "m1", "--yes"]);
    assert_eq!(output["done"], false);
    assert_eq!(output["message"], "Movie was not removed from favorites");
    assert!(output["route"].is_null());
}

// ============================================================================
// Feedback
// ============================================================================

#[test]
fn test_feedback_validation() {
    let marquee = MarqueeTest::new();

    let stderr = marquee.run_failure(&[
        "feedback", "-n", "S", "-e", "not-an-email", "-m", "too short",
    ]);
    assert!(stderr.contains("Name must be at least 2 characters"), "{stderr}");
    assert!(stderr.contains("Please enter a valid email address"), "{stderr}");
    assert!(stderr.contains("Please select a rating"), "{stderr}");
    assert!(stderr.contains("Please provide at least 20 characters"), "{stderr}");
}

#[test]
fn test_feedback_accepted_without_backend() {
    let marquee = MarqueeTest::new();

    let output = marquee.run_json(&[
        "feedback",
        "-n",
        "Sam",
        "-e",
        "sam@example.com",
        "-r",
        "5",
        "-m",
        "Search feels quick and the lists are easy to read.",
    ]);
    assert_eq!(output["action"], "feedback");
    assert_eq!(output["done"], true);
    assert_eq!(
        output["message"],
        "Your feedback has been received successfully"
    );
}
