//! Integration tests for navigation and query state
//!
//! Covers the subscriber contract, link activation, query merging and
//! back/forward re-resolution against a router.

use reinhardt_spa_router::prelude::*;
use reinhardt_spa_router::Subscription;
use rstest::rstest;
use std::cell::RefCell;
use std::rc::Rc;

fn record_paths(navigator: &Navigator) -> (Rc<RefCell<Vec<String>>>, Subscription) {
	let seen = Rc::new(RefCell::new(Vec::new()));
	let log = Rc::clone(&seen);
	let subscription = navigator.subscribe(move |path| log.borrow_mut().push(path.to_string()));
	(seen, subscription)
}

#[rstest]
fn test_every_subscriber_notified_once() {
	let navigator = Navigator::new(MemoryHistory::new("/"));
	let (first, _s1) = record_paths(&navigator);
	let (second, _s2) = record_paths(&navigator);
	let (third, _s3) = record_paths(&navigator);

	navigator.navigate("/b").unwrap();

	for seen in [&first, &second, &third] {
		assert_eq!(*seen.borrow(), vec!["/b"]);
	}
}

#[rstest]
fn test_subscribers_fire_in_subscription_order() {
	let navigator = Navigator::new(MemoryHistory::new("/"));
	let order = Rc::new(RefCell::new(Vec::new()));

	for id in 0..4 {
		let order = Rc::clone(&order);
		navigator.subscribe(move |_| order.borrow_mut().push(id));
	}
	navigator.navigate("/next").unwrap();

	assert_eq!(*order.borrow(), vec![0, 1, 2, 3]);
}

#[rstest]
fn test_self_unsubscribing_listener_does_not_disturb_others() {
	let navigator = Navigator::new(MemoryHistory::new("/"));
	let (before, _s1) = record_paths(&navigator);

	let once = Rc::new(RefCell::new(Vec::new()));
	let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
	let log = Rc::clone(&once);
	let own = Rc::clone(&slot);
	*slot.borrow_mut() = Some(navigator.subscribe(move |path| {
		log.borrow_mut().push(path.to_string());
		if let Some(subscription) = own.borrow().as_ref() {
			subscription.unsubscribe();
		}
	}));

	let (after, _s3) = record_paths(&navigator);

	navigator.navigate("/b").unwrap();
	navigator.navigate("/c").unwrap();

	assert_eq!(*once.borrow(), vec!["/b"]);
	assert_eq!(*before.borrow(), vec!["/b", "/c"]);
	assert_eq!(*after.borrow(), vec!["/b", "/c"]);
}

#[rstest]
fn test_dropping_subscription_token_keeps_listener() {
	let navigator = Navigator::new(MemoryHistory::new("/"));
	let (seen, subscription) = record_paths(&navigator);
	drop(subscription);

	navigator.navigate("/kept").unwrap();
	assert_eq!(*seen.borrow(), vec!["/kept"]);
}

#[rstest]
fn test_link_activation_matches_navigate() {
	let history = Rc::new(MemoryHistory::new("/"));
	let navigator = Navigator::from_shared(history.clone(), RouterSettings::default());
	let (seen, _subscription) = record_paths(&navigator);

	let click = SyntheticClick::new();
	assert!(Link::new("/about", "About").on_click(&navigator, &click).unwrap());

	assert!(click.is_default_prevented());
	assert_eq!(history.entries(), vec!["/", "/about"]);
	assert_eq!(*seen.borrow(), vec!["/about"]);
}

#[rstest]
fn test_update_query_params_merge_not_replace() {
	let navigator = Navigator::new(MemoryHistory::new("/editor?lang=en"));
	let query = navigator.query();

	query.update([("mode", "x")]).unwrap();
	query.update([("id", "y")]).unwrap();

	let snapshot = query.snapshot();
	assert_eq!(snapshot.get("mode"), Some("x"));
	assert_eq!(snapshot.get("id"), Some("y"));
	assert_eq!(snapshot.get("lang"), Some("en"));
	assert_eq!(navigator.current_path(), "/editor");
}

#[rstest]
fn test_update_query_params_overwrites_existing_key() {
	let navigator = Navigator::new(MemoryHistory::new("/list?page=1&sort=asc"));

	navigator.update_query_params([("page", "2")]).unwrap();

	assert_eq!(navigator.location().to_url(), "/list?page=2&sort=asc");
}

#[rstest]
fn test_query_update_notifies_with_unchanged_path() {
	let navigator = Navigator::new(MemoryHistory::new("/list"));
	let (seen, _subscription) = record_paths(&navigator);

	navigator.update_query_params([("q", "rust router")]).unwrap();

	assert_eq!(*seen.borrow(), vec!["/list"]);
	assert_eq!(navigator.location().to_url(), "/list?q=rust%20router");
}

#[rstest]
fn test_back_forward_rerender_router() {
	let navigator = Navigator::new(MemoryHistory::new("/"));
	let router = Router::new(navigator.clone())
		.route(RouteNode::new("/a", "A"))
		.route(RouteNode::new("/users", "Users").child(RouteNode::new("/:id", "User")))
		.not_found("404");

	let renders = Rc::new(RefCell::new(Vec::new()));
	let log = Rc::clone(&renders);
	let router = Rc::new(router);
	let handle = Rc::clone(&router);
	navigator.subscribe(move |_| log.borrow_mut().push(handle.resolve().output.to_string()));

	navigator.navigate("/a").unwrap();
	navigator.navigate("/users/5").unwrap();
	navigator.back().unwrap();
	navigator.forward().unwrap();
	navigator.back().unwrap();
	navigator.back().unwrap();

	assert_eq!(*renders.borrow(), vec!["A", "User", "A", "User", "A", "404"]);
}

#[rstest]
fn test_query_reflects_address_after_back() {
	let navigator = Navigator::new(MemoryHistory::new("/search"));
	navigator.update_query_params([("q", "first")]).unwrap();
	navigator.navigate("/search?q=second").unwrap();

	navigator.back().unwrap();
	assert_eq!(navigator.query().get("q"), Some("first".to_string()));
}

#[rstest]
fn test_location_listener_sees_query() {
	let navigator = Navigator::new(MemoryHistory::new("/"));
	let seen = Rc::new(RefCell::new(Vec::new()));
	let log = Rc::clone(&seen);
	navigator.subscribe_location(move |location| log.borrow_mut().push(location.to_url()));

	navigator.navigate("/p?b=2&a=1").unwrap();
	assert_eq!(*seen.borrow(), vec!["/p?a=1&b=2"]);
}

#[rstest]
fn test_history_limit_from_settings() {
	let settings = RouterSettings::new().with_history_limit(2);
	let history = Rc::new(MemoryHistory::from_settings(&settings));
	let navigator = Navigator::from_shared(history.clone(), settings);

	navigator.navigate("/1").unwrap();
	navigator.navigate("/2").unwrap();
	navigator.navigate("/3").unwrap();

	assert_eq!(history.entries(), vec!["/2", "/3"]);
	assert_eq!(navigator.settings().history_limit, 2);
}
