//! Browser history tests
//!
//! Run with `wasm-pack test --headless --chrome`. They drive the real
//! `window.history` and `popstate` machinery.

#![cfg(target_arch = "wasm32")]

use reinhardt_spa_router::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn navigator() -> Navigator {
	Navigator::new(BrowserHistory::new().unwrap())
}

#[wasm_bindgen_test]
fn test_initial_location_read_from_window() {
	let navigator = navigator();
	let pathname = web_sys::window().unwrap().location().pathname().unwrap();

	assert_eq!(navigator.current_path(), pathname);
}

#[wasm_bindgen_test]
fn test_navigate_updates_address_bar() {
	let navigator = navigator();

	navigator.navigate("/wasm/users/42?tab=posts").unwrap();

	let location = web_sys::window().unwrap().location();
	assert_eq!(location.pathname().unwrap(), "/wasm/users/42");
	assert_eq!(location.search().unwrap(), "?tab=posts");
	assert_eq!(navigator.current_path(), "/wasm/users/42");
}

#[wasm_bindgen_test]
fn test_update_query_params_keeps_path() {
	let navigator = navigator();
	navigator.navigate("/wasm/editor").unwrap();

	navigator.update_query_params([("mode", "x")]).unwrap();
	navigator.update_query_params([("id", "y")]).unwrap();

	let location = web_sys::window().unwrap().location();
	assert_eq!(location.pathname().unwrap(), "/wasm/editor");
	assert_eq!(location.search().unwrap(), "?id=y&mode=x");
}

#[wasm_bindgen_test]
fn test_replace_rewrites_current_entry() {
	let navigator = navigator();
	let history = web_sys::window().unwrap().history().unwrap();
	let before = history.length().unwrap();

	navigator.replace("/wasm/replaced").unwrap();

	assert_eq!(history.length().unwrap(), before);
	assert_eq!(navigator.current_path(), "/wasm/replaced");
}

#[wasm_bindgen_test]
fn test_popstate_event_notifies_subscribers() {
	let navigator = navigator();
	navigator.navigate("/wasm/popped").unwrap();

	let seen = Rc::new(RefCell::new(Vec::new()));
	let log = Rc::clone(&seen);
	navigator.subscribe(move |path| log.borrow_mut().push(path.to_string()));

	let event = web_sys::PopStateEvent::new("popstate").unwrap();
	web_sys::window().unwrap().dispatch_event(&event).unwrap();

	assert_eq!(*seen.borrow(), vec!["/wasm/popped"]);
}

#[wasm_bindgen_test]
fn test_link_click_with_dom_event() {
	let navigator = navigator();
	let event = web_sys::MouseEvent::new("click").unwrap();

	let handled = Link::new("/wasm/linked", "Linked").on_click(&navigator, &event).unwrap();

	assert!(handled);
	assert_eq!(navigator.current_path(), "/wasm/linked");
}
