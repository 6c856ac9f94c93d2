//! Integration tests for the client-side router
//!
//! These tests drive the public API end to end:
//! 1. Matching against the nested application tree
//! 2. Layout inheritance and override
//! 3. Fallback handling for async views
//! 4. Not-found resolution
//! 5. Mounting through a rendering boundary with scoped parameters

use reinhardt_spa_router::prelude::*;
use reinhardt_spa_router::{match_routes, provide_route_context};
use rstest::{fixture, rstest};

type Tree = Vec<RouteNode<&'static str>>;

/// The application tree: `/a`, lazy `/b`, and `/c -> /:userId -> /e -> /:postId`.
#[fixture]
fn app_tree() -> Tree {
	vec![
		RouteNode::new("/a", "RouteA"),
		RouteNode::lazy("/b", "RouteB"),
		RouteNode::lazy("/c", "RouteC").child(
			RouteNode::lazy("/:userId", "RouteD")
				.child(RouteNode::lazy("/e", "RouteE").child(RouteNode::lazy("/:postId", "RouteF"))),
		),
	]
}

/// The same shape with a layout on every level.
#[fixture]
fn layered_tree() -> Tree {
	vec![
		RouteNode::new("/c", "RouteC").layout("L1").child(
			RouteNode::new("/:userId", "RouteD").layout("L2").child(
				RouteNode::new("/e", "RouteE")
					.layout("L3")
					.child(RouteNode::new("/:postId", "RouteF").layout("L4")),
			),
		),
	]
}

fn router_for(tree: Tree, path: &str) -> Router<&'static str> {
	Router::new(Navigator::new(MemoryHistory::new(path)))
		.routes(tree)
		.not_found("NotFound")
		.default_fallback("Loading...")
}

#[rstest]
#[case("/a", "RouteA")]
#[case("/b", "Suspense[](RouteB)")]
#[case("/c", "Suspense[](RouteC)")]
#[case("/c/42", "Suspense[](RouteD)")]
#[case("/c/42/e", "Suspense[](RouteE)")]
#[case("/c/42/e/7", "Suspense[](RouteF)")]
#[case("/z", "NotFound")]
#[case("/a/b", "NotFound")]
fn test_application_tree_resolution(app_tree: Tree, #[case] path: &str, #[case] expected: &str) {
	let router = router_for(app_tree, path);
	assert_eq!(router.resolve().output.to_string(), expected);
}

#[rstest]
fn test_nested_params(app_tree: Tree) {
	let matched = match_routes(&app_tree, "/c/42/e/7").unwrap();

	let expected: Params = [("userId", "42"), ("postId", "7")].into_iter().collect();
	assert_eq!(matched.params, expected);
	assert_eq!(matched.params.parse::<u32>("userId").unwrap(), 42);
}

#[rstest]
#[case("/c", "L1(RouteC)")]
#[case("/c/42", "L2(RouteD)")]
#[case("/c/42/e", "L3(RouteE)")]
#[case("/c/42/e/7", "L4(RouteF)")]
fn test_layout_override_per_level(layered_tree: Tree, #[case] path: &str, #[case] expected: &str) {
	let router = router_for(layered_tree, path);
	assert_eq!(router.resolve().output.to_string(), expected);
}

#[rstest]
fn test_layout_inherited_when_missing() {
	let tree = vec![
		RouteNode::new("/c", "RouteC").layout("L1").child(
			RouteNode::new("/:userId", "RouteD").child(
				RouteNode::new("/e", "RouteE")
					.layout("L3")
					.child(RouteNode::new("/:postId", "RouteF")),
			),
		),
	];

	assert_eq!(router_for(tree.clone(), "/c/42").resolve().output.to_string(), "L1(RouteD)");
	assert_eq!(router_for(tree, "/c/42/e/7").resolve().output.to_string(), "L3(RouteF)");
}

#[rstest]
fn test_async_fallbacks_under_layout() {
	let tree = vec![
		RouteNode::lazy("/c", "RouteC")
			.layout("L1")
			.fallback("C spinner")
			.child(
				RouteNode::lazy("/:userId", "RouteD")
					.child(RouteNode::lazy("/e", "RouteE").fallback("E spinner")),
			),
	];

	assert_eq!(
		router_for(tree.clone(), "/c").resolve().output.to_string(),
		"L1(Suspense[C spinner](RouteC))"
	);
	assert_eq!(
		router_for(tree.clone(), "/c/42").resolve().output.to_string(),
		"L1(Suspense[Loading...](RouteD))"
	);
	assert_eq!(
		router_for(tree, "/c/42/e").resolve().output.to_string(),
		"L1(Suspense[E spinner](RouteE))"
	);
}

#[rstest]
fn test_not_found_only_a_and_b() {
	let tree = vec![RouteNode::new("/a", "RouteA"), RouteNode::new("/b", "RouteB")];
	let router = router_for(tree, "/");

	router.navigator().navigate("/z").unwrap();
	let resolution = router.resolve();

	assert!(!resolution.matched);
	assert_eq!(resolution.output, Rendered::NotFound("NotFound"));
}

/// Renders to a string and reads parameters through the scoped accessors.
struct HtmlBoundary;

impl RenderBoundary<&'static str> for HtmlBoundary {
	type Node = String;

	fn view(&mut self, view: &&'static str, ctx: &RouteContext) -> String {
		let params = use_params();
		let mut names: Vec<_> = params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
		names.sort();
		let tab = use_query().get("tab").unwrap_or("-").to_string();
		format!("<{} path=\"{}\" params=\"{}\" tab=\"{}\"/>", view, ctx.path, names.join(","), tab)
	}

	fn layout(&mut self, layout: &&'static str, content: String, _ctx: &RouteContext) -> String {
		format!("<{}>{}</{}>", layout, content, layout)
	}

	fn suspense(&mut self, fallback: Option<&&'static str>, content: String) -> String {
		match fallback {
			Some(fallback) => format!("<Suspense fallback=\"{}\">{}</Suspense>", fallback, content),
			None => format!("<Suspense>{}</Suspense>", content),
		}
	}

	fn not_found(&mut self, view: &&'static str, _ctx: &RouteContext) -> String {
		format!("<{} status=\"404\"/>", view)
	}

	fn empty(&mut self) -> String {
		String::new()
	}
}

#[rstest]
fn test_render_into_scopes_params(layered_tree: Tree) {
	let router = router_for(layered_tree, "/c/42/e/7?tab=comments");

	let html = router.render_into(&mut HtmlBoundary);

	assert_eq!(
		html,
		"<L4><RouteF path=\"/c/42/e/7\" params=\"postId=7,userId=42\" tab=\"comments\"/></L4>"
	);
	assert!(use_params().is_empty());
	assert!(use_route_context().is_none());
}

#[rstest]
fn test_render_into_not_found(app_tree: Tree) {
	let router = router_for(app_tree, "/missing");
	assert_eq!(router.render_into(&mut HtmlBoundary), "<NotFound status=\"404\"/>");
}

#[rstest]
fn test_render_into_async_without_layout(app_tree: Tree) {
	let router = router_for(app_tree, "/b");
	assert_eq!(
		router.render_into(&mut HtmlBoundary),
		"<Suspense><RouteB path=\"/b\" params=\"\" tab=\"-\"/></Suspense>"
	);
}

#[rstest]
fn test_context_does_not_leak_between_passes(layered_tree: Tree) {
	let router = router_for(layered_tree, "/c/1");
	router.render_into(&mut HtmlBoundary);

	router.navigator().navigate("/c/2/e/3").unwrap();
	let params = provide_route_context(router.resolve().context, use_params);

	assert_eq!(params.get("userId"), Some("2"));
	assert_eq!(params.get("postId"), Some("3"));
}
