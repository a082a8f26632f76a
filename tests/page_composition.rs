//! Page composition integration tests
//!
//! Builds realistic layouts from several component families and checks the
//! rendered HTML as a whole:
//!
//! 1. Children are normalized (fragments flattened, empty pages dropped)
//! 2. Caller classes override conflicting base classes
//! 3. Alpine.js data declared by parents is referenced, not duplicated, by children
//! 4. Attribute values are escaped exactly once
//! 5. Constrained children are rejected with typed errors

use altar_ui::components::ui::accordion::*;
use altar_ui::components::ui::breadcrumb::*;
use altar_ui::components::ui::card::*;
use altar_ui::components::ui::sidebar::*;
use altar_ui::components::ui::table::*;
use altar_ui::components::ui::tabs::*;
use altar_ui::prelude::*;
use rstest::*;

// ============================================================================
// Fixtures
// ============================================================================

/// Provides an application shell with a sidebar and a breadcrumb header
#[fixture]
fn app_shell() -> Page {
	let menu = SidebarMenu::new().children(["Inbox", "Drafts", "Sent"].map(|label| {
		SidebarMenuItem::new()
			.is_active(label == "Inbox")
			.child(SidebarMenuButton::new().has_active_state(true).child(label))
	}));
	let sidebar = Sidebar::new()
		.variant(SidebarVariant::Inset)
		.child(SidebarHeader::new().child("Mail"))
		.child(SidebarContent::new().child(SidebarGroup::new().child(menu)));
	let header = Breadcrumb::new().child(
		BreadcrumbList::new()
			.child(BreadcrumbItem::new().child(BreadcrumbLink::new().attr("href", "/").child("Home")))
			.child(BreadcrumbSeparator::new())
			.child(BreadcrumbItem::new().child(BreadcrumbPage::new().child("Inbox"))),
	);
	let inset = SidebarInset::new()
		.child(PageElement::new("header").child(SidebarTrigger::new()).child(header));

	SidebarProvider::new(sidebar, inset)
		.expect("a <main> inset is accepted")
		.into_page()
}

// ============================================================================
// Happy Path Tests
// ============================================================================

/// Tests that the shell renders the provider state once at the root
#[rstest]
fn test_app_shell_declares_sidebar_state_once(app_shell: Page) {
	let html = app_shell.render_to_string();
	assert!(html.starts_with("<div data-slot=\"sidebar-wrapper\""));
	assert_eq!(html.matches("isSidebarOpen: true").count(), 1);
	assert_eq!(html.matches("@click=\"toggleSidebarState()\"").count(), 1);
}

/// Tests that sidebar children appear in both the mobile and desktop containers
#[rstest]
fn test_app_shell_menu_is_rendered_per_viewport(app_shell: Page) {
	let html = app_shell.render_to_string();
	assert_eq!(html.matches("data-slot=\"sidebar-menu-item\"").count(), 6);
	assert_eq!(html.matches("init() { currentActiveMenuItem = this.sidebarMenuItem }").count(), 2);
}

/// Tests the breadcrumb inside the inset
#[rstest]
fn test_app_shell_breadcrumb(app_shell: Page) {
	let current = app_shell
		.find_element(&|el| el.get_attr("data-slot") == Some("breadcrumb-page"))
		.expect("current page is rendered");
	assert_eq!(current.child_views(), &[Page::text("Inbox")]);

	let separator = app_shell
		.find_element(&|el| el.get_attr("data-slot") == Some("breadcrumb-separator"))
		.expect("separator is rendered");
	assert_eq!(separator.get_attr("aria-hidden"), Some("true"));
}

/// Tests a card holding a table built from iterators
#[rstest]
fn test_card_with_table() {
	let rows = [("INV001", "Paid"), ("INV002", "Pending")];
	let page = Card::new()
		.class("py-4")
		.child(CardHeader::new().child(CardTitle::new().child("Invoices")))
		.child(
			CardContent::new().child(
				Table::new().class("text-xs").child(
					TableBody::new().children(rows.map(|(id, status)| {
						TableRow::new()
							.child(TableCell::new().child(id))
							.child(TableCell::new().child(status))
					})),
				),
			),
		)
		.into_page();

	let card = page.as_element().unwrap();
	assert!(!card.get_attr("class").unwrap().contains("py-6"));
	assert!(card.get_attr("class").unwrap().ends_with("py-4"));

	let table = page.find_element(&|el| el.tag_name() == "table").unwrap();
	assert_eq!(table.get_attr("class"), Some("w-full caption-bottom text-xs"));
	assert_eq!(page.render_to_string().matches("<tr").count(), 2);
}

// ============================================================================
// Directive Chain Tests
// ============================================================================

/// Tests that nested scopes reference the data of their parents
#[rstest]
fn test_accordion_items_reference_root_state() {
	let page = Accordion::new(AccordionType::Single)
		.child(
			AccordionItem::new()
				.id("Shipping")
				.child(AccordionTrigger::new().child("Shipping"))
				.child(AccordionContent::new().child("Ships in 2 days.")),
		)
		.into_page();
	let html = page.render_to_string();

	assert_eq!(html.matches("activeAccordion: ''").count(), 1);
	assert!(html.contains("x-data=\"{item_id: 'shipping'}\""));
	assert!(html.contains("toggleActiveAccordionState(item_id)"));
}

/// Tests that caller data is merged into component data
#[rstest]
fn test_caller_x_data_is_merged() {
	let page = Tabs::new("account")
		.x_data("{ dirty: false }")
		.x_data(AlpineData::new().entry("saved", true))
		.child(TabsList::new().child(TabsTrigger::new("account").child("Account")))
		.child(TabsContent::new("account").child("Settings"))
		.into_page();
	let data = page.as_element().and_then(|el| el.get_attr("x-data")).unwrap();
	assert!(data.starts_with("{selectedTab: 'account', "));
	assert!(data.ends_with("saved: true, dirty: false}"));
}

// ============================================================================
// Edge Cases
// ============================================================================

/// Tests that fragments are flattened and empty children dropped
#[rstest]
fn test_children_are_normalized() {
	let page = CardContent::new()
		.child(Page::empty())
		.child(None::<&'static str>)
		.child(("a", Page::fragment(vec!["b", "c"])))
		.children(Vec::<Page>::new())
		.into_page();
	assert_eq!(page.as_element().unwrap().child_views().len(), 3);
	assert!(page.render_to_string().ends_with(">abc</div>"));
}

/// Tests that attribute values and text are escaped once
#[rstest]
fn test_values_are_escaped_once() {
	let html = Button::new()
		.attr("title", "Save & \"close\"")
		.child("<b>Save</b>")
		.into_page()
		.render_to_string();
	assert!(html.contains("title=\"Save &amp; &quot;close&quot;\""));
	assert!(html.contains("&lt;b&gt;Save&lt;/b&gt;"));
	assert!(!html.contains("&amp;amp;"));
}

// ============================================================================
// Error Path Tests
// ============================================================================

/// Tests that the provider rejects insets of the wrong element
#[rstest]
#[case(PageElement::new("aside").into_page(), "InvalidChild")]
#[case(Page::empty(), "ChildCount")]
#[case(Page::text("text"), "InvalidChild")]
fn test_sidebar_provider_rejects_invalid_inset(#[case] inset: Page, #[case] expected: &str) {
	let err = SidebarProvider::new(Sidebar::new(), inset).unwrap_err();
	let kind = match &err {
		ComponentError::InvalidChild { .. } => "InvalidChild",
		ComponentError::ChildCount { .. } => "ChildCount",
		_ => "other",
	};
	assert_eq!(kind, expected);
	assert!(err.to_string().contains("SidebarProvider"));
}
