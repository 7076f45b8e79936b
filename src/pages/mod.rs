//! Route table, navigation and page models
//!
//! Each routed page has one serialisable model the hosting shell renders.

pub mod card;
pub mod models;

pub use card::{CardModel, CardVariant};
pub use models::{
    AuthPage, HomePage, InfoPage, JoinPage, LearnPage, ProductDetailPage, ProductPage,
};

use serde::{Deserialize, Serialize};

/// A routed page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Learn,
    Product,
    ProductDetail,
    Service,
    AboutUs,
    Join,
    Login,
    Signup,
}

impl Page {
    /// Every page, in route table order
    pub const ALL: [Page; 9] = [
        Page::Home,
        Page::Learn,
        Page::Product,
        Page::ProductDetail,
        Page::Service,
        Page::AboutUs,
        Page::Join,
        Page::Login,
        Page::Signup,
    ];

    pub const fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Learn => "/learn",
            Page::Product => "/product",
            Page::ProductDetail => "/productdetail",
            Page::Service => "/service",
            Page::AboutUs => "/aboutus",
            Page::Join => "/join",
            Page::Login => "/login",
            Page::Signup => "/signup",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Learn => "Learn",
            Page::Product => "Products",
            Page::ProductDetail => "Product Details",
            Page::Service => "Service",
            Page::AboutUs => "About Us",
            Page::Join => "Join",
            Page::Login => "Login",
            Page::Signup => "Sign Up",
        }
    }

    /// Resolve a request path; a trailing slash is ignored
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|page| page.path() == path)
    }
}

/// Route table entry served by `/api/pages`
#[derive(Debug, Clone, Serialize)]
pub struct PageInfo {
    pub page: Page,
    pub path: &'static str,
    pub title: &'static str,
}

impl From<Page> for PageInfo {
    fn from(page: Page) -> Self {
        Self {
            page,
            path: page.path(),
            title: page.title(),
        }
    }
}

pub fn route_table() -> Vec<PageInfo> {
    Page::ALL.into_iter().map(PageInfo::from).collect()
}

/// Sidebar navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    /// Icon name from the shell's icon set
    pub icon: &'static str,
    pub path: &'static str,
}

const fn nav(name: &'static str, icon: &'static str, page: Page) -> NavItem {
    NavItem {
        name,
        icon,
        path: page.path(),
    }
}

static NAVIGATION: [NavItem; 6] = [
    nav("Home", "home", Page::Home),
    nav("Learn", "book", Page::Learn),
    nav("Product", "briefcase", Page::Product),
    nav("Service", "settings", Page::Service),
    nav("About Us", "users", Page::AboutUs),
    nav("Join", "circle", Page::Join),
];

/// Main sidebar entries, in display order
pub fn navigation() -> &'static [NavItem] {
    &NAVIGATION
}

/// The separate login entry pinned to the bottom of the sidebar
pub fn login_entry() -> NavItem {
    nav("Login", "user", Page::Login)
}

/// Sidebar as rendered on every page
#[derive(Debug, Clone, Serialize)]
pub struct Sidebar {
    pub items: &'static [NavItem],
    pub login: NavItem,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self {
            items: navigation(),
            login: login_entry(),
        }
    }
}
