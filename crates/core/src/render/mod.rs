//! HTML rendering: cards, the catalog view, navigation and the page shell.
//!
//! Everything here is a pure function of its inputs. Theme and navigation
//! options arrive through [`PageLayout`], never through globals.

pub mod card;
pub mod catalog_view;
pub mod html;
pub mod nav;
pub mod page;
pub mod theme;

pub use card::{format_price, render_card, CardImage, CardModel};
pub use catalog_view::{
    reload_action, render_catalog_view, view_url, CatalogViewState, FilterControl, FilterOption,
};
pub use nav::{NavItem, Navigation, BROWSE_PATH, NAV_ITEMS};
pub use page::{home_body, placeholder_body, PageContent, PageLayout, Refresh};
