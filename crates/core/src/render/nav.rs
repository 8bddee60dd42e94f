//! Site navigation. The only consumer of the current path.

use crate::config::NavigationConfig;

use super::html::escape;

pub const HOME_PATH: &str = "/";
pub const BROWSE_PATH: &str = "/browse-wines";
pub const SOMMELIER_PATH: &str = "/ai-sommelier";
pub const CART_PATH: &str = "/cart";
pub const ACCOUNT_PATH: &str = "/account";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        href: HOME_PATH,
        label: "Home",
        icon: "\u{1F3E0}",
    },
    NavItem {
        href: BROWSE_PATH,
        label: "Browse Wines",
        icon: "\u{1F377}",
    },
    NavItem {
        href: SOMMELIER_PATH,
        label: "AI Sommelier",
        icon: "\u{2728}",
    },
    NavItem {
        href: CART_PATH,
        label: "Cart",
        icon: "\u{1F6D2}",
    },
    NavItem {
        href: ACCOUNT_PATH,
        label: "Account",
        icon: "\u{1F464}",
    },
];

#[derive(Debug, Clone, Default)]
pub struct Navigation {
    show_icons: bool,
}

impl Navigation {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            show_icons: config.show_icons,
        }
    }

    pub fn shows_icons(&self) -> bool {
        self.show_icons
    }

    /// Render the bar, marking the item whose href equals `current_path`.
    pub fn render(&self, current_path: &str) -> String {
        let mut html = String::from(r#"<nav class="site-nav"><ul>"#);
        for item in &NAV_ITEMS {
            let active = item.href == current_path;
            let icon = if self.show_icons {
                format!(r#"<span class="nav-icon" aria-hidden="true">{}</span> "#, item.icon)
            } else {
                String::new()
            };
            html.push_str(&format!(
                r#"<li><a href="{}"{}>{}{}</a></li>"#,
                item.href,
                if active {
                    r#" class="active" aria-current="page""#
                } else {
                    ""
                },
                icon,
                escape(item.label)
            ));
        }
        html.push_str("</ul></nav>");
        html
    }
}
