//! Page shell: head, theme, navigation, main content.

use crate::config::{Config, ThemeConfig};

use super::card::DISCUSS_TARGET;
use super::html::escape;
use super::nav::{Navigation, ACCOUNT_PATH, BROWSE_PATH, CART_PATH, SOMMELIER_PATH};
use super::theme::stylesheet;

pub const SITE_TITLE: &str = "Sentio - Modern Wine Appreciation";
const SITE_DESCRIPTION: &str =
    "Sentio - Experience a new era of wine appreciation, curated for the modern connoisseur.";

/// Reload the page after `secs` at `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refresh {
    pub secs: u32,
    pub url: String,
}

/// One page worth of content.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub current_path: String,
    pub body: String,
    pub refresh: Option<Refresh>,
}

impl PageContent {
    pub fn new(current_path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
            body: body.into(),
            refresh: None,
        }
    }

    pub fn with_refresh(mut self, refresh: Refresh) -> Self {
        self.refresh = Some(refresh);
        self
    }
}

/// Everything shared by all pages. Built once from config.
#[derive(Debug, Clone)]
pub struct PageLayout {
    theme: ThemeConfig,
    navigation: Navigation,
    stylesheet: String,
}

impl PageLayout {
    pub fn new(theme: ThemeConfig, navigation: Navigation) -> Self {
        let stylesheet = stylesheet(&theme);
        Self {
            theme,
            navigation,
            stylesheet,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.theme.clone(), Navigation::new(&config.navigation))
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn render(&self, page: &PageContent) -> String {
        let refresh = page
            .refresh
            .as_ref()
            .map(|r| {
                format!(
                    r#"<meta http-equiv="refresh" content="{};url={}">"#,
                    r.secs,
                    escape(&r.url)
                )
            })
            .unwrap_or_default();

        format!(
            concat!(
                "<!DOCTYPE html>\n",
                r#"<html lang="en"><head><meta charset="utf-8">"#,
                r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
                "<title>{title}</title>",
                r#"<meta name="description" content="{description}">"#,
                "{refresh}",
                "<style>{style}</style>",
                "</head><body>",
                "{nav}",
                "<main>{body}</main>",
                r#"<iframe name="{sink}" title="discuss" hidden></iframe>"#,
                "</body></html>\n"
            ),
            title = SITE_TITLE,
            description = SITE_DESCRIPTION,
            refresh = refresh,
            style = self.stylesheet,
            nav = self.navigation.render(&page.current_path),
            body = page.body,
            sink = DISCUSS_TARGET,
        )
    }
}

/// Landing page body.
pub fn home_body() -> String {
    format!(
        concat!(
            r#"<header class="home-hero"><h1>Welcome to Sentio</h1>"#,
            "<p>Experience a new era of wine appreciation, curated for the modern connoisseur.</p></header>",
            r#"<section class="home-cta"><h2>Going on a Date?</h2>"#,
            "<p>Find the perfect wine for any occasion. Whether you&#39;re impressing a date or ",
            "bringing a gift to your in-laws, we have the ideal selection for you.</p>",
            r#"<a class="button" href="{}">Start Browsing Wines</a></section>"#
        ),
        BROWSE_PATH
    )
}

/// Body of a screen that has no behavior yet, keyed by path.
pub fn placeholder_body(path: &str) -> Option<String> {
    let (title, message) = match path {
        SOMMELIER_PATH => (
            "AI Sommelier",
            "Coming soon! Get personalized wine recommendations from our AI.",
        ),
        CART_PATH => (
            "Shopping Cart",
            "Your cart is currently empty. Start browsing to add some exquisite wines!",
        ),
        ACCOUNT_PATH => (
            "My Account",
            "Manage your account details, order history, and preferences here.",
        ),
        _ => return None,
    };
    Some(format!(
        r#"<section class="placeholder"><h1>{}</h1><p>{}</p></section>"#,
        title, message
    ))
}
