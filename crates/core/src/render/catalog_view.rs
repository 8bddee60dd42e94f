//! Catalog view: picks one visual state from a store snapshot and renders it.
//!
//! | phase   | full set  | visible set | state      |
//! |---------|-----------|-------------|------------|
//! | loading | any       | any         | `Loading`  |
//! | error   | empty     | empty       | `Error`    |
//! | ready   | empty     | empty       | `Empty`    |
//! | ready   | non-empty | empty       | `NoMatch`  |
//! | ready   | non-empty | non-empty   | `Populated`|

use crate::store::{CatalogSnapshot, LoadPhase, TypeFilter};

use super::card::{render_card, CardModel};
use super::html::{capitalize_first, escape};
use super::nav::BROWSE_PATH;

/// Label of the leading "no filter" option.
pub const ALL_TYPES_LABEL: &str = "All Types";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Submitted value; empty for "all types".
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// The type select: "All Types" first, then one option per available type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub options: Vec<FilterOption>,
}

impl FilterControl {
    pub fn new(available_types: &[String], active: &TypeFilter) -> Self {
        let mut options = Vec::with_capacity(available_types.len() + 1);
        options.push(FilterOption {
            value: String::new(),
            label: ALL_TYPES_LABEL.to_string(),
            selected: active.is_all(),
        });

        let mut selected_found = active.is_all();
        for wine_type in available_types {
            let selected = !selected_found
                && wine_type.to_lowercase() == active.as_value().to_lowercase();
            selected_found |= selected;
            options.push(FilterOption {
                value: wine_type.clone(),
                label: capitalize_first(wine_type),
                selected,
            });
        }

        Self { options }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogViewState {
    Loading,
    Error { detail: String },
    Empty { control: FilterControl },
    NoMatch { filter: String, control: FilterControl },
    Populated { control: FilterControl, cards: Vec<CardModel> },
}

impl CatalogViewState {
    pub fn from_snapshot(snapshot: &CatalogSnapshot) -> Self {
        match &snapshot.phase {
            LoadPhase::Loading => CatalogViewState::Loading,
            LoadPhase::Error(detail) => CatalogViewState::Error {
                detail: detail.clone(),
            },
            LoadPhase::Ready => {
                let control = FilterControl::new(&snapshot.available_types, &snapshot.filter);
                if snapshot.full.is_empty() {
                    CatalogViewState::Empty {
                        control: FilterControl::new(&[], &TypeFilter::All),
                    }
                } else if snapshot.visible.is_empty() {
                    CatalogViewState::NoMatch {
                        filter: snapshot.filter.to_string(),
                        control,
                    }
                } else {
                    CatalogViewState::Populated {
                        control,
                        cards: snapshot.visible.iter().map(CardModel::from_wine).collect(),
                    }
                }
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CatalogViewState::Loading => "loading",
            CatalogViewState::Error { .. } => "error",
            CatalogViewState::Empty { .. } => "empty",
            CatalogViewState::NoMatch { .. } => "no_match",
            CatalogViewState::Populated { .. } => "populated",
        }
    }

    /// Whether the page should keep polling for a settled load.
    pub fn is_pending(&self) -> bool {
        matches!(self, CatalogViewState::Loading)
    }
}

/// Action of the reload form for a mounted view.
pub fn reload_action(view_id: &str) -> String {
    format!("{}/{}/reload", BROWSE_PATH, urlencoding::encode(view_id))
}

/// URL rendering the given view, optionally with a filter applied.
pub fn view_url(view_id: &str, filter: &TypeFilter) -> String {
    let mut url = format!("{}?view={}", BROWSE_PATH, urlencoding::encode(view_id));
    if !filter.is_all() {
        url.push_str("&type=");
        url.push_str(&urlencoding::encode(filter.as_value()));
    }
    url
}

fn render_filter_control(control: &FilterControl, view_id: &str) -> String {
    let mut html = format!(
        concat!(
            r#"<form class="catalog-filter" method="get" action="{}">"#,
            r#"<input type="hidden" name="view" value="{}">"#,
            r#"<select name="type" onchange="this.form.submit()">"#
        ),
        BROWSE_PATH,
        escape(view_id)
    );
    for option in &control.options {
        html.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            escape(&option.value),
            if option.selected { " selected" } else { "" },
            escape(&option.label)
        ));
    }
    html.push_str(r#"</select><noscript><button type="submit">Filter</button></noscript></form>"#);
    html
}

const HEADING: &str = r#"<h1 class="catalog-heading">Explore Our Wine Collection</h1>"#;

/// Render the view body for `state`. `view_id` ties forms back to the mount.
pub fn render_catalog_view(state: &CatalogViewState, view_id: &str) -> String {
    match state {
        CatalogViewState::Loading => concat!(
            r#"<section class="catalog-status" data-state="loading">"#,
            "<p>Loading wines, please wait...</p>",
            r#"<div class="spinner"></div>"#,
            "</section>"
        )
        .to_string(),
        CatalogViewState::Error { detail } => format!(
            concat!(
                r#"<section class="catalog-status" data-state="error">"#,
                r#"<p class="catalog-error">Error: {}</p>"#,
                "<p>We couldn&#39;t load the wines at this time. Please try again later.</p>",
                r#"<form method="post" action="{}"><button type="submit">Try again</button></form>"#,
                "</section>"
            ),
            escape(detail),
            reload_action(view_id)
        ),
        CatalogViewState::Empty { control } => format!(
            concat!(
                r#"<section class="catalog-status" data-state="empty">"#,
                "{}",
                "<p>No wines available at the moment.</p>",
                "<p>Please check back later or try adjusting your filters.</p>",
                "</section>"
            ),
            render_filter_control(control, view_id)
        ),
        CatalogViewState::NoMatch { filter, control } => format!(
            concat!(
                r#"<section class="catalog" data-state="no_match">"#,
                "{}{}",
                r#"<p class="catalog-status">No wines match the selected filter &quot;{}&quot;.</p>"#,
                "</section>"
            ),
            HEADING,
            render_filter_control(control, view_id),
            escape(filter)
        ),
        CatalogViewState::Populated { control, cards } => {
            let mut html = format!(
                r#"<section class="catalog" data-state="populated">{}{}<div class="catalog-grid">"#,
                HEADING,
                render_filter_control(control, view_id)
            );
            for card in cards {
                html.push_str(&render_card(card));
            }
            html.push_str("</div></section>");
            html
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;
    use crate::wine::Wine;

    fn snapshot(
        phase: LoadPhase,
        full: Vec<Wine>,
        filter: TypeFilter,
    ) -> CatalogSnapshot {
        let visible = crate::store::filter_wines(&full, &filter);
        let available_types = crate::store::distinct_types(&full);
        CatalogSnapshot {
            phase,
            full,
            visible,
            filter,
            available_types,
        }
    }

    #[test]
    fn test_loading_state() {
        let state = CatalogViewState::from_snapshot(&snapshot(
            LoadPhase::Loading,
            vec![],
            TypeFilter::All,
        ));
        assert_eq!(state, CatalogViewState::Loading);
        assert!(state.is_pending());

        let html = render_catalog_view(&state, "v1");
        assert!(html.contains("Loading wines, please wait..."));
        assert!(!html.contains("wine-card"));
    }

    #[test]
    fn test_loading_wins_over_stale_data() {
        let state = CatalogViewState::from_snapshot(&snapshot(
            LoadPhase::Loading,
            fixtures::scenario_a(),
            TypeFilter::All,
        ));
        assert_eq!(state, CatalogViewState::Loading);
    }

    #[test]
    fn test_error_state_scenario_c() {
        let state = CatalogViewState::from_snapshot(&snapshot(
            LoadPhase::Error("Failed to fetch wines: network failure: refused".to_string()),
            vec![],
            TypeFilter::All,
        ));
        assert_eq!(state.name(), "error");

        let html = render_catalog_view(&state, "v1");
        assert!(html.contains("Error: Failed to fetch wines: network failure: refused"));
        assert!(html.contains("Please try again later."));
        assert!(html.contains(r#"action="/browse-wines/v1/reload""#));
        assert_eq!(html.matches("wine-card").count(), 0);
    }

    #[test]
    fn test_empty_state_scenario_b() {
        let state = CatalogViewState::from_snapshot(&snapshot(
            LoadPhase::Ready,
            vec![],
            TypeFilter::All,
        ));
        let CatalogViewState::Empty { control } = &state else {
            panic!("expected empty state, got {:?}", state);
        };
        assert_eq!(control.options.len(), 1);
        assert_eq!(control.options[0].label, ALL_TYPES_LABEL);

        let html = render_catalog_view(&state, "v1");
        assert!(html.contains("No wines available at the moment."));
        assert_eq!(html.matches("<option").count(), 1);
    }

    #[test]
    fn test_populated_scenario_a() {
        let state = CatalogViewState::from_snapshot(&snapshot(
            LoadPhase::Ready,
            fixtures::scenario_a(),
            TypeFilter::All,
        ));
        let CatalogViewState::Populated { control, cards } = &state else {
            panic!("expected populated state, got {:?}", state);
        };

        let values: Vec<&str> = control.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["", "Red", "White"]);
        assert!(control.options[0].selected);

        let prices: Vec<&str> = cards.iter().map(|c| c.price.as_str()).collect();
        assert_eq!(prices, vec!["$12.50", "$18.00"]);

        let html = render_catalog_view(&state, "v1");
        assert_eq!(html.matches(r#"<article class="wine-card""#).count(), 2);
        assert!(html.contains(r#"<option value="" selected>All Types</option>"#));
        assert!(html.contains(r#"<option value="Red">Red</option>"#));
    }

    #[test]
    fn test_filtered_scenario_d() {
        let state = CatalogViewState::from_snapshot(&snapshot(
            LoadPhase::Ready,
            fixtures::scenario_a(),
            TypeFilter::parse("red"),
        ));
        let CatalogViewState::Populated { control, cards } = &state else {
            panic!("expected populated state, got {:?}", state);
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].wine_id, 1);

        let selected: Vec<&str> = control
            .options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(selected, vec!["Red"]);
    }

    #[test]
    fn test_no_match_scenario_e() {
        let state = CatalogViewState::from_snapshot(&snapshot(
            LoadPhase::Ready,
            fixtures::scenario_a(),
            TypeFilter::parse("Rose"),
        ));
        assert_eq!(state.name(), "no_match");

        let html = render_catalog_view(&state, "v1");
        assert!(html.contains("No wines match the selected filter &quot;Rose&quot;."));
        assert!(html.contains("catalog-filter"));
        assert!(!html.contains("wine-card"));
    }

    #[test]
    fn test_option_labels_are_capitalized() {
        let wines = vec![fixtures::wine(1, "Cava", Some("sparkling"), 10.0)];
        let control = FilterControl::new(&crate::store::distinct_types(&wines), &TypeFilter::All);
        assert_eq!(control.options[1].value, "sparkling");
        assert_eq!(control.options[1].label, "Sparkling");
    }

    #[test]
    fn test_single_option_selected_with_case_variants() {
        let types = vec!["Red".to_string(), "red".to_string()];
        let control = FilterControl::new(&types, &TypeFilter::parse("RED"));
        assert_eq!(control.options.iter().filter(|o| o.selected).count(), 1);
        assert!(control.options[1].selected);
    }

    #[test]
    fn test_view_url_encodes_filter() {
        assert_eq!(
            view_url("abc", &TypeFilter::parse("Rosé & co")),
            "/browse-wines?view=abc&type=Ros%C3%A9%20%26%20co"
        );
        assert_eq!(view_url("abc", &TypeFilter::All), "/browse-wines?view=abc");
    }
}
