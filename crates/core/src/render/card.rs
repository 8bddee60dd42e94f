//! Card renderer: presentation of one wine, no state.

use crate::discuss::DiscussIntent;
use crate::wine::Wine;

use super::html::escape;

/// Stand-in for a missing type or varietal.
pub const NOT_AVAILABLE: &str = "N/A";
/// Stand-in for a missing vintage.
pub const NON_VINTAGE: &str = "N/V";
/// Text shown where the image would be.
pub const NO_IMAGE: &str = "No Image";

/// What occupies the image slot of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    Url(String),
    Placeholder,
}

/// Display strings for one card, all fallbacks already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub wine_id: i64,
    pub name: String,
    pub image: CardImage,
    /// `"<type> - <varietal>"`.
    pub classification: String,
    /// `"<region>, <country>"`.
    pub locality: String,
    /// `"(<vintage>)"`.
    pub vintage: String,
    pub description: Option<String>,
    pub price: String,
    pub discuss: DiscussIntent,
}

impl CardModel {
    pub fn from_wine(wine: &Wine) -> Self {
        let image = match wine.image_url() {
            Some(url) => CardImage::Url(url.to_string()),
            None => CardImage::Placeholder,
        };

        let classification = format!(
            "{} - {}",
            wine.wine_type().unwrap_or(NOT_AVAILABLE),
            wine.varietal().unwrap_or(NOT_AVAILABLE)
        );

        let locality = format!(
            "{}, {}",
            wine.region().unwrap_or("Region N/A"),
            wine.country().unwrap_or("Country N/A")
        );

        let vintage = format!(
            "({})",
            wine.vintage_label().as_deref().unwrap_or(NON_VINTAGE)
        );

        Self {
            wine_id: wine.id,
            name: wine.name.clone(),
            image,
            classification,
            locality,
            vintage,
            description: wine.description().map(str::to_string),
            price: format_price(wine.price),
            discuss: DiscussIntent::from(wine),
        }
    }
}

/// Currency-prefixed, exactly two decimals.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Path the discuss button posts to.
pub fn discuss_action(wine_id: i64) -> String {
    format!("/api/v1/wines/{}/discuss", wine_id)
}

/// Name of the hidden frame that swallows discuss responses.
pub const DISCUSS_TARGET: &str = "discuss-sink";

pub fn render_card(card: &CardModel) -> String {
    let image = match &card.image {
        CardImage::Url(url) => format!(
            r#"<div class="wine-card__image"><img src="{}" alt="{}" loading="lazy"></div>"#,
            escape(url),
            escape(&card.name)
        ),
        CardImage::Placeholder => format!(
            r#"<div class="wine-card__image wine-card__image--placeholder"><span>{}</span></div>"#,
            NO_IMAGE
        ),
    };

    let description = card
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="wine-card__description">{}</p>"#, escape(d)))
        .unwrap_or_default();

    format!(
        concat!(
            r#"<article class="wine-card" data-wine-id="{id}">"#,
            "{image}",
            r#"<div class="wine-card__body">"#,
            r#"<h2 class="wine-card__name">{name}</h2>"#,
            r#"<p class="wine-card__classification">{classification}</p>"#,
            r#"<p class="wine-card__origin">{locality} {vintage}</p>"#,
            "{description}",
            r#"<p class="wine-card__price">{price}</p>"#,
            r#"<form method="post" action="{action}" target="{target}">"#,
            r#"<input type="hidden" name="name" value="{name}">"#,
            r#"<button type="submit">Discuss this Wine</button>"#,
            "</form></div></article>"
        ),
        id = card.wine_id,
        image = image,
        name = escape(&card.name),
        classification = escape(&card.classification),
        locality = escape(&card.locality),
        vintage = escape(&card.vintage),
        description = description,
        price = card.price,
        action = discuss_action(card.wine_id),
        target = DISCUSS_TARGET,
    )
}
