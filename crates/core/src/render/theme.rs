//! Stylesheet generation from an explicit [`ThemeConfig`].

use crate::config::ThemeConfig;

/// Keep only characters that cannot end a declaration or the style element.
fn css_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '{' | '}' | ';'))
        .collect()
}

/// Custom properties for every theme token.
pub fn theme_variables(theme: &ThemeConfig) -> String {
    let tokens = [
        ("background", &theme.background),
        ("foreground", &theme.foreground),
        ("primary", &theme.primary),
        ("primary-foreground", &theme.primary_foreground),
        ("secondary", &theme.secondary),
        ("accent", &theme.accent),
        ("card-background", &theme.card_background),
        ("border-color", &theme.border_color),
        ("font-sans", &theme.font_sans),
        ("font-serif", &theme.font_serif),
    ];

    let mut css = String::from(":root {\n");
    for (name, value) in tokens {
        css.push_str(&format!("  --{}: {};\n", name, css_value(value)));
    }
    css.push_str("}\n");
    css
}

const BASE_STYLES: &str = r#"
body { margin: 0; background: var(--background); color: var(--foreground); font-family: var(--font-sans); }
h1, h2, h3 { font-family: var(--font-serif); color: var(--primary); }
main { padding: 5rem 1rem 2rem; max-width: 72rem; margin: 0 auto; }
.site-nav { position: fixed; top: 0; left: 0; right: 0; background: var(--card-background); box-shadow: 0 1px 4px rgba(0,0,0,.1); }
.site-nav ul { display: flex; justify-content: space-around; list-style: none; margin: 0 auto; padding: 1rem; max-width: 72rem; }
.site-nav a { padding: .5rem 1rem; border-radius: .375rem; text-decoration: none; color: var(--foreground); }
.site-nav a.active { background: var(--primary); color: var(--primary-foreground); }
.catalog-status { text-align: center; }
.catalog-error { color: #b91c1c; }
.spinner { width: 3rem; height: 3rem; margin: 1rem auto; border-radius: 50%; border-bottom: 2px solid var(--primary); animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.catalog-filter { display: flex; justify-content: center; margin-bottom: 2rem; }
.catalog-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 2rem; }
.wine-card { display: flex; flex-direction: column; background: var(--card-background); border: 1px solid var(--border-color); border-radius: .75rem; overflow: hidden; }
.wine-card__image { height: 16rem; display: flex; align-items: center; justify-content: center; }
.wine-card__image img { max-width: 100%; max-height: 100%; object-fit: contain; }
.wine-card__image--placeholder { color: var(--secondary); }
.wine-card__body { padding: 1.25rem; display: flex; flex-direction: column; flex-grow: 1; }
.wine-card__classification { color: var(--accent); }
.wine-card__origin { color: var(--secondary); font-size: .75rem; }
.wine-card__price { margin-top: auto; font-family: var(--font-serif); font-size: 1.5rem; font-weight: 700; color: var(--primary); }
.wine-card button { width: 100%; padding: .5rem 1rem; border: 1px solid var(--primary); border-radius: .5rem; background: transparent; color: var(--primary); cursor: pointer; }
"#;

/// Full stylesheet: theme variables followed by the base rules.
pub fn stylesheet(theme: &ThemeConfig) -> String {
    let mut css = theme_variables(theme);
    css.push_str(BASE_STYLES);
    css
}
