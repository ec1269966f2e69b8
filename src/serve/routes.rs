//! routes for the storefront
use {
    crate::{
        catalog::{
            Catalog,
            record::ThemeRecord,
            stats::{CatalogStats, FilterSummary},
            tags::TagGroup,
        },
        getopt,
        serve::{
            preview::{PreviewModel, ThemeCard},
            query::ThemeQuery,
        },
    },
    rocket::{
        State, get,
        http::Status,
        response::content::{RawCss, RawHtml, RawJavaScript},
        serde::json::Json,
    },
    serde::Serialize,
    smart_default::SmartDefault,
    std::sync::Arc,
    tracing::debug,
};

/// the HTML code of the catalog page
const INDEX_TEMPLATE: &str = include_str!("../../resources/storefront/index.html");
/// the HTML code of the theme detail page
const THEME_TEMPLATE: &str = include_str!("../../resources/storefront/theme.html");
/// the CSS for both templates
const CSS: &str = include_str!("../../resources/storefront/styles.css");
/// the JS for both templates
const JS: &str = include_str!("../../resources/storefront/script.js");

/// presentation settings the routes need
#[derive(Debug, Clone, SmartDefault)]
pub struct StorefrontSettings {
    /// how many themes the hero features
    #[default(3)]
    pub featured_count: usize,
    /// how many related themes a detail page lists
    #[default(3)]
    pub related_limit: usize,
    /// how many tags a card shows
    #[default(4)]
    pub card_tag_limit: usize,
    /// the address for custom theme requests
    #[default("hello@spectrumthemes.dev".to_string())]
    pub contact_email: String,
}

impl StorefrontSettings {
    /// read the settings from the global config
    pub fn from_config() -> Self {
        Self {
            featured_count: getopt!(storefront.featured_count),
            related_limit: getopt!(storefront.related_limit),
            card_tag_limit: getopt!(storefront.card_tag_limit),
            contact_email: getopt!(storefront.contact_email),
        }
    }
}

/// the state of the app
pub struct AppState {
    /// the catalog
    pub catalog: Arc<Catalog>,
    /// presentation settings
    pub settings: StorefrontSettings,
}

impl AppState {
    /// initialize a new AppState
    pub fn new(catalog: Arc<Catalog>, settings: StorefrontSettings) -> Self {
        Self { catalog, settings }
    }

    /// turn records into cards
    fn cards<'a>(&self, themes: impl IntoIterator<Item = &'a ThemeRecord>) -> Vec<ThemeCard<'a>> {
        themes
            .into_iter()
            .map(|theme| ThemeCard::new(theme, self.settings.card_tag_limit))
            .collect()
    }
}

/// the response to a catalog query
#[derive(Debug, Serialize)]
pub struct ThemeListing<'a> {
    /// the matching themes, in catalog order
    pub themes: Vec<ThemeCard<'a>>,
    /// a description of the result set
    pub summary: FilterSummary,
}

/// the response for a single theme
#[derive(Debug, Serialize)]
pub struct ThemeDetail<'a> {
    /// the record
    pub theme: &'a ThemeRecord,
    /// the badge text, if any
    pub badge: Option<&'static str>,
    /// the preview
    pub preview: PreviewModel,
    /// other themes in the same category
    pub related: Vec<ThemeCard<'a>>,
}

/// escape text for use inside an HTML attribute
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }

    out
}

#[get("/")]
/// the main catalog page
pub async fn index_handler(state: &State<AppState>) -> RawHtml<String> {
    RawHtml(INDEX_TEMPLATE.replace(
        "{{CONTACT_EMAIL}}",
        &escape_html(&state.settings.contact_email),
    ))
}

#[get("/themes/<slug>")]
/// the detail page of a theme
pub async fn theme_page_handler(slug: &str, state: &State<AppState>) -> Option<RawHtml<String>> {
    let theme = state.catalog.get(slug)?;

    Some(RawHtml(
        THEME_TEMPLATE
            .replace("{{SLUG}}", &escape_html(&theme.slug))
            .replace("{{NAME}}", &escape_html(&theme.name))
            .replace(
                "{{CONTACT_EMAIL}}",
                &escape_html(&state.settings.contact_email),
            ),
    ))
}

#[get("/styles.css")]
/// serve the CSS
pub async fn css_handler() -> RawCss<&'static str> {
    RawCss(CSS)
}

#[get("/script.js")]
/// serve the JS
pub async fn js_handler() -> RawJavaScript<&'static str> {
    RawJavaScript(JS)
}

#[get("/api/themes?<query..>")]
/// handler for filtering the catalog
pub async fn list_themes_handler(
    state: &State<AppState>,
    query: Option<ThemeQuery>,
) -> Json<ThemeListing<'_>> {
    let spec = query.unwrap_or_default().to_spec();
    let themes = state.catalog.filter(&spec);
    let summary = FilterSummary::new(&spec, themes.len());

    debug!("Query {:?} matched {} themes", spec, summary.count);

    Json(ThemeListing {
        themes: state.cards(themes),
        summary,
    })
}

#[get("/api/themes/<slug>")]
/// handler for a single theme
pub async fn theme_detail_handler(
    slug: String,
    state: &State<AppState>,
) -> Result<Json<ThemeDetail<'_>>, Status> {
    let theme = state.catalog.get(&slug).ok_or(Status::NotFound)?;
    let related = state
        .catalog
        .related(&theme.slug, state.settings.related_limit);

    Ok(Json(ThemeDetail {
        theme,
        badge: theme.badge().map(|badge| badge.label()),
        preview: PreviewModel::from_record(theme),
        related: state.cards(related),
    }))
}

#[get("/api/categories")]
/// handler for listing categories
pub async fn categories_handler(state: &State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.categories())
}

#[get("/api/tags")]
/// handler for listing tags
pub async fn tags_handler(state: &State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.tags())
}

#[get("/api/tags/groups")]
/// handler for listing tags grouped by prefix
pub async fn tag_groups_handler(state: &State<AppState>) -> Json<Vec<TagGroup>> {
    Json(state.catalog.tag_groups())
}

#[get("/api/featured")]
/// handler for the themes shown in the hero
pub async fn featured_handler(state: &State<AppState>) -> Json<Vec<ThemeCard<'_>>> {
    Json(
        state.cards(
            state
                .catalog
                .featured(state.settings.featured_count),
        ),
    )
}

#[get("/api/stats")]
/// handler for getting catalog stats
pub async fn stats_handler(state: &State<AppState>) -> Json<CatalogStats> {
    Json(state.catalog.stats())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
        assert_eq!(escape_html("aurora-saas"), "aurora-saas");
    }

    #[test]
    fn test_settings_default_matches_config() {
        let cfg = crate::config::options::StorefrontCfg::default();
        let settings = StorefrontSettings::default();

        assert_eq!(cfg.featured_count, Some(settings.featured_count));
        assert_eq!(cfg.related_limit, Some(settings.related_limit));
        assert_eq!(cfg.card_tag_limit, Some(settings.card_tag_limit));
        assert_eq!(cfg.contact_email, Some(settings.contact_email));
    }
}
