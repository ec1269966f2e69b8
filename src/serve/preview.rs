//! preview rendering stuff
use {
    crate::catalog::record::{Badge, ThemeRecord},
    serde::Serialize,
};

/// how many sections/features a preview shows
pub const PREVIEW_ITEMS: usize = 3;

/// accent used when a theme has no color tokens at all
const FALLBACK_ACCENT: &str = "#6366f1";

/// the decorative values needed to paint a theme preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewModel {
    /// the theme name shown in the window chrome
    pub title: String,
    /// the category shown in the top bar
    pub category: String,
    /// `Dark UI` / `Light UI`
    pub mode_label: String,
    /// the gradient and accent layered as one `background-image`
    pub background_image: String,
    /// the overlay pattern
    pub overlay: String,
    /// the accent color for buttons and bars
    pub accent: String,
    /// the first few sections
    pub sections: Vec<String>,
    /// the first few features
    pub features: Vec<String>,
    /// the color tokens as css custom properties
    pub css_vars: String,
}

impl PreviewModel {
    /// build a preview model for a record
    pub fn from_record(theme: &ThemeRecord) -> Self {
        Self {
            title: theme.name.clone(),
            category: theme.category.clone(),
            mode_label: theme.layout.ui_label().to_string(),
            background_image: format!("{}, {}", theme.preview.gradient, theme.preview.accent),
            overlay: theme.preview.overlay.clone(),
            accent: theme.colors.accent().unwrap_or(FALLBACK_ACCENT).to_string(),
            sections: theme.sections.iter().take(PREVIEW_ITEMS).cloned().collect(),
            features: theme.features.iter().take(PREVIEW_ITEMS).cloned().collect(),
            css_vars: theme.colors.to_css_vars(),
        }
    }

    /// the inline style for the preview container
    pub fn container_style(&self) -> String {
        format!(
            "background-image: {}; background-blend-mode: screen;",
            self.background_image
        )
    }
}

/// a theme as it appears on a catalog card
#[derive(Debug, Clone, Serialize)]
pub struct ThemeCard<'a> {
    /// the record itself
    pub theme: &'a ThemeRecord,
    /// the badge, if any
    pub badge: Option<Badge>,
    /// the badge text, if any
    pub badge_label: Option<&'static str>,
    /// the first few tags
    pub card_tags: &'a [String],
    /// formatted install count
    pub installs_label: String,
    /// formatted rating
    pub rating_label: String,
    /// the detail page path
    pub href: String,
    /// the preview
    pub preview: PreviewModel,
}

impl<'a> ThemeCard<'a> {
    /// build a card, showing at most `tag_limit` tags
    pub fn new(theme: &'a ThemeRecord, tag_limit: usize) -> Self {
        let badge = theme.badge();

        Self {
            theme,
            badge,
            badge_label: badge.map(|b| b.label()),
            card_tags: &theme.tags[..tag_limit.min(theme.tags.len())],
            installs_label: format_installs(theme.installs),
            rating_label: format_rating(theme.rating),
            href: theme.detail_path(),
            preview: PreviewModel::from_record(theme),
        }
    }
}

/// format an install count with thousands separators
pub fn format_installs(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// format a rating with one decimal
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}
