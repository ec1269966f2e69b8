//! theme record stuff
use {
    serde::{Deserialize, Serialize},
    std::{collections::BTreeMap, fmt},
};

/// the layout mode a theme is designed for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// light ui
    Light,
    /// dark ui
    Dark,
}

impl LayoutMode {
    /// parse a layout mode, only the exact lowercase names are accepted
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// convert a LayoutMode to a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// the label shown on previews
    pub fn ui_label(&self) -> &'static str {
        match self {
            Self::Light => "Light UI",
            Self::Dark => "Dark UI",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// links pointing outside the store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExternalLinks {
    /// the live demo
    pub demo: String,
    /// the design file, if one is published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design: Option<String>,
}

/// named color roles mapped to css color values
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ColorTokens(BTreeMap<String, String>);

impl ColorTokens {
    /// get the color for a role
    pub fn get(&self, role: &str) -> Option<&str> {
        self.0.get(role).map(String::as_str)
    }

    /// the accent color, falling back to the first token
    pub fn accent(&self) -> Option<&str> {
        self.get("accent")
            .or_else(|| self.0.values().next().map(String::as_str))
    }

    /// iterate over `(role, color)` pairs, ordered by role
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// number of tokens
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// whether there are no tokens
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// convert the tokens to CSS custom properties
    pub fn to_css_vars(&self) -> String {
        let mut vars = String::new();

        for (role, color) in self.iter() {
            vars.push_str(&format!("--color-{}: {};\n", role, color));
        }

        vars
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ColorTokens {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// decorative css values used to paint a preview
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreviewStyle {
    /// base gradient
    pub gradient: String,
    /// accent overlay blended over the gradient
    pub accent: String,
    /// pattern drawn on top of everything
    pub overlay: String,
}

/// a single catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeRecord {
    /// unique, stable identifier (used in detail urls)
    pub slug: String,
    /// display name
    pub name: String,
    /// one line pitch
    pub tagline: String,
    /// longer description
    pub description: String,
    /// category label
    pub category: String,
    /// light/dark
    pub layout: LayoutMode,
    /// tags (matched as a set)
    #[serde(default)]
    pub tags: Vec<String>,
    /// install count snapshot
    #[serde(default)]
    pub installs: u64,
    /// rating in `[0, 5]`
    #[serde(default)]
    pub rating: f64,
    /// license price
    #[serde(default)]
    pub price: u32,
    /// show the popular badge
    #[serde(default)]
    pub popular: bool,
    /// show the new release badge
    #[serde(default, rename = "new")]
    pub is_new: bool,
    /// demo/design links
    pub links: ExternalLinks,
    /// sections included in the kit
    #[serde(default)]
    pub sections: Vec<String>,
    /// highlighted features
    #[serde(default)]
    pub features: Vec<String>,
    /// who the theme suits
    #[serde(default)]
    pub best_for: Vec<String>,
    /// the color system
    #[serde(default)]
    pub colors: ColorTokens,
    /// preview styling
    #[serde(default)]
    pub preview: PreviewStyle,
}

impl ThemeRecord {
    /// make a bare record, mostly useful for tests and fixtures
    pub fn new(slug: &str, name: &str, category: &str, layout: LayoutMode) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            tagline: String::new(),
            description: String::new(),
            category: category.to_string(),
            layout,
            tags: Vec::new(),
            installs: 0,
            rating: 0.0,
            price: 0,
            popular: false,
            is_new: false,
            links: ExternalLinks {
                demo: format!("https://{}.example.com", slug),
                design: None,
            },
            sections: Vec::new(),
            features: Vec::new(),
            best_for: Vec::new(),
            colors: ColorTokens::default(),
            preview: PreviewStyle::default(),
        }
    }

    /// set the tags
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// set the tagline and description
    pub fn with_copy(mut self, tagline: &str, description: &str) -> Self {
        self.tagline = tagline.to_string();
        self.description = description.to_string();
        self
    }

    /// set the install count and rating
    pub fn with_numbers(mut self, installs: u64, rating: f64) -> Self {
        self.installs = installs;
        self.rating = rating;
        self
    }

    /// set the badge flags
    pub fn with_flags(mut self, popular: bool, is_new: bool) -> Self {
        self.popular = popular;
        self.is_new = is_new;
        self
    }

    /// check if the record carries a tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// the text free-text search runs against
    pub fn search_haystack(&self) -> String {
        [
            self.name.as_str(),
            self.tagline.as_str(),
            self.description.as_str(),
            self.category.as_str(),
            self.tags.join(" ").as_str(),
        ]
        .join(" ")
    }

    /// the badge to display on cards
    pub fn badge(&self) -> Option<Badge> {
        if self.popular {
            Some(Badge::Popular)
        } else if self.is_new {
            Some(Badge::NewRelease)
        } else {
            None
        }
    }

    /// the detail page path
    pub fn detail_path(&self) -> String {
        format!("/themes/{}", self.slug)
    }
}

/// a card badge
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    /// the theme sells well
    Popular,
    /// the theme was released recently
    NewRelease,
}

impl Badge {
    /// the badge text
    pub fn label(&self) -> &'static str {
        match self {
            Self::Popular => "Popular",
            Self::NewRelease => "New Release",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_parse() {
        assert_eq!(LayoutMode::parse("dark"), Some(LayoutMode::Dark));
        assert_eq!(LayoutMode::parse("light"), Some(LayoutMode::Light));
        assert_eq!(LayoutMode::parse("Dark"), None);
        assert_eq!(LayoutMode::parse(" light "), None);
        assert_eq!(LayoutMode::parse("sepia"), None);
    }

    #[test]
    fn test_badge_precedence() {
        let base = ThemeRecord::new("a", "A", "SaaS", LayoutMode::Dark);

        assert_eq!(base.clone().with_flags(true, true).badge(), Some(Badge::Popular));
        assert_eq!(
            base.clone().with_flags(false, true).badge(),
            Some(Badge::NewRelease)
        );
        assert_eq!(base.with_flags(false, false).badge(), None);
    }

    #[test]
    fn test_haystack_skips_layout() {
        let record = ThemeRecord::new("orbit", "Orbit", "Startup", LayoutMode::Dark)
            .with_copy("Launch pages", "A waitlist site")
            .with_tags(&["startup-launch", "waitlist"]);

        let haystack = record.search_haystack();
        assert_eq!(
            haystack,
            "Orbit Launch pages A waitlist site Startup startup-launch waitlist"
        );
        assert!(!haystack.to_lowercase().contains("dark"));
    }

    #[test]
    fn test_accent_fallback() {
        let with_accent: ColorTokens = [("accent", "#fff"), ("background", "#000")]
            .into_iter()
            .collect();
        let without: ColorTokens = [("text", "#111"), ("background", "#000")]
            .into_iter()
            .collect();

        assert_eq!(with_accent.accent(), Some("#fff"));
        assert_eq!(without.accent(), Some("#000"));
        assert_eq!(ColorTokens::default().accent(), None);
    }

    #[test]
    fn test_css_vars() {
        let tokens: ColorTokens = [("text", "#111"), ("accent", "#f00")].into_iter().collect();
        assert_eq!(tokens.to_css_vars(), "--color-accent: #f00;\n--color-text: #111;\n");
    }
}
