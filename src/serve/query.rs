//! query string filtering stuff
use {
    crate::catalog::filter::{FilterSpec, LayoutFilter},
    rocket::FromForm,
    serde::Deserialize,
};

/// the filters a client can put in the `/api/themes` query string
///
/// a blank value (`?category=&tag=`) is dropped here instead of being passed on, so an empty
/// form field means "any" rather than the empty category or tag, which would match nothing.
/// non-blank values are passed through untouched.
#[derive(Debug, Clone, Deserialize, FromForm, Default)]
pub struct ThemeQuery {
    #[serde(default)]
    /// free text search
    pub search: Option<String>,
    #[serde(default)]
    /// filter by category (`all` or blank = any)
    pub category: Option<String>,
    #[serde(default)]
    /// filter by layout (`all`, `light`, `dark`)
    pub layout: Option<String>,
    #[serde(default)]
    /// filter by tag (blank = any)
    pub tag: Option<String>,
}

impl ThemeQuery {
    /// turn the query into a filter spec
    ///
    /// blank values are treated as if they were never sent
    pub fn to_spec(&self) -> FilterSpec {
        let mut spec = FilterSpec::new();

        if let Some(ref search) = self.search {
            spec = spec.search(search.as_str());
        }

        if let Some(category) = non_blank(&self.category) {
            spec = spec.category(category);
        }

        if let Some(layout) = non_blank(&self.layout) {
            spec = spec.layout(LayoutFilter::parse(layout));
        }

        if let Some(tag) = non_blank(&self.tag) {
            spec = spec.tag(tag);
        }

        spec
    }
}

/// get the value of an optional parameter unless it's blank
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use {super::*, crate::catalog::record::LayoutMode};

    #[test]
    fn test_empty_query_is_unconstrained() {
        assert!(ThemeQuery::default().to_spec().is_unconstrained());

        let blank = ThemeQuery {
            search: Some("   ".to_string()),
            category: Some(String::new()),
            layout: Some(" ".to_string()),
            tag: Some(String::new()),
        };
        assert!(blank.to_spec().is_unconstrained());
    }

    #[test]
    fn test_query_to_spec() {
        let query = ThemeQuery {
            search: Some("Dark".to_string()),
            category: Some("SaaS".to_string()),
            layout: Some("dark".to_string()),
            tag: Some("saas-dark".to_string()),
        };
        let spec = query.to_spec();

        assert_eq!(spec.search, "Dark");
        assert_eq!(spec.category.as_deref(), Some("SaaS"));
        assert_eq!(spec.layout, LayoutFilter::Mode(LayoutMode::Dark));
        assert_eq!(spec.tag.as_deref(), Some("saas-dark"));
    }

    #[test]
    fn test_all_category_and_bad_layout() {
        let query = ThemeQuery {
            category: Some("all".to_string()),
            layout: Some("sepia".to_string()),
            ..Default::default()
        };
        let spec = query.to_spec();

        assert_eq!(spec.category, None);
        assert_eq!(spec.layout, LayoutFilter::Unknown);
    }
}
