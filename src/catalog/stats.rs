//! catalog statistics stuff
use {
    crate::catalog::{
        filter::FilterSpec,
        record::{LayoutMode, ThemeRecord},
    },
    crate::utils::pluralize,
    hashbrown::HashMap,
    serde::Serialize,
};

/// catalog stats shown in the hero section
#[derive(Debug, Default, Serialize)]
pub struct CatalogStats {
    /// number of themes
    pub total_themes: usize,
    /// mean rating (0 when the catalog is empty)
    pub average_rating: f64,
    /// sum of all installs
    pub total_installs: u64,
    /// number of themes per category
    pub categories: HashMap<String, usize>,
    /// number of light themes
    pub light_count: usize,
    /// number of dark themes
    pub dark_count: usize,
}

impl CatalogStats {
    /// make stats from a list of records
    pub fn from_records(records: &[ThemeRecord]) -> Self {
        let mut stats = Self::default();
        let mut rating_sum = 0.0;

        for record in records {
            stats.total_themes += 1;
            stats.total_installs += record.installs;
            rating_sum += record.rating;

            *stats.categories.entry(record.category.clone()).or_insert(0) += 1;

            match record.layout {
                LayoutMode::Light => stats.light_count += 1,
                LayoutMode::Dark => stats.dark_count += 1,
            }
        }

        if stats.total_themes > 0 {
            stats.average_rating = rating_sum / stats.total_themes as f64;
        }

        stats
    }
}

/// a description of a filtered result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSummary {
    /// number of matching themes
    pub count: usize,
    /// the active category, if any
    pub category: Option<String>,
    /// whether free-text search is active
    pub search_active: bool,
    /// the active layout label
    pub layout: String,
    /// the active tag, or `any`
    pub tag: String,
    /// the one-line headline
    pub headline: String,
}

impl FilterSummary {
    /// summarize a result set for a spec
    pub fn new(spec: &FilterSpec, count: usize) -> Self {
        let themes = pluralize(count, "theme", "themes");
        let headline = match spec.category {
            Some(ref category) => format!("{} in {}.", themes, category),
            None => format!("{}.", themes),
        };

        Self {
            count,
            category: spec.category.clone(),
            search_active: spec.search_active(),
            layout: spec.layout.label().to_string(),
            tag: spec.tag.clone().unwrap_or_else(|| "any".to_string()),
            headline,
        }
    }

    /// whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::catalog::filter::LayoutFilter};

    #[test]
    fn test_stats_on_empty() {
        let stats = CatalogStats::from_records(&[]);

        assert_eq!(stats.total_themes, 0);
        assert_eq!(stats.total_installs, 0);
        assert_eq!(stats.average_rating, 0.0);
        assert!(stats.categories.is_empty());
    }

    #[test]
    fn test_stats() {
        let records = vec![
            ThemeRecord::new("a", "A", "SaaS", LayoutMode::Dark).with_numbers(100, 5.0),
            ThemeRecord::new("b", "B", "SaaS", LayoutMode::Light).with_numbers(50, 4.0),
            ThemeRecord::new("c", "C", "Agency", LayoutMode::Dark).with_numbers(25, 4.5),
        ];
        let stats = CatalogStats::from_records(&records);

        assert_eq!(stats.total_themes, 3);
        assert_eq!(stats.total_installs, 175);
        assert!((stats.average_rating - 4.5).abs() < f64::EPSILON);
        assert_eq!(stats.categories.get("SaaS"), Some(&2));
        assert_eq!(stats.categories.get("Agency"), Some(&1));
        assert_eq!((stats.light_count, stats.dark_count), (1, 2));
    }

    #[test]
    fn test_summary_headline() {
        let spec = FilterSpec::new().category("SaaS");
        assert_eq!(FilterSummary::new(&spec, 1).headline, "1 theme in SaaS.");
        assert_eq!(FilterSummary::new(&spec, 3).headline, "3 themes in SaaS.");

        let summary = FilterSummary::new(&FilterSpec::new(), 0);
        assert_eq!(summary.headline, "0 themes.");
        assert!(summary.is_empty());
        assert_eq!(summary.tag, "any");
        assert_eq!(summary.layout, "all");
    }

    #[test]
    fn test_summary_flags() {
        let spec = FilterSpec::new()
            .search("dark")
            .tag("saas-dark")
            .layout(LayoutFilter::parse("dark"));
        let summary = FilterSummary::new(&spec, 2);

        assert!(summary.search_active);
        assert_eq!(summary.tag, "saas-dark");
        assert_eq!(summary.layout, "dark");
    }
}
