//! the theme catalog
//!
//! the catalog is built once at startup (from the embedded document or a configured file) and
//! never changes afterwards, so it can be shared freely behind an `Arc`.
pub mod error;
pub mod filter;
pub mod record;
pub mod stats;
pub mod tags;

use {
    crate::catalog::{
        error::CatalogError,
        filter::{FilterSpec, filter_themes},
        record::ThemeRecord,
        stats::CatalogStats,
        tags::{TagGroup, group_tags},
    },
    hashbrown::HashSet,
    rapidfuzz::fuzz,
    serde::Deserialize,
    std::{cmp::Ordering, collections::BTreeSet, path::Path},
    tracing::{debug, info},
};

/// the catalog shipped with the binary
const EMBEDDED_CATALOG: &str = include_str!("../../resources/catalog.toml");

/// the on-disk catalog document
#[derive(Deserialize)]
struct CatalogFile {
    /// the records, in display order
    #[serde(default)]
    themes: Vec<ThemeRecord>,
}

/// the immutable, ordered collection of theme records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// the records, in display order
    themes: Vec<ThemeRecord>,
}

impl Catalog {
    /// make a catalog, validating every record
    pub fn new(themes: Vec<ThemeRecord>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(themes.len());

        for theme in &themes {
            Self::validate_record(theme)?;

            if !seen.insert(theme.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(theme.slug.clone()));
            }
        }

        drop(seen);

        Ok(Self { themes })
    }

    /// parse a catalog from a TOML document
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(src)?;
        Self::new(file.themes)
    }

    /// load the catalog embedded in the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_toml_str(EMBEDDED_CATALOG)
    }

    /// load a catalog from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&src)
    }

    /// load the configured catalog, an empty path means the embedded one
    pub fn load(path: &str) -> Result<Self, CatalogError> {
        let catalog = if path.trim().is_empty() {
            Self::embedded()?
        } else {
            debug!("Loading catalog from {}", path);
            Self::from_path(path)?
        };

        info!("Loaded {} themes", catalog.len());
        Ok(catalog)
    }

    /// check a single record
    fn validate_record(theme: &ThemeRecord) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidRecord {
            slug: theme.slug.clone(),
            reason: reason.to_string(),
        };

        if theme.slug.trim().is_empty() {
            return Err(invalid("slug must not be empty"));
        }

        if !theme.rating.is_finite() || !(0.0..=5.0).contains(&theme.rating) {
            return Err(invalid("rating must be between 0 and 5"));
        }

        if theme.links.demo.trim().is_empty() {
            return Err(invalid("a demo link is required"));
        }

        Ok(())
    }

    /// every record, in display order
    pub fn list_all(&self) -> &[ThemeRecord] {
        &self.themes
    }

    /// number of records
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// whether the catalog has no records
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// get a record by its slug (exact, case-sensitive)
    pub fn get(&self, slug: &str) -> Option<&ThemeRecord> {
        self.themes.iter().find(|theme| theme.slug == slug)
    }

    /// get a record by its slug, treating absence as an error
    pub fn require(&self, slug: &str) -> Result<&ThemeRecord, CatalogError> {
        self.get(slug)
            .ok_or_else(|| CatalogError::NotFound(slug.to_string()))
    }

    /// the distinct categories, sorted
    pub fn categories(&self) -> Vec<String> {
        self.themes
            .iter()
            .map(|theme| theme.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// the distinct tags across every record, sorted
    pub fn tags(&self) -> Vec<String> {
        self.themes
            .iter()
            .flat_map(|theme| theme.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// the distinct tags, grouped by prefix
    pub fn tag_groups(&self) -> Vec<TagGroup> {
        group_tags(self.tags())
    }

    /// the records matching a filter spec
    pub fn filter(&self, spec: &FilterSpec) -> Vec<&ThemeRecord> {
        filter_themes(&self.themes, spec)
    }

    /// the first `n` records
    pub fn featured(&self, n: usize) -> &[ThemeRecord] {
        &self.themes[..n.min(self.themes.len())]
    }

    /// other records in the same category as `slug`
    pub fn related(&self, slug: &str, limit: usize) -> Vec<&ThemeRecord> {
        let Some(theme) = self.get(slug) else {
            return Vec::new();
        };

        self.themes
            .iter()
            .filter(|candidate| candidate.slug != theme.slug && candidate.category == theme.category)
            .take(limit)
            .collect()
    }

    /// slugs that look like `query`, best match first
    pub fn suggest(&self, query: &str, limit: usize, threshold: f64) -> Vec<&str> {
        let query = query.to_lowercase();
        let mut matches: Vec<(f64, &str)> = Vec::new();

        for theme in &self.themes {
            let slug_sim = fuzz::ratio(theme.slug.to_lowercase().chars(), query.chars());
            let name_sim = fuzz::ratio(theme.name.to_lowercase().chars(), query.chars());
            let sim = slug_sim.max(name_sim);

            if sim > threshold {
                matches.push((sim, theme.slug.as_str()));
            }
        }

        matches.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        matches
            .into_iter()
            .take(limit)
            .map(|(_, slug)| slug)
            .collect()
    }

    /// stats over the whole catalog
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_records(&self.themes)
    }
}
