//! catalog filtering stuff
use {
    crate::catalog::record::{LayoutMode, ThemeRecord},
    std::fmt,
};

/// a constraint on the layout mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutFilter {
    /// no constraint
    #[default]
    All,
    /// only the given mode
    Mode(LayoutMode),
    /// a value outside `all`/`light`/`dark`, matches nothing
    Unknown,
}

impl LayoutFilter {
    /// parse a layout filter, unknown values become [`LayoutFilter::Unknown`]
    pub fn parse(s: &str) -> Self {
        if s == "all" {
            return Self::All;
        }

        LayoutMode::parse(s).map_or(Self::Unknown, Self::Mode)
    }

    /// return whether a layout mode satisfies this constraint
    pub fn matches(&self, layout: LayoutMode) -> bool {
        match self {
            Self::All => true,
            Self::Mode(mode) => *mode == layout,
            Self::Unknown => false,
        }
    }

    /// the label shown in filter summaries
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Mode(mode) => mode.as_str(),
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LayoutFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// the active constraints on the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// free text, case-insensitive substring match (blank = off)
    pub search: String,
    /// exact category (`None` = all)
    pub category: Option<String>,
    /// layout constraint
    pub layout: LayoutFilter,
    /// exact tag membership (`None` = any)
    pub tag: Option<String>,
}

impl FilterSpec {
    /// a spec with every constraint off
    pub fn new() -> Self {
        Self::default()
    }

    /// set the search text
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// set the category, `"all"` clears it
    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (category != "all").then_some(category);
        self
    }

    /// set the layout constraint
    pub fn layout(mut self, layout: LayoutFilter) -> Self {
        self.layout = layout;
        self
    }

    /// set the tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// select a tag, or clear it if it's already the active one
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.tag.as_deref() == Some(tag) {
            self.tag = None;
        } else {
            self.tag = Some(tag.to_string());
        }
    }

    /// whether free-text search is active
    pub fn search_active(&self) -> bool {
        !self.search.trim().is_empty()
    }

    /// whether no constraint is active
    pub fn is_unconstrained(&self) -> bool {
        !self.search_active()
            && self.category.is_none()
            && self.layout == LayoutFilter::All
            && self.tag.is_none()
    }

    /// return whether a record matches every active constraint
    pub fn matches(&self, record: &ThemeRecord) -> bool {
        if let Some(ref category) = self.category
            && &record.category != category
        {
            return false;
        }

        if !self.layout.matches(record.layout) {
            return false;
        }

        if let Some(ref tag) = self.tag
            && !record.has_tag(tag)
        {
            return false;
        }

        if self.search_active() {
            let needle = self.search.to_lowercase();
            if !record.search_haystack().to_lowercase().contains(&needle) {
                return false;
            }
        }

        true
    }
}

/// get the records matching a spec, in catalog order
pub fn filter_themes<'a>(themes: &'a [ThemeRecord], spec: &FilterSpec) -> Vec<&'a ThemeRecord> {
    themes.iter().filter(|record| spec.matches(record)).collect()
}
