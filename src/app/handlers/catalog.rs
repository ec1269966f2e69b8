//! catalog browsing handlers
use {
    super::Handlers,
    crate::{
        catalog::{error::CatalogError, record::ThemeRecord, stats::FilterSummary},
        error::Result,
        getopt,
        serve::{
            preview::{format_installs, format_rating},
            query::ThemeQuery,
        },
        utils::pluralize,
    },
    owo_colors::OwoColorize,
};

impl Handlers {
    /// print the themes matching a query
    pub fn list(&self, query: &ThemeQuery) -> Result<()> {
        let spec = query.to_spec();
        let themes = self.catalog.filter(&spec);
        let summary = FilterSummary::new(&spec, themes.len());

        println!(
            "{} {} {}",
            "→".bright_cyan(),
            summary.headline.bold(),
            format!(
                "(search {}, layout {}, tag {})",
                if summary.search_active { "active" } else { "off" },
                summary.layout,
                summary.tag
            )
            .bright_black()
        );

        if summary.is_empty() {
            println!(
                "{} Nothing matched, try clearing a filter",
                "✗".red().bold()
            );
            return Ok(());
        }

        for theme in themes {
            Self::print_row(theme);
        }

        Ok(())
    }

    /// print a single theme, suggesting similar slugs when it doesn't exist
    pub fn show(&self, slug: &str) -> Result<()> {
        let Some(theme) = self.catalog.get(slug) else {
            let suggestions = self.catalog.suggest(
                slug,
                getopt!(storefront.suggestion_limit),
                getopt!(storefront.suggestion_threshold),
            );

            if !suggestions.is_empty() {
                println!("{} Did you mean:", "?".yellow().bold());
                for suggestion in suggestions {
                    println!("  {} {}", "→".bright_black(), suggestion.bright_white());
                }
            }

            return Err(CatalogError::NotFound(slug.to_string()).into());
        };

        println!("{}", theme.name.bold());
        println!("{}", theme.tagline.italic());
        println!();
        println!("{}", theme.description);
        println!();
        println!(
            "{} {}  {} {}  {} {} ★  {} {}",
            "category".bright_black(),
            theme.category,
            "layout".bright_black(),
            theme.layout.ui_label(),
            "rating".bright_black(),
            format_rating(theme.rating),
            "installs".bright_black(),
            format_installs(theme.installs)
        );

        if let Some(badge) = theme.badge() {
            println!("{} {}", "✓".green().bold(), badge.label().bright_green());
        }

        Self::print_list("tags", &theme.tags);
        Self::print_list("sections", &theme.sections);
        Self::print_list("features", &theme.features);
        Self::print_list("best for", &theme.best_for);

        if !theme.colors.is_empty() {
            println!("{}", "colors".bright_black());
            for (role, value) in theme.colors.iter() {
                println!("  {:<12} {}", role, value);
            }
        }

        println!("{} {}", "demo".bright_black(), theme.links.demo.bright_blue());
        if let Some(ref design) = theme.links.design {
            println!("{} {}", "design".bright_black(), design.bright_blue());
        }

        let related = self
            .catalog
            .related(&theme.slug, getopt!(storefront.related_limit));
        if !related.is_empty() {
            println!();
            println!("{}", "related".bright_black());
            for other in related {
                Self::print_row(other);
            }
        }

        Ok(())
    }

    /// print every tag, optionally grouped by prefix
    pub fn tags(&self, grouped: bool) -> Result<()> {
        if !grouped {
            for tag in self.catalog.tags() {
                println!("{}", tag);
            }
            return Ok(());
        }

        for group in self.catalog.tag_groups() {
            println!(
                "{} {}",
                group.key.bold(),
                format!("({})", pluralize(group.tags.len(), "tag", "tags")).bright_black()
            );
            for tag in &group.tags {
                println!("  {}", tag);
            }
        }

        Ok(())
    }

    /// print catalog stats
    pub fn stats(&self) -> Result<()> {
        let stats = self.catalog.stats();

        println!(
            "{} {}",
            pluralize(stats.total_themes, "theme", "themes").bold(),
            format!(
                "({} light, {} dark)",
                stats.light_count, stats.dark_count
            )
            .bright_black()
        );
        println!(
            "{} {} ★",
            "avg. rating".bright_black(),
            format_rating(stats.average_rating)
        );
        println!(
            "{} {}",
            "installs".bright_black(),
            format_installs(stats.total_installs)
        );

        for category in self.catalog.categories() {
            let count = stats.categories.get(&category).copied().unwrap_or_default();
            println!("  {:<12} {}", category, count.to_string().bright_green());
        }

        Ok(())
    }

    /// print a one line summary of a theme
    fn print_row(theme: &ThemeRecord) {
        let badge = theme
            .badge()
            .map(|badge| format!(" [{}]", badge.label()))
            .unwrap_or_default();

        println!(
            "  {:<20} {:<20} {}{}",
            theme.slug.bright_white(),
            theme.name,
            format!(
                "{} · {} · {} ★ · {} installs",
                theme.category,
                theme.layout,
                format_rating(theme.rating),
                format_installs(theme.installs)
            )
            .bright_black(),
            badge.green()
        );
    }

    /// print a labelled list, skipping it when empty
    fn print_list(label: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }

        println!("{} {}", label.bright_black(), items.join(", "));
    }
}
