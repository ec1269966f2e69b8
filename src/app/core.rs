//! the core app
use {
    super::{
        cli::{Cli, Command},
        handlers::Handlers,
        logging,
    },
    crate::{
        catalog::Catalog, config::instance::init_config, error::Result, getopt,
        serve::query::ThemeQuery,
    },
    clap::Parser,
    color_eyre::eyre::Context,
    std::sync::Arc,
    tracing::info,
};

/// the spectrum app
pub struct SpectrumApp {
    /// what to run
    command: Command,
    /// the logic handlers
    handlers: Handlers,
}

impl SpectrumApp {
    /// initialize spectrum
    ///
    /// - 1. installs the miette error handler hook
    /// - 2. handles the generator flags, if any
    /// - 3. loads the config file
    /// - 4. sets up logging
    /// - 5. loads the catalog
    ///
    /// # Errors
    ///
    /// returns an error if the miette hook fails to install  
    /// returns an error if the cli fails to run  
    /// returns an error if it fails to load the configuration file  
    /// returns an error if it fails to setup logging  
    /// returns an error if the catalog can't be loaded  
    pub async fn init() -> Result<Self> {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::MietteHandlerOpts::new()
                    .terminal_links(true)
                    .unicode(true)
                    .context_lines(3)
                    .tab_width(4)
                    .build(),
            )
        }))?;

        let argv = Cli::parse();
        argv.run()?;

        init_config().wrap_err("failed to load spectrum.toml")?;

        logging::setup()?;

        let catalog = Arc::new(Catalog::load(&getopt!(catalog.path))?);

        info!(
            "Starting {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );

        Ok(Self {
            command: argv.command(),
            handlers: Handlers::new(catalog),
        })
    }

    /// run the selected command
    ///
    /// # Errors
    ///
    /// returns an error if the command fails
    pub async fn run(&self) -> Result<()> {
        match self.command {
            Command::Serve => self.handlers.serve().await,
            Command::List {
                ref search,
                ref category,
                ref layout,
                ref tag,
            } => self.handlers.list(&ThemeQuery {
                search: search.clone(),
                category: category.clone(),
                layout: layout.clone(),
                tag: tag.clone(),
            }),
            Command::Show { ref slug } => self.handlers.show(slug),
            Command::Tags { grouped } => self.handlers.tags(grouped),
            Command::Stats => self.handlers.stats(),
        }
    }
}
