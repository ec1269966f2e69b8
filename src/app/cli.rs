//! cli stuff
use {
    crate::config::options::Spectrum,
    clap::{Parser, Subcommand},
    color_eyre::{Report, eyre::Result},
    schemars::generate::SchemaSettings,
    std::{
        fs::OpenOptions,
        io::{BufWriter, Write},
    },
};

/// the CLI
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// What to do (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Save instead of printing
    #[arg(long)]
    pub save: bool,

    /// Generate a JSON schemafile based on the defaults
    #[arg(short = 's', long)]
    pub gen_schema: bool,

    /// Generate the default config file
    #[arg(short = 'd', long)]
    pub gen_default: bool,

    /// Generate both the schema and the default config file
    #[arg(short = 'a', long)]
    pub gen_all: bool,
}

/// the available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the storefront server
    Serve,

    /// List themes, optionally filtered
    List {
        /// Case-insensitive text to search for
        #[arg(short, long)]
        search: Option<String>,

        /// Only show themes in this category (`all` for any)
        #[arg(short, long)]
        category: Option<String>,

        /// Only show `light` or `dark` themes (`all` for any)
        #[arg(short, long)]
        layout: Option<String>,

        /// Only show themes with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show a single theme
    Show {
        /// The slug of the theme
        slug: String,
    },

    /// List every tag
    Tags {
        /// Group tags by their prefix
        #[arg(short, long)]
        grouped: bool,
    },

    /// Show catalog stats
    Stats,
}

impl Cli {
    /// handle the generator flags, exiting once they've run
    ///
    /// # Errors
    ///
    /// returns an error if it fails to generate and/or save the json schema  
    /// returns an error if it fails to generate and/or save the default config  
    pub fn run(&self) -> Result<()> {
        if self.gen_schema || self.gen_all {
            Self::gen_schema(self.save)?;
        }

        if self.gen_default || self.gen_all {
            Self::gen_defaults(self.save)?;
        }

        if self.gen_default || self.gen_all || self.gen_schema || self.save {
            std::process::exit(0);
        }

        Ok(())
    }

    /// the subcommand to run
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }

    /// save a string to a file
    ///
    /// # Arguments
    ///
    /// * `path` - the path to the file being written
    /// * `contents` - the data to write to the file
    ///
    /// # Errors
    ///
    /// returns an error if it fails to open `path`
    pub fn write_to_file(path: &str, contents: &str) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(path)?;
        let mut w = BufWriter::new(file);
        w.write_all(contents.as_bytes()).map_err(Report::new)
    }

    /// generate/save the config schema
    ///
    /// # Errors
    ///
    /// returns an error if it fails to convert the schema to a JSON string  
    /// returns an error if it fails to save the schema to `resources/spectrum.schema.json`
    pub fn gen_schema(save: bool) -> Result<()> {
        let schema_str = Self::schema_json()?;

        if save {
            Self::write_to_file("resources/spectrum.schema.json", &schema_str)?;
        } else {
            println!("{}", schema_str);
        }

        Ok(())
    }

    /// generate/save the default config file
    ///
    /// # Errors
    ///
    /// returns an error if it fails to convert the default config to TOML  
    /// returns an error if it fails to save the default config to `resources/spectrum.default.toml`
    pub fn gen_defaults(save: bool) -> Result<()> {
        let defaults = toml::to_string_pretty(&Spectrum::default())?;

        if save {
            Self::write_to_file("resources/spectrum.default.toml", &defaults)?;
        } else {
            println!("{}", defaults);
        }

        Ok(())
    }

    /// the config schema as pretty JSON
    fn schema_json() -> Result<String> {
        let settings = SchemaSettings::draft2020_12().for_serialize();
        let generator = settings.into_generator();
        let schema = generator.into_root_schema_for::<Spectrum>();

        Ok(serde_json::to_string_pretty(&schema)?)
    }
}
