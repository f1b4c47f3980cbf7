use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use release::{Config, OsRelease};
use tracing_subscriber::EnvFilter;

/// Query the FreeDesktop.Org os-release file
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Directory to search for os-release (repeatable, searched in order)
    #[clap(
        long = "search-path",
        env = "OSRELEASE_SEARCH_PATH",
        value_delimiter = ':',
        multiple_occurrences = true
    )]
    search_path: Vec<String>,

    /// Enable verbose output
    #[clap(short, long)]
    verbose: bool,

    /// Subcommand to execute
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print attribute values, one per line
    Get {
        /// Attribute names (case-insensitive)
        names: Vec<String>,
        /// Fail if any attribute is not set
        #[clap(long)]
        require: bool,
    },
    /// List all attributes found in the file
    List,
    /// Print found attributes as JSON
    Json,
    /// Print the path of the os-release file
    Path,
    /// List the standardized attribute names
    Standard,
    /// List the default search directories
    Defaults,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::new();
    if !args.search_path.is_empty() {
        config = config.with_search_path(args.search_path.iter().cloned());
    }
    let release = OsRelease::init(config);
    tracing::debug!("Search path: {:?}", release.config_snapshot().search_path());

    match args.command {
        Some(Commands::Get { names, require }) => {
            for value in lookup(release, &names, require)? {
                println!("{}", value);
            }
        }
        Some(Commands::List) => {
            for (key, value) in release.attrs() {
                println!("{}={}", key.to_ascii_uppercase(), value);
            }
        }
        Some(Commands::Json) => {
            println!("{}", serde_json::to_string_pretty(release.attrs())?);
        }
        Some(Commands::Path) => match release.osrelease_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!(
                "No os-release file found.\n\nSearched locations:\n{}",
                release
                    .config_snapshot()
                    .search_path()
                    .iter()
                    .map(|p| format!("  - {}", p))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        },
        Some(Commands::Standard) => {
            for name in OsRelease::standard_attr_names() {
                println!("{}", name);
            }
        }
        Some(Commands::Defaults) => {
            for dir in OsRelease::default_search_path() {
                println!("{}", dir);
            }
        }
        None => {
            match release.pretty_name().or_else(|| release.name()) {
                Some(name) => println!("{}", name),
                None => println!("Unknown operating system"),
            }
            if args.verbose {
                if let Some(path) = release.osrelease_path() {
                    eprintln!("Read from: {}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Values for `names`, empty for absent ones.
///
/// With `require`, a name that is neither in the file nor standardized is an
/// error, and so is a standardized name the file does not set.
fn lookup(release: &OsRelease, names: &[String], require: bool) -> Result<Vec<String>> {
    let mut values = Vec::with_capacity(names.len());
    let mut missing = Vec::new();

    for name in names {
        let value = if require {
            release.get_strict(name)?
        } else {
            release.get(name)
        };
        match value {
            Some(value) => values.push(value.to_string()),
            None => {
                values.push(String::new());
                missing.push(name.as_str());
            }
        }
    }

    if require && !missing.is_empty() {
        bail!("Attributes not set: {}", missing.join(", "));
    }

    Ok(values)
}
