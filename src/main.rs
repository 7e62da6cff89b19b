use anyhow::Context;
use clap::{Parser, Subcommand};
use knnspec::{compile_document, hnsw_method, KnnSettings, MethodComponentContext, MethodDocument, SpaceType};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Validate k-NN method definitions and compile native index descriptions
#[derive(Parser, Debug)]
#[command(name = "knnspec")]
#[command(about = "Compile k-NN method definitions into index descriptions", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// JSON file with default method parameters
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Default `m` when a method definition omits it
    #[arg(long, global = true)]
    default_m: Option<i64>,

    /// Default `ef_construction` when a method definition omits it
    #[arg(long, global = true)]
    default_ef_construction: Option<i64>,

    /// Default `ef_search` when a method definition omits it
    #[arg(long, global = true)]
    default_ef_search: Option<i64>,

    /// Log level
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a method definition and print its index description
    Compile {
        /// Path to the method definition (JSON)
        #[arg(short, long)]
        method: PathBuf,

        /// Override the space type named in the definition
        #[arg(long)]
        space: Option<String>,

        /// Print the full method map instead of the description only
        #[arg(long, default_value_t = false)]
        as_map: bool,
    },
    /// Print supported spaces, encoders and the default description
    Describe,
}

impl Args {
    fn knn_settings(&self) -> anyhow::Result<KnnSettings> {
        let mut settings = match &self.settings {
            Some(path) => KnnSettings::from_path(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => KnnSettings::default(),
        };

        if let Some(m) = self.default_m {
            settings.algo_param_m = m;
        }
        if let Some(ef_construction) = self.default_ef_construction {
            settings.algo_param_ef_construction = ef_construction;
        }
        if let Some(ef_search) = self.default_ef_search {
            settings.algo_param_ef_search = ef_search;
        }
        Ok(settings)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let settings = args.knn_settings()?;
    info!("Using defaults: {:?}", settings);
    let method = hnsw_method(&settings)?;

    match args.command {
        Command::Compile { method: path, space, as_map } => {
            let mut document = MethodDocument::from_path(&path)
                .with_context(|| format!("failed to read method definition {}", path.display()))?;
            if let Some(space) = space {
                document.space_type = Some(space.parse::<SpaceType>()?);
            }

            let compiled = compile_document(&method, &document)?;
            if as_map {
                println!("{}", serde_json::to_string_pretty(&compiled)?);
            } else {
                println!("{}", compiled.index_description);
            }
        }
        Command::Describe => {
            let spaces: Vec<_> = method.supported_spaces().iter().map(|s| s.as_str()).collect();
            let encoders = method
                .component()
                .get_parameter("encoder")
                .map(|p| p.alternative_names())
                .unwrap_or_default();
            let values = method.validate(&MethodComponentContext::new(method.name()))?;

            println!("method: {}", method.name());
            println!("spaces: {}", spaces.join(", "));
            println!("encoders: {}", encoders.join(", "));
            println!("default: {}", method.compile(&values));
        }
    }

    Ok(())
}
