use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context};

use plate_search_lib::modules::plates::{GetPlateRequest, PlateSearchConfig, SearchPlatesRequest};
use plate_search_lib::shared::{
    application::Query,
    utils::{init_logger, LogContext},
};
use plate_search_lib::PlateSearchApp;

const USAGE: &str = "Usage: plate-search [--corpus <path>] [--metrics] <command>

Commands:
  search <query> [--page N] [--limit N]   Rank plates against a free-text query
  list                                    List every plate ordered by code
  get <id|code>                           Show one plate";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Search {
        query: Option<String>,
        page: Option<String>,
        limit: Option<String>,
    },
    List,
    Get(String),
}

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    command: Command,
    corpus: Option<PathBuf>,
    metrics: bool,
}

fn parse_args(args: &[String]) -> anyhow::Result<CliArgs> {
    let mut corpus = None;
    let mut metrics = false;
    let mut page = None;
    let mut limit = None;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--corpus" => {
                let path = iter.next().context("--corpus requires a path")?;
                corpus = Some(PathBuf::from(path));
            }
            "--page" => page = Some(iter.next().context("--page requires a value")?.clone()),
            "--limit" => limit = Some(iter.next().context("--limit requires a value")?.clone()),
            "--metrics" => metrics = true,
            "-h" | "--help" => bail!("{}", USAGE),
            flag if flag.starts_with("--") => bail!("Unknown option: {}\n\n{}", flag, USAGE),
            _ => positional.push(arg.clone()),
        }
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        Some("search") => {
            let words: Vec<String> = positional.collect();
            Command::Search {
                query: (!words.is_empty()).then(|| words.join(" ")),
                page,
                limit,
            }
        }
        Some("list") => Command::List,
        Some("get") => Command::Get(positional.next().context("get requires an id or code")?),
        Some(other) => bail!("Unknown command: {}\n\n{}", other, USAGE),
        None => bail!("{}", USAGE),
    };

    Ok(CliArgs {
        command,
        corpus,
        metrics,
    })
}

async fn run(cli: CliArgs) -> anyhow::Result<()> {
    let mut config = PlateSearchConfig::from_env()?;
    if let Some(path) = cli.corpus {
        config.corpus_path = Some(path);
    }

    let app = PlateSearchApp::load(config)?;

    let output = match cli.command {
        Command::Search { query, page, limit } => {
            let request = SearchPlatesRequest { query, page, limit };
            let (result, metrics) = app.search.execute_with_metrics(request).await?;
            if cli.metrics {
                eprintln!("{}", metrics.report());
            }
            serde_json::to_string_pretty(&result)?
        }
        Command::List => serde_json::to_string_pretty(&app.list.execute(()).await?)?,
        Command::Get(identifier) => {
            let plate = app
                .get
                .execute(GetPlateRequest::from_identifier(&identifier))
                .await?;
            serde_json::to_string_pretty(&plate)?
        }
    };

    println!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_logger();

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    if let Err(e) = run(cli).await {
        LogContext::error_with_context(&*e, "plate-search failed");
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
