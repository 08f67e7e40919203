// ABOUTME: CLI binary for the readable-content extractor.
// ABOUTME: Fetches a URL (or reads an HTML file) and writes the extracted article to stdout.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;
use extractor::{write_output, Article, Client, ContentType, ExtractError};

#[derive(Parser, Debug)]
#[command(name = "extractor", version)]
#[command(about = "Fetch a web page and print its readable content as HTML")]
struct Args {
    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        ignore_case = true,
        default_value_t = ContentType::Html
    )]
    format: ContentType,

    /// Print the whole extracted article as JSON instead of raw content
    #[arg(long = "json")]
    json_output: bool,

    /// HTML file to extract from instead of fetching (requires --url)
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// Document URL for --html mode, used to resolve relative links
    #[arg(long = "url")]
    url: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long = "timeout")]
    timeout: Option<u64>,

    /// Override the User-Agent header
    #[arg(long = "user-agent")]
    user_agent: Option<String>,

    /// Extra request header as "Name: value" (repeatable)
    #[arg(short = 'H', long = "header")]
    headers: Vec<String>,

    /// Fail on non-2xx responses instead of extracting from the error page
    #[arg(long = "fail-on-http-error")]
    fail_on_http_error: bool,

    /// Log level filter (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long = "log-level", default_value = "warn")]
    log_level: String,

    /// URL of the page to extract
    #[arg()]
    target: Option<String>,
}

/// Where the HTML comes from.
enum Source {
    Fetch(String),
    File { path: PathBuf, url: String },
}

fn parse_header(raw: &str) -> Option<(String, String)> {
    let (name, value) = raw.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}

/// Check argument combinations that clap cannot express.
fn resolve_source(args: &Args) -> Result<Source, String> {
    match (&args.html, &args.target) {
        (Some(_), Some(_)) => Err("cannot use both --html and a positional URL".to_string()),
        (Some(path), None) => match &args.url {
            Some(url) => Ok(Source::File {
                path: path.clone(),
                url: url.clone(),
            }),
            None => Err("--url is required when using --html".to_string()),
        },
        (None, Some(url)) => Ok(Source::Fetch(url.clone())),
        (None, None) => Err("a URL is required, or use --html with --url".to_string()),
    }
}

fn build_client(args: &Args) -> Result<Client, String> {
    let mut builder = Client::builder()
        .content_type(args.format)
        .accept_error_status(!args.fail_on_http_error);

    if let Some(secs) = args.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(ua) = &args.user_agent {
        builder = builder.user_agent(ua.clone());
    }
    for raw in &args.headers {
        let (name, value) = parse_header(raw)
            .ok_or_else(|| format!("invalid header {:?}, expected \"Name: value\"", raw))?;
        builder = builder.header(name, value);
    }

    builder.build().map_err(|e| e.to_string())
}

async fn load_article(client: &Client, source: &Source) -> Result<Article, ExtractError> {
    match source {
        Source::Fetch(url) => client.extract(url).await,
        Source::File { path, url } => {
            let html = tokio::fs::read_to_string(path).await.map_err(|e| {
                ExtractError::io(
                    url.as_str(),
                    "ReadFile",
                    Some(anyhow::anyhow!("error reading file {:?}: {}", path, e)),
                )
            })?;
            client.extract_html(&html, url)
        }
    }
}

/// Render the article as configured: raw content, or JSON when requested.
fn format_output(
    article: &Article,
    content_type: ContentType,
    json_output: bool,
) -> Result<String, ExtractError> {
    if json_output {
        serde_json::to_string_pretty(article).map_err(|e| {
            ExtractError::io(article.url.as_str(), "Serialize", Some(anyhow::Error::new(e)))
        })
    } else {
        Ok(article.render(content_type))
    }
}

async fn run(args: &Args, source: Source, client: Client) -> Result<(), ExtractError> {
    let article = load_article(&client, &source).await?;
    log::info!(
        "extracted {:?} ({} chars of text) from {}",
        article.title,
        article.length,
        article.url
    );

    let output = format_output(&article, client.options().content_type, args.json_output)?;
    let mut stdout = tokio::io::stdout();
    write_output(&mut stdout, &output, &article.url).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .target(env_logger::Target::Stderr)
        .init();

    let source = match resolve_source(&args) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {}", msg);
            return ExitCode::from(1);
        }
    };

    let client = match build_client(&args) {
        Ok(client) => client,
        Err(msg) => {
            eprintln!("error: {}", msg);
            return ExitCode::from(1);
        }
    };

    match run(&args, source, client).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
