//! Renders the form for a sample blog post.
//!
//! ```text
//! cargo run -p dynaform --example post_form -- --persisted 1 --csrf-token 123 -v
//! ```

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dynaform::{error_messages_for, ErrorMessagesOptions, FormAssembler, FormOptions};
use dynaform_model::{Column, DynamicRecord, RecordResolver, RecordScope};
use dynaform_tags::{Method, StandardHelpers, TagConfig};

/// Prints the generated HTML form for a sample post.
#[derive(Parser)]
#[command(name = "post_form")]
#[command(about, long_about = None)]
struct Cli {
    /// Action the form submits to.
    #[arg(short, long)]
    action: Option<String>,

    /// HTTP method (get, post, put, patch, delete).
    #[arg(short, long, default_value = "post")]
    method: Method,

    /// Treat the post as saved under this id.
    #[arg(long)]
    persisted: Option<u64>,

    /// Embed this authenticity token.
    #[arg(long, env = "CSRF_TOKEN")]
    csrf_token: Option<String>,

    /// Tag configuration as a JSON file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn sample_post() -> anyhow::Result<DynamicRecord> {
    let written_on = NaiveDate::from_ymd_opt(2004, 6, 15)
        .ok_or_else(|| anyhow::anyhow!("invalid sample date"))?;

    Ok(DynamicRecord::new()
        .column(Column::string("title"))
        .column(Column::string("author_name"))
        .column(Column::text("body"))
        .column(Column::date("written_on"))
        .column(Column::boolean("published"))
        .attr("title", "Hello World")
        .attr("body", "Back to the hill and over it again!")
        .attr("written_on", written_on)
        .attr("published", false)
        .error("author_name", "can't be empty"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::TRACE
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &cli.config {
        Some(path) => TagConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => TagConfig::default(),
    };
    let helpers = StandardHelpers::new().config(config);
    let helpers = match &cli.csrf_token {
        Some(token) => helpers.protect_against_forgery("authenticity_token", token.as_str()),
        None => helpers,
    };

    let post = sample_post()?;
    let post = match cli.persisted {
        Some(id) => post.persisted(id),
        None => post,
    };
    let scope = RecordScope::new().assign("post", post);

    let mut options = FormOptions::new().method(cli.method);
    if let Some(action) = cli.action {
        options = options.action(action);
    }

    let assembler = FormAssembler::new(&helpers, &scope);
    let html = assembler.form("post", &options)?;
    info!(bytes = html.as_str().len(), "Form generated");

    if let Some(post) = scope.resolve("post") {
        println!("{}", error_messages_for("post", post, &ErrorMessagesOptions::new()));
    }
    println!("{html}");
    Ok(())
}
