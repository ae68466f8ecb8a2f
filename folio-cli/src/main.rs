// Command-line interface for folio
//
// This binary works on stored folio documents (the editor's JSON tree) on disk. It is a thin
// shell over the folio-doc library: every command reads a file, runs one library operation and
// prints the result. Nothing here knows about the wiki's database, so mention titles come from
// an optional references file instead of live lookups.
//
// Usage:
//  folio render <input> [--to <format>] [--lang <code>] [--references <file>] [-o <file>]
//  folio migrate <input> --schema-version <n> [-o <file>]
//  folio find <input> <type>... [--limit <n>]
//  folio inspect <input> [--since <time>]
//  folio --list-formats
//
// Configuration is read from folio.toml in the working directory (if present) and from the file
// given with --config. Logging goes to stderr; FOLIO_LOG overrides the configured filter.

mod references;

use chrono::{DateTime, Utc};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use folio_config::{FolioConfig, Loader};
use folio_doc::attachments::attachment_refs;
use folio_doc::mention::new_user_mentions;
use folio_doc::preview::{is_empty_document, preview};
use folio_doc::tree::{find_nodes, plain_text};
use folio_doc::{
    parse, render, to_json, BuiltinPlaceholders, Caller, MentionResolver, MigrationOutcome,
    Migrator, Node, SchemaCatalogue, StoredContent,
};
use std::fmt::Display;
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "FOLIO_LOG";

fn build_cli() -> Command {
    Command::new("folio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for rendering, migrating and inspecting folio documents")
        .long_about(
            "folio is a command-line tool for working with stored folio documents.\n\n\
            Commands:\n  \
            - render:  Render a document to HTML or Markdown\n  \
            - migrate: Upgrade a stored document to the latest schema version\n  \
            - find:    Print nodes of the given types\n  \
            - inspect: Summarize a document (emptiness, attachments, mentions)\n\n\
            Examples:\n  \
            folio render article.json                       # HTML to stdout\n  \
            folio render article.json --to markdown -o a.md # Markdown file\n  \
            folio migrate article.json --schema-version 1   # Migrated JSON to stdout\n  \
            folio find article.json mention --limit 5       # First five mentions",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a folio.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render a document")
                .long_about(
                    "Render a stored document with one of the built-in schemas.\n\n\
                    Mentions keep the titles stored in the document unless a references file\n\
                    is given; then they are resolved for the caller (a member by default, or an\n\
                    API client with --client) and unreadable objects show a placeholder in the\n\
                    language given with --lang.",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format (defaults to render.format from the configuration)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("lang")
                        .long("lang")
                        .help("Document language for mention placeholders")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("references")
                        .long("references")
                        .value_name("FILE")
                        .help("JSON file with the objects mentions may resolve to")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("client")
                        .long("client")
                        .value_name("SCOPES")
                        .help("Resolve as an API client with these scopes (articles,lists,tags)")
                        .requires("references"),
                )
                .arg(
                    Arg::new("preview")
                        .long("preview")
                        .help("Render only the first paragraph")
                        .action(ArgAction::SetTrue),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("migrate")
                .about("Upgrade a stored document to the latest schema version")
                .arg(input_arg())
                .arg(
                    Arg::new("schema-version")
                        .long("schema-version")
                        .help("Schema version the document was stored with")
                        .required(true)
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("find")
                .about("Print nodes of the given types as JSON lines")
                .arg(input_arg())
                .arg(
                    Arg::new("types")
                        .help("Node type names (case-insensitive)")
                        .required(true)
                        .num_args(1..)
                        .index(2),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .help("Stop after this many matches")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Summarize a document")
                .arg(input_arg())
                .arg(
                    Arg::new("since")
                        .long("since")
                        .value_name("TIME")
                        .help("List users mentioned after this RFC 3339 timestamp"),
                ),
        )
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    init_logging(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&config);
        return;
    }

    match matches.subcommand() {
        Some(("render", sub_matches)) => handle_render_command(sub_matches, &config),
        Some(("migrate", sub_matches)) => handle_migrate_command(sub_matches),
        Some(("find", sub_matches)) => handle_find_command(sub_matches),
        Some(("inspect", sub_matches)) => handle_inspect_command(sub_matches),
        _ => fail("Unknown subcommand. Use --help for usage information."),
    }
}

fn init_logging(config: &FolioConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: impl Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_else(|| fail(format!("missing argument '{name}'")))
}

fn read_document(path: &str) -> Node {
    let source = fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("reading file '{path}': {e}")));
    parse(&source).unwrap_or_else(|e| fail(format!("parsing '{path}': {e}")))
}

fn write_output(output: Option<&str>, text: &str) {
    match output {
        Some(path) => fs::write(path, text)
            .unwrap_or_else(|e| fail(format!("writing file '{path}': {e}"))),
        None => print!("{text}"),
    }
}

/// Handle the render command
fn handle_render_command(matches: &ArgMatches, config: &FolioConfig) {
    let input = required(matches, "input");
    let output = matches.get_one::<String>("output").map(|s| s.as_str());
    let format = matches
        .get_one::<String>("to")
        .map(|s| s.as_str())
        .unwrap_or(config.render.format.as_str());

    let tenant = config.tenant.to_tenant().unwrap_or_else(|e| fail(e));
    let catalogue = SchemaCatalogue::with_defaults(&tenant).unwrap_or_else(|e| fail(e));
    let schema = catalogue.get(format).unwrap_or_else(|e| fail(e));

    let mut doc = read_document(input);

    if let Some(path) = matches.get_one::<String>("references") {
        let lookup = references::load_references(path).unwrap_or_else(|e| fail(e));
        let caller = match matches.get_one::<String>("client") {
            Some(scopes) => Caller::Client {
                scopes: references::parse_scopes(scopes).unwrap_or_else(|e| fail(e)),
            },
            None => Caller::user("cli"),
        };
        let lang = matches
            .get_one::<String>("lang")
            .unwrap_or(&config.mentions.language);

        MentionResolver::new(&lookup, &BuiltinPlaceholders).resolve(&mut doc, &caller, lang);
    }

    if matches.get_flag("preview") {
        match preview(&doc, true) {
            Some(part) => doc = part,
            None => {
                debug!(input, "Document is empty, nothing to preview");
                write_output(output, "");
                return;
            }
        }
    }

    let rendered = render(schema, &mut doc).unwrap_or_else(|e| fail(format!("rendering: {e}")));
    write_output(output, &rendered);
}

/// Handle the migrate command
fn handle_migrate_command(matches: &ArgMatches) {
    let input = required(matches, "input");
    let output = matches.get_one::<String>("output").map(|s| s.as_str());
    let version = matches
        .get_one::<u32>("schema-version")
        .copied()
        .unwrap_or_else(|| fail("missing argument 'schema-version'"));

    // Stored content is migrated as text; an empty file is a valid (empty) record.
    let source = fs::read_to_string(input)
        .unwrap_or_else(|e| fail(format!("reading file '{input}': {e}")));
    let mut record = StoredContent::new(source.trim_end(), version);

    let outcome = Migrator::default()
        .migrate(&mut record)
        .unwrap_or_else(|e| fail(e));

    match outcome {
        MigrationOutcome::Migrated { from, to } => eprintln!("Migrated from version {from} to {to}"),
        MigrationOutcome::UpToDate => eprintln!("Already at version {}", record.schema_version),
        MigrationOutcome::Empty => eprintln!("Empty document, nothing to migrate"),
    }

    if record.content.is_empty() {
        write_output(output, "");
    } else {
        write_output(output, &format!("{}\n", record.content));
    }
}

/// Handle the find command
fn handle_find_command(matches: &ArgMatches) {
    let input = required(matches, "input");
    let types: Vec<&str> = matches
        .get_many::<String>("types")
        .map(|values| values.map(|s| s.as_str()).collect())
        .unwrap_or_default();
    let limit = matches.get_one::<usize>("limit").copied();

    let doc = read_document(input);

    for node in find_nodes(&doc, &types, limit) {
        let line = to_json(&node).unwrap_or_else(|e| fail(e));
        println!("{line}");
    }
}

/// Handle the inspect command
fn handle_inspect_command(matches: &ArgMatches) {
    let input = required(matches, "input");
    let since = matches.get_one::<String>("since").map(|raw| {
        DateTime::parse_from_rfc3339(raw)
            .map(|time| time.with_timezone(&Utc))
            .unwrap_or_else(|e| fail(format!("invalid --since '{raw}': {e}")))
    });

    let doc = read_document(input);

    println!("empty: {}", is_empty_document(&doc));
    println!("characters: {}", plain_text(&doc).chars().count());

    println!("attachments:");
    for reference in attachment_refs(&doc) {
        println!("  {} {}", reference.node_type, reference.location);
    }

    if let Some(since) = since {
        println!("mentioned users:");
        for id in new_user_mentions(&doc, since) {
            println!("  {id}");
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &FolioConfig) {
    let tenant = config.tenant.to_tenant().unwrap_or_else(|e| fail(e));
    let catalogue = SchemaCatalogue::with_defaults(&tenant).unwrap_or_else(|e| fail(e));

    println!("Output formats:");
    for name in catalogue.list_formats() {
        println!("  {name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> FolioConfig {
    let loader = Loader::new().with_optional_file("folio.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
