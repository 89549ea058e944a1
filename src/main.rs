//! Richedit - A terminal rich-text editor.
//!
//! # Usage
//!
//! ```bash
//! richedit
//! richedit notes.json
//! richedit notes.json --output copy.json
//! richedit notes.json --dump
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use richedit::app::App;
use richedit::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use richedit::document::Document;
use richedit::perf;

/// A terminal rich-text editor
#[derive(Parser, Debug)]
#[command(name = "richedit", version, about, long_about = None)]
struct Cli {
    /// Document to open (JSON); starts from a sample paragraph when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// File written by Ctrl+S (defaults to FILE)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Enable startup performance logging
    #[arg(long)]
    perf: bool,

    /// Write detailed frame/event debug records to a file
    #[arg(long, value_name = "PATH")]
    render_debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,

    /// Print the normalized document as JSON and exit
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    // Initialize logging
    let mut filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    if effective.perf {
        filter = filter.add_directive("richedit::perf=info".parse()?);
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    perf::set_enabled(effective.perf);
    let render_debug_log_path = effective
        .render_debug_log
        .clone()
        .or_else(|| std::env::var_os("RICHEDIT_RENDER_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(render_debug_log_path.as_deref()) {
        tracing::warn!(
            path = %render_debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            %err,
            "failed to initialize render debug log"
        );
    }

    let load_scope = perf::scope("document.load");
    let document = match &cli.file {
        Some(path) => Document::load(path)
            .with_context(|| format!("Failed to open {}", path.display()))?,
        None => Document::initial(),
    };
    drop(load_scope);

    if cli.dump {
        println!("{}", document.to_json()?);
        return Ok(());
    }

    let mut app = App::new(document)
        .with_file_path(cli.file)
        .with_output(effective.output)
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    app.run().context("Application error")
}
