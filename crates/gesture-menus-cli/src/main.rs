//! menuctl - inspect and edit gesture launcher menus from the command line.
//!
//! Wraps the gesture-menus library: loads the user's menu document (migrating
//! legacy files), prints it, splices in new menus, and writes it back.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::MenuContext;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "menuctl")]
#[command(about = "Inspect and edit gesture launcher menus")]
struct Args {
    /// Menu document to operate on (defaults to the platform data directory)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Treat every application package as installed
    #[arg(long, global = true)]
    assume_installed: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every menu and its gesture bindings
    Show {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Add a new menu at an edge of an existing one
    Insert {
        /// Id of the menu to attach from
        #[arg(long)]
        from: String,
        /// Edge to attach at: left, right, or a raw gesture code
        #[arg(long, value_parser = commands::parse_gesture)]
        gesture: gesture_menus::GestureCode,
        /// Display name of the new menu
        #[arg(long)]
        name: String,
    },
    /// Rewrite a (possibly legacy) document in the current format
    Migrate {
        /// Document to read
        input: PathBuf,
        /// Where to write the result (defaults to --file or the default path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    let menu_path = match args.file {
        Some(path) => path,
        None => gesture_menus::platform::default_menu_path()?,
    };
    debug!("Menu document: {}", menu_path.display());

    let context = MenuContext::new(args.assume_installed);

    match args.command {
        Command::Show { json } => {
            let graph = context.load(&menu_path);
            let rendered = if json {
                commands::render_json(&graph)?
            } else {
                commands::render_text(&graph)
            };
            println!("{}", rendered);
        }
        Command::Insert {
            from,
            gesture,
            name,
        } => match commands::insert(&context, &menu_path, &from, gesture, &name)? {
            Some(id) => println!("Inserted menu {:?}", id),
            None => println!("Nothing inserted: {} is not an edge gesture of {:?}", gesture, from),
        },
        Command::Migrate { input, output } => {
            let output = output.unwrap_or(menu_path);
            let count = commands::migrate(&context, &input, &output)?;
            println!("Wrote {} menus to {}", count, output.display());
        }
    }

    Ok(())
}
