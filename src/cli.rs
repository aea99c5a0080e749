use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use log::{debug, error};

use crate::catalog::Catalog;
use crate::config::{BIND_ENV, DATA_DIR_ENV, DEFAULT_BIND_ADDR, DEFAULT_DATA_DIR};
use crate::data::load_dataset;
use crate::data::validate::{check_references, ValidationSeverity};
use crate::lookup::view::{render_with, ViewState};
use crate::server;

#[derive(Debug, Parser)]
#[command(name = "loadout", version, about = "Weapon attachment lookup over static JSON data")]
pub struct Cli {
    /// Directory holding weapons.json, attachments.json and a relationship file.
    #[arg(long, global = true, env = DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Serve the lookup page and JSON API.
    Serve {
        #[arg(long, env = BIND_ENV, default_value = DEFAULT_BIND_ADDR)]
        bind: String,
    },
    /// Print the attachment table for one weapon.
    Show(ShowArgs),
    /// List weapon keys and labels.
    Weapons,
    /// List attachment categories.
    Categories,
    /// Report missing ids, duplicate keys and dangling references.
    Validate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct ShowArgs {
    /// Weapon key; defaults to the first weapon.
    #[arg(long, default_value = "")]
    pub weapon: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub keyword: String,
    /// Emit the rendered view as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    fn view_state(&self) -> ViewState {
        ViewState::new(&self.weapon, &self.category, &self.keyword)
    }
}

pub fn parse_command(args: &[String]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

pub async fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Ok(cli) => run(cli).await,
        Err(err) => {
            let code = err.exit_code();
            let _ = err.print();
            code
        }
    }
}

pub async fn run(cli: Cli) -> i32 {
    match cli.command {
        Command::Serve { bind } => handle_serve(&cli.data_dir, &bind).await,
        Command::Show(args) => handle_show(&cli.data_dir, &args).await,
        Command::Weapons => handle_weapons(&cli.data_dir).await,
        Command::Categories => handle_categories(&cli.data_dir).await,
        Command::Validate => handle_validate(&cli.data_dir).await,
    }
}

async fn load_catalog(data_dir: &Path) -> Option<Arc<Catalog>> {
    match Catalog::load(data_dir).await {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            error!("{err}");
            eprintln!("initialization failed: {err} (see log output)");
            None
        }
    }
}

async fn handle_serve(data_dir: &Path, bind_addr: &str) -> i32 {
    let Some(catalog) = load_catalog(data_dir).await else {
        return 1;
    };
    match server::run_server(bind_addr, catalog).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

async fn handle_show(data_dir: &Path, args: &ShowArgs) -> i32 {
    let Some(catalog) = load_catalog(data_dir).await else {
        return 1;
    };

    let view = render_with(&catalog, &args.view_state(), &|names: &[String]| {
        debug!("default loadout for '{}': {}", args.weapon, names.join(", "));
    });

    if args.json {
        return match serde_json::to_string_pretty(&view) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize view: {err}");
                1
            }
        };
    }

    print!("{}", view.to_text_table());
    if !view.default_loadout.is_empty() {
        println!("デフォルト装備: {}", view.default_loadout.join(", "));
    }
    0
}

async fn handle_weapons(data_dir: &Path) -> i32 {
    let Some(catalog) = load_catalog(data_dir).await else {
        return 1;
    };
    for option in catalog.weapon_options() {
        println!("{}\t{}", option.key, option.label);
    }
    0
}

async fn handle_categories(data_dir: &Path) -> i32 {
    let Some(catalog) = load_catalog(data_dir).await else {
        return 1;
    };
    for category in catalog.categories() {
        println!("{category}");
    }
    0
}

async fn handle_validate(data_dir: &Path) -> i32 {
    let dataset = match load_dataset(data_dir).await {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("validation failed: {err}");
            return 1;
        }
    };

    let report = check_references(&dataset);
    for diagnostic in &report.diagnostics {
        if diagnostic.severity == ValidationSeverity::Info {
            println!("{diagnostic}");
        } else {
            eprintln!("{diagnostic}");
        }
    }

    if report.has_problems() {
        eprintln!(
            "validation failed: {} error(s), {} warning(s)",
            report.count(ValidationSeverity::Error),
            report.count(ValidationSeverity::Warning)
        );
        1
    } else {
        println!("validation passed: {}", data_dir.display());
        0
    }
}
