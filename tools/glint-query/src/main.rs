// SPDX-License-Identifier: LGPL-3.0-or-later

use std::rc::Rc;

use anyhow::ensure;
use clap::Parser;
use glint_builtins::{BuiltInResources, ExtensionSupport, ShaderStage};
use glint_symbols::{BuiltInTier, ShaderVersion, Symbol, SymbolTable};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Looks up symbols in the shading-language built-in catalog.
#[derive(clap::Parser, Debug)]
struct Arguments {
    /// The shader stage to load built-ins for.
    #[arg(short, long, default_value = "fragment")]
    stage: ShaderStage,

    /// Register the built-ins of every optional extension.
    #[arg(short = 'x', long)]
    all_extensions: bool,

    #[command(subcommand)]
    mode: QueryMode,
}

#[derive(clap::Subcommand, Debug)]
enum QueryMode {
    /// Look up names as a shader of the given version would see them.
    Find(FindArgs),
    /// Print every symbol of one built-in tier.
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
struct FindArgs {
    /// The shader version, e.g. `100`, `300 es` or `310`.
    #[arg(short, long, default_value = "100")]
    version: ShaderVersion,

    /// Also search the desktop GLSL tier.
    #[arg(short, long)]
    desktop: bool,

    /// Names to look up.
    ///
    /// Functions are given either by plain name, which lists all overloads,
    /// or by mangled name such as `sin(f3;`.
    #[arg(required = true)]
    names: Vec<String>,
}

#[derive(clap::Args, Debug)]
struct ListArgs {
    /// The tier to print: common, essl1, essl3, essl3.1 or glsl.
    tier: BuiltInTier,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Arguments::parse();

    let mut resources = BuiltInResources::default();
    if args.all_extensions {
        resources.extensions = ExtensionSupport::all();
    }
    debug!(stage = %args.stage, extensions = ?resources.extensions, "loading built-ins");
    let table = glint_builtins::new_table(args.stage, &resources);

    match args.mode {
        QueryMode::Find(find) => find_names(&table, find),
        QueryMode::List(list) => {
            list_tier(&table, list.tier);
            Ok(())
        },
    }
}

fn find_names(table: &SymbolTable, args: FindArgs) -> anyhow::Result<()> {
    let mut missing = 0;
    for name in &args.names {
        let found = match table.find_built_in_with_desktop(name, args.version, args.desktop) {
            Some(symbol) => {
                print_symbol(table, &symbol);
                true
            },
            None => print_overloads(table, name, &args),
        };

        if !found {
            println!("{name}: not found for version {}", args.version);
            missing += 1;
        }
    }

    ensure!(missing == 0, "{missing} of {} names were not found", args.names.len());
    Ok(())
}

fn print_overloads(table: &SymbolTable, name: &str, args: &FindArgs) -> bool {
    if !args.desktop && !table.has_unmangled_built_in_for_shader_version(name, args.version) {
        return false;
    }

    let mut found = false;
    for tier in SymbolTable::searched_tiers(args.version, args.desktop) {
        let overloads = table.built_ins().level(tier).iter().filter(|(_, symbol)| {
            symbol.is_function() && &**symbol.name() == name
        });
        for (_, symbol) in overloads {
            print_symbol(table, symbol);
            found = true;
        }
    }
    found
}

fn print_symbol(table: &SymbolTable, symbol: &Rc<Symbol>) {
    let tier = table.built_in_tier(symbol).map_or("?", BuiltInTier::name);

    print!("{symbol}  [{tier}, {}]", symbol.unique_id());
    if symbol.extension().is_required() {
        print!(" requires {}", symbol.extension());
    }
    println!();
}

fn list_tier(table: &SymbolTable, tier: BuiltInTier) {
    let level = table.built_ins().level(tier);
    for (key, symbol) in level.iter() {
        println!("{key:<40} {symbol}");
    }
    println!("{} symbols in tier {tier}", level.len());
}
