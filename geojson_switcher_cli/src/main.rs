use std::io::{self, BufRead};
use std::str::FromStr;

use clap::{Parser, Subcommand};
use geojson_switcher::{
    io::{read_geojson, selection_to_geojson, write_geojson},
    memory::MemoryMap,
    options::read_options_json,
    ButtonPreset, PresentationSink, Switcher, SwitcherOptions,
};

/// Presentation sink printing every dialog update to stdout.
struct ConsoleDialog;

impl PresentationSink for ConsoleDialog {
    fn set_title(&mut self, text: &str) {
        println!("Title: {}", text);
    }

    fn set_toggle_visual(&mut self, visual: &ButtonPreset) {
        println!("Button: {} {}", visual.icon, visual.color);
    }

    fn open(&mut self) {
        log::debug!("dialog opened");
    }

    fn close(&mut self) {
        println!("Dialog closed");
    }
}

type ConsoleSwitcher = Switcher<MemoryMap, ConsoleDialog>;

/// A user action on the navigation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    Next,
    Previous,
    Toggle,
    Selection,
    Quit,
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next" | "n" => Ok(Intent::Next),
            "previous" | "prev" | "p" => Ok(Intent::Previous),
            "toggle" | "t" => Ok(Intent::Toggle),
            "selection" | "s" => Ok(Intent::Selection),
            "quit" | "q" => Ok(Intent::Quit),
            other => Err(format!("unknown intent '{}'", other)),
        }
    }
}

/// Page through GeoJSON features and pick a subset of them.
#[derive(Parser)]
#[command(name = "geojson_switcher_cli", version)]
struct Cli {
    /// JSON file with switcher options
    #[arg(long, global = true)]
    options: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a script of intents (next, previous, toggle, selection) against a file.
    Run {
        input: String,
        #[arg(long)]
        script: String,
        /// Write the selected features to this GeoJSON file.
        #[arg(long)]
        output: Option<String>,
    },
    /// Read intents line by line from stdin until `quit` or end of input.
    Browse {
        input: String,
        #[arg(long)]
        output: Option<String>,
    },
    /// Print how many features a file holds and how many are selected.
    Info { input: String },
}

fn load_options(path: Option<&str>) -> io::Result<SwitcherOptions> {
    match path {
        Some(p) => read_options_json(p),
        None => Ok(SwitcherOptions::default()),
    }
}

fn open_switcher(input: &str, options: SwitcherOptions) -> io::Result<ConsoleSwitcher> {
    let gj = read_geojson(input)?;
    let mut switcher = Switcher::new(MemoryMap::new(), ConsoleDialog, options);
    switcher.activate();
    switcher.load(&gj);
    Ok(switcher)
}

fn print_selection(switcher: &ConsoleSwitcher) {
    let records = switcher.collection().all();
    println!("Selected: {}/{}", switcher.selection().len(), records.len());
    for (i, record) in records.iter().enumerate() {
        if record.is_selected() {
            println!("  #{}", i + 1);
        }
    }
}

/// Applies one intent. Returns `false` when the session should end.
fn apply(switcher: &mut ConsoleSwitcher, intent: Intent) -> bool {
    match intent {
        Intent::Next => switcher.next(),
        Intent::Previous => switcher.previous(),
        Intent::Toggle => switcher.toggle(),
        Intent::Selection => print_selection(switcher),
        Intent::Quit => return false,
    }
    true
}

fn finish(switcher: &ConsoleSwitcher, output: Option<&str>) -> io::Result<()> {
    let selected = switcher.selection().len();
    println!("Selected: {}/{}", selected, switcher.collection().count());
    if let Some(path) = output {
        let key = &switcher.options().property_key;
        let gj = selection_to_geojson(switcher.collection().all(), key, |id| {
            switcher.map().geometry(id).cloned()
        });
        write_geojson(path, &gj)?;
        println!("Wrote {}", path);
    }
    Ok(())
}

fn run_script(
    input: &str,
    script: &str,
    output: Option<&str>,
    options: SwitcherOptions,
) -> io::Result<()> {
    let words = shell_words::split(script)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let intents = words
        .iter()
        .map(|w| w.parse::<Intent>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut switcher = open_switcher(input, options)?;
    for intent in intents {
        if !apply(&mut switcher, intent) {
            break;
        }
    }
    finish(&switcher, output)
}

fn browse(input: &str, output: Option<&str>, options: SwitcherOptions) -> io::Result<()> {
    let mut switcher = open_switcher(input, options)?;
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Intent>() {
            Ok(intent) => {
                if !apply(&mut switcher, intent) {
                    break;
                }
            }
            Err(e) => eprintln!("{}", e),
        }
    }
    finish(&switcher, output)
}

fn info(input: &str, options: SwitcherOptions) -> io::Result<()> {
    let gj = read_geojson(input)?;
    let raw = geojson_switcher::ingest::parse_geojson(&gj);
    let key = options.property_key;
    let selected = raw
        .iter()
        .filter(|f| f.properties.get(&key).and_then(|v| v.as_bool()).unwrap_or(false))
        .count();
    println!("Features: {}", raw.len());
    println!("Selected: {}", selected);
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env().init();
    let cli = Cli::parse();
    let options = match load_options(cli.options.as_deref()) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error reading options: {}", e);
            std::process::exit(1);
        }
    };
    let result = match &cli.command {
        Commands::Run {
            input,
            script,
            output,
        } => run_script(input, script, output.as_deref(), options)
            .map_err(|e| format!("Error running {}: {}", input, e)),
        Commands::Browse { input, output } => browse(input, output.as_deref(), options)
            .map_err(|e| format!("Error browsing {}: {}", input, e)),
        Commands::Info { input } => {
            info(input, options).map_err(|e| format!("Error reading {}: {}", input, e))
        }
    };
    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
