use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use vtable_demo::{DemoConfig, DispatchReport, Rectangle, Resolution, Square, VTable, WideRectangle};

const RULE: &str = "----------------------------";

#[derive(Parser, Debug)]
#[command(name = "vtable_demo", about = "Compare static and dynamic resolution on hand-built vtables")]
struct Cli {
    /// Also call `Bug` through the dispatch handle (the square faults)
    #[arg(short = 'b', long = "bug")]
    bug: bool,

    /// TOML file with demo settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Ok(filter) = EnvFilter::try_from_env("VTABLE_DEMO_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    if cli.bug {
        config.crash_demo = true;
    }

    let s1 = Rectangle::new("s1", 6, 7);
    let s2 = Square::new("s2", 8);
    let s3 = WideRectangle::new("s3", 10, 2);

    demo(&s1.to_string(), &*s1, &config, cli.format)?;
    demo(&s2.to_string(), &*s2, &config, cli.format)?;
    demo(&s3.to_string(), &*s3, &config, cli.format)?;

    if cli.format == Format::Text && !config.crash_demo {
        println!("Try running with -b for a crash.");
    }
    Ok(())
}

fn demo(description: &str, shape: &dyn VTable, config: &DemoConfig, format: Format) -> Result<()> {
    if format == Format::Text {
        println!("{}\t\t\t{}", "Demo:".bold(), description);
    }

    let report = shape
        .base()
        .resolve_and_report(config)
        .with_context(|| format!("dispatch failed for {:?}", shape.base().name()))?;

    match format {
        Format::Text => print_report(&report),
        Format::Json => println!("{}", serde_json::to_string(&report)?),
    }
    Ok(())
}

fn print_report(report: &DispatchReport) {
    println!("{RULE}");
    print_resolution("identity", &report.identity);
    println!("{RULE}");
    print_resolution("Default0", &report.default0);
    println!("{RULE}");
    print_resolution("Default1", &report.default1);
    println!("{RULE}");
    print_resolution("Area", &report.area);
    if report.bug_checked {
        println!("Calling Bug():\t\t{}", "Success!".green());
    }
    println!();
}

fn print_resolution<T: std::fmt::Display + PartialEq>(label: &str, resolution: &Resolution<T>) {
    let mark = |value: &T| {
        let text = value.to_string();
        if *value == resolution.handle_call {
            text.normal()
        } else {
            text.yellow()
        }
    };

    println!("{label} in shape:\t{}", mark(&resolution.static_call));
    println!("{label} via Dynamic():\t{}", mark(&resolution.dynamic_call));
    println!("{label} via handle:\t{}", resolution.handle_call);
}
