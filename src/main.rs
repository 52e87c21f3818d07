// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use design_intel::design::{
    self, audit, contrast, icons, palette, system, tokens, typography, SystemGenerator,
};
use design_intel::search::format as search_format;
use design_intel::{SearchOptions, Searcher, SystemConfig};

mod cli;
use cli::logging::{self, Verbosity};
use cli::{
    display, AuditFormat, Cli, Commands, PaletteFormat, ResultFormat, ScaleFormat, SystemFormat,
    TokenFormat,
};

fn main() {
    let cli = Cli::parse();

    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet), cli.no_color);
    if cli.no_color {
        display::disable_colors();
    }

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Dispatch a parsed command. Returns the process exit code.
fn run(cli: Cli) -> Result<i32> {
    let data_dir = design_intel::data_dir(cli.data_dir.as_deref());
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    match cli.command {
        Commands::Search {
            query,
            domain,
            stack,
            max_results,
            format,
        } => run_search(&data_dir, &query, domain, stack, max_results, format),
        Commands::Contrast {
            foreground,
            background,
            level,
            format,
        } => run_contrast(&foreground, &background, level, format),
        Commands::Palette {
            color,
            harmony,
            count,
            format,
        } => run_palette(&color, harmony, count, format),
        Commands::Tokens {
            primary,
            neutral,
            radius,
            font,
            preset,
            format,
        } => {
            let options = match preset {
                Some(preset) => preset.options(),
                None => design::TokenOptions {
                    primary,
                    neutral,
                    radius,
                    font,
                },
            };
            run_tokens(&options, format)
        }
        Commands::Typography {
            base,
            ratio,
            scale,
            steps,
            format,
        } => run_typography(base, ratio, scale, steps, format),
        Commands::System {
            query,
            stack,
            format,
            output,
            config,
        } => run_system(
            &data_dir,
            &query,
            stack.as_deref(),
            format,
            output.as_deref(),
            config.as_deref(),
        ),
        Commands::Audit {
            files,
            format,
            output,
        } => run_audit(&files, format, output.as_deref()),
        Commands::Icons { query } => run_icons(&data_dir, query.as_deref()),
    }
}

fn run_search(
    data_dir: &Path,
    query: &str,
    domain: Option<design_intel::Domain>,
    stack: Option<String>,
    max_results: usize,
    format: ResultFormat,
) -> Result<i32> {
    let searcher = Searcher::new(data_dir);
    let mut options = SearchOptions::new().max_results(max_results);
    if let Some(domain) = domain {
        options = options.domain(domain.name());
    }
    if let Some(stack) = stack {
        options = options.stack(stack);
    }

    let response = searcher.search(query, &options);
    info!(sections = response.len(), hits = response.total_hits(), "search complete");

    if response.is_empty() {
        println!("No results found for: {query}");
        return Ok(1);
    }

    match format {
        ResultFormat::Json => println!("{}", search_format::format_json(&response)?),
        ResultFormat::Text if display::use_colors() => display::print_search(&response),
        ResultFormat::Text => println!("{}", search_format::format_text(&response)),
    }
    Ok(0)
}

fn run_contrast(
    foreground: &str,
    background: &str,
    level: design::WcagLevel,
    format: ResultFormat,
) -> Result<i32> {
    let report = contrast::check(foreground, background, level)?;
    match format {
        ResultFormat::Json => println!("{}", contrast::format_json(&report)?),
        ResultFormat::Text if display::use_colors() => display::print_contrast(&report),
        ResultFormat::Text => println!("{}", contrast::format_text(&report)),
    }
    Ok(0)
}

fn run_palette(
    color: &str,
    harmony: design::Harmony,
    count: usize,
    format: PaletteFormat,
) -> Result<i32> {
    let colors = palette::generate_palette(color, harmony, count)?;
    let rendered = match format {
        PaletteFormat::Json => palette::format_json(&colors, harmony)?,
        PaletteFormat::Css => palette::format_css(&colors),
        PaletteFormat::Text => palette::format_text(&colors, harmony, display::use_colors()),
    };
    println!("{rendered}");
    Ok(0)
}

fn run_tokens(options: &design::TokenOptions, format: TokenFormat) -> Result<i32> {
    let set = tokens::generate_all(options)?;
    debug!(count = set.len(), "generated tokens");
    let rendered = match format {
        TokenFormat::Css => tokens::format_css(&set),
        TokenFormat::Json => tokens::format_json(&set)?,
    };
    println!("{rendered}");
    Ok(0)
}

fn run_typography(
    base: f64,
    ratio: f64,
    scale: Option<design::NamedScale>,
    steps: usize,
    format: ScaleFormat,
) -> Result<i32> {
    let ratio = scale.map_or(ratio, |named| named.ratio());
    let label = typography::ratio_label(scale, ratio);
    let steps = typography::generate_scale(base, ratio, steps);
    let rendered = match format {
        ScaleFormat::Css => typography::format_css(&steps, &label),
        ScaleFormat::Json => typography::format_json(&steps, &label)?,
        ScaleFormat::Text => typography::format_text(&steps, &label),
    };
    println!("{rendered}");
    Ok(0)
}

fn run_system(
    data_dir: &Path,
    query: &str,
    stack: Option<&str>,
    format: SystemFormat,
    output: Option<&Path>,
    config: Option<&Path>,
) -> Result<i32> {
    let searcher = Searcher::new(data_dir);
    let config = match config {
        Some(path) => SystemConfig::from_file(path)
            .with_context(|| format!("loading system config {}", path.display()))?,
        None => SystemConfig::default(),
    };

    let generator = SystemGenerator::with_config(&searcher, config);
    let result = generator.generate(query, stack)?;
    let rendered = match format {
        SystemFormat::Json => system::format_json(&result)?,
        SystemFormat::Css => system::format_css(&result),
        SystemFormat::Text => system::format_text(&result),
    };

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("writing design system to {}", path.display()))?;
            println!("  Design system saved to: {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(0)
}

fn run_audit(patterns: &[PathBuf], format: AuditFormat, output: Option<&Path>) -> Result<i32> {
    let format = AuditFormat::for_output(format, output);
    // Only plain text on stdout may carry notices in-line.
    let notices_inline = format == AuditFormat::Text && output.is_none();

    let mut run = audit::AuditRun::new();
    for path in audit::expand_patterns(patterns) {
        if !path.exists() {
            if notices_inline {
                println!("  File not found: {}", path.display());
            } else {
                eprintln!("  File not found: {}", path.display());
            }
            continue;
        }
        if path.is_dir() {
            debug!(path = %path.display(), "skipping directory");
            continue;
        }
        run.push(audit::audit_file(&path)?);
    }
    info!(files = run.files_scanned(), issues = run.total(), "audit complete");

    if notices_inline && display::use_colors() {
        for report in run.flagged() {
            display::print_audit(report);
        }
        if run.total() == 0 {
            println!("\n  No issues found!");
        }
        return Ok(0);
    }

    let rendered = match format {
        AuditFormat::Json => audit::format_run_json(&run)?,
        AuditFormat::Markdown => audit::format_markdown(&run),
        AuditFormat::Text => audit::format_run_text(&run),
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(path, &rendered)
                .with_context(|| format!("writing audit report to {}", path.display()))?;
            println!("  Audit report saved to: {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(0)
}

fn run_icons(data_dir: &Path, query: Option<&str>) -> Result<i32> {
    let searcher = Searcher::new(data_dir);
    let libraries = icons::find_libraries(&searcher, query);

    match query {
        None if libraries.is_empty() => {
            println!("No icon libraries found in {}", data_dir.display());
        }
        None => println!("{}", icons::format_table(&libraries)),
        Some(query) if libraries.is_empty() => {
            println!("No icon library matching: {query}");
        }
        Some(query) => println!("{}", icons::format_details(&libraries, query)),
    }
    Ok(0)
}
