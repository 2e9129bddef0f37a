//! Command-line front end for `draw2svg`: argument parsing, the font
//! substitution `.ini` loader, and single-file/directory batch traversal.
//! The library crate never touches the filesystem or `std::env` itself;
//! everything here is the "external collaborator" layer spec'd as out of
//! scope for the core converter.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{App, Arg};
use draw2svg::Config;

fn main() -> ExitCode {
    let matches = App::new("draw2svg")
        .about("Converts Acorn !Draw vector files to SVG")
        .arg(Arg::with_name("input").long("input").takes_value(true).help("Input .draw file (single-file mode)"))
        .arg(Arg::with_name("output").long("output").takes_value(true).help("Output .svg file (single-file mode)"))
        .arg(Arg::with_name("dir").long("dir").takes_value(true).help("Recursively convert every .draw file under this directory"))
        .arg(Arg::with_name("utf8").long("utf8").help("Treat Draw byte payloads as UTF-8, bypassing the encoding tables"))
        .arg(Arg::with_name("tspans").long("tspans").help("Emit text-area runs as <tspan>s inside one <text>"))
        .arg(Arg::with_name("verbose").short("v").long("verbose").multiple(true).help("Increase log verbosity (repeatable: -v, -vv)"))
        .arg(Arg::with_name("basic-underlines").long("basic-underlines").help("Omit colour/thickness from underline decoration"))
        .arg(Arg::with_name("no-bbox").long("no-bbox").help("Don't emit textLength on single-line texts"))
        .arg(Arg::with_name("label-debug").long("label-debug").help("Annotate output with per-object debug comments"))
        .arg(Arg::with_name("show-boxes").long("show-boxes").help("Draw each object's bounding box as an overlay"))
        .arg(Arg::with_name("fonts").long("fonts").takes_value(true).help("INI file of font substitutions ([main] section)"))
        .arg(Arg::with_name("fit-border").long("fit-border").takes_value(true).help("Grow the view-box around the file's own bounding box by <n> or <n>%"))
        .arg(Arg::with_name("one-byte-types").long("one-byte-types").help("Parse object type fields as 8-bit"))
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::init_from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level));

    let input = matches.value_of("input");
    let output = matches.value_of("output");
    let dir = matches.value_of("dir");

    if let (Some(i), Some(o)) = (input, output) {
        if Path::new(i) == Path::new(o) {
            eprintln!("draw2svg: --input and --output must not be the same path");
            return ExitCode::from(2);
        }
    }
    if input.is_none() && dir.is_none() {
        eprintln!("draw2svg: one of --input or --dir is required");
        return ExitCode::from(1);
    }

    let font_replacements = match matches.value_of("fonts") {
        Some(path) => match load_font_ini(path) {
            Ok(map) => map,
            Err(e) => {
                eprintln!("draw2svg: couldn't read font substitution file {path}: {e}");
                return ExitCode::from(1);
            }
        },
        None => draw2svg::config::default_font_replacements(),
    };

    let config = Config {
        verbose_level: matches.occurrences_of("verbose").min(2) as u8,
        utf8: matches.is_present("utf8"),
        use_tspans: matches.is_present("tspans"),
        show_debug_index: matches.is_present("label-debug"),
        show_bounding_boxes: matches.is_present("show-boxes"),
        basic_underlines: matches.is_present("basic-underlines"),
        use_bbox: !matches.is_present("no-bbox"),
        one_byte_types: matches.is_present("one-byte-types"),
        fit_border: matches.value_of("fit-border").map(str::to_string),
        font_replacements,
    };

    if let Some(dir) = dir {
        convert_directory(Path::new(dir), &config)
    } else {
        let input = input.expect("checked above");
        let output = output.map(PathBuf::from).unwrap_or_else(|| Path::new(input).with_extension("svg"));
        convert_one_file(Path::new(input), &output, &config)
    }
}

/// Loads the `[main]` section of a font-substitution INI file: keys are
/// lower-cased Draw font base names, values a comma-separated CSS font
/// stack. An entry containing a space is quoted, matching how `--fonts`'s
/// stacks are meant to be embedded directly into a `font-family` attribute.
fn load_font_ini(path: &str) -> Result<HashMap<String, String>, String> {
    let conf = ini::Ini::load_from_file(path).map_err(|e| e.to_string())?;
    let mut map = draw2svg::config::default_font_replacements();
    if let Some(section) = conf.section(Some("main")) {
        for (key, value) in section.iter() {
            let stack: Vec<String> = value
                .split(',')
                .map(|entry| {
                    let entry = entry.trim();
                    if entry.contains(' ') && !entry.starts_with('"') {
                        format!("\"{entry}\"")
                    } else {
                        entry.to_string()
                    }
                })
                .collect();
            map.insert(key.to_lowercase(), stack.join(","));
        }
    }
    Ok(map)
}

/// Reads, converts, and writes one Draw file. The SVG document is built
/// entirely in memory; nothing is written to `output` until conversion has
/// fully succeeded, so a decode failure never leaves a partial file behind.
fn convert_one_file(input: &Path, output: &Path, config: &Config) -> ExitCode {
    log::info!("converting {}", input.display());
    let data = match fs::read(input) {
        Ok(d) => d,
        Err(e) => {
            log::error!("couldn't read {}: {e}", input.display());
            return ExitCode::FAILURE;
        }
    };
    match draw2svg::convert_to_svg(&data, config) {
        Ok(svg) => match fs::write(output, svg) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("couldn't write {}: {e}", output.display());
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            log::error!("couldn't convert {}: {e}", input.display());
            ExitCode::FAILURE
        }
    }
}

/// Recursively walks `root`, converting every file whose extension
/// case-insensitively matches `.draw` and writing the result alongside it
/// as `<name>.svg`. A failure on one file is logged and does not stop the
/// walk; the process exit code reflects whether every file succeeded.
fn convert_directory(root: &Path, config: &Config) -> ExitCode {
    let mut any_failed = false;
    if let Err(e) = walk(root, config, &mut any_failed) {
        log::error!("couldn't walk {}: {e}", root.display());
        return ExitCode::FAILURE;
    }
    if any_failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn walk(dir: &Path, config: &Config, any_failed: &mut bool) -> std::io::Result<()> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?.filter_map(|e| e.ok()).map(|e| e.path()).collect();
    entries.sort();
    for path in entries {
        if path.is_dir() {
            walk(&path, config, any_failed)?;
        } else if path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("draw")) {
            let output = path.with_extension("svg");
            if convert_one_file(&path, &output, config) != ExitCode::SUCCESS {
                *any_failed = true;
            }
        }
    }
    Ok(())
}
