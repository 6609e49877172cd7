//! boxcut - tabbed box cut geometry for laser cutting
//!
//! Usage:
//!   boxcut [options]                  Generate a box, SVG on stdout
//!   boxcut --params <file.json>       Read options from JSON, flags override
//!   boxcut -x 60 -y 90 -z 40 -k 0.2 -o box.svg

use std::env;
use std::fs;
use std::str::FromStr;

use anyhow::{bail, Context};

use boxcut::{
    init_logging, parse_length, plan, render, BoxOptions, DimpleStyle, LineStyle,
    MeasurementSystem, BUILD_DATE, VERSION,
};

fn print_usage(program: &str) {
    eprintln!("boxcut {} - tabbed box generator for laser cutting", VERSION);
    eprintln!();
    eprintln!("Usage: {} [options]", program);
    eprintln!();
    eprintln!("Dimensions (interior unless --external):");
    eprintln!("  -x, --width <len>        Box width (default 30)");
    eprintln!("  -y, --length <len>       Box length (default 50)");
    eprintln!("  -z, --height <len>       Box height (default 20)");
    eprintln!("  -t, --thickness <len>    Material thickness (default 3)");
    eprintln!("  -i, --external           Treat dimensions as outside measurements");
    eprintln!("  -u, --units <mm|in>      Input units (default mm; output is always mm)");
    eprintln!();
    eprintln!("Tabs:");
    eprintln!("      --tabs-width <n>     Tabs along the width (default 3)");
    eprintln!("      --tabs-length <n>    Tabs along the length (default 3)");
    eprintln!("      --tabs-height <n>    Tabs along the height (default 3)");
    eprintln!("      --no-halftabs        No half tabs at row ends");
    eprintln!("      --no-corners         No corner cubes on the short sides");
    eprintln!("      --no-lid             Open-top box with a plain cover blank");
    eprintln!();
    eprintln!("Cut fit:");
    eprintln!("  -k, --kerf <len>         Beam width lost to the cut; 0 packs panels");
    eprintln!("  -b, --by-material <len>  Kerf from a material preset, overrides --kerf");
    eprintln!("      --fixed-linewidth    Keep hairline strokes instead of kerf-wide ones");
    eprintln!("      --separate           Keep panels apart even at zero kerf");
    eprintln!("  -d, --dimples            Press-fit bumps on tab flanks (needs kerf > 0)");
    eprintln!("      --triangular-dimples Cut dimples as triangles instead of half rounds");
    eprintln!();
    eprintln!("Input/output:");
    eprintln!("      --params <file>      Read options from a JSON file, flags override");
    eprintln!("  -o, --output <file>      Write SVG to a file instead of stdout");
    eprintln!("  -h, --help               Show this help");
    eprintln!("  -V, --version            Show version");
}

fn take_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> anyhow::Result<&'a str> {
    *i += 1;
    match args.get(*i) {
        Some(value) => Ok(value.as_str()),
        None => bail!("Missing value for {flag}"),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args: Vec<String> = env::args().collect();

    // Units first, so dimension flags parse in one pass regardless of
    // flag order.
    let mut units = MeasurementSystem::Metric;
    {
        let mut i = 1;
        while i < args.len() {
            if args[i] == "-u" || args[i] == "--units" {
                let value = take_value(&args, &mut i, "--units")?;
                units = MeasurementSystem::from_str(value).map_err(anyhow::Error::msg)?;
            }
            i += 1;
        }
    }
    let length_arg = |value: &str, flag: &str| -> anyhow::Result<f64> {
        parse_length(value, units).map_err(|e| anyhow::anyhow!("Invalid value for {flag}: {e}"))
    };

    // Seed from a params file when given, then let flags override.
    let mut options = BoxOptions::default();
    {
        let mut i = 1;
        while i < args.len() {
            if args[i] == "--params" {
                let path = take_value(&args, &mut i, "--params")?;
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read params file {path}"))?;
                options = serde_json::from_str(&text)
                    .with_context(|| format!("Invalid params file {path}"))?;
            }
            i += 1;
        }
    }

    let mut output: Option<String> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-x" | "--width" => {
                options.width = length_arg(take_value(&args, &mut i, "--width")?, "--width")?;
            }
            "-y" | "--length" => {
                options.length = length_arg(take_value(&args, &mut i, "--length")?, "--length")?;
            }
            "-z" | "--height" => {
                options.height = length_arg(take_value(&args, &mut i, "--height")?, "--height")?;
            }
            "-t" | "--thickness" => {
                options.thickness =
                    length_arg(take_value(&args, &mut i, "--thickness")?, "--thickness")?;
            }
            "-k" | "--kerf" => {
                options.kerf = length_arg(take_value(&args, &mut i, "--kerf")?, "--kerf")?;
            }
            "-b" | "--by-material" => {
                options.kerf_by_material = Some(length_arg(
                    take_value(&args, &mut i, "--by-material")?,
                    "--by-material",
                )?);
            }
            "--tabs-width" => {
                let value = take_value(&args, &mut i, "--tabs-width")?;
                options.tabs_width = value
                    .parse()
                    .with_context(|| format!("Invalid tab count: {value}"))?;
            }
            "--tabs-length" => {
                let value = take_value(&args, &mut i, "--tabs-length")?;
                options.tabs_length = value
                    .parse()
                    .with_context(|| format!("Invalid tab count: {value}"))?;
            }
            "--tabs-height" => {
                let value = take_value(&args, &mut i, "--tabs-height")?;
                options.tabs_height = value
                    .parse()
                    .with_context(|| format!("Invalid tab count: {value}"))?;
            }
            "-i" | "--external" => options.external_dimensions = true,
            "--no-lid" => options.with_lid = false,
            "--no-corners" => options.corners = false,
            "--no-halftabs" => options.half_tabs = false,
            "--separate" => options.force_separation = true,
            "-d" | "--dimples" => options.dimples = true,
            "--triangular-dimples" => {
                options.dimples = true;
                options.dimple_style = DimpleStyle::Triangular;
            }
            "--fixed-linewidth" => options.line_width_from_kerf = false,
            "-o" | "--output" => {
                output = Some(take_value(&args, &mut i, "--output")?.to_string());
            }
            "-u" | "--units" => {
                i += 1; // already handled
            }
            "--params" => {
                i += 1; // already handled
            }
            "-h" | "--help" => {
                print_usage(&args[0]);
                return Ok(());
            }
            "-V" | "--version" => {
                println!("boxcut {} (built {})", VERSION, BUILD_DATE);
                return Ok(());
            }
            other => {
                print_usage(&args[0]);
                bail!("Unknown argument: {other}");
            }
        }
        i += 1;
    }

    let spec = options.resolve()?;
    let layout = plan(&spec)?;

    let mut style = LineStyle::external();
    if spec.line_width_from_kerf {
        style = style.with_kerf_width(spec.kerf);
    }
    let svg = render(&layout, &style);

    match output {
        Some(path) => {
            fs::write(&path, svg).with_context(|| format!("Failed to write {path}"))?;
        }
        None => print!("{svg}"),
    }

    Ok(())
}
