use std::io::Read;

use medusa::{
    AxisSetting, Chart, DimValue, Filters, PlotSetting, Record, SortOrder, SortSetting,
    ViewOptions,
};
use medusa_render::svg::SvgRenderOptions;
use serde::Serialize;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Chart(medusa::ChartError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Chart(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<medusa::ChartError> for CliError {
    fn from(value: medusa::ChartError) -> Self {
        Self::Chart(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Render,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    options: Option<String>,
    pretty: bool,
    width: f64,
    height: f64,
    size_by: Option<String>,
    color_by: Option<String>,
    label_by: Option<String>,
    image_by: Option<String>,
    cluster_by: Option<String>,
    sort_by: Option<(String, SortOrder)>,
    plot_x: Option<(String, SortOrder)>,
    plot_y: Option<(String, SortOrder)>,
    filters: Vec<(String, Vec<String>)>,
    background: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "medusa-cli\n\
\n\
USAGE:\n\
  medusa-cli [layout] [--pretty] [OPTIONS] [<records.json>|-]\n\
  medusa-cli render [--background <css-color>] [--out <path>] [OPTIONS] [<records.json>|-]\n\
\n\
OPTIONS:\n\
  --options <path>        view options as JSON (flags below override it)\n\
  --width <n>             canvas width in px (default 800)\n\
  --height <n>            canvas height in px (default 600)\n\
  --size-by <dim>         dimension driving circle sizes\n\
  --color-by <dim>        dimension driving the categorical palette\n\
  --label-by <dim>        dimension rendered as the circle label\n\
  --image-by <dim>        dimension holding image URLs (suppresses color/label)\n\
  --cluster-by <dim>      group circles by this dimension\n\
  --sort-by <dim[:asc|desc]>   arrange circles in a ranked strip\n\
  --plot-x <dim[:asc|desc]>    scatter-plot x axis (requires --plot-y)\n\
  --plot-y <dim[:asc|desc]>    scatter-plot y axis (requires --plot-x)\n\
  --filter <dim=v1,v2>    keep only records matching the values (repeatable)\n\
\n\
NOTES:\n\
  - Records are a JSON array of flat objects with a unique \"id\".\n\
  - If <records.json> is omitted or '-', input is read from stdin.\n\
  - layout prints the computed frame as JSON; render prints SVG.\n\
  - Numeric filter values are matched as numbers, anything else as text.\n\
"
}

fn parse_dim_order(raw: &str) -> Result<(String, SortOrder), CliError> {
    match raw.split_once(':') {
        None => Ok((raw.to_string(), SortOrder::Asc)),
        Some((dim, "asc")) => Ok((dim.to_string(), SortOrder::Asc)),
        Some((dim, "desc")) => Ok((dim.to_string(), SortOrder::Desc)),
        Some(_) => Err(CliError::Usage(usage())),
    }
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        width: 800.0,
        height: 600.0,
        ..Args::default()
    };

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--options" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.options = Some(path.clone());
            }
            "--width" => {
                let Some(w) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.width = w.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--height" => {
                let Some(h) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.height = h.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--size-by" => args.size_by = Some(next_value(&mut it)?),
            "--color-by" => args.color_by = Some(next_value(&mut it)?),
            "--label-by" => args.label_by = Some(next_value(&mut it)?),
            "--image-by" => args.image_by = Some(next_value(&mut it)?),
            "--cluster-by" => args.cluster_by = Some(next_value(&mut it)?),
            "--sort-by" => args.sort_by = Some(parse_dim_order(&next_value(&mut it)?)?),
            "--plot-x" => args.plot_x = Some(parse_dim_order(&next_value(&mut it)?)?),
            "--plot-y" => args.plot_y = Some(parse_dim_order(&next_value(&mut it)?)?),
            "--filter" => {
                let raw = next_value(&mut it)?;
                let Some((dim, values)) = raw.split_once('=') else {
                    return Err(CliError::Usage(usage()));
                };
                args.filters.push((
                    dim.to_string(),
                    values.split(',').map(|v| v.to_string()).collect(),
                ));
            }
            "--background" => {
                let bg = next_value(&mut it)?;
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--out" => args.out = Some(next_value(&mut it)?),
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if args.plot_x.is_some() != args.plot_y.is_some() {
        return Err(CliError::Usage(usage()));
    }

    Ok(args)
}

fn next_value(
    it: &mut std::iter::Peekable<std::iter::Skip<std::slice::Iter<'_, String>>>,
) -> Result<String, CliError> {
    it.next().cloned().ok_or(CliError::Usage(usage()))
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

/// CLI filter values are plain strings; match numbers as numbers so
/// `--filter stage=1,2` works against numeric records.
fn filter_value(raw: &str) -> DimValue {
    match raw.parse::<f64>() {
        Ok(n) => DimValue::Number(n),
        Err(_) => DimValue::Text(raw.to_string()),
    }
}

fn build_chart(args: &Args) -> Result<Chart, CliError> {
    let records: Vec<Record> = serde_json::from_str(&read_input(args.input.as_deref())?)?;

    let options: ViewOptions = match args.options.as_deref() {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => ViewOptions::default(),
    };

    let mut chart = Chart::new(records, options, args.width, args.height)?;
    if let Some(dim) = args.size_by.as_deref() {
        chart.size_by(Some(dim));
    }
    if let Some(dim) = args.color_by.as_deref() {
        chart.color_by(Some(dim));
    }
    if let Some(dim) = args.label_by.as_deref() {
        chart.label_by(Some(dim));
    }
    if let Some(dim) = args.image_by.as_deref() {
        chart.display_image_by(Some(dim));
    }
    if let Some(dim) = args.cluster_by.as_deref() {
        chart.cluster_by(Some(dim));
    }
    if let Some((dim, order)) = &args.sort_by {
        chart.sort_by(Some(SortSetting {
            dim: dim.clone(),
            order: *order,
        }));
    }
    if let (Some((x_dim, x_order)), Some((y_dim, y_order))) = (&args.plot_x, &args.plot_y) {
        chart.plot_by(Some(PlotSetting::new(
            AxisSetting {
                dim: x_dim.clone(),
                order: *x_order,
            },
            AxisSetting {
                dim: y_dim.clone(),
                order: *y_order,
            },
        )));
    }
    if !args.filters.is_empty() {
        let mut filters = Filters::new();
        for (dim, values) in &args.filters {
            filters.insert(
                dim.clone(),
                values.iter().map(|v| filter_value(v)).collect(),
            );
        }
        chart.filter_by(filters);
    }

    Ok(chart)
}

fn run(args: Args) -> Result<(), CliError> {
    let mut chart = build_chart(&args)?;

    match args.command {
        Command::Layout => {
            let frame = chart.render()?;
            for warning in chart.warnings() {
                eprintln!("warning: {warning}");
            }
            write_json(&frame, args.pretty)?;
        }
        Command::Render => {
            let svg_options = SvgRenderOptions {
                background: args.background.clone(),
                ..SvgRenderOptions::default()
            };
            let svg = chart.render_svg(&svg_options)?;
            for warning in chart.warnings() {
                eprintln!("warning: {warning}");
            }
            write_text(&svg, args.out.as_deref())?;
        }
    }

    Ok(())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
