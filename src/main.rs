//! jambda CLI entry point.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use jambda::{CharSet, DiagramConfig, config};

/// Bundled demos: title, program source, and the ESTree JSON a front end
/// produced from that source.
const EXAMPLES: &[(&str, &str, &str)] = &[
    (
        "Addition",
        include_str!("../demos/add.js"),
        include_str!("../demos/add.estree.json"),
    ),
    (
        "Zero test",
        include_str!("../demos/is_zero.js"),
        include_str!("../demos/is_zero.estree.json"),
    ),
    (
        "Switch with a helper function",
        include_str!("../demos/grade.ts"),
        include_str!("../demos/grade.estree.json"),
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Ascii,
}

/// JavaScript/TypeScript functions to lambda calculus and Tromp diagrams.
///
/// With neither --transpile nor --visualize, INPUT is ESTree JSON that is
/// compiled and then drawn; the lambda text is printed before the diagram,
/// or written beside the --output file with a `.txt` extension.
#[derive(Parser, Debug)]
#[command(name = "jambda", version = env!("JAMBDA_VERSION"))]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Run the bundled examples, showing each source, its lambda text and
    /// its diagram
    #[arg(long = "examples", conflicts_with_all = ["input", "transpile", "visualize"])]
    examples: bool,

    /// Only compile ESTree JSON to lambda text
    #[arg(short = 't', long = "transpile")]
    transpile: bool,

    /// Only draw; the input is lambda text
    #[arg(short = 'v', long = "visualize")]
    visualize: bool,

    /// Diagram format (default: ascii on stdout, svg with --output)
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<Format>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Pixels per diagram unit
    #[arg(long = "unit-size", default_value_t = config::DEFAULT_UNIT_SIZE)]
    unit_size: u32,

    /// Stroke width in pixels
    #[arg(long = "line-width", default_value_t = config::DEFAULT_LINE_WIDTH)]
    line_width: u32,

    /// Margin around the diagram in pixels
    #[arg(long = "padding", default_value_t = config::DEFAULT_PADDING)]
    padding: u32,

    /// SVG background color
    #[arg(long = "background", default_value = config::DEFAULT_BACKGROUND)]
    background: String,

    /// SVG stroke color
    #[arg(long = "stroke", default_value = config::DEFAULT_STROKE)]
    stroke: String,

    /// Use plain ASCII instead of Unicode line-drawing characters
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// More log output (repeat for trace)
    #[arg(long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

impl Cli {
    fn diagram_config(&self) -> DiagramConfig {
        let charset = if self.use_ascii {
            CharSet::Ascii
        } else {
            CharSet::Unicode
        };
        DiagramConfig::new()
            .with_unit_size(self.unit_size)
            .with_line_width(self.line_width)
            .with_padding(self.padding)
            .with_background(self.background.as_str())
            .with_stroke(self.stroke.as_str())
            .with_charset(charset)
    }

    fn format(&self) -> Format {
        self.format.unwrap_or(if self.output.is_some() {
            Format::Svg
        } else {
            Format::Ascii
        })
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let formatter = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter)
        .init();
}

/// What a run produces: the main document, and in combined mode with an
/// output file, the lambda text to write beside it.
struct Rendered {
    document: String,
    lambda: Option<String>,
}

fn draw(cli: &Cli, lambda: &str) -> jambda::Result<String> {
    let config = cli.diagram_config();
    let format = cli.format();
    debug!(?format, "drawing diagram");
    match format {
        Format::Svg => Ok(format!("{}\n", jambda::render_svg(lambda, &config)?)),
        Format::Ascii => jambda::render_ascii(lambda, &config),
    }
}

fn run(cli: &Cli, text: &str) -> jambda::Result<Rendered> {
    if cli.visualize && !cli.transpile {
        return Ok(Rendered {
            document: draw(cli, text.trim())?,
            lambda: None,
        });
    }

    let lambda = jambda::transpile(text)?;
    info!(length = lambda.chars().count(), "transpiled");
    if cli.transpile && !cli.visualize {
        return Ok(Rendered {
            document: format!("{lambda}\n"),
            lambda: None,
        });
    }

    let diagram = draw(cli, &lambda)?;
    Ok(if cli.output.is_some() {
        Rendered {
            document: diagram,
            lambda: Some(lambda),
        }
    } else {
        Rendered {
            document: format!("{lambda}\n\n{diagram}"),
            lambda: None,
        }
    })
}

fn run_examples(cli: &Cli) -> jambda::Result<String> {
    let config = cli.diagram_config();
    let mut out = String::new();
    for (title, source, estree) in EXAMPLES {
        let lambda = jambda::transpile(estree)?;
        let diagram = jambda::render_ascii(&lambda, &config)?;
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "==== {title} ====\n\nSource:\n{source}\nλ expression:\n{lambda}\n\nTromp diagram:\n{diagram}\n"
        );
    }
    Ok(out)
}

/// `out/add.svg` keeps its lambda text in `out/add.txt`.
fn lambda_path(output: &str) -> PathBuf {
    let path = Path::new(output).with_extension("txt");
    if path == Path::new(output) {
        PathBuf::from(format!("{output}.lambda.txt"))
    } else {
        path
    }
}

fn write_file(path: &Path, contents: &str) {
    if let Err(e) = fs::write(path, contents) {
        eprintln!("error: cannot write '{}': {}", path.display(), e);
        process::exit(1);
    }
    info!(path = %path.display(), "wrote output");
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let rendered = if cli.examples {
        run_examples(&cli).map(|document| Rendered {
            document,
            lambda: None,
        })
    } else {
        // Read input from file or stdin
        let text = if let Some(ref path) = cli.input {
            match fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("error: cannot read '{}': {}", path, e);
                    process::exit(1);
                }
            }
        } else {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("error: cannot read stdin: {}", e);
                process::exit(1);
            }
            buf
        };
        run(&cli, &text)
    };

    let rendered = match rendered {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        write_file(Path::new(path), &rendered.document);
        if let Some(lambda) = &rendered.lambda {
            write_file(&lambda_path(path), &format!("{lambda}\n"));
        }
    } else {
        print!("{}", rendered.document);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
