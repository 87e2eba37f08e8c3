//! Command-line interface for generating lattice instances and solving them

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::graph::adjacency::Adjacency;
use crate::graph::erdos_renyi::erdos_renyi;
use crate::graph::rewire::rewiring_series;
use crate::io::configuration::{
    ASCII_RADIUS_LIMIT, DEFAULT_DENSITY, DEFAULT_ERDOS_RENYI_FOLDER, DEFAULT_OUTPUT_FOLDER,
    DEFAULT_RADIUS, DEFAULT_REWIRED_FOLDER, DEFAULT_REWIRING_STEPS, MAX_SAMPLE_ASSIGNMENTS,
};
use crate::io::edgelist::to_edgelist;
use crate::io::error::{MisError, Result, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::json::{parse_problem, to_json};
use crate::io::lp::to_lp;
use crate::io::matrix::to_matrix_json;
use crate::io::metis::{parse_metis, to_metis};
use crate::io::progress::ProgressManager;
use crate::io::svg::to_svg;
use crate::lattice::generator::{Generated, Generator};
use crate::solver::frontier::{FrontierSweep, Solution};

#[derive(Parser, Debug)]
#[command(name = "mislattice")]
#[command(
    author,
    version,
    about = "Generate connected lattice MIS instances and solve them exactly"
)]
/// Command-line arguments shared by all subcommands
pub struct Cli {
    /// Suppress progress output and informational logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Available operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an unweighted MIS instance on a connected random lattice
    Generate(GenerateArgs),
    /// Exactly solve a JSON or METIS instance with the frontier sweep
    Solve(SolveArgs),
    /// Write LP files of a lattice instance with progressively rewired edges
    Rewire(RewireArgs),
    /// Write the LP file of an Erdős–Rényi graph sized like a lattice
    ErdosRenyi(ErdosRenyiArgs),
}

/// Arguments of `generate`
// One flag per output format mirrors the exporters one-to-one
#[allow(clippy::struct_excessive_bools)]
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Side length of the lattice
    #[arg(short = 'L', long = "side")]
    pub side: usize,

    /// Portion of the sites that are occupied
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Seed of the removal order (random in 0..100000 if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Radius of interaction (default sqrt(2), the Union-Jack lattice)
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    pub radius: f64,

    /// Output folder, `{L}`, `{d}`, `{s}` and `{r}` are substituted
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FOLDER)]
    pub folder: String,

    /// Write every output format (assumed if none is selected)
    #[arg(short, long)]
    pub all: bool,

    /// Edge list in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Adjacency list in METIS 4.0 format
    #[arg(short, long)]
    pub metis: bool,

    /// Vector rendering of the lattice
    #[arg(short = 'g', long)]
    pub svg: bool,

    /// CPLEX LP formulation
    #[arg(short, long)]
    pub cplex: bool,

    /// PNG raster of the occupied sites
    #[arg(short = 'i', long)]
    pub png: bool,

    /// Plain text edge list `a, b`
    #[arg(short, long)]
    pub edgelist: bool,

    /// Dense N x N adjacency matrix as JSON rows
    #[arg(short = 'p', long)]
    pub matrix: bool,

    /// Do not write any files
    #[arg(short = 'n', long)]
    pub dry: bool,

    /// Show an ASCII rendering of the lattice
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output files `generate` can write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// SVG drawing
    Svg,
    /// CPLEX LP program
    Lp,
    /// METIS adjacency list
    Metis,
    /// JSON edge list
    Json,
    /// PNG occupancy raster
    Png,
    /// Plain edge list
    EdgeList,
    /// Dense adjacency matrix
    Matrix,
}

impl OutputFormat {
    /// Every format, in the order files are written
    pub const ALL: [Self; 7] = [
        Self::Svg,
        Self::Lp,
        Self::Metis,
        Self::Json,
        Self::Png,
        Self::EdgeList,
        Self::Matrix,
    ];

    /// File extension without the dot
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Lp => "lp",
            Self::Metis => "txt",
            Self::Json => "json",
            Self::Png => "png",
            Self::EdgeList => "edgelist",
            Self::Matrix => "matrix.json",
        }
    }

    /// Short description used in log output
    pub const fn label(self) -> &'static str {
        match self {
            Self::Svg => "rendering",
            Self::Lp => "cplex format",
            Self::Metis => "metis format",
            Self::Json => "json edge list",
            Self::Png => "occupancy raster",
            Self::EdgeList => "txt edge list",
            Self::Matrix => "adjacency matrix",
        }
    }
}

impl GenerateArgs {
    /// Formats to write, all of them when none was requested
    pub fn selected_formats(&self) -> Vec<OutputFormat> {
        let flags = [
            (OutputFormat::Svg, self.svg),
            (OutputFormat::Lp, self.cplex),
            (OutputFormat::Metis, self.metis),
            (OutputFormat::Json, self.json),
            (OutputFormat::Png, self.png),
            (OutputFormat::EdgeList, self.edgelist),
            (OutputFormat::Matrix, self.matrix),
        ];
        let any_selected = flags.iter().any(|&(_, selected)| selected);

        flags
            .into_iter()
            .filter(|&(_, selected)| self.all || !any_selected || selected)
            .map(|(format, _)| format)
            .collect()
    }

    /// Output folder with placeholders substituted
    pub fn output_folder(&self, seed: u64, radius: f64) -> PathBuf {
        PathBuf::from(
            self.folder
                .replace("{L}", &self.side.to_string())
                .replace("{d}", &format!("{:?}", self.density))
                .replace("{s}", &seed.to_string())
                .replace("{r}", &format!("{radius:?}")),
        )
    }
}

/// Arguments of `solve`
#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// JSON (`.json`) or METIS (`.txt`) instance written by `generate`
    #[arg(value_name = "INSTANCE")]
    pub instance: PathBuf,

    /// Frontier window (defaults to L + 1 from the instance parameters)
    #[arg(short, long)]
    pub window: Option<usize>,
}

/// Arguments of `rewire`
#[derive(Args, Debug, Clone)]
pub struct RewireArgs {
    /// Side length of the lattice
    #[arg(short = 'L', long = "side")]
    pub side: usize,

    /// Portion of the sites that are occupied
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Seed of both the lattice and the rewiring (random in 0..100000 if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Radius of interaction
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    pub radius: f64,

    /// Number of rewiring rounds, each touching 1/steps of the edges
    #[arg(short = 't', long, default_value_t = DEFAULT_REWIRING_STEPS)]
    pub steps: usize,

    /// Output folder, `{L}` is substituted
    #[arg(short, long, default_value = DEFAULT_REWIRED_FOLDER)]
    pub folder: String,
}

/// Arguments of `erdos-renyi`
#[derive(Args, Debug, Clone)]
pub struct ErdosRenyiArgs {
    /// Side length of the lattice the node count is taken from
    #[arg(short = 'L', long = "side")]
    pub side: usize,

    /// Portion of the sites that are occupied, also sets p = density²
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Seed of the pair draws
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// Output folder, `{L}` is substituted
    #[arg(short, long, default_value = DEFAULT_ERDOS_RENYI_FOLDER)]
    pub folder: String,
}

/// What a `generate` run produced
#[derive(Debug)]
pub struct GenerateOutcome {
    /// Grid and instance
    pub generated: Generated,
    /// ASCII rendering when requested
    pub ascii: Option<String>,
    /// Files written, in order
    pub written: Vec<PathBuf>,
}

/// Run `generate`: build the lattice, then write the selected formats
///
/// # Errors
///
/// Returns an error if the parameters are invalid, construction stalls, or a
/// file cannot be written
pub fn run_generate(args: &GenerateArgs, progress: &mut ProgressManager) -> Result<GenerateOutcome> {
    let generator = Generator::new(args.side, args.density, args.radius)?;
    let seed = Generator::resolve_seed(args.seed);
    let start_time = Instant::now();

    let mut builder = generator.builder(seed);
    let initial = builder.occupied();
    progress.start("lattice", (initial - builder.target()) as u64);
    while !builder.run_pass()? {
        progress.update(
            (initial - builder.occupied()) as u64,
            format!("pass {}", builder.passes()),
        );
    }
    progress.finish();

    let generated = generator.complete(seed, builder);
    info!("lattice built in {:.2?}", start_time.elapsed());

    let ascii = (args.verbose || args.dry).then(|| {
        if generator.directions().radius() > ASCII_RADIUS_LIMIT {
            warn!(
                "ASCII art shows only connections up to r < 2 (here r={:?})",
                generator.directions().radius()
            );
        }
        generated.grid.render_ascii()
    });

    if args.dry {
        return Ok(GenerateOutcome {
            generated,
            ascii,
            written: Vec::new(),
        });
    }

    let folder = args.output_folder(seed, generator.directions().radius());
    fs::create_dir_all(&folder).map_err(|source| MisError::FileSystem {
        path: folder.clone(),
        operation: "create directory",
        source,
    })?;

    let name = generated.instance.name();
    let mut written = Vec::new();
    for format in args.selected_formats() {
        // The name contains dots, so the extension is appended rather than set
        let path = folder.join(format!("{name}.{}", format.extension()));
        info!("writing {} ({})", path.display(), format.label());
        write_format(format, &generated, &path)?;
        written.push(path);
    }

    Ok(GenerateOutcome {
        generated,
        ascii,
        written,
    })
}

fn write_format(format: OutputFormat, generated: &Generated, path: &Path) -> Result<()> {
    let instance = &generated.instance;
    let contents = match format {
        OutputFormat::Png => return export_grid_as_png(&generated.grid, path),
        OutputFormat::Svg => to_svg(instance),
        OutputFormat::Lp => to_lp(instance),
        OutputFormat::Metis => to_metis(instance)?,
        OutputFormat::Json => to_json(instance)?,
        OutputFormat::EdgeList => to_edgelist(instance),
        OutputFormat::Matrix => to_matrix_json(instance)?,
    };

    write_file(path, &contents)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| MisError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}

fn create_folder(template: &str, side: usize) -> Result<PathBuf> {
    let folder = PathBuf::from(template.replace("{L}", &side.to_string()));
    fs::create_dir_all(&folder).map_err(|source| MisError::FileSystem {
        path: folder.clone(),
        operation: "create directory",
        source,
    })?;
    Ok(folder)
}

/// Run `rewire`: generate one lattice, then write an LP file after every
/// rewiring round
///
/// The lattice seed also seeds the rewiring.
///
/// # Errors
///
/// Returns an error if generation or rewiring fails, or a file cannot be
/// written
pub fn run_rewire(args: &RewireArgs, progress: &mut ProgressManager) -> Result<Vec<PathBuf>> {
    let generator = Generator::new(args.side, args.density, args.radius)?;
    let seed = Generator::resolve_seed(args.seed);
    let lattice = generator.generate(Some(seed))?.instance;

    let mut rng = StdRng::seed_from_u64(seed);
    let series = rewiring_series(&lattice, args.steps, &mut rng)?;
    info!(
        "rewiring {} edges per round over {} rounds",
        lattice.edge_count() / args.steps,
        args.steps
    );

    let folder = create_folder(&args.folder, args.side)?;
    let name = lattice.name();
    let mut written = Vec::with_capacity(series.len());
    progress.start("rewire", series.len() as u64);
    for (round, instance) in series.iter().enumerate() {
        let path = folder.join(format!("{name}_rewired{round}.lp"));
        info!("writing {} (cplex format)", path.display());
        write_file(&path, &to_lp(instance))?;
        written.push(path);
        progress.update(round as u64 + 1, format!("round {round}"));
    }
    progress.finish();

    Ok(written)
}

/// Run `erdos-renyi`: write the LP file of one seeded `G(N, p)` graph
///
/// # Errors
///
/// Returns an error if the parameters are invalid or the file cannot be
/// written
pub fn run_erdos_renyi(args: &ErdosRenyiArgs) -> Result<PathBuf> {
    let instance = erdos_renyi(args.side, args.density, args.seed)?;
    let folder = create_folder(&args.folder, args.side)?;
    let path = folder.join(format!("{}.lp", instance.name()));
    info!("writing {} (cplex format)", path.display());
    write_file(&path, &to_lp(&instance))?;
    Ok(path)
}

/// Read an instance file into adjacency lists and the window it needs
///
/// `.json` documents and `.txt` METIS files are accepted.
///
/// # Errors
///
/// Returns an error if the extension is unknown, the file cannot be read, or
/// its contents are malformed
pub fn load_instance(path: &Path) -> Result<(Adjacency, usize)> {
    let extension = path.extension().and_then(|s| s.to_str());
    if !matches!(extension, Some("json" | "txt")) {
        return Err(invalid_parameter(
            "instance",
            &path.display(),
            &"must be a .json or METIS .txt file",
        ));
    }

    let text = fs::read_to_string(path).map_err(|source| MisError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;

    if extension == Some("txt") {
        let metis = parse_metis(&text)?;
        let window_size = metis.window_size();
        Ok((metis.adjacency, window_size))
    } else {
        let problem = parse_problem(&text)?;
        Ok((problem.adjacency()?, problem.window_size()))
    }
}

/// Run `solve`: read an instance and sweep it to completion
///
/// # Errors
///
/// Returns an error if:
/// - The file is not a readable `.json` or `.txt` MIS instance
/// - The edges violate the window or reference unknown nodes
pub fn run_solve(args: &SolveArgs, progress: &mut ProgressManager) -> Result<Solution> {
    let (adjacency, default_window) = load_instance(&args.instance)?;
    let window_size = args.window.unwrap_or(default_window);
    info!(
        "solving {} ({} nodes, {} edges, bandwidth {}, window {window_size})",
        args.instance.display(),
        adjacency.node_count(),
        adjacency.edge_count(),
        adjacency.bandwidth()
    );

    let start_time = Instant::now();
    let mut sweep = FrontierSweep::new(&adjacency, window_size)?;
    progress.start("sweep", adjacency.node_count() as u64);
    while sweep.step() {
        progress.update(
            sweep.processed() as u64,
            format!("{} states", sweep.live_states()),
        );
    }
    progress.finish();

    let solution = sweep.finish();
    info!("swept in {:.2?}", start_time.elapsed());
    Ok(solution)
}

/// Human readable solver report
pub fn format_solution(path: &Path, solution: &Solution) -> String {
    let mut report = format!(
        "file: {}\n|mis|={}\ndegeneracy={}\nfirst excited={}\n",
        path.display(),
        solution.best_score,
        solution.degeneracy,
        solution.first_excited
    );

    if solution.degeneracy <= BigUint::from(MAX_SAMPLE_ASSIGNMENTS) {
        report.push_str("\nsolutions:\n");
    } else {
        report.push_str(&format!("\nfirst {MAX_SAMPLE_ASSIGNMENTS} solutions:\n"));
    }

    for sample in &solution.samples {
        report.push_str(&format!("{sample:?}\n"));
    }
    report.push_str("\nNOTE: Node indices are 0-indexed!\n");
    report
}

/// Route `log` output through `env_logger`, honouring `RUST_LOG`
pub fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

/// Dispatches parsed arguments to the matching subcommand
pub struct CommandProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl CommandProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = ProgressManager::new(cli.should_show_progress());
        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the selected subcommand, printing its results to stdout
    ///
    /// # Errors
    ///
    /// Returns any error raised by the subcommand
    // Results are the program's output
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<()> {
        match &self.cli.command {
            Command::Generate(args) => {
                let outcome = run_generate(args, &mut self.progress_manager)?;
                if let Some(ascii) = outcome.ascii {
                    println!("{ascii}");
                }
                Ok(())
            }
            Command::Solve(args) => {
                let solution = run_solve(args, &mut self.progress_manager)?;
                print!("{}", format_solution(&args.instance, &solution));
                Ok(())
            }
            Command::Rewire(args) => {
                run_rewire(args, &mut self.progress_manager)?;
                Ok(())
            }
            Command::ErdosRenyi(args) => {
                run_erdos_renyi(args)?;
                Ok(())
            }
        }
    }
}
