// crates/sqpart-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sqpart_core::{
    generator::generate_instance,
    io::{read_instance_auto, read_solution_auto, write_instance_auto, write_solution_auto},
    parse_instance_text, solve, validate, verify_solution, write_invalid_input, write_report,
    InstanceRecord, PartitionError,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "sqpart",
    about = "Optimal k-way contiguous partition minimizing the sum of squared group sums",
    long_about = "Optimal k-way contiguous partition minimizing the sum of squared group sums.\n\n\
                  Without a subcommand, reads `n`, `k` and the `n` values (three lines) from stdin\n\
                  and prints the minimum cost followed by the group boundaries.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Solve an instance from stdin or a file.
    Solve {
        /// Instance path (.txt/.json/.cbor), or `-` for three-line text on stdin
        #[arg(long, default_value = "-")]
        input: String,

        /// Output format on stdout
        #[arg(long, value_enum, default_value_t = FormatOpt::Text)]
        format: FormatOpt,

        /// Also write the solution to this path (JSON/CBOR by extension)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Write a deterministic random instance.
    Generate {
        /// Sequence length n (>0)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        n: u32,

        /// Group count k (>0)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        k: u32,

        /// Values are drawn from [-magnitude, magnitude]
        #[arg(long, default_value_t = 100)]
        magnitude: u32,

        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output path (.json/.cbor/.txt)
        #[arg(long, default_value = "instance.json")]
        out: PathBuf,
    },

    /// Re-check a solution file against an instance file.
    Verify {
        /// Instance path (.txt/.json/.cbor)
        #[arg(long)]
        instance: PathBuf,

        /// Solution path (.json/.cbor)
        #[arg(long)]
        solution: PathBuf,
    },
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum FormatOpt {
    /// Cost line, then boundary list line
    Text,
    /// Single-line JSON solution
    Json,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        None => solve_cmd("-", FormatOpt::Text, None),

        Some(Cmd::Solve { input, format, out }) => solve_cmd(&input, format, out.as_deref()),

        Some(Cmd::Generate {
            n,
            k,
            magnitude,
            seed,
            out,
        }) => generate_cmd(n, k, magnitude, seed, &out),

        Some(Cmd::Verify { instance, solution }) => verify_cmd(&instance, &solution),
    }
}

/// Initialize tracing on stderr with an env-driven filter (default WARN).
///
/// Stdout carries only the report.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Load a record from stdin (`-`) or a file.
///
/// The inner `Err` carries user-input problems (malformed text); the outer
/// one carries I/O and decoding failures.
fn load_record(input: &str) -> Result<Result<InstanceRecord, PartitionError>> {
    if input == "-" {
        return read_instance_lines(io::stdin().lock()).context("reading instance from stdin");
    }
    match read_instance_auto(input) {
        Ok(record) => Ok(Ok(record)),
        Err(e) => match e.downcast::<PartitionError>() {
            Ok(pe) => Ok(Err(pe)),
            Err(e) => Err(e.context(format!("reading instance from {input}"))),
        },
    }
}

/// Read the three-line text form from `r` without waiting for EOF.
///
/// Stops after the third line, so a producer that keeps the stream open
/// still gets an answer.
fn read_instance_lines<R: BufRead>(r: R) -> io::Result<Result<InstanceRecord, PartitionError>> {
    let lines = r.lines().take(3).collect::<io::Result<Vec<_>>>()?;
    Ok(parse_instance_text(&lines.join("\n")))
}

fn solve_cmd(input: &str, format: FormatOpt, out: Option<&Path>) -> Result<()> {
    let parsed = load_record(input)?;
    let stdout = io::stdout();
    let mut w = stdout.lock();
    run_solve(parsed, format, out, &mut w)?;
    w.flush().context("flushing stdout")?;
    Ok(())
}

/// Validate → solve → report. Invalid input prints the fixed message and
/// still succeeds; anything else is an error.
fn run_solve<W: Write>(
    parsed: Result<InstanceRecord, PartitionError>,
    format: FormatOpt,
    out: Option<&Path>,
    w: &mut W,
) -> Result<()> {
    let instance = match parsed.and_then(validate) {
        Ok(instance) => instance,
        Err(e) if e.is_invalid_input() => {
            warn!(error = %e, "rejecting input");
            write_invalid_input(w)?;
            return Ok(());
        }
        Err(e) => return Err(anyhow::Error::new(e).context("loading instance")),
    };

    info!(n = instance.n(), k = instance.k(), "solving");
    let solution = solve(&instance).context("solving partition")?;
    info!(cost = %solution.cost, boundaries = %solution.boundaries, "solved");

    match format {
        FormatOpt::Text => write_report(w, &solution)?,
        FormatOpt::Json => {
            serde_json::to_writer(&mut *w, &solution).context("serialize JSON solution")?;
            writeln!(w)?;
        }
    }

    if let Some(path) = out {
        write_solution_auto(path, &solution)
            .with_context(|| format!("writing solution to {}", path.display()))?;
    }
    Ok(())
}

fn generate_cmd(n: u32, k: u32, magnitude: u32, seed: u64, out: &Path) -> Result<()> {
    info!(n, k, magnitude, seed, out = %out.display(), "generating instance");
    let record = generate_instance(n as usize, k as usize, magnitude, seed);
    write_instance_auto(out, &record)
        .with_context(|| format!("writing instance to {}", out.display()))?;

    println!(
        "Generated instance: n={n}, k={k}, values in [-{magnitude}, {magnitude}], seed={seed} → {}",
        out.display()
    );
    Ok(())
}

fn verify_cmd(instance: &Path, solution: &Path) -> Result<()> {
    info!(instance = %instance.display(), solution = %solution.display(), "verifying solution");
    let record = read_instance_auto(instance)
        .with_context(|| format!("reading instance from {}", instance.display()))?;
    let inst = validate(record).context("validating instance")?;
    let sol = read_solution_auto(solution)
        .with_context(|| format!("reading solution from {}", solution.display()))?;

    verify_solution(&inst, &sol).context("solution does not match instance")?;

    println!(
        "OK: {} is a valid {}-group partition with cost {}",
        solution.display(),
        inst.k(),
        sol.cost
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sqpart_core::Solution;

    fn run_text(text: &str, format: FormatOpt) -> String {
        let mut buf = Vec::new();
        run_solve(parse_instance_text(text), format, None, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn default_mode_prints_two_lines() {
        assert_eq!(run_text("4\n2\n1 2 3 4\n", FormatOpt::Text), "52\n[0, 3, 4]\n");
    }

    #[test]
    fn invalid_input_prints_only_the_message() {
        assert_eq!(run_text("3\n5\n1 2 3\n", FormatOpt::Text), "Invalid input!!\n");
        assert_eq!(run_text("3\n5\n1 2 3\n", FormatOpt::Json), "Invalid input!!\n");
        assert_eq!(run_text("x\n", FormatOpt::Text), "Invalid input!!\n");
    }

    /// Yields `data`, then fails any further read.
    struct ThenFail<'a> {
        data: &'a [u8],
    }

    impl io::Read for ThenFail<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::other("read past third line"));
            }
            let n = buf.len().min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn stdin_stops_after_three_lines() {
        // Hand out one byte per read so nothing past line 3 is buffered early.
        let src = ThenFail { data: b"4\n2\n1 2 3 4\n" };
        let r = io::BufReader::with_capacity(1, src);
        let record = read_instance_lines(r).unwrap().unwrap();
        assert_eq!(record, InstanceRecord::new(4, 2, vec![1, 2, 3, 4]));

        let mut buf = Vec::new();
        run_solve(Ok(record), FormatOpt::Text, None, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "52\n[0, 3, 4]\n");
    }

    #[test]
    fn stdin_ignores_lines_after_the_third() {
        let r = io::Cursor::new(b"1\n1\n5\ntrailing garbage\n".to_vec());
        let record = read_instance_lines(r).unwrap().unwrap();
        assert_eq!(record, InstanceRecord::new(1, 1, vec![5]));
    }

    #[test]
    fn stdin_short_input_is_invalid() {
        let r = io::Cursor::new(b"3\n".to_vec());
        let parsed = read_instance_lines(r).unwrap();
        let mut buf = Vec::new();
        run_solve(parsed, FormatOpt::Text, None, &mut buf).unwrap();
        assert_eq!(buf, b"Invalid input!!\n");
    }

    #[test]
    fn json_format() {
        let out = run_text("1\n1\n5\n", FormatOpt::Json);
        let s: Solution = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(s.cost, 25);
        assert_eq!(s.boundaries.as_slice(), &[0, 1]);
    }

    #[test]
    fn writes_solution_file() {
        let path = std::env::temp_dir()
            .join(format!("sqpart-cli-{}", std::process::id()))
            .join("sol.json");
        let mut buf = Vec::new();
        run_solve(
            parse_instance_text("4\n2\n1 2 3 4\n"),
            FormatOpt::Text,
            Some(&path),
            &mut buf,
        )
        .unwrap();
        let s = read_solution_auto(&path).unwrap();
        assert_eq!(s.cost, 52);
    }

    #[test]
    fn overflow_is_an_error_not_a_message() {
        let text = format!("2\n1\n{} {}\n", i64::MAX, i64::MAX);
        let mut buf = Vec::new();
        assert!(run_solve(parse_instance_text(&text), FormatOpt::Text, None, &mut buf).is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
        let cli = Cli::try_parse_from(["sqpart"]).unwrap();
        assert!(cli.cmd.is_none());
        let cli = Cli::try_parse_from(["sqpart", "solve", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.cmd,
            Some(Cmd::Solve { format: FormatOpt::Json, .. })
        ));
    }
}
