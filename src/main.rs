use std::io;
use std::path::PathBuf;

use clap::Parser;
use num_bigint::BigUint;

use princegen::{output, Config, Generator, PrinceError, Sink, WordDb};

const USAGE: &str = "\
princegen, high-performance word generator based on element permutations

Usage: princegen [options] < wordlist

* Startup:

  -V,  --version             Print version
  -h,  --help                Print help

* Misc:

       --keyspace            Calculate number of combinations

* Optimization:

       --pw-min=NUM          Print candidate if length is greater than NUM
       --pw-max=NUM          Print candidate if length is smaller than NUM
       --elem-cnt-min=NUM    Minimum number of elements per chain
       --elem-cnt-max=NUM    Maximum number of elements per chain
       --wl-dist-len         Calculate output length distribution from wordlist

* Resources:

  -s,  --skip=NUM            Start at specific position
  -l,  --limit=NUM           Stop at specific position

* Files:

  -o,  --output-file=FILE    Output-file
";

/// Generate password candidates from a word list on stdin.
#[derive(Parser)]
#[command(name = "princegen", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,
    /// Print help
    #[arg(short = 'h', long)]
    help: bool,
    /// Calculate number of combinations
    #[arg(long)]
    keyspace: bool,
    /// Minimum candidate length
    #[arg(long, value_name = "NUM", default_value_t = 1)]
    pw_min: i64,
    /// Maximum candidate length
    #[arg(long, value_name = "NUM", default_value_t = 16)]
    pw_max: i64,
    /// Minimum number of elements per chain
    #[arg(long, value_name = "NUM", default_value_t = 1)]
    elem_cnt_min: i64,
    /// Maximum number of elements per chain
    #[arg(long, value_name = "NUM", default_value_t = 8)]
    elem_cnt_max: i64,
    /// Calculate output length distribution from wordlist
    #[arg(long)]
    wl_dist_len: bool,
    /// Start at specific position
    #[arg(short = 's', long, value_name = "NUM", value_parser = parse_position, default_value = "0")]
    skip: BigUint,
    /// Stop at specific position
    #[arg(short = 'l', long, value_name = "NUM", value_parser = parse_position, default_value = "0")]
    limit: BigUint,
    /// Append output to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    output_file: Option<PathBuf>,
}

fn parse_position(s: &str) -> Result<BigUint, String> {
    s.parse::<BigUint>()
        .map_err(|_| format!("'{s}' is not a non-negative decimal number"))
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32, PrinceError> {
    let args = Args::parse();

    if args.help {
        print!("{USAGE}");
        return Ok(1);
    }

    if args.version {
        println!("v0.17");
        return Ok(1);
    }

    let config = Config::new(
        args.pw_min,
        args.pw_max,
        args.elem_cnt_min,
        args.elem_cnt_max,
        args.wl_dist_len,
    )?;

    let writer = output::open(args.output_file.as_deref())?;

    let db = WordDb::load(io::stdin().lock())?;

    let mut generator = Generator::new(db, &config);

    if args.keyspace {
        println!("{}", generator.keyspace());
        return Ok(0);
    }

    generator.set_range(&args.skip, &args.limit)?;

    let mut sink = Sink::new(writer);
    generator.run(&mut sink)?;

    Ok(0)
}
