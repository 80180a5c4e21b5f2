// SPDX-License-Identifier: MIT
#[macro_use]
extern crate log;

use std::fs;
use std::io;
use std::process;
use structopt::StructOpt;
use vieta::document::{solve_document, TestCase};

const DEFAULT_INPUT: &str = "input.json";
const DEFAULT_OUTPUT: &str = "output.json";

#[derive(StructOpt, Debug)]
#[structopt()]
struct Opt {
    /// Verbose mode (-v, -vv, -vvv, etc)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// Timestamp (sec, ms, ns, none)
    #[structopt(short = "t", long = "timestamp")]
    ts: Option<stderrlog::Timestamp>,

    /// Test-case document, defaults to input.json
    #[structopt(long = "input")]
    input: Option<String>,

    /// Result document, defaults to output.json
    #[structopt(long = "output")]
    output: Option<String>,
}

fn run(opt: Opt) -> io::Result<()> {
    let input = opt.input.unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let output = opt.output.unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let cases: Vec<TestCase> = serde_json::from_str(&fs::read_to_string(&input)?)?;
    info!("{}: {} test cases", input, cases.len());

    let mut records = Vec::with_capacity(cases.len());
    for (index, outcome) in solve_document(&cases).into_iter().enumerate() {
        match outcome {
            Ok(record) => {
                info!(
                    "case {}: degree {}, coefficients {:?}",
                    record.case, record.degree, record.coefficients_high_to_low
                );
                records.push(record);
            }
            Err(err) => error!("case {}: {}", index, err),
        }
    }

    fs::write(&output, serde_json::to_string_pretty(&records)?)?;
    info!("wrote {} result records to {}", records.len(), output);
    Ok(())
}

fn main() {
    let opt = Opt::from_args();
    stderrlog::new()
        .verbosity(2 + opt.verbose)
        .timestamp(opt.ts.unwrap_or(stderrlog::Timestamp::Off))
        .init()
        .unwrap();

    if let Err(err) = run(opt) {
        error!("{}", err);
        process::exit(1);
    }
}
