use std::io::{self, BufRead};

use gtin_service::GtinInfo;
use structopt::StructOpt;

#[derive(Clone, Debug, StructOpt)]
struct Opt {
    /// Raw scanner output; one code per argument. Reads codes line by line
    /// from stdin when no arguments are given.
    codes: Vec<String>,
}

fn main() {
    let Opt { codes } = Opt::from_args();

    let codes = if codes.is_empty() {
        let stdin = io::stdin();
        stdin
            .lock()
            .lines()
            .filter_map(Result::ok)
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        codes
    };

    let reports: Vec<_> = codes.iter().map(GtinInfo::from_scan).collect();

    let serialized = match reports.as_slice() {
        [report] => serde_json::to_string_pretty(report).unwrap(),
        _ => serde_json::to_string_pretty(&reports).unwrap(),
    };

    println!("{}", serialized);
}
