use std::io::{self, Write};
use std::process;
use std::str::FromStr;

use clap::{crate_version, App, Arg, ArgMatches};
use log::{debug, info};

use posub::io::{query, report};
use posub::{Query, Result};

fn cli() -> App<'static, 'static> {
    App::new("posub")
        .version(crate_version!())
        .about("Determine if an amino acid substitution is possible by a single point mutation.")
        .arg(Arg::with_name("codon")
            .help("starting codon (DNA or RNA, case-insensitive)")
            .index(1)
            .required_unless("batch"))
        .arg(Arg::with_name("amino_acid")
            .help("resulting amino acid (1 letter, stop codon = X or *)")
            .index(2)
            .required_unless("batch"))
        .arg(Arg::with_name("position")
            .short("p")
            .long("position")
            .takes_value(true)
            .value_name("N")
            .help("restrict the search to codon position N (1, 2, or 3)"))
        .arg(Arg::with_name("verbose")
            .short("v")
            .long("verbose")
            .help("increase text output"))
        .arg(Arg::with_name("batch")
            .short("b")
            .long("batch")
            .takes_value(true)
            .value_name("FILE")
            .conflicts_with_all(&["codon", "amino_acid", "position"])
            .help("read tab-separated queries (codon, amino_acid, position) from FILE"))
        .arg(Arg::with_name("level")
            .short("L")
            .long("level")
            .takes_value(true)
            .default_value("warn")
            .possible_values(&["trace", "debug", "info", "warn", "error"])
            .help("logging verbosity level"))
}

fn main() {
    let matches = cli().get_matches();

    // possible_values guarantees a parsable level
    let level = log::Level::from_str(matches.value_of("level").unwrap_or("warn")).unwrap_or(log::Level::Warn);
    simple_logger::init_with_level(level).unwrap_or_else(|e| panic!("{}", e));

    if let Err(why) = run(&matches) {
        eprintln!("error: {}", why);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = matches.value_of("batch") {
        return run_batch(path, matches.is_present("verbose"), &mut out);
    }

    // clap enforces both positionals when --batch is absent
    let query = Query::parse(
        matches.value_of("codon").unwrap_or_default(),
        matches.value_of("amino_acid").unwrap_or_default(),
        matches.value_of("position"),
    )?;
    debug!("parsed query: {:?}", query);

    let subs = query.run();

    if matches.is_present("verbose") {
        report::write_verbose(&mut out, &query, &subs)?;
    } else {
        report::write_table(&mut out, &subs)?;
    }

    out.flush()?;
    Ok(())
}

fn run_batch<W: Write>(path: &str, verbose: bool, out: &mut W) -> Result<()> {
    info!("reading queries from {}", path);
    let mut reader = query::Reader::from_file(path)?;

    let n = report::write_batch(&mut reader, out, verbose)?;
    info!("processed {} queries", n);

    Ok(())
}
