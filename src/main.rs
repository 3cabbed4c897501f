mod args;
mod detect;
mod find;
mod hour;
mod outdir;
mod paths;
mod playlist;
mod report;
mod split;

use args::Split;
use log::error;
use report::LogReporter;

fn main() {
    let opts: Split = argh::from_env();
    init_logging(opts.verbose);
    match split::split(&opts, &LogReporter) {
        Ok(_) => (),
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    // info by default, debug when verbose
    let verbosity = if verbose { 3 } else { 2 };
    if let Err(err) = stderrlog::new()
        .verbosity(verbosity)
        .timestamp(stderrlog::Timestamp::Second)
        .init()
    {
        eprintln!("error: could not set up logging: {}", err);
    }
}
