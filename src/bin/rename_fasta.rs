use std::process;

use clap::Parser;
use log::error;

use seq_rename::cli::{init_logging, FastaArgs};
use seq_rename::tools::rename_fasta;

fn main() {
    let args = FastaArgs::parse();
    init_logging(args.verbose);

    if let Err(e) = rename_fasta(&args.into_config()) {
        error!("{}", e);
        process::exit(1);
    }
}
