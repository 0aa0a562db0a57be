use std::process;

use clap::Parser;
use log::error;

use seq_rename::cli::{init_logging, TableArgs};
use seq_rename::tools::rename_table;

fn main() {
    let args = TableArgs::parse();
    init_logging(args.verbose);

    if let Err(e) = rename_table(&args.into_config()) {
        error!("{}", e);
        process::exit(1);
    }
}
