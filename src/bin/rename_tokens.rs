use std::process;

use clap::Parser;
use log::error;

use seq_rename::cli::{init_logging, TokensArgs};
use seq_rename::tools::rename_tokens;

fn main() {
    let args = TokensArgs::parse();
    init_logging(args.verbose);

    if let Err(e) = rename_tokens(&args.into_config()) {
        error!("{}", e);
        process::exit(1);
    }
}
