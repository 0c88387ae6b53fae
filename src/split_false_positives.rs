use clap::Parser;
use log::{error, info};

use pyro_dataset::config::{init_logger, normalize_legacy_flags};
use pyro_dataset::{persist, SplitArgs};

fn main() {
    let args = SplitArgs::parse_from(normalize_legacy_flags(std::env::args_os()));
    init_logger(args.loglevel);
    info!("{:?}", args);

    if let Err(e) = persist::run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
