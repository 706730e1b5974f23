use clap::Parser;
use transfix_cli::{diagnostic, FixArgs};

fn main() {
    let args = FixArgs::parse();

    if let Err(err) = args.execute() {
        // Same stream as the confirmation messages
        println!("{}", diagnostic(&err));
        std::process::exit(1);
    }
}
