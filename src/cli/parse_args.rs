use clap::{Arg, ArgAction, Command};

/// The command as understood by clap.
pub fn cli() -> Command {
    Command::new("entrench")
        .about("Iterated revision of a ranked propositional belief base.")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .required(false)
                .help("Show the debug log of each operation.")
                .long_help(
                    "Show the debug log of each operation.

Raises the log filter to debug, so the trail of degree calculations, queued reorders, and commits made during each operation is written to stderr.",
                ),
        )
}
