use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const MAP_CMD: &str = "map";

pub fn create_map_cli() -> Command {
    Command::new(MAP_CMD)
        .about("Map copy-number segments onto the genes they overlap")
        .arg_required_else_help(true)
        .arg(arg!(-r --reference <reference> "CCDS reference table (CCDS.current.txt, optionally gzipped)").required(true))
        .arg(arg!(-s --segments <segments> "Segment table with chr, startpos and endpos columns (.tsv or .csv)").required(true))
        .arg(arg!(-o --output <output> "Where to write the segment-to-gene table (CSV)").required(true))
        .arg(arg!(-p --policy <policy> "Overlap policy: partial or full").required(false))
        .arg(
            Arg::new("percent")
                .long("percent")
                .help("Minimal fraction of a gene covered by a segment, partial policy only")
                .value_parser(value_parser!(f64))
                .required(false),
        )
        .arg(arg!(--overlapper <overlapper> "Overlap index: ailist or linear").required(false))
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .help("Process chromosomes in parallel")
                .action(ArgAction::SetTrue),
        )
        .arg(arg!(-c --config <config> "TOML config file").required(false))
}
