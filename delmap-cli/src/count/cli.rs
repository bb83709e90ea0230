use clap::{Command, arg};

pub const COUNT_CMD: &str = "count";

pub fn create_count_cli() -> Command {
    Command::new(COUNT_CMD)
        .about("Count deletions per gene and per sample from a segment-to-gene table")
        .arg_required_else_help(true)
        .arg(arg!(-r --reference <reference> "CCDS reference table; its genes form the background").required(true))
        .arg(arg!(-m --mapping <mapping> "Segment-to-gene table written by `delmap map`").required(true))
        .arg(arg!(-g --genes <genes> "Where to write per-gene counts (stdout when omitted)").required(false))
        .arg(arg!(-s --samples <samples> "Where to write per-sample counts").required(false))
        .arg(arg!(-k --"group-key" <group_key> "Column identifying a sample").required(false))
        .arg(arg!(-c --config <config> "TOML config file").required(false))
}
