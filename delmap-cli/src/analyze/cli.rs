use clap::{Command, arg};

pub const ANALYZE_CMD: &str = "analyze";

pub fn create_analyze_cli() -> Command {
    Command::new(ANALYZE_CMD)
        .about("Paralog proportions and Fisher's exact tests across deletion-count bins")
        .arg_required_else_help(true)
        .arg(arg!(-g --"gene-counts" <gene_counts> "Per-gene counts written by `delmap count`").required(true))
        .arg(arg!(-a --annotations <annotations> "Gene annotation table with paralog and essentiality columns").required(true))
        .arg(arg!(-b --bins <bins> "Comma separated bins, e.g. 0,1+,3-5").required(false))
        .arg(arg!(-e --"essential-column" <essential_column> "Annotation column holding the essentiality flag").required(false))
        .arg(arg!(-o --output <output> "Output prefix; writes <prefix>.proportions.tsv, <prefix>.fisher.tsv and <prefix>.background.tsv").required(true))
        .arg(arg!(-c --config <config> "TOML config file").required(false))
}
