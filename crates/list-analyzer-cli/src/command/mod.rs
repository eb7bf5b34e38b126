use clap::Parser;

use self::analyze::AnalyzeArg;

mod analyze;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    analyze: AnalyzeArg,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    analyze::run(&args.analyze)
}
