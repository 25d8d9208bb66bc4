mod commands;
mod terminal;

use commands::{CommandLine, Commands, assign, list, show};
use rangr_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();
    print::initialize();

    let cfg = Config {
        no_banner: commands.no_banner,
    };
    print::banner(&cfg);

    match commands.command {
        Commands::List => {
            print::header("active adapters");
            list::list()
        }
        Commands::Show { adapter } => {
            print::header("adapter configuration");
            show::show(adapter.as_deref())
        }
        Commands::Assign => {
            print::header("static range assignment");
            assign::assign()
        }
    }
}
