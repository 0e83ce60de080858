/// Dump the resource paths declared in a WADL file
use clap::Parser;
use wadl_dumper::config::Config;
use wadl_dumper::{dump_paths, Error};

#[derive(Parser)]
#[command(name = "wadl-dumper", version, about = "Dump resource paths from a WADL file")]
struct Args {
    /// URL or path to a WADL file
    #[arg(short, long)]
    input: Option<String>,

    /// Add the declared base URL to every path
    #[arg(short = 'b', long = "show-base")]
    show_base: bool,

    /// Replace all unspecified placeholders with the given value
    #[arg(short, long)]
    replace: Option<String>,

    /// Replace a specific placeholder, as name=value (repeatable)
    #[arg(short, long = "placeholder")]
    placeholder: Vec<String>,
}

fn run(args: Args) -> Result<(), Error> {
    let input = args.input.ok_or(Error::MissingInput)?;
    let config = Config::new(input, args.show_base, args.replace, &args.placeholder);

    let tree = if config.input.starts_with("http") {
        wadl_dumper::parse_url(&config.input)?
    } else {
        wadl_dumper::parse_file(&config.input)?
    };

    let stdout = std::io::stdout();
    dump_paths(&tree, &config, &mut stdout.lock())
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("Error! {}", err);
        std::process::exit(1);
    }
}
