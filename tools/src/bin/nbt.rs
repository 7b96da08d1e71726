use clap::{App, Arg, ArgMatches, SubCommand};
use env_logger::Env;
use log::{error, info};
use nbtfile::{Compression, NbtFile};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn compression(args: &ArgMatches, name: &str) -> Result<Compression> {
    let scheme = args.value_of(name).unwrap_or("gzip");
    Ok(scheme.parse::<Compression>()?)
}

fn dump(args: &ArgMatches) -> Result<()> {
    let path = args.value_of("file").ok_or("no file given")?;
    let file = NbtFile::open(path, compression(args, "compression")?)?;

    if args.is_present("json") {
        let root = file.root().ok_or("file has no root")?;
        println!("{}", serde_json::to_string_pretty(root)?);
    } else {
        print!("{}", file);
    }

    Ok(())
}

fn resave(args: &ArgMatches) -> Result<()> {
    let input = args.value_of("in").ok_or("no input given")?;
    let output = args.value_of("out").ok_or("no output given")?;

    let read_with = compression(args, "compression")?;
    let write_with = match args.value_of("out-compression") {
        Some(_) => compression(args, "out-compression")?,
        None => read_with,
    };

    let file = NbtFile::open(input, read_with)?.with_compression(write_with);
    file.save(output)?;

    info!(
        "resaved {} to {} ({:?} -> {:?})",
        input, output, read_with, write_with
    );
    Ok(())
}

fn compression_arg(name: &str) -> Arg<'_, '_> {
    Arg::with_name(name)
        .long(name)
        .takes_value(true)
        .required(false)
        .possible_values(&["gzip", "zlib", "none"])
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let matches = App::new("nbt")
        .about("Inspect and rewrite NBT files")
        .subcommand(
            SubCommand::with_name("dump")
                .about("print the tree of an NBT file")
                .arg(Arg::with_name("file").takes_value(true).required(true))
                .arg(compression_arg("compression").default_value("gzip"))
                .arg(
                    Arg::with_name("json")
                        .long("json")
                        .takes_value(false)
                        .required(false),
                ),
        )
        .subcommand(
            SubCommand::with_name("resave")
                .about("load an NBT file and save it again, optionally recompressed")
                .arg(Arg::with_name("in").takes_value(true).required(true))
                .arg(Arg::with_name("out").takes_value(true).required(true))
                .arg(compression_arg("compression").default_value("gzip"))
                .arg(compression_arg("out-compression")),
        )
        .get_matches();

    let res = match matches.subcommand() {
        ("dump", Some(args)) => dump(args),
        ("resave", Some(args)) => resave(args),
        _ => {
            error!("{}", matches.usage());
            std::process::exit(2);
        }
    };

    if let Err(e) = res {
        error!("{}", e);
        std::process::exit(1);
    }
}
