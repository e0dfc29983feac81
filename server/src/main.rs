use clap::{App, Arg};
use news_server::id::IdStrategy;
use news_server::server::{resolve_port, ServerConfig, ServerNode, DEFAULT_ADDRESS};

fn setup_logger(level: log::LevelFilter, log_file: Option<&str>) -> Result<(), fern::InitError> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());
    if let Some(path) = log_file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }
    dispatch.apply()?;
    Ok(())
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    let matches = App::new("news-server")
        .version("1.0")
        .about("An in-memory news service")
        .arg(
            Arg::with_name("address")
                .long("address")
                .takes_value(true)
                .help("Address to bind (env NEWS_ADDRESS)"),
        )
        .arg(
            Arg::with_name("port")
                .long("port")
                .takes_value(true)
                .validator(|v| v.parse::<u16>().map(|_| ()).map_err(|e| e.to_string()))
                .help("Port to listen on (env NEWS_PORT)"),
        )
        .arg(
            Arg::with_name("sequential_ids")
                .long("sequential-ids")
                .help("Assign news ids from a counter instead of at random"),
        )
        .arg(
            Arg::with_name("log_file")
                .long("log-file")
                .takes_value(true)
                .help("Also write logs to this file"),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short('v')
                .help("Log at debug level"),
        )
        .get_matches();

    let level = if matches.is_present("verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if let Err(e) = setup_logger(level, matches.value_of("log_file")) {
        eprintln!("Failed to set up logging: {}", e);
    }

    let address = matches
        .value_of("address")
        .map(String::from)
        .or_else(|| std::env::var("NEWS_ADDRESS").ok())
        .unwrap_or_else(|| String::from(DEFAULT_ADDRESS));
    let port = match resolve_port(matches.value_of("port"), std::env::var("NEWS_PORT")) {
        Ok(port) => port,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    };
    let id_strategy = if matches.is_present("sequential_ids") {
        IdStrategy::Sequential
    } else {
        IdStrategy::Random
    };

    let server_node = ServerNode::new(ServerConfig {
        address,
        port,
        id_strategy,
    });
    server_node.build().launch().await?;
    Ok(())
}
