use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        PossibleValuesParser, ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("segreti")
        .about("Credential-based web authentication")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("3000")
                .env("SEGRETI_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("dsn")
                .short('d')
                .long("dsn")
                .help("Database connection string, example: mongodb://localhost:27017/userDB")
                .default_value("mongodb://localhost:27017/userDB")
                .env("SEGRETI_DSN"),
        )
        .arg(
            Arg::new("scheme")
                .short('s')
                .long("scheme")
                .help("Password storage scheme")
                .default_value("hashed")
                .env("SEGRETI_SCHEME")
                .value_parser(PossibleValuesParser::new(["hashed", "encrypted"])),
        )
        .arg(
            Arg::new("secret")
                .long("secret")
                .help("Secret key for the encrypted scheme")
                .env("SEGRETI_SECRET")
                .required_if_eq("scheme", "encrypted"),
        )
        .arg(
            Arg::new("cost")
                .short('c')
                .long("cost")
                .help("bcrypt work factor for the hashed scheme")
                .default_value("10")
                .env("SEGRETI_COST")
                .value_parser(clap::value_parser!(u32).range(4..=31)),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("SEGRETI_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}
