use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::Result;
use secrecy::SecretString;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let scheme = matches
        .get_one("scheme")
        .map_or_else(|| "hashed".to_string(), |s: &String| s.to_string());

    let mut globals = GlobalArgs::new(scheme);

    if let Some(secret) = matches.get_one::<String>("secret") {
        globals.set_secret(SecretString::from(secret.clone()));
    }

    if let Some(cost) = matches.get_one::<u32>("cost") {
        globals.cost = *cost;
    }

    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(3000),
        dsn: matches
            .get_one("dsn")
            .map(|s: &String| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --dsn"))?,
        globals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    #[test]
    fn test_handler_defaults() -> Result<()> {
        temp_env::with_vars(
            [
                ("SEGRETI_PORT", None::<String>),
                ("SEGRETI_DSN", None),
                ("SEGRETI_SCHEME", None),
                ("SEGRETI_SECRET", None),
                ("SEGRETI_COST", None),
            ],
            || -> Result<()> {
                let matches = commands::new().get_matches_from(vec!["segreti"]);
                let action = handler(&matches)?;

                let Action::Server { port, dsn, globals } = action;
                assert_eq!(port, 3000);
                assert_eq!(dsn, "mongodb://localhost:27017/userDB");
                assert_eq!(globals.scheme, "hashed");
                assert_eq!(globals.cost, 10);
                assert_eq!(globals.secret.expose_secret(), "");

                Ok(())
            },
        )
    }

    #[test]
    fn test_handler_encrypted() -> Result<()> {
        let matches = commands::new().get_matches_from(vec![
            "segreti",
            "--scheme",
            "encrypted",
            "--secret",
            "hush hush",
        ]);
        let action = handler(&matches)?;

        let Action::Server { globals, .. } = action;
        assert_eq!(globals.scheme, "encrypted");
        assert_eq!(globals.secret.expose_secret(), "hush hush");

        Ok(())
    }
}
