use crate::cli::actions::Action;
use crate::credentials::Codec;
use crate::segreti;
use anyhow::{anyhow, Result};
use url::Url;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server { port, dsn, globals } => {
            let url = Url::parse(&dsn)?;

            if !matches!(url.scheme(), "mongodb" | "mongodb+srv") {
                return Err(anyhow!("unsupported DSN scheme: {}", url.scheme()));
            }

            let codec = match globals.scheme.as_str() {
                "encrypted" => Codec::encrypted(&globals.secret)?,
                _ => Codec::hashed(globals.cost)?,
            };

            segreti::new(port, &dsn, codec).await?;
        }
    }

    Ok(())
}
