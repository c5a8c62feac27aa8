use crate::{
    credentials::Codec,
    segreti::handlers::{valid_email, valid_password},
    segreti::views,
    store::UserStore,
};
use axum::{
    extract::{Extension, Form},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, instrument};

#[derive(Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

// axum handler for the login form
pub async fn login_form() -> impl IntoResponse {
    Html(views::LOGIN)
}

// Plaintext stays inside the verify call: the form payload is skipped
// from the span and never logged.
#[instrument(skip_all)]
pub async fn login(
    store: Extension<Arc<dyn UserStore>>,
    codec: Extension<Codec>,
    payload: Option<Form<LoginForm>>,
) -> impl IntoResponse {
    let Some(Form(form)) = payload else {
        return (StatusCode::BAD_REQUEST, Html(views::LOGIN));
    };

    if !valid_email(&form.username) || !valid_password(&form.password) {
        return (StatusCode::BAD_REQUEST, Html(views::LOGIN));
    }

    // Wrong password, unknown user and internal verification failures
    // all take this same exit: the client must not be able to tell
    // which accounts exist.
    let rejected = (StatusCode::UNAUTHORIZED, Html(views::LOGIN));

    let user = match store.find_by_email(&form.username).await {
        Ok(Some(user)) => user,

        Ok(None) => {
            debug!(username = %form.username, "unknown user");

            return rejected;
        }

        Err(e) => {
            error!("user lookup failed: {e}");

            return rejected;
        }
    };

    match codec.verify(&form.password, &user.password).await {
        Ok(true) => {
            debug!(username = %form.username, "login successful");

            (StatusCode::OK, Html(views::SECRETS))
        }

        Ok(false) => {
            debug!(username = %form.username, "password mismatch");

            rejected
        }

        Err(e) => {
            error!("credential verification failed: {e}");

            rejected
        }
    }
}
