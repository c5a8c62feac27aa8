use crate::{
    credentials::Codec,
    segreti::handlers::{valid_email, valid_password},
    segreti::views,
    store::{StoreError, User, UserStore},
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
pub struct RegisterForm {
    username: String,
    password: String,
}

// axum handler for the registration form
pub async fn register_form() -> impl IntoResponse {
    Html(views::REGISTER)
}

#[instrument(skip_all)]
pub async fn register(
    store: Extension<Arc<dyn UserStore>>,
    codec: Extension<Codec>,
    payload: Option<Form<RegisterForm>>,
) -> impl IntoResponse {
    let Some(Form(form)) = payload else {
        return (StatusCode::BAD_REQUEST, Html(views::REGISTER));
    };

    if !valid_email(&form.username) || !valid_password(&form.password) {
        return (StatusCode::BAD_REQUEST, Html(views::REGISTER));
    }

    // plaintext -> stored representation, before anything is persisted
    let representation = match codec.encode(&form.password).await {
        Ok(representation) => representation,

        Err(e) => {
            error!("password encoding failed: {e}");

            return (StatusCode::INTERNAL_SERVER_ERROR, Html(views::REGISTER));
        }
    };

    let user = User {
        email: form.username,
        password: representation,
    };

    match store.insert(user).await {
        Ok(()) => {
            debug!("user created");

            (StatusCode::CREATED, Html(views::SECRETS))
        }

        Err(StoreError::DuplicateEmail) => {
            error!("user already exists");

            (StatusCode::CONFLICT, Html(views::REGISTER))
        }

        Err(e) => {
            error!("user insert failed: {e}");

            (StatusCode::INTERNAL_SERVER_ERROR, Html(views::REGISTER))
        }
    }
}
