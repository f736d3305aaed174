use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("webhook form is missing the {0} field")]
    MissingField(&'static str),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("twilio returned {status}: {body}")]
    Api { status: u16, body: String },
}

impl Error {
    #[must_use]
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
