use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Invalid message catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}
