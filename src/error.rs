use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Couldn't gather entropy: {0}")]
    Entropy(#[from] getrandom::Error),
}
