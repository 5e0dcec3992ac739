use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SourceCode field is empty in the API response.")]
    EmptySource,
    #[error("Parsed source code does not contain any source files.")]
    EmptySources,
    #[error("Source entry {path:?} has no string `content` field: {reason}")]
    InvalidSourceEntry { path: String, reason: String },
    #[error("Invalid chain: \"{0}\". Run `contractloader chains` to list the supported chains.")]
    InvalidChain(String),
    #[error("API Error: {message} - {result}")]
    Api { message: String, result: String },
    #[error("API response is empty. The contract might not be verified.")]
    EmptyResult,
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
    #[error("Refusing to write {path:?}: the path escapes the output directory")]
    PathEscapesRoot { path: String },
    #[error("Request to the explorer failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to decode the explorer response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Filesystem error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error(
        "No Etherscan API key configured. Pass --apikey or set the ETHERSCAN_API_KEY environment variable."
    )]
    MissingApiKey,
    #[error("Error reading environment: {0}")]
    ErrorReadingEnvironment(String),
}
