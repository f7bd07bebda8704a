use thiserror::Error;

#[derive(Error, Debug)]
pub enum McpError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("MCP server error {code}: {message}")]
    Rpc { code: i32, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Missing field in response: {0}")]
    MissingField(&'static str),

    #[error("Tool not found on any registered server: {0}")]
    ToolNotFound(String),
}

pub type Result<T> = std::result::Result<T, McpError>;
