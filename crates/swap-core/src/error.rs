use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwapError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid pool: {0}")]
    InvalidPool(String),

    #[error("Invalid pool config: {0}")]
    InvalidPoolConfig(String),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Decode failed: {0}")]
    Decode(String),

    #[error("SOL: {0}")]
    Sol(#[from] chain_sol::SolError),
}

impl From<serde_json::Error> for SwapError {
    fn from(e: serde_json::Error) -> Self {
        SwapError::InvalidPoolConfig(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sol_errors_convert() {
        let err: SwapError = chain_sol::SolError::InvalidAddress("bad".into()).into();
        assert_eq!(err.to_string(), "SOL: invalid address: bad");
    }

    #[test]
    fn json_errors_become_pool_config_errors() {
        let json_err = serde_json::from_str::<u64>("nope").unwrap_err();
        let err: SwapError = json_err.into();
        assert!(matches!(err, SwapError::InvalidPoolConfig(_)));
    }
}
