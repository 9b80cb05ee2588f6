pub mod keyword;

use async_trait::async_trait;
use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use self::keyword::KeywordResponder;
use crate::cli::Args;

#[derive(Debug, Clone)]
pub struct ReplyResponse {
    pub response: String,
}

/// Produces the assistant's reply for one user input. This is the seam where
/// a real backend call would be substituted: any implementation with the
/// same `&str -> ReplyResponse` contract drops in without touching callers.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn reply(
        &self,
        input: &str
    ) -> Result<ReplyResponse, Box<dyn StdError + Send + Sync>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponderType {
    Keyword,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseResponderTypeError {
    message: String,
}

impl fmt::Display for ParseResponderTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for ParseResponderTypeError {}

impl FromStr for ResponderType {
    type Err = ParseResponderTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keyword" => Ok(ResponderType::Keyword),
            _ =>
                Err(ParseResponderTypeError {
                    message: format!("Invalid responder type: '{}'", s),
                }),
        }
    }
}

pub fn new_responder(
    args: &Args
) -> Result<Arc<dyn Responder>, Box<dyn StdError + Send + Sync>> {
    let responder_type: ResponderType = args.responder_type.parse()?;
    let responder: Arc<dyn Responder> = match responder_type {
        ResponderType::Keyword => Arc::new(KeywordResponder::new()),
    };
    Ok(responder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn responder_type_parses_case_insensitively() {
        assert_eq!("keyword".parse::<ResponderType>(), Ok(ResponderType::Keyword));
        assert_eq!("Keyword".parse::<ResponderType>(), Ok(ResponderType::Keyword));
    }

    #[test]
    fn unknown_responder_type_is_rejected() {
        let err = "oracle".parse::<ResponderType>().unwrap_err();
        assert!(err.to_string().contains("oracle"));
    }

    #[test]
    fn factory_builds_the_keyword_responder() {
        let args = Args::parse_from(["resin-chat"]);
        assert!(new_responder(&args).is_ok());
    }

    #[test]
    fn factory_rejects_unknown_type() {
        let args = Args::parse_from(["resin-chat", "--responder-type", "oracle"]);
        assert!(new_responder(&args).is_err());
    }
}
