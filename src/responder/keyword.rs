use async_trait::async_trait;
use std::error::Error as StdError;

use super::{ Responder, ReplyResponse };

/// Ordered keyword rules; the first matching phrase wins. Phrases are
/// matched against the lower-cased input, so they must be lower-case here.
const KEYWORD_RULES: [(&str, &str); 3] = [
    (
        "resina epóxi",
        "A Resina Epóxi é a melhor para peças de alto brilho e mesas River Table, pois oferece alta transparência e resistência. Lembre-se de misturar na proporção exata!",
    ),
    (
        "mesa river",
        "Para uma Mesa River, use madeira bem selada e uma resina de baixa viscosidade com cura lenta. Isso evita bolhas e garante um acabamento cristalino.",
    ),
    (
        "catalisador",
        "O catalisador é crucial! A proporção (geralmente por peso) deve ser seguida rigorosamente. Errar a proporção pode resultar em cura incompleta (pegajosa) ou cura muito rápida (rachaduras).",
    ),
];

const FALLBACK_REPLY: &str =
    "Sou Negão das Resinas Chat IA. Posso te ajudar com epóxi, poliuretano, técnicas de lixamento ou moldes. Qual sua dúvida sobre resinas?";

/// Canned-reply responder standing in for a real inference backend.
pub struct KeywordResponder;

impl KeywordResponder {
    pub fn new() -> Self {
        Self
    }

    /// Pure, total reply function: every input maps to exactly one of the
    /// four fixed strings.
    pub fn compute_reply(&self, input: &str) -> &'static str {
        let normalized = input.to_lowercase();
        for (needle, reply) in KEYWORD_RULES {
            if normalized.contains(needle) {
                return reply;
            }
        }
        FALLBACK_REPLY
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Responder for KeywordResponder {
    async fn reply(
        &self,
        input: &str
    ) -> Result<ReplyResponse, Box<dyn StdError + Send + Sync>> {
        Ok(ReplyResponse {
            response: self.compute_reply(input).to_string(),
        })
    }
}
