/// Tokens of one source line. Tokens are upper-cased. The comment keeps its
/// original spelling and includes the leading `;`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lexed<'a> {
    pub tokens: Vec<String>,
    pub comment: Option<&'a str>,
}

pub fn lex(raw: &str) -> Lexed<'_> {
    let mut tokens = vec![];
    let mut rest = raw.trim_start();
    while !rest.is_empty() {
        if rest.starts_with(';') {
            return Lexed {
                tokens,
                comment: Some(rest),
            };
        }
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        tokens.push(rest[..end].to_ascii_uppercase());
        rest = rest[end..].trim_start();
    }
    Lexed {
        tokens,
        comment: None,
    }
}
