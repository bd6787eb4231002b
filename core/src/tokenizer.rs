use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^A-Za-z0-9]+").expect("valid regex");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Keep the "" tokens produced by leading or trailing separators.
    pub keep_empty_tokens: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self { Self { keep_empty_tokens: true } }
}

/// Replace every run of non-ASCII-alphanumeric characters with a single space.
pub fn normalize(text: &str) -> String {
    NON_ALNUM.replace_all(text, " ").into_owned()
}

/// Normalize, then split on single spaces. Case is preserved.
///
/// With the default options the split is literal: text that starts or ends
/// with a separator yields an empty token at that boundary.
pub fn tokenize(text: &str, options: TokenizerOptions) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|t| options.keep_empty_tokens || !t.is_empty())
        .map(str::to_string)
        .collect()
}
