use super::*;
use std::collections::HashSet;

mod edit_test;

fn words(list: &[&str]) -> HashSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn lex(s: &str, list: &[&str]) -> Result<Vec<Token>, Error> {
    let words = words(list);
    Tokenizer::default().tokenize(s, &words).collect()
}
