// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the SimpleCompleter type.

/// Completes words by prefix from a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct SimpleCompleter {
    options: Vec<String>,
}

impl SimpleCompleter {
    pub fn new<I: IntoIterator<Item = String>>(options: I) -> Self {
        let mut options: Vec<String> = options
            .into_iter()
            .filter(|option| !option.is_empty())
            .collect();
        options.sort();
        options.dedup();
        SimpleCompleter { options }
    }

    /// All options starting with `text`, sorted. An empty `text` matches everything.
    pub fn matches(&self, text: &str) -> Vec<&str> {
        self.options
            .iter()
            .filter(|option| option.starts_with(text))
            .map(String::as_str)
            .collect()
    }

    /// The `state`-th match of `text`, None once the matches are exhausted.
    pub fn complete(&self, text: &str, state: usize) -> Option<&str> {
        self.matches(text).get(state).copied()
    }

    /// The longest prefix all matches of `text` share. None if nothing matches.
    pub fn common_prefix(&self, text: &str) -> Option<String> {
        let matches = self.matches(text);
        let first = matches.first()?;
        let mut prefix_length = first.len();
        for other in &matches[1..] {
            prefix_length = first
                .char_indices()
                .zip(other.chars())
                .take_while(|((_, a), b)| a == b)
                .map(|((i, a), _)| i + a.len_utf8())
                .last()
                .unwrap_or(0)
                .min(prefix_length);
        }
        Some(first[..prefix_length].to_string())
    }
}
