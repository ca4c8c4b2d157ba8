#[cfg(test)]
#[path = "dialect_test.rs"]
mod tests;

const DEFAULT_TABLE: [(&str, &str); 12] = [
    ("y'all", "you all"),
    ("gonna", "going to"),
    ("wanna", "want to"),
    ("gotta", "got to"),
    ("ain't", "is not"),
    ("kinda", "kind of"),
    ("sorta", "sort of"),
    ("lemme", "let me"),
    ("gimme", "give me"),
    ("dunno", "don't know"),
    ("outta", "out of"),
    ("finna", "about to"),
];

/// Literal substring replacements applied to user input before prompting.
/// Entries run in table order and each runs once over the whole text.
#[derive(Clone, Debug)]
pub struct DialectNormalizer {
    table: Vec<(String, String)>,
}

impl Default for DialectNormalizer {
    fn default() -> DialectNormalizer {
        return DEFAULT_TABLE
            .iter()
            .fold(DialectNormalizer::empty(), |normalizer, (pattern, replacement)| {
                return normalizer.with_entry(pattern, replacement);
            });
    }
}

impl DialectNormalizer {
    pub fn empty() -> DialectNormalizer {
        return DialectNormalizer { table: vec![] };
    }

    /// Adds a replacement that runs after every existing entry. Empty patterns
    /// are ignored.
    pub fn with_entry(mut self, pattern: &str, replacement: &str) -> DialectNormalizer {
        if !pattern.is_empty() {
            self.table
                .push((pattern.to_string(), replacement.to_string()));
        }

        return self;
    }

    pub fn normalize(&self, text: &str) -> String {
        let mut res = text.to_string();
        for (pattern, replacement) in self.table.iter() {
            if res.contains(pattern.as_str()) {
                res = res.replace(pattern.as_str(), replacement);
            }
        }

        return res;
    }
}
