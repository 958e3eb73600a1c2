use crate::cipher::Ciphertext;
use crate::key::Key;
use crate::mapper::Glyph;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderOptions {
    /// Show unresolved symbols as `.N.` instead of `?`.
    pub include_symbols: bool,
    /// Prepends a `score:` line.
    pub score: Option<f64>,
}

/// Lowercase letters the key never maps to, in alphabetical order.
pub fn unexplained_letters(key: &Key) -> BTreeSet<char> {
    let used: BTreeSet<char> = key.letters().collect();
    ('a'..='z').filter(|c| !used.contains(c)).collect()
}

/// The whole transcript decoded with `key`, behind a short header.
///
/// ```text
/// score: 0.4821
/// Unexplained characters:
/// j, q, x, z
/// ((4, 'e'), (16, 's'), ...)
/// the ???a??o? of ...
/// ```
pub fn render_key(cipher: &Ciphertext, key: &Key, options: RenderOptions) -> String {
    let mut body = String::with_capacity(cipher.symbols().len() * 2);
    for glyph in cipher.apply(key) {
        match glyph {
            Glyph::Char(c) => body.push(c),
            Glyph::Symbol(s) if options.include_symbols => {
                body.push('.');
                body.push_str(&s.to_string());
                body.push('.');
            }
            Glyph::Symbol(_) => body.push('?'),
        }
    }

    if options.include_symbols {
        // Merge adjacent markers and drop dots that touch a space, then
        // widen word gaps so numbers stay readable.
        body = body
            .replace("..", ".")
            .replace(" .", " ")
            .replace(". ", " ")
            .replace(' ', "   ");
    }

    let unexplained: Vec<String> = unexplained_letters(key)
        .iter()
        .map(char::to_string)
        .collect();

    let mut out = String::new();
    if let Some(score) = options.score {
        out.push_str(&format!("score: {:.4}\n", score));
    }
    out.push_str("Unexplained characters:\n");
    out.push_str(&unexplained.join(", "));
    out.push('\n');
    out.push_str(&key.to_string());
    out.push('\n');
    out.push_str(&body);
    out
}
