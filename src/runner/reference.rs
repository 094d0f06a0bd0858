//! Reference tokenizer
//!
//! Finds variable references inside a template string. The grammar is:
//!
//! ```text
//! reference := '$' name subkey*
//!            | '${' name subkey* '}' subkey*
//! subkey    := '[' word ']'
//!            | '[' quote text quote ']'
//!            | '[' '$' name ']'
//!            | '[' '${' name '}' ']'
//! name      := word
//! word      := (alphanumeric | '_')+
//! ```
//!
//! Subkey chains are matched greedily: a chain stops at the first bracket
//! group that does not parse, and that text is left as plain template text.
//! A `$` that does not start a valid reference is plain text too.

use std::ops::Range;

/// A variable mention found in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<'a> {
    /// The exact matched text, e.g. `$paths['src'][0]`
    pub raw: &'a str,
    /// Byte range of `raw` within the template
    pub span: Range<usize>,
    /// Base name, without `$` or braces
    pub name: &'a str,
    /// Bracketed suffixes, in order
    pub subkeys: Vec<Subkey<'a>>,
}

/// One bracketed suffix of a reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subkey<'a> {
    /// `[name]`, `['name']` or `["name"]`
    Key(&'a str),
    /// `[0]`
    Index(i64),
    /// `[$name]` or `[${name}]`, looked up before being used as a key
    Nested(&'a str),
}

/// Scan a template left to right and return every reference in it
///
/// References never overlap; each `$` is consumed by at most one reference.
pub fn scan_references(template: &str) -> Vec<Reference<'_>> {
    let mut scanner = Scanner::new(template);
    let mut references = Vec::new();

    while let Some(offset) = scanner.rest().find('$') {
        let start = scanner.pos + offset;
        scanner.pos = start;

        match scanner.reference() {
            Some(reference) => references.push(reference),
            None => scanner.pos = start + 1,
        }
    }

    references
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Scanner { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn word(&mut self) -> Option<&'a str> {
        let start = self.pos;
        let len = self
            .rest()
            .find(|c: char| !is_word(c))
            .unwrap_or(self.rest().len());
        self.pos += len;
        (len > 0).then(|| &self.src[start..self.pos])
    }

    /// Parse a reference at the current `$`; position is unspecified on `None`
    fn reference(&mut self) -> Option<Reference<'a>> {
        let start = self.pos;
        if !self.eat('$') {
            return None;
        }

        let (name, subkeys) = if self.eat('{') {
            let name = self.word()?;
            let mut subkeys = self.subkeys();
            if !self.eat('}') {
                return None;
            }
            subkeys.extend(self.subkeys());
            (name, subkeys)
        } else {
            let name = self.word()?;
            (name, self.subkeys())
        };

        Some(Reference {
            raw: &self.src[start..self.pos],
            span: start..self.pos,
            name,
            subkeys,
        })
    }

    fn subkeys(&mut self) -> Vec<Subkey<'a>> {
        let mut subkeys = Vec::new();
        loop {
            let checkpoint = self.pos;
            match self.subkey() {
                Some(subkey) => subkeys.push(subkey),
                None => {
                    self.pos = checkpoint;
                    return subkeys;
                }
            }
        }
    }

    fn subkey(&mut self) -> Option<Subkey<'a>> {
        if !self.eat('[') {
            return None;
        }

        let subkey = match self.peek()? {
            quote @ ('\'' | '"') => {
                self.pos += 1;
                let len = self.rest().find(quote)?;
                if len == 0 {
                    return None;
                }
                let text = &self.rest()[..len];
                self.pos += len + 1;
                Subkey::Key(text)
            }
            '$' => {
                self.pos += 1;
                let braced = self.eat('{');
                let name = self.word()?;
                if braced && !self.eat('}') {
                    return None;
                }
                Subkey::Nested(name)
            }
            _ => {
                let word = self.word()?;
                if word.bytes().all(|b| b.is_ascii_digit()) {
                    word.parse().map_or(Subkey::Key(word), Subkey::Index)
                } else {
                    Subkey::Key(word)
                }
            }
        };

        self.eat(']').then_some(subkey)
    }
}
