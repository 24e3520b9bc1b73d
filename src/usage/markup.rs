//! logos-based markup scanner.
//!
//! Only tag attributes matter to the usage index, so the top-level lexer
//! recognizes just enough structure to find opening tags. On each opening tag
//! the lexer morphs into [`AttrToken`] mode until the tag closes.
//!
//! Attribute names are lowercased; values may be double-quoted, single-quoted,
//! unquoted, or absent (an absent value reads as the empty string). The first
//! occurrence of a duplicated attribute wins. Text inside `<script>` and
//! `<style>` is skipped.

use std::borrow::Cow;

use logos::{Lexer, Logos};

/// Top-level markup token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum MarkupToken {
    /// `<!-- ... -->`. Unterminated comments run to end of input.
    #[token("<!--", skip_comment)]
    Comment,

    /// `<!DOCTYPE ...>` and similar declarations.
    #[regex(r"<![a-zA-Z][^>]*>")]
    Declaration,

    /// `</name>`
    #[regex(r"</[^>]*>")]
    CloseTag,

    /// `<name`, the start of an opening tag. Attributes follow.
    #[regex(r"<[a-zA-Z][a-zA-Z0-9:-]*")]
    OpenTag,

    #[regex(r"[^<]+")]
    Text,

    /// A `<` that starts nothing.
    #[token("<")]
    Lt,
}

fn skip_comment(lex: &mut Lexer<MarkupToken>) -> bool {
    match lex.remainder().find("-->") {
        Some(end) => lex.bump(end + 3),
        None => lex.bump(lex.remainder().len()),
    }
    true
}

/// Token inside an opening tag.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
enum AttrToken {
    /// Attribute name, or an unquoted value after `=`.
    #[regex(r#"[^ \t\n\r\f"'<>=/][^ \t\n\r\f"'<>=]*"#)]
    Name,

    #[token("=")]
    Eq,

    #[regex(r#""[^"]*""#)]
    DoubleQuoted,

    #[regex(r"'[^']*'")]
    SingleQuoted,

    #[token("/")]
    Slash,

    #[token(">")]
    Close,

    /// A `<` inside a tag ends it.
    #[token("<")]
    Lt,
}

/// Collects attributes for one tag, keeping the first of any duplicates.
struct TagAttributes<'f, F: FnMut(&str, &str)> {
    seen: Vec<String>,
    pending: Option<String>,
    expecting_value: bool,
    visit: &'f mut F,
}

impl<F: FnMut(&str, &str)> TagAttributes<'_, F> {
    fn emit(&mut self, name: String, raw_value: &str) {
        if self.seen.contains(&name) {
            return;
        }
        let value = decode_entities(raw_value);
        (self.visit)(&name, value.as_ref());
        self.seen.push(name);
    }

    /// Emit a pending name that never received a value.
    fn flush(&mut self) {
        if let Some(name) = self.pending.take() {
            self.emit(name, "");
        }
        self.expecting_value = false;
    }

    fn name(&mut self, text: &str) {
        if self.expecting_value {
            self.value(text);
            return;
        }
        self.flush();
        self.pending = Some(text.to_ascii_lowercase());
    }

    fn equals(&mut self) {
        self.expecting_value = self.pending.is_some();
    }

    fn value(&mut self, raw_value: &str) {
        if !self.expecting_value {
            return;
        }
        self.expecting_value = false;
        if let Some(name) = self.pending.take() {
            self.emit(name, raw_value);
        }
    }
}

/// Call `visit(name, value)` for every attribute of every opening tag in
/// `document`, in document order.
pub fn for_each_attribute(document: &str, mut visit: impl FnMut(&str, &str)) {
    let mut lex = MarkupToken::lexer(document);

    while let Some(token) = lex.next() {
        if token != Ok(MarkupToken::OpenTag) {
            continue;
        }

        let tag = lex.slice()[1..].to_ascii_lowercase();
        let mut attrs = lex.morph::<AttrToken>();
        let mut state = TagAttributes {
            seen: Vec::new(),
            pending: None,
            expecting_value: false,
            visit: &mut visit,
        };

        loop {
            match attrs.next() {
                Some(Ok(AttrToken::Name)) => state.name(attrs.slice()),
                Some(Ok(AttrToken::Eq)) => state.equals(),
                Some(Ok(AttrToken::DoubleQuoted | AttrToken::SingleQuoted)) => {
                    let quoted = attrs.slice();
                    state.value(&quoted[1..quoted.len() - 1]);
                }
                Some(Ok(AttrToken::Slash)) => state.flush(),
                Some(Ok(AttrToken::Close | AttrToken::Lt)) | Some(Err(_)) | None => {
                    state.flush();
                    break;
                }
            }
        }

        lex = attrs.morph();
        if tag == "script" || tag == "style" {
            skip_raw_text(&mut lex, &tag);
        }
    }
}

/// Advance past raw text up to the matching `</tag`.
fn skip_raw_text(lex: &mut Lexer<MarkupToken>, tag: &str) {
    let rest = lex.remainder();
    let needle = format!("</{tag}");
    let end = rest
        .to_ascii_lowercase()
        .find(&needle)
        .unwrap_or(rest.len());
    lex.bump(end);
}

/// Decode character references: `&amp;` `&lt;` `&gt;` `&quot;` `&apos;`
/// `&nbsp;` and numeric `&#NN;` / `&#xHH;`. Unknown references are kept.
pub fn decode_entities(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|&end| end <= 12)
            .and_then(|end| decode_reference(&tail[1..end]).map(|ch| (ch, end)));
        match decoded {
            Some((ch, end)) => {
                out.push(ch);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

fn decode_reference(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let number = entity.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
