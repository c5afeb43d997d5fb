use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::remap::IdRemap;

/// `#123` style cross-references, anywhere in the text.
static TICKET_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\d+)").unwrap());

/// A `@@@` code-fence line, optionally carrying a language hint, as produced
/// by the source tracker's Textile markup.
static FENCE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^@@@(?:[ \t]+(\S+))?[ \t]*(\r?)$").unwrap());

/// Rewrites body text for the destination tracker: cross-references first so
/// they follow the renumbering, code fences second. Everything else is left
/// byte for byte as exported.
#[derive(Debug, Clone, Copy)]
pub struct Rewriter {
    remap: IdRemap,
}

impl Rewriter {
    pub fn new(remap: IdRemap) -> Self {
        Self { remap }
    }

    pub fn rewrite(&self, text: &str) -> String {
        let text = self.fix_ticket_refs(text);
        fix_code_fences(&text)
    }

    /// Push every `#N` through the renumbering. A digit run too long to be a
    /// ticket number is left untouched.
    fn fix_ticket_refs(&self, text: &str) -> String {
        TICKET_REF
            .replace_all(text, |caps: &Captures| match caps[1].parse::<u64>() {
                Ok(number) => format!("#{}", self.remap.remap(number)),
                Err(_) => caps[0].to_string(),
            })
            .into_owned()
    }
}

/// Turn each `@@@` line into a markdown triple-backtick fence, keeping the
/// language hint and the line ending.
fn fix_code_fences(text: &str) -> String {
    FENCE_LINE.replace_all(text, "```${1}${2}").into_owned()
}
