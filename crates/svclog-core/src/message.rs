//! Message construction for the plain and formatted entry points
//!
//! Plain calls concatenate their operands with no separator. Formatted calls
//! substitute operands into a printf-style template, verb syntax
//! `%[flags][width][.precision]verb`. The verbs `s v d f g t` render their
//! operand through `Display` (honouring width, precision and the `-`, `0`,
//! `+` flags); `%q` renders it quoted and `%%` is a literal percent sign.
//! Operands carry no type beyond `Display`, so conversion verbs such as
//! `%x` or `%e` are not applied; they render as `%!x(<operand>)`.
//!
//! Widths and precisions above one million render `%!(BADWIDTH)` or
//! `%!(BADPREC)` and are then ignored.

use std::fmt::{Display, Write as _};

const MAX_WIDTH_OR_PRECISION: usize = 1_000_000;

// Largest precision `core::fmt` accepts
const MAX_FMT_PRECISION: usize = u16::MAX as usize;

const VERBS: &[char] = &['s', 'v', 'd', 'f', 'g', 't', 'q'];

/// The operands of one log call, after any carrier has been split off
#[derive(Clone, Copy)]
pub enum Message<'a> {
    /// Concatenate as-is
    Plain(&'a [&'a dyn Display]),
    /// Template followed by its substitution operands
    Template(&'a str, &'a [&'a dyn Display]),
}

impl Message<'_> {
    pub fn render(&self) -> String {
        match *self {
            Message::Plain(args) => concat(args),
            // A lone template is printed verbatim, never scanned for verbs
            Message::Template(template, []) => template.to_string(),
            Message::Template(template, args) => sprintf(template, args),
        }
    }
}

impl std::fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Message::Plain(args) => f.debug_tuple("Plain").field(&args.len()).finish(),
            Message::Template(t, args) => f
                .debug_tuple("Template")
                .field(t)
                .field(&args.len())
                .finish(),
        }
    }
}

/// Concatenate operands with no separator
pub fn concat(args: &[&dyn Display]) -> String {
    let mut out = String::new();
    for arg in args {
        let _ = write!(out, "{arg}");
    }
    out
}

#[derive(Debug, Default)]
struct Directive {
    minus: bool,
    plus: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Directive {
    fn apply(&self, verb: char, arg: &dyn Display) -> String {
        let precision = self.precision.map(|p| p.min(MAX_FMT_PRECISION));
        let body = match (self.plus, precision) {
            (true, Some(p)) => format!("{arg:+.p$}"),
            (true, None) => format!("{arg:+}"),
            (false, Some(p)) => format!("{arg:.p$}"),
            (false, None) => arg.to_string(),
        };
        let body = if verb == 'q' {
            format!("{body:?}")
        } else {
            body
        };

        let len = body.chars().count();
        let width = match self.width {
            Some(w) if w > len => w,
            _ => return body,
        };
        let fill = width - len;

        if self.minus {
            format!("{body}{}", " ".repeat(fill))
        } else if self.zero {
            // Keep a leading sign in front of the zero run
            match body.strip_prefix(['-', '+']) {
                Some(rest) => format!("{}{}{rest}", &body[..1], "0".repeat(fill)),
                None => format!("{}{body}", "0".repeat(fill)),
            }
        } else {
            format!("{}{body}", " ".repeat(fill))
        }
    }
}

/// Substitute `args` positionally into `template`
///
/// Operands without a verb are appended as `%!(EXTRA a, b)`; verbs without an
/// operand render as `%!v(MISSING)` with the verb in place of `v`.
pub fn sprintf(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next = 0;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut directive = Directive::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => directive.minus = true,
                '+' => directive.plus = true,
                '0' => directive.zero = true,
                ' ' | '#' => {}
                _ => break,
            }
            chars.next();
        }
        directive.width = take_number(&mut chars);
        if directive.width.is_some_and(|w| w > MAX_WIDTH_OR_PRECISION) {
            out.push_str("%!(BADWIDTH)");
            directive.width = None;
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            let precision = take_number(&mut chars).unwrap_or(0);
            if precision > MAX_WIDTH_OR_PRECISION {
                out.push_str("%!(BADPREC)");
            } else {
                directive.precision = Some(precision);
            }
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        match args.get(next) {
            Some(arg) if VERBS.contains(&verb) => {
                out.push_str(&directive.apply(verb, *arg));
                next += 1;
            }
            Some(arg) => {
                let _ = write!(out, "%!{verb}({arg})");
                next += 1;
            }
            None => {
                let _ = write!(out, "%!{verb}(MISSING)");
            }
        }
    }

    if next < args.len() {
        let extra: Vec<String> = args[next..].iter().map(|a| a.to_string()).collect();
        let _ = write!(out, "%!(EXTRA {})", extra.join(", "));
    }
    out
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
        chars.next();
    }
    value
}
