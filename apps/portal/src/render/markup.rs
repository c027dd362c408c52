//! Typed HTML fragments.
//!
//! `Markup` is trusted HTML. The only ways to build one are a `&'static str`
//! literal, `format_markup!` over other `Markup`/`Escaped` values, or escaping
//! text with `escape`. Runtime strings therefore cannot reach the output
//! without passing through the escaper.

use std::fmt;

/// Text that has been HTML-escaped and is safe in element bodies and
/// double-quoted attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Escaped(String);

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn escape(raw: &str) -> Escaped {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(ch),
        }
    }
    Escaped(out)
}

/// A trusted HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Markup(String);

impl Markup {
    pub const fn empty() -> Self {
        Markup(String::new())
    }

    pub fn literal(html: &'static str) -> Self {
        Markup(html.to_string())
    }

    /// Used by `format_markup!`; the caller guarantees every interpolated
    /// argument is itself `Markup`, `Escaped` or a number.
    #[doc(hidden)]
    pub fn from_template(html: String) -> Self {
        Markup(html)
    }

    pub fn concat<I: IntoIterator<Item = Markup>>(parts: I) -> Self {
        let mut out = String::new();
        for part in parts {
            out.push_str(&part.0);
        }
        Markup(out)
    }

    pub fn when(condition: bool, f: impl FnOnce() -> Markup) -> Self {
        if condition {
            f()
        } else {
            Markup::empty()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<Escaped> for Markup {
    fn from(text: Escaped) -> Self {
        Markup(text.0)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Values allowed inside `format_markup!`.
pub trait SafeHtml: fmt::Display {}

impl SafeHtml for Markup {}
impl SafeHtml for Escaped {}
impl SafeHtml for u8 {}
impl SafeHtml for u32 {}
impl SafeHtml for usize {}
impl<T: SafeHtml + ?Sized> SafeHtml for &T {}

#[doc(hidden)]
pub fn assert_safe<T: SafeHtml>(value: T) -> T {
    value
}

/// `format!` restricted to `SafeHtml` arguments, producing `Markup`.
///
/// Arguments must be passed as `name = expr`; the template uses `{name}`.
macro_rules! format_markup {
    ($template:literal $(, $name:ident = $value:expr)* $(,)?) => {
        $crate::render::markup::Markup::from_template(format!(
            $template
            $(, $name = $crate::render::markup::assert_safe(&$value))*
        ))
    };
}

pub(crate) use format_markup;
