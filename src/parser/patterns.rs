use once_cell::sync::OnceCell;
use regex::Regex;

/// # Panics
///
///  Returns (once), the compiled template header pattern. The `name` group excludes any
///  `/Partition/` prefix. This should realistically never panic.
#[allow(clippy::expect_used)]
pub fn template_name_pattern() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();

    RE.get_or_init(|| {
        Regex::new(r"sys application template\s+(?:/[\w.\-]+/)?(?P<name>[\w.\-]+)\s*\{")
            .expect("failed compiling pattern, this is a bug")
    })
}

/// # Panics
///
///  Returns (once), the compiled `cli script` header pattern. The match ends on the opening brace
///  of the script body. This should realistically never panic.
#[allow(clippy::expect_used)]
pub fn cli_script_pattern() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();

    RE.get_or_init(|| {
        Regex::new(r"cli script\s+(?:/[\w.\-]+/)?(?P<name>[\w.\-]+)\s*\{")
            .expect("failed compiling pattern, this is a bug")
    })
}

/// # Panics
///
///  Builds the pattern locating the opening brace of the named section or script. Names are
///  escaped, so this should realistically never panic.
#[allow(clippy::expect_used)]
pub fn section_start_pattern(section: &str) -> Regex {
    Regex::new(&format!(r"{}\s*\{{", regex::escape(section)))
        .expect("failed compiling pattern, this is a bug")
}

/// # Panics
///
///  Builds the pattern matching the declaration line of the named attribute. The attribute must
///  start a whitespace delimited token, group `value` holds the rest of the line. Names are
///  escaped, so this should realistically never panic.
#[allow(clippy::expect_used)]
pub fn attribute_pattern(attribute: &str) -> Regex {
    Regex::new(&format!(
        r"(?m)(?:^|\s){}[ \t]+(?P<value>[^\r\n]*)",
        regex::escape(attribute)
    ))
    .expect("failed compiling pattern, this is a bug")
}
