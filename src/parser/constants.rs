/// Whether a field missing from a template aborts the parse or is simply skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Absence is fatal.
    Required,
    /// Absence is skipped.
    Optional,
}

/// The shape a field's raw text is converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Keep the trimmed text as is.
    Raw,
    /// A whitespace separated list *not* wrapped in braces, ex: `role-acl`.
    BareList,
    /// A whitespace separated list wrapped in braces, or the bare token `none`, ex:
    /// `requires-modules`.
    BracedList,
}

/// A field (section or attribute) the parser knows how to extract.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// The name as written in the template.
    pub name: &'static str,
    /// The name the value is stored under in the result.
    pub key: &'static str,
    /// Whether the field must be present.
    pub requirement: Requirement,
    /// How the raw text is converted.
    pub kind: ValueKind,
}

const fn field(
    name: &'static str,
    key: &'static str,
    requirement: Requirement,
    kind: ValueKind,
) -> Field {
    Field {
        name,
        key,
        requirement,
        kind,
    }
}

/// The `actions { definition { ... } }` sections, in extraction order.
pub const TEMPLATE_SECTIONS: &[Field] = &[
    field(
        "presentation",
        "presentation",
        Requirement::Required,
        ValueKind::Raw,
    ),
    field(
        "implementation",
        "implementation",
        Requirement::Required,
        ValueKind::Raw,
    ),
    field("html-help", "htmlHelp", Requirement::Optional, ValueKind::Raw),
    field(
        "role-acl",
        "roleAcl",
        Requirement::Optional,
        ValueKind::BareList,
    ),
    field("macro", "macro", Requirement::Optional, ValueKind::Raw),
];

/// The top level attributes, searched for after all sections have been excised.
pub const TEMPLATE_ATTRS: &[Field] = &[
    field(
        "description",
        "description",
        Requirement::Optional,
        ValueKind::Raw,
    ),
    field(
        "partition",
        "partition",
        Requirement::Optional,
        ValueKind::Raw,
    ),
    field(
        "requires-modules",
        "requiresModules",
        Requirement::Optional,
        ValueKind::BracedList,
    ),
    field(
        "ignore-verification",
        "ignoreVerification",
        Requirement::Optional,
        ValueKind::Raw,
    ),
    field(
        "requires-bigip-version-max",
        "requiresBigipVersionMax",
        Requirement::Optional,
        ValueKind::Raw,
    ),
    field(
        "requires-bigip-version-min",
        "requiresBigipVersionMin",
        Requirement::Optional,
        ValueKind::Raw,
    ),
    field(
        "signing-key",
        "signingKey",
        Requirement::Optional,
        ValueKind::Raw,
    ),
    field(
        "tmpl-checksum",
        "tmplChecksum",
        Requirement::Optional,
        ValueKind::Raw,
    ),
    field(
        "tmpl-signature",
        "tmplSignature",
        Requirement::Optional,
        ValueKind::Raw,
    ),
    field(
        "total-signing-status",
        "totalSigningStatus",
        Requirement::Optional,
        ValueKind::Raw,
    ),
    field(
        "prerequisite-errors",
        "prerequisiteErrors",
        Requirement::Optional,
        ValueKind::Raw,
    ),
    field(
        "verification-status",
        "verificationStatus",
        Requirement::Optional,
        ValueKind::Raw,
    ),
];

/// The bare token a `BracedList` may hold instead of a list.
pub const TCL_LIST_NONE: &str = "none";

/// Opening brace.
pub const OPEN_BRACE: char = '{';

/// Closing brace.
pub const CLOSE_BRACE: char = '}';

/// Double quote, toggles quoting unless escaped.
pub const QUOTE: char = '"';

/// Backslash, escapes the character after it.
pub const ESCAPE: char = '\\';
