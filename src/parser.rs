mod attributes;
mod constants;
mod name;
#[allow(clippy::module_inception)]
mod parser;
mod patterns;
mod scanner;
mod scripts;
mod sections;
mod tcl;

pub use constants::{
    Field,
    Requirement,
    ValueKind,
    TEMPLATE_ATTRS,
    TEMPLATE_SECTIONS,
};
pub use parser::{
    parse_template,
    Parser,
};
