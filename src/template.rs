use crate::errors::IappError;
use serde::{
    Deserialize,
    Serialize,
};
use std::collections::BTreeMap;

/// A single extracted value -- either a raw (trimmed) string or a list of strings parsed out of a
/// tcl list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A raw, trimmed string value.
    Text(String),
    /// A list of tokens parsed from a tcl list.
    List(Vec<String>),
}

impl Value {
    /// Returns the string if this is a `Text` value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::List(_) => None,
        }
    }

    /// Returns the tokens if this is a `List` value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::List(l) => Some(l.as_slice()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Vec<String>> for Value {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

/// The `actions` object of a parsed template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actions {
    /// Extracted sections keyed by their result (json) name, ex: `htmlHelp`.
    pub definition: BTreeMap<String, Value>,
}

/// A `cli script` block found ahead of the template body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// The script name with any `/Partition/` prefix stripped.
    pub name: String,
    /// The trimmed script body.
    pub script: String,
}

/// `ParsedTemplate` is the structured form of an iapp template -- the object handed back from a
/// successful parse, shaped the way the bigip rest api expects a template payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTemplate {
    /// The template name with any `/Partition/` prefix stripped.
    pub name: String,
    /// The actions object holding the definition sections.
    pub actions: Actions,
    /// Script blocks in file order, only present if at least one was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scripts: Option<Vec<Script>>,
    /// Top level attributes keyed by their result (json) name, ex: `requiresModules`.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl ParsedTemplate {
    /// Returns an empty `ParsedTemplate` with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            actions: Actions::default(),
            scripts: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Returns the attribute stored under the given result key, ex: `requiresModules`.
    #[must_use]
    pub fn attribute(
        &self,
        key: &str,
    ) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Returns the definition section stored under the given result key, ex: `htmlHelp`.
    #[must_use]
    pub fn section(
        &self,
        key: &str,
    ) -> Option<&Value> {
        self.actions.definition.get(key)
    }

    /// Returns the first script with the given name.
    #[must_use]
    pub fn script(
        &self,
        name: &str,
    ) -> Option<&Script> {
        self.scripts
            .as_ref()
            .and_then(|scripts| scripts.iter().find(|script| script.name == name))
    }

    pub(crate) fn push_script(
        &mut self,
        script: Script,
    ) {
        self.scripts.get_or_insert_with(Vec::new).push(script);
    }

    /// Encode the template as compact json.
    ///
    /// # Errors
    ///
    /// Returns an `IappError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String, IappError> {
        serde_json::to_string(self).map_err(|err| IappError::Serialization {
            details: err.to_string(),
        })
    }

    /// Encode the template as indented json.
    ///
    /// # Errors
    ///
    /// Returns an `IappError::Serialization` if encoding fails.
    pub fn to_json_pretty(&self) -> Result<String, IappError> {
        serde_json::to_string_pretty(self).map_err(|err| IappError::Serialization {
            details: err.to_string(),
        })
    }

    /// Encode the template as yaml.
    ///
    /// # Errors
    ///
    /// Returns an `IappError::Serialization` if encoding fails.
    pub fn to_yaml(&self) -> Result<String, IappError> {
        serde_yaml::to_string(self).map_err(|err| IappError::Serialization {
            details: err.to_string(),
        })
    }
}
