//! Schema type definitions
//!
//! Supported field types:
//! - string: UTF-8 string, optionally length-bounded
//! - int: 64-bit signed integer
//! - bool: Boolean
//! - float: 64-bit floating point

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Supported scalar field types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// Boolean
    Bool,
    /// 64-bit floating point
    Float,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Bool => "bool",
            FieldType::Float => "float",
        }
    }
}

/// Field definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field data type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether the field must be present
    pub required: bool,
    /// Maximum stored length; string fields only. The slug engine derives
    /// its generation bound from this when the configuration gives none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl FieldDef {
    /// Create a required string field
    pub fn required_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: true,
            max_length: None,
        }
    }

    /// Create an optional string field
    pub fn optional_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: false,
            max_length: None,
        }
    }

    /// Create a required int field
    pub fn required_int() -> Self {
        Self {
            field_type: FieldType::Int,
            required: true,
            max_length: None,
        }
    }

    /// Create an optional int field
    pub fn optional_int() -> Self {
        Self {
            field_type: FieldType::Int,
            required: false,
            max_length: None,
        }
    }

    /// Create a required bool field
    pub fn required_bool() -> Self {
        Self {
            field_type: FieldType::Bool,
            required: true,
            max_length: None,
        }
    }

    /// Create a required float field
    pub fn required_float() -> Self {
        Self {
            field_type: FieldType::Float,
            required: true,
            max_length: None,
        }
    }

    /// Bound the stored length of this field
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

/// Named index over one or more fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDef {
    /// Index name, unique within the schema
    pub name: String,
    /// Constrained fields in declaration order
    pub fields: Vec<String>,
    /// Whether the store rejects duplicate keys on this index
    pub unique: bool,
}

impl IndexDef {
    /// Create a uniqueness-enforcing index
    pub fn unique<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            unique: true,
        }
    }

    /// Create a plain (non-unique) index
    pub fn non_unique<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            unique: false,
        }
    }

    /// Whether the index constrains the given field
    pub fn covers(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

/// Complete schema for one collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Collection the schema describes
    pub collection: String,
    /// Field definitions
    pub fields: HashMap<String, FieldDef>,
    /// Declared indexes
    #[serde(default)]
    pub indexes: Vec<IndexDef>,
}

impl Schema {
    /// Create a new schema with no indexes
    pub fn new(collection: impl Into<String>, fields: HashMap<String, FieldDef>) -> Self {
        Self {
            collection: collection.into(),
            fields,
            indexes: Vec::new(),
        }
    }

    /// Add an index declaration
    pub fn with_index(mut self, index: IndexDef) -> Self {
        self.indexes.push(index);
        self
    }

    /// Look up a field definition
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    /// Look up an index by name
    pub fn index(&self, name: &str) -> Option<&IndexDef> {
        self.indexes.iter().find(|i| i.name == name)
    }

    /// Validates the schema structure itself (not a document)
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.collection.is_empty() {
            return Err("Schema must name a collection".into());
        }

        let mut seen = std::collections::HashSet::new();
        for index in &self.indexes {
            if !seen.insert(index.name.as_str()) {
                return Err(format!("Duplicate index name '{}'", index.name));
            }
            if index.fields.is_empty() {
                return Err(format!("Index '{}' constrains no fields", index.name));
            }
            for field in &index.fields {
                if !self.fields.contains_key(field) {
                    return Err(format!(
                        "Index '{}' references undeclared field '{}'",
                        index.name, field
                    ));
                }
            }
        }

        Ok(())
    }
}
