//! Structured output schema: the declarative shape constraint sent with every
//! completion request. Serializes to the Gemini `responseSchema` dialect
//! (upper-case type names, camelCase keys).

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
}

/// A node in a response schema tree.
///
/// Objects keep their declaration order in `property_ordering`; the service
/// otherwise emits properties alphabetically.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property_ordering: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    fn bare(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
            property_ordering: Vec::new(),
            items: None,
        }
    }

    pub fn object() -> Self {
        Self::bare(SchemaType::Object)
    }

    pub fn string(description: &str) -> Self {
        Self::bare(SchemaType::String).with_description(description)
    }

    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::bare(SchemaType::Array)
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Adds a property that the model must always emit.
    pub fn required_property(mut self, name: &str, schema: Schema) -> Self {
        self.required.push(name.to_string());
        self.optional_property(name, schema)
    }

    /// Adds a property the model may omit.
    pub fn optional_property(mut self, name: &str, schema: Schema) -> Self {
        self.property_ordering.push(name.to_string());
        self.properties.insert(name.to_string(), schema);
        self
    }
}

#[cfg(test)]
impl Schema {
    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties.get(name)
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}
