//! JSON rendering of parsed query clauses.
//!
//! Every tree the parsers produce, and the inverted selection, implements
//! [`ToJson`]. The rendering is meant for inspection (the `oslcq` tool prints
//! it), not as an interchange format: decimals are emitted as strings so their
//! scale survives, and qualified names carry both the written form and the
//! resolved URI.
//!
//! # Examples
//!
//! ```
//! use oslc_query::parse_prefixes;
//! use oslc_query::output::{to_json, to_json_pretty};
//!
//! let prefixes = parse_prefixes("qm=<http://qm.example.com/ns/>").unwrap();
//!
//! assert_eq!(to_json(&prefixes), r#"{"qm":"http://qm.example.com/ns/"}"#);
//! assert!(to_json_pretty(&prefixes).contains('\n'));
//! ```

use serde_json::{Map, Value as Json, json};

use crate::{
    ast::{CompoundTerm, Properties, Property, QualifiedName, SearchTerms, SimpleTerm, SortTerm},
    params::ParsedQuery,
    prefix_map::PrefixMap,
    selection::{InvertedSelection, Selection, Wildcard},
    value::Value,
};

/// Conversion into a `serde_json` value.
pub trait ToJson {
    fn to_json(&self) -> Json;
}

impl<T: ToJson> ToJson for [T] {
    fn to_json(&self) -> Json {
        Json::Array(self.iter().map(ToJson::to_json).collect())
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> Json {
        self.as_slice().to_json()
    }
}

impl ToJson for QualifiedName {
    fn to_json(&self) -> Json {
        json!({
            "name": self.to_string(),
            "uri": self.uri(),
        })
    }
}

impl ToJson for Value {
    fn to_json(&self) -> Json {
        let mut object = Map::new();
        object.insert("type".into(), json!(self.type_name()));
        match self {
            Value::UriRef(uri) => {
                object.insert("value".into(), json!(uri));
            }
            Value::Boolean(b) => {
                object.insert("value".into(), json!(b));
            }
            Value::Decimal(d) => {
                object.insert("value".into(), json!(d.to_string()));
            }
            Value::String(s) => {
                object.insert("value".into(), json!(s));
            }
            Value::TypedString { value, datatype } => {
                object.insert("value".into(), json!(value));
                object.insert("datatype".into(), datatype.to_json());
            }
            Value::LangString { value, language } => {
                object.insert("value".into(), json!(value));
                object.insert("language".into(), json!(language));
            }
        }
        Json::Object(object)
    }
}

impl ToJson for CompoundTerm {
    fn to_json(&self) -> Json {
        self.terms.to_json()
    }
}

impl ToJson for SimpleTerm {
    fn to_json(&self) -> Json {
        match self {
            SimpleTerm::Comparison {
                property,
                operator,
                operand,
            } => json!({
                "kind": "comparison",
                "property": property.to_json(),
                "operator": operator.symbol(),
                "operand": operand.to_json(),
            }),
            SimpleTerm::In { property, operands } => json!({
                "kind": "in",
                "property": property.to_json(),
                "operands": operands.to_json(),
            }),
            SimpleTerm::Nested { property, children } => json!({
                "kind": "nested",
                "property": property.to_json(),
                "terms": children.to_json(),
            }),
        }
    }
}

impl ToJson for Properties {
    fn to_json(&self) -> Json {
        self.children.to_json()
    }
}

impl ToJson for Property {
    fn to_json(&self) -> Json {
        match self {
            Property::Identifier(name) => json!({
                "kind": "identifier",
                "property": name.to_json(),
            }),
            Property::Wildcard => json!({ "kind": "wildcard" }),
            Property::NestedIdentifier { name, children } => json!({
                "kind": "nested_identifier",
                "property": name.to_json(),
                "children": children.to_json(),
            }),
            Property::NestedWildcard { children } => json!({
                "kind": "nested_wildcard",
                "children": children.to_json(),
            }),
        }
    }
}

impl ToJson for SortTerm {
    fn to_json(&self) -> Json {
        let direction = if self.is_ascending() {
            "ascending"
        } else {
            "descending"
        };
        let mut object = Map::new();
        object.insert("direction".into(), json!(direction));
        object.insert("property".into(), self.property.to_json());
        if let Some(nested) = &self.nested {
            object.insert("nested".into(), nested.to_json());
        }
        Json::Object(object)
    }
}

impl ToJson for SearchTerms {
    fn to_json(&self) -> Json {
        json!(self.terms())
    }
}

impl ToJson for PrefixMap {
    fn to_json(&self) -> Json {
        let object: Map<String, Json> = self
            .iter()
            .map(|(prefix, namespace)| (prefix.to_string(), json!(namespace)))
            .collect();
        Json::Object(object)
    }
}

impl ToJson for InvertedSelection {
    fn to_json(&self) -> Json {
        let properties: Map<String, Json> = self
            .entries()
            .map(|(uri, selection)| {
                let rendered = match selection {
                    Selection::Singleton => json!(true),
                    Selection::Nested(nested) => nested.to_json(),
                };
                (uri.to_string(), rendered)
            })
            .collect();

        let wildcard = match self.wildcard() {
            Wildcard::None => Json::Null,
            Wildcard::Singleton => json!(true),
            Wildcard::Nested(common) => common.to_json(),
        };

        json!({
            "properties": properties,
            "wildcard": wildcard,
        })
    }
}

impl ToJson for ParsedQuery {
    fn to_json(&self) -> Json {
        let mut object = Map::new();
        object.insert("prefixes".into(), self.prefixes.to_json());
        if let Some(clause) = &self.where_clause {
            object.insert("where".into(), clause.to_json());
        }
        if let Some(select) = &self.select {
            object.insert("select".into(), select.to_json());
        }
        if let Some(properties) = &self.properties {
            object.insert("properties".into(), properties.to_json());
        }
        if let Some(order_by) = &self.order_by {
            object.insert("orderBy".into(), order_by.to_json());
        }
        if let Some(terms) = &self.search_terms {
            object.insert("searchTerms".into(), terms.to_json());
        }
        Json::Object(object)
    }
}

/// Compact JSON text for a parsed tree.
pub fn to_json<T: ToJson + ?Sized>(value: &T) -> String {
    value.to_json().to_string()
}

/// JSON text for a parsed tree, indented two spaces per level.
pub fn to_json_pretty<T: ToJson + ?Sized>(value: &T) -> String {
    format!("{:#}", value.to_json())
}
