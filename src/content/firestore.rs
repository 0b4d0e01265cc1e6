//! Read-only access to a Firestore collection over its REST API.
//!
//! Firestore returns each field wrapped in a type tag
//! (`{"title": {"stringValue": "..."}}`), so documents are first unwrapped
//! into plain JSON and then deserialized into the record type.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::{ContentError, Record};

#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub name: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl Document {
    /// The document id is the last segment of its resource name.
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    pub fn into_record<T: Record>(self) -> Result<T, ContentError> {
        let id = self.id().to_string();
        let mut object = Map::with_capacity(self.fields.len() + 1);
        for (key, value) in self.fields {
            object.insert(key, decode_value(value)?);
        }
        object.insert("id".to_string(), Value::String(id));
        Ok(serde_json::from_value(Value::Object(object))?)
    }
}

/// Unwraps one Firestore typed value into plain JSON.
pub fn decode_value(value: Value) -> Result<Value, ContentError> {
    let tagged = match value {
        Value::Object(tagged) => tagged,
        other => {
            return Err(ContentError::Decode(format!(
                "expected typed value, got {other}"
            )))
        }
    };
    let Some((tag, inner)) = tagged.into_iter().next() else {
        return Err(ContentError::Decode("empty typed value".to_string()));
    };
    match tag.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" | "doubleValue" | "stringValue" | "timestampValue" | "referenceValue"
        | "bytesValue" | "geoPointValue" => Ok(inner),
        // 64-bit integers come back as strings
        "integerValue" => match &inner {
            Value::String(s) => s
                .parse::<i64>()
                .map(Value::from)
                .map_err(|e| ContentError::Decode(format!("bad integerValue {s:?}: {e}"))),
            Value::Number(_) => Ok(inner),
            other => Err(ContentError::Decode(format!("bad integerValue {other}"))),
        },
        "arrayValue" => {
            let values = match inner.get("values") {
                Some(Value::Array(values)) => values.clone(),
                _ => Vec::new(),
            };
            values
                .into_iter()
                .map(decode_value)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        "mapValue" => {
            let fields = match inner.get("fields") {
                Some(Value::Object(fields)) => fields.clone(),
                _ => Map::new(),
            };
            fields
                .into_iter()
                .map(|(k, v)| decode_value(v).map(|v| (k, v)))
                .collect::<Result<Map<_, _>, _>>()
                .map(Value::Object)
        }
        other => Err(ContentError::Decode(format!("unknown value type {other}"))),
    }
}

/// Decodes a page of documents, skipping (and logging) the ones that don't
/// fit the record shape rather than failing the whole collection.
pub fn decode_documents<T: Record>(documents: Vec<Document>) -> Vec<T> {
    documents
        .into_iter()
        .filter_map(|doc| {
            let name = doc.name.clone();
            match doc.into_record::<T>() {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("skipping document {name}: {e}");
                    None
                }
            }
        })
        .collect()
}

#[cfg(feature = "ssr")]
pub async fn list_documents<T: Record>(
    config: &crate::config::FirestoreConfig,
    collection: super::Collection,
) -> Result<Vec<T>, ContentError> {
    use std::time::Duration;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| ContentError::Fetch(e.to_string()))?;

    let url = config.collection_url(collection);
    let mut records = Vec::new();
    let mut page_token: Option<String> = None;
    loop {
        let mut query = vec![("pageSize", config.page_size.to_string())];
        if let Some(key) = &config.api_key {
            query.push(("key", key.clone()));
        }
        if let Some(token) = page_token.take() {
            query.push(("pageToken", token));
        }

        let res = client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| ContentError::Fetch(e.to_string()))?;
        let status = res.status();
        if !status.is_success() {
            return Err(ContentError::Fetch(format!("{collection} returned {status}")));
        }
        let page: ListResponse = res
            .json()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))?;

        tracing::debug!(
            collection = collection.name(),
            documents = page.documents.len(),
            "fetched firestore page"
        );
        records.extend(decode_documents::<T>(page.documents));

        match page.next_page_token {
            Some(token) if !token.is_empty() => page_token = Some(token),
            _ => break,
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Category, Experience, Project, TechTag};
    use serde_json::json;

    #[test]
    fn test_decode_scalars() {
        assert_eq!(decode_value(json!({"stringValue": "hi"})).unwrap(), json!("hi"));
        assert_eq!(decode_value(json!({"integerValue": "42"})).unwrap(), json!(42));
        assert_eq!(decode_value(json!({"doubleValue": 1.5})).unwrap(), json!(1.5));
        assert_eq!(decode_value(json!({"booleanValue": true})).unwrap(), json!(true));
        assert_eq!(decode_value(json!({"nullValue": null})).unwrap(), Value::Null);
        assert_eq!(
            decode_value(json!({"timestampValue": "2022-01-01T00:00:00Z"})).unwrap(),
            json!("2022-01-01T00:00:00Z")
        );
    }

    #[test]
    fn test_decode_nested() {
        let value = json!({
            "mapValue": {"fields": {
                "tags": {"arrayValue": {"values": [
                    {"stringValue": "a"},
                    {"integerValue": "7"}
                ]}},
                "empty": {"arrayValue": {}}
            }}
        });
        assert_eq!(
            decode_value(value).unwrap(),
            json!({"tags": ["a", 7], "empty": []})
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_value(json!("raw")).is_err());
        assert!(decode_value(json!({})).is_err());
        assert!(decode_value(json!({"integerValue": "x"})).is_err());
        assert!(decode_value(json!({"mysteryValue": 1})).is_err());
    }

    #[test]
    fn test_document_into_project() {
        let doc: Document = serde_json::from_value(json!({
            "name": "projects/site/databases/(default)/documents/Projects/abc123",
            "fields": {
                "title": {"stringValue": "Portfolio"},
                "description": {"stringValue": "This site"},
                "category": {"stringValue": "Front-end"},
                "technologies": {"arrayValue": {"values": [
                    {"stringValue": "react"},
                    {"stringValue": "next"}
                ]}},
                "live": {"stringValue": "https://example.com"}
            },
            "createTime": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(doc.id(), "abc123");
        let project: Project = doc.into_record().unwrap();
        assert_eq!(project.id, "abc123");
        assert_eq!(project.category, Category::FrontEnd);
        assert_eq!(project.technologies, vec![TechTag::React, TechTag::Next]);
        assert_eq!(project.live.as_deref(), Some("https://example.com"));
        assert!(project.github.is_none());
    }

    #[test]
    fn test_document_into_experience() {
        let doc: Document = serde_json::from_value(json!({
            "name": "projects/site/databases/(default)/documents/Experience/e1",
            "fields": {
                "company_name": {"stringValue": "Acme"},
                "role": {"stringValue": "Engineer"},
                "Description": {"stringValue": "One\nTwo"},
                "start_date": {"stringValue": "Jan 2022"},
                "end_date": {"stringValue": "Present"},
                "skills": {"arrayValue": {"values": [{"stringValue": "Go"}]}},
                "sequence": {"integerValue": "2"}
            }
        }))
        .unwrap();
        let exp: Experience = doc.into_record().unwrap();
        assert_eq!(exp.id, "e1");
        assert_eq!(exp.sequence, Some(2.0));
        assert_eq!(exp.skills, vec!["Go".to_string()]);
        assert_eq!(exp.bullets().count(), 2);
    }

    #[test]
    fn test_decode_documents_skips_bad_records() {
        let page: ListResponse = serde_json::from_value(json!({
            "documents": [
                {"name": "x/Projects/ok", "fields": {
                    "title": {"stringValue": "Ok"},
                    "category": {"stringValue": "Back-end"}
                }},
                {"name": "x/Projects/bad", "fields": {
                    "title": {"stringValue": "No category"}
                }}
            ],
            "nextPageToken": "abc"
        }))
        .unwrap();
        assert_eq!(page.next_page_token.as_deref(), Some("abc"));
        let projects = decode_documents::<Project>(page.documents);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "ok");
    }

    #[test]
    fn test_empty_list_response() {
        let page: ListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(page.documents.is_empty());
        assert!(page.next_page_token.is_none());
    }
}
