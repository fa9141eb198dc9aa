//! Pagination descriptors and their query-string form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// One `(field, direction)` ordering instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortInstruction {
    pub field: String,
    pub direction: Direction,
}

impl SortInstruction {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }

    /// Wire token, `<field>,<direction>`.
    pub fn to_token(&self) -> String {
        format!("{},{}", self.field, self.direction.as_str())
    }
}

/// Result-window descriptor handed to list endpoints.
///
/// Built from UI state on each fetch and immutable afterwards. Values are
/// forwarded as provided; bounds checking is the server's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(default)]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort_instructions: Vec<SortInstruction>,
}

fn default_page_size() -> u32 {
    10
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: default_page_size(),
            sort_instructions: Vec::new(),
        }
    }
}

impl PageRequest {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
            sort_instructions: Vec::new(),
        }
    }

    pub fn sorted_by(mut self, instruction: SortInstruction) -> Self {
        self.sort_instructions.push(instruction);
        self
    }
}

/// Flatten a nested pagination object (under `page_key`) into `page`/`size`
/// query fields plus repeated `sort` tokens. Every other key passes through
/// untouched. Absent pagination means list-all: no `page`/`size` emitted.
pub(crate) fn flatten(params: &Map<String, Value>, page_key: &str) -> Map<String, Value> {
    let mut query = Map::new();
    let mut page_obj: Option<&Map<String, Value>> = None;

    for (key, value) in params {
        match value {
            Value::Object(nested) if key == page_key => page_obj = Some(nested),
            _ => {
                query.insert(key.clone(), value.clone());
            }
        }
    }

    if let Some(page) = page_obj {
        let number = page.get("pageNumber").and_then(Value::as_u64).unwrap_or(0);
        let size = page.get("pageSize").and_then(Value::as_u64).unwrap_or(10);
        query.insert("page".to_string(), number.into());
        query.insert("size".to_string(), size.into());

        if let Some(Value::Array(instructions)) = page.get("sortInstructions") {
            let tokens: Vec<Value> = instructions
                .iter()
                .filter_map(|raw| {
                    serde_json::from_value::<SortInstruction>(raw.clone())
                        .ok()
                        .map(|s| Value::String(s.to_token()))
                })
                .collect();
            if !tokens.is_empty() {
                query.insert("sort".to_string(), Value::Array(tokens));
            }
        }
    }

    query
}
