//! Request parameter assembly.
//!
//! Boundary layer between the compilers and whatever performs HTTP: picks
//! the dialect for a configured API version and lays out the raw parameter
//! pairs for one search call. Values are unencoded; the transport
//! percent-encodes them, builds the URL, and interprets the response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::compile::{boolean, structured};
use crate::error::Result;
use crate::expr::Expression;
use crate::options::SearchOptions;

/// Wire dialect selector, configured per client rather than through any
/// process-wide switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiVersion {
    /// Legacy dialect: `bq`, `rank`, `return-fields`
    V2011,
    /// Current dialect: `q` with `q.parser=structured`, `sort`, `return`
    #[default]
    V2013,
}

impl ApiVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V2011 => "2011",
            Self::V2013 => "2013",
        }
    }
}

/// One search call: a query in the loose JSON form, an optional filter,
/// and extracted options. Transient; built per call and discarded.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub version: ApiVersion,
    pub query: Value,
    pub filter: Option<Value>,
    pub options: SearchOptions,
}

impl SearchRequest {
    pub fn new(version: ApiVersion, query: Value) -> Self {
        Self {
            version,
            query,
            filter: None,
            options: SearchOptions::default(),
        }
    }

    pub fn with_filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Assemble the raw parameter pairs for this request.
    pub fn params(&self) -> Result<Vec<(String, String)>> {
        let mut params = Vec::new();
        match self.version {
            ApiVersion::V2013 => {
                let query = structured::compile(&Expression::from_json(&self.query)?)?;
                params.push(("q".to_string(), query));
                params.push(("q.parser".to_string(), "structured".to_string()));
                if let Some(filter) = &self.filter {
                    let fq = structured::compile(&Expression::from_json(filter)?)?;
                    params.push(("fq".to_string(), fq));
                }
            }
            ApiVersion::V2011 => {
                params.push(("bq".to_string(), boolean::compile_boolean(&self.query)?));
            }
        }

        let opts = &self.options;
        if let Some(start) = opts.start {
            params.push(("start".to_string(), start.to_string()));
        }
        params.push(("size".to_string(), opts.size.to_string()));
        if let Some(sort) = &opts.sort {
            match self.version {
                ApiVersion::V2013 => params.push(("sort".to_string(), sort.clone())),
                ApiVersion::V2011 => {
                    params.push(("rank".to_string(), rank_from_sort(sort)));
                }
            }
        }
        if !opts.fields.is_empty() {
            let key = match self.version {
                ApiVersion::V2013 => "return",
                ApiVersion::V2011 => "return-fields",
            };
            params.push((key.to_string(), opts.fields.join(",")));
        }
        Ok(params)
    }
}

/// The legacy dialect spells sort as a rank expression: descending order
/// is a leading minus, ascending is the bare field.
fn rank_from_sort(sort: &str) -> String {
    if let Some(field) = sort.strip_suffix(" desc") {
        return format!("-{field}");
    }
    sort.strip_suffix(" asc").unwrap_or(sort).to_string()
}
