//! Grid request parsing.
//!
//! The grid client sends a flat query-parameter map with bracketed keys
//! (`columns[2][search][value]`, `order[0][dir]`, ...). This module
//! validates that shape once at the boundary and produces typed structs;
//! nothing downstream does ad hoc string lookups.

use std::collections::HashMap;

/// A search box value plus its regex flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm {
    pub value: String,
    pub regex: bool,
}

/// One column as described by the request itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestColumn {
    /// Display field name this column binds to
    pub data: String,
    pub searchable: bool,
    pub orderable: bool,
    /// Per-column search box
    pub search: SearchTerm,
}

/// Requested sort direction, before the builder maps it to a wire value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

/// One entry of the order list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderEntry {
    /// Index into the request's own column list
    pub column_index: usize,
    pub direction: OrderDirection,
}

/// A fully parsed grid data request. Transient, one per call.
#[derive(Debug, Clone, Default)]
pub struct GridRequest {
    /// Client-supplied sequence number, echoed back in the response
    pub draw: u64,
    /// Paging offset (skip)
    pub start: u64,
    /// Page size (limit)
    pub length: u64,
    /// Global search bar
    pub search: SearchTerm,
    pub columns: Vec<RequestColumn>,
    pub order: Vec<OrderEntry>,
}

impl GridRequest {
    /// Parses a request from the flat parameter map.
    ///
    /// Integer fields coerce invalid or negative input to 0 rather than
    /// failing. Column and order indexes are read contiguously from 0;
    /// parsing stops at the first missing index.
    pub fn parse(params: &HashMap<String, String>) -> Self {
        let mut columns = Vec::new();
        let mut index = 0;
        while let Some(data) = params.get(&format!("columns[{index}][data]")) {
            columns.push(RequestColumn {
                data: data.clone(),
                searchable: parse_flag(params.get(&format!("columns[{index}][searchable]"))),
                orderable: parse_flag(params.get(&format!("columns[{index}][orderable]"))),
                search: SearchTerm {
                    value: params
                        .get(&format!("columns[{index}][search][value]"))
                        .cloned()
                        .unwrap_or_default(),
                    regex: parse_flag(params.get(&format!("columns[{index}][search][regex]"))),
                },
            });
            index += 1;
        }

        let mut order = Vec::new();
        let mut index = 0;
        while let Some(column) = params.get(&format!("order[{index}][column]")) {
            let direction = match params
                .get(&format!("order[{index}][dir]"))
                .map(String::as_str)
            {
                Some("desc") => OrderDirection::Desc,
                _ => OrderDirection::Asc,
            };
            order.push(OrderEntry {
                column_index: coerce_integer(Some(column)) as usize,
                direction,
            });
            index += 1;
        }

        Self {
            draw: coerce_integer(params.get("draw")),
            start: coerce_integer(params.get("start")),
            length: coerce_integer(params.get("length")),
            search: SearchTerm {
                value: params.get("search[value]").cloned().unwrap_or_default(),
                regex: parse_flag(params.get("search[regex]")),
            },
            columns,
            order,
        }
    }
}

/// Non-negative integer coercion: unparseable or negative input becomes 0
fn coerce_integer(value: Option<&String>) -> u64 {
    value
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|n| *n >= 0)
        .unwrap_or(0) as u64
}

/// The grid serializes booleans as the strings "true"/"false"
fn parse_flag(value: Option<&String>) -> bool {
    value.map(|s| s == "true").unwrap_or(false)
}
