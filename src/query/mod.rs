//! Query parameter parsing
//!
//! Accepts the loosely-typed query objects list endpoints receive and
//! normalizes them into [`crate::page::PaginationParams`].

mod parser;
mod types;

pub use parser::{
    parse_pagination_params, parse_query_number, PaginationOptions, DEFAULT_LIMIT, DEFAULT_PAGE,
    MAX_LIMIT, MIN_LIMIT, MIN_PAGE,
};
pub(crate) use parser::to_signed;
pub use types::{PaginationQuery, QueryValue};

#[cfg(test)]
mod tests;
