//! List query construction: optional filters plus pagination.
//!
//! Raw query-string values arrive as [`TodoListParams`] and are turned into a
//! [`TodoListQuery`] by [`TodoListQuery::from_params`]. Filters that are
//! absent or unparsable degrade to "no constraint" for their dimension;
//! pagination values that are present but invalid reject the whole request.

use super::{Todo, TodoDomainError};
use chrono::{DateTime, Utc};

/// Raw list parameters exactly as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListParams {
    start_date: Option<String>,
    end_date: Option<String>,
    status: Option<String>,
    page_size: Option<String>,
    page: Option<String>,
}

impl TodoListParams {
    /// Creates parameters with every value absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects parameters from decoded query-string pairs.
    ///
    /// The first occurrence of each key wins and unknown keys are ignored,
    /// so a repeated key never fails the request.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "startDate" => &mut params.start_date,
                "endDate" => &mut params.end_date,
                "status" => &mut params.status,
                "pageSize" => &mut params.page_size,
                "page" => &mut params.page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Sets the raw `startDate` value.
    #[must_use]
    pub fn with_start_date(mut self, value: impl Into<String>) -> Self {
        self.start_date = Some(value.into());
        self
    }

    /// Sets the raw `endDate` value.
    #[must_use]
    pub fn with_end_date(mut self, value: impl Into<String>) -> Self {
        self.end_date = Some(value.into());
        self
    }

    /// Sets the raw `status` value.
    #[must_use]
    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    /// Sets the raw `pageSize` value.
    #[must_use]
    pub fn with_page_size(mut self, value: impl Into<String>) -> Self {
        self.page_size = Some(value.into());
        self
    }

    /// Sets the raw `page` value.
    #[must_use]
    pub fn with_page(mut self, value: impl Into<String>) -> Self {
        self.page = Some(value.into());
        self
    }
}

/// One-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: u32,
    size: u32,
}

impl Page {
    /// Page size used when the caller does not supply one.
    pub const DEFAULT_SIZE: u32 = 10;

    /// Creates a page selection.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidPage`] or
    /// [`TodoDomainError::InvalidPageSize`] when either value is zero.
    pub fn new(number: u32, size: u32) -> Result<Self, TodoDomainError> {
        if size == 0 {
            return Err(TodoDomainError::InvalidPageSize(size.to_string()));
        }
        if number == 0 {
            return Err(TodoDomainError::InvalidPage(number.to_string()));
        }
        Ok(Self { number, size })
    }

    /// Returns the one-based page number.
    #[must_use]
    pub const fn number(self) -> u32 {
        self.number
    }

    /// Returns the page size.
    #[must_use]
    pub const fn size(self) -> u32 {
        self.size
    }

    /// Returns the SQL `LIMIT` value.
    #[must_use]
    pub fn limit(self) -> i64 {
        i64::from(self.size)
    }

    /// Returns the SQL `OFFSET` value, `(page - 1) * pageSize`.
    ///
    /// Saturates at `i64::MAX`, which selects an empty page.
    #[must_use]
    pub fn offset(self) -> i64 {
        (i64::from(self.number) - 1).saturating_mul(i64::from(self.size))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            number: 1,
            size: Self::DEFAULT_SIZE,
        }
    }
}

/// Validated list query: conjunctive optional filters and one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoListQuery {
    created_from: Option<DateTime<Utc>>,
    created_until: Option<DateTime<Utc>>,
    status: Option<bool>,
    page: Page,
}

impl TodoListQuery {
    /// Creates an unfiltered query for the first default-sized page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a query from raw parameters.
    ///
    /// `now` becomes the upper bound when `endDate` is absent. An `endDate`
    /// that is present but unparsable leaves the upper bound open, matching
    /// the treatment of `startDate`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidPageSize`] or
    /// [`TodoDomainError::InvalidPage`] when a pagination value is present
    /// but not a positive integer.
    pub fn from_params(params: &TodoListParams, now: DateTime<Utc>) -> Result<Self, TodoDomainError> {
        let size = parse_positive(
            params.page_size.as_deref(),
            Page::DEFAULT_SIZE,
            TodoDomainError::InvalidPageSize,
        )?;
        let number = parse_positive(params.page.as_deref(), 1, TodoDomainError::InvalidPage)?;

        let created_until = match params.end_date.as_deref() {
            None => Some(now),
            Some(raw) => parse_timestamp(raw),
        };

        Ok(Self {
            created_from: params.start_date.as_deref().and_then(parse_timestamp),
            created_until,
            status: params.status.as_deref().and_then(parse_status_filter),
            page: Page::new(number, size)?,
        })
    }

    /// Restricts results to todos created at or after `from`.
    #[must_use]
    pub const fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.created_from = Some(from);
        self
    }

    /// Restricts results to todos created at or before `until`.
    #[must_use]
    pub const fn created_until(mut self, until: DateTime<Utc>) -> Self {
        self.created_until = Some(until);
        self
    }

    /// Restricts results to todos with the given status.
    #[must_use]
    pub const fn with_status(mut self, status: bool) -> Self {
        self.status = Some(status);
        self
    }

    /// Selects the page to return.
    #[must_use]
    pub const fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    /// Returns the inclusive lower creation bound, if any.
    #[must_use]
    pub const fn lower_bound(&self) -> Option<DateTime<Utc>> {
        self.created_from
    }

    /// Returns the inclusive upper creation bound, if any.
    #[must_use]
    pub const fn upper_bound(&self) -> Option<DateTime<Utc>> {
        self.created_until
    }

    /// Returns the status filter, if any.
    #[must_use]
    pub const fn status(&self) -> Option<bool> {
        self.status
    }

    /// Returns the selected page.
    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    /// Reports whether a todo satisfies every filter of this query.
    ///
    /// Pagination is not considered.
    #[must_use]
    pub fn matches(&self, todo: &Todo) -> bool {
        let created = todo.created_date();
        self.created_from.is_none_or(|from| created >= from)
            && self.created_until.is_none_or(|until| created <= until)
            && self.status.is_none_or(|status| todo.status() == status)
    }
}

/// Parses a status filter value.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts. Anything else yields `None`, meaning "do not filter".
#[must_use]
pub fn parse_status_filter(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|timestamp| timestamp.with_timezone(&Utc))
}

fn parse_positive(
    raw: Option<&str>,
    default: u32,
    invalid: fn(String) -> TodoDomainError,
) -> Result<u32, TodoDomainError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(invalid(value.to_owned())),
    }
}
