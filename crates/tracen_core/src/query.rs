use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    pub direction: Direction,
}

impl Sort {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Ascending,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Descending,
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Ascending => write!(f, "{}", self.field),
            Direction::Descending => write!(f, "-{}", self.field),
        }
    }
}

/// A single-field equality filter, e.g. `fields.slug = calendar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub value: String,
}

/// Parameters of one query against the content repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentQuery {
    pub content_type: String,
    pub filter: Option<Filter>,
    pub order: Option<Sort>,
    pub limit: Option<NonZeroU32>,
}

impl ContentQuery {
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            filter: None,
            order: None,
            limit: None,
        }
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter = Some(Filter {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn order(mut self, sort: Sort) -> Self {
        self.order = Some(sort);
        self
    }

    /// Caps the result size. A zero limit means unbounded.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = NonZeroU32::new(limit);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.content_type.trim().is_empty() {
            return Err(Error::InvalidQuery("content type must not be empty".to_string()));
        }
        if let Some(filter) = &self.filter {
            if filter.field.trim().is_empty() {
                return Err(Error::InvalidQuery("filter field must not be empty".to_string()));
            }
        }
        if let Some(order) = &self.order {
            if order.field.trim().is_empty() {
                return Err(Error::InvalidQuery("sort field must not be empty".to_string()));
            }
        }
        Ok(())
    }

    /// Query string parameters in the delivery API's vocabulary.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("content_type".to_string(), self.content_type.clone())];
        if let Some(filter) = &self.filter {
            params.push((filter.field.clone(), filter.value.clone()));
        }
        if let Some(order) = &self.order {
            params.push(("order".to_string(), order.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_for_news_detail() {
        let query = ContentQuery::new("news")
            .filter("fields.slug", "robotics-2024")
            .limit(1);
        assert_eq!(
            query.to_params(),
            vec![
                ("content_type".to_string(), "news".to_string()),
                ("fields.slug".to_string(), "robotics-2024".to_string()),
                ("limit".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_sort_direction_prefix() {
        assert_eq!(Sort::desc("fields.date").to_string(), "-fields.date");
        assert_eq!(Sort::asc("fields.order").to_string(), "fields.order");

        let query = ContentQuery::new("faq").order(Sort::asc("fields.order"));
        assert!(query.to_params().contains(&("order".to_string(), "fields.order".to_string())));
    }

    #[test]
    fn test_zero_limit_is_unbounded() {
        let query = ContentQuery::new("teacher").limit(0);
        assert!(query.limit.is_none());
        assert_eq!(query.to_params().len(), 1);
    }

    #[test]
    fn test_validate() {
        assert!(ContentQuery::new("news").validate().is_ok());
        assert!(ContentQuery::new("").validate().is_err());
        assert!(ContentQuery::new("news").filter(" ", "x").validate().is_err());
        assert!(ContentQuery::new("news").order(Sort::asc("")).validate().is_err());
    }
}
