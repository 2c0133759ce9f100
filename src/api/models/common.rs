use serde::{Deserialize, Serialize};

use super::error::APIError;

#[derive(Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub page: i64,
    pub total_pages: i64,
    pub results: Vec<T>,
}

const DEFAULT_PAGE: i64 = 0;
const DEFAULT_LIMIT: i64 = 10;

// A negative page or limit would otherwise travel all the way to Postgres
// as a negative OFFSET/LIMIT and come back as a 500.
pub fn pagination(page: Option<i64>, limit: Option<i64>) -> Result<(i64, i64), APIError> {
    let page = page.unwrap_or(DEFAULT_PAGE);
    let limit = limit.unwrap_or(DEFAULT_LIMIT);

    if page < 0 {
        return Err(APIError::InvalidValue {
            description: "page must not be negative".to_owned(),
        });
    }
    if limit <= 0 {
        return Err(APIError::InvalidValue {
            description: "limit must be positive".to_owned(),
        });
    }

    Ok((page, limit))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pagination_defaults() -> () {
        assert_eq!(pagination(None, None).unwrap(), (0, 10));
        assert_eq!(pagination(Some(3), Some(25)).unwrap(), (3, 25));
    }

    #[test]
    fn test_pagination_rejects_negative_page() -> () {
        assert!(pagination(Some(-1), None).is_err());
    }

    #[test]
    fn test_pagination_rejects_non_positive_limit() -> () {
        assert!(pagination(None, Some(0)).is_err());
        assert!(pagination(None, Some(-1)).is_err());
    }
}
