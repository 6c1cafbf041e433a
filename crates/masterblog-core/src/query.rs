//! Read-only sort and search over a snapshot of posts.
//!
//! Nothing here mutates the store. Callers take the snapshot returned by
//! [`crate::ports::PostStore::list_all`] and sort or filter that copy; the
//! live collection keeps its insertion order.

use serde::Deserialize;

use crate::domain::Post;
use crate::error::DomainError;

/// Fields a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
    Author,
    Date,
}

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A validated sort request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Build a sort spec from raw query parameters.
    ///
    /// An absent or empty `sort` means "no sort requested" and yields
    /// `Ok(None)` without looking at `direction`. A present `sort` must name
    /// one of the four post fields, and `direction` must then be given as
    /// `asc` or `desc`.
    pub fn from_params(
        sort: Option<&str>,
        direction: Option<&str>,
    ) -> Result<Option<SortSpec>, DomainError> {
        let field = match sort {
            None | Some("") => return Ok(None),
            Some("title") => SortField::Title,
            Some("content") => SortField::Content,
            Some("author") => SortField::Author,
            Some("date") => SortField::Date,
            Some(_) => {
                return Err(DomainError::Validation(
                    "Invalid sort field. 'sort' must be 'title', 'content', 'author', or 'date'."
                        .to_string(),
                ));
            }
        };

        let direction = match direction {
            Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            _ => {
                return Err(DomainError::Validation(
                    "Invalid sort direction. 'direction' must be 'asc' or 'desc'.".to_string(),
                ));
            }
        };

        Ok(Some(SortSpec { field, direction }))
    }
}

/// Sort a snapshot of posts in place.
///
/// The sort is stable: ties keep the relative order of the input. Text
/// fields compare lexicographically exactly as stored (case-sensitive),
/// `date` compares chronologically; `Desc` reverses the ascending
/// comparison.
pub fn sort_posts(posts: &mut [Post], spec: &SortSpec) {
    posts.sort_by(|a, b| {
        let ordering = match spec.field {
            SortField::Title => a.title.cmp(&b.title),
            SortField::Content => a.content.cmp(&b.content),
            SortField::Author => a.author.cmp(&b.author),
            SortField::Date => a.date.cmp(&b.date),
        };

        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Multi-field search filter.
///
/// A post is kept when **any** non-empty criterion matches it; with no
/// criteria nothing matches, so an empty filter yields an empty result
/// rather than the whole collection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchCriteria {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl SearchCriteria {
    /// Does this post match any criterion?
    ///
    /// `title`, `content` and `author` are case-insensitive substring
    /// matches against the stored text. `date` is an exact string match
    /// against the stored date formatted as `YYYY-MM-DD` - not a substring,
    /// not a parsed comparison.
    pub fn matches(&self, post: &Post) -> bool {
        contains_ignore_case(&post.title, self.title.as_deref())
            || contains_ignore_case(&post.content, self.content.as_deref())
            || contains_ignore_case(&post.author, self.author.as_deref())
            || match self.date.as_deref() {
                Some(date) if !date.is_empty() => post.date_string() == date,
                _ => false,
            }
    }
}

fn contains_ignore_case(stored: &str, criterion: Option<&str>) -> bool {
    match criterion {
        Some(criterion) if !criterion.is_empty() => stored
            .to_lowercase()
            .contains(&criterion.to_lowercase()),
        _ => false,
    }
}

/// Filter a snapshot of posts, keeping input order.
///
/// Each post appears at most once no matter how many criteria match it.
pub fn search_posts(posts: Vec<Post>, criteria: &SearchCriteria) -> Vec<Post> {
    posts
        .into_iter()
        .filter(|post| criteria.matches(post))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_post(id: u64, title: &str, author: &str, date: (i32, u32, u32)) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: format!("Content of {title}."),
            author: author.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    fn sample_posts() -> Vec<Post> {
        vec![
            make_post(1, "Cats", "John Doe", (2023, 6, 7)),
            make_post(2, "Dogs", "Jane Smith", (2023, 6, 8)),
        ]
    }

    fn titles(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|post| post.title.as_str()).collect()
    }

    #[test]
    fn test_from_params_defaults_to_no_sort() {
        assert!(SortSpec::from_params(None, None).unwrap().is_none());
        assert!(SortSpec::from_params(Some(""), None).unwrap().is_none());
        // Direction alone does not request a sort.
        assert!(SortSpec::from_params(None, Some("desc")).unwrap().is_none());
    }

    #[test]
    fn test_from_params_rejects_unknown_field() {
        let err = SortSpec::from_params(Some("bogus"), Some("asc")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid sort field. 'sort' must be 'title', 'content', 'author', or 'date'."
        );
    }

    #[test]
    fn test_from_params_requires_direction_with_field() {
        for direction in [None, Some(""), Some("up")] {
            let err = SortSpec::from_params(Some("title"), direction).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid sort direction. 'direction' must be 'asc' or 'desc'."
            );
        }
    }

    #[test]
    fn test_sort_by_title_desc() {
        let mut posts = sample_posts();
        let spec = SortSpec::from_params(Some("title"), Some("desc"))
            .unwrap()
            .unwrap();
        sort_posts(&mut posts, &spec);
        assert_eq!(titles(&posts), vec!["Dogs", "Cats"]);
    }

    #[test]
    fn test_sort_by_date_desc_reverses_asc() {
        let mut asc = vec![
            make_post(1, "c", "a", (2023, 6, 9)),
            make_post(2, "a", "b", (2023, 6, 7)),
            make_post(3, "b", "c", (2023, 6, 8)),
        ];
        let mut desc = asc.clone();

        sort_posts(
            &mut asc,
            &SortSpec {
                field: SortField::Date,
                direction: SortDirection::Asc,
            },
        );
        sort_posts(
            &mut desc,
            &SortSpec {
                field: SortField::Date,
                direction: SortDirection::Desc,
            },
        );

        let reversed: Vec<Post> = asc.into_iter().rev().collect();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_sort_is_case_sensitive_lexicographic() {
        let mut posts = vec![
            make_post(1, "apple", "x", (2023, 1, 1)),
            make_post(2, "Banana", "y", (2023, 1, 2)),
        ];
        sort_posts(
            &mut posts,
            &SortSpec {
                field: SortField::Title,
                direction: SortDirection::Asc,
            },
        );
        // Uppercase sorts before lowercase, as stored.
        assert_eq!(titles(&posts), vec!["Banana", "apple"]);
    }

    #[test]
    fn test_sort_keeps_input_order_on_ties() {
        let mut posts = vec![
            make_post(1, "Same", "a", (2023, 1, 1)),
            make_post(2, "Same", "b", (2023, 1, 1)),
            make_post(3, "Same", "c", (2023, 1, 1)),
        ];
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            sort_posts(
                &mut posts,
                &SortSpec {
                    field: SortField::Title,
                    direction,
                },
            );
            let ids: Vec<u64> = posts.iter().map(|post| post.id).collect();
            assert_eq!(ids, vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_search_title_is_case_insensitive_substring() {
        let criteria = SearchCriteria {
            title: Some("cat".to_string()),
            ..SearchCriteria::default()
        };
        let results = search_posts(sample_posts(), &criteria);
        assert_eq!(titles(&results), vec!["Cats"]);
    }

    #[test]
    fn test_search_date_is_exact_not_substring() {
        let criteria = SearchCriteria {
            date: Some("2023-06-08".to_string()),
            ..SearchCriteria::default()
        };
        let results = search_posts(sample_posts(), &criteria);
        assert_eq!(titles(&results), vec!["Dogs"]);

        // A prefix of the date is not a match.
        let criteria = SearchCriteria {
            date: Some("2023-06".to_string()),
            ..SearchCriteria::default()
        };
        assert!(search_posts(sample_posts(), &criteria).is_empty());
    }

    #[test]
    fn test_search_without_criteria_matches_nothing() {
        assert!(search_posts(sample_posts(), &SearchCriteria::default()).is_empty());

        let all_empty = SearchCriteria {
            title: Some(String::new()),
            content: Some(String::new()),
            author: Some(String::new()),
            date: Some(String::new()),
        };
        assert!(search_posts(sample_posts(), &all_empty).is_empty());
    }

    #[test]
    fn test_search_any_criterion_is_enough() {
        let criteria = SearchCriteria {
            title: Some("no such title".to_string()),
            author: Some("jane".to_string()),
            ..SearchCriteria::default()
        };
        let results = search_posts(sample_posts(), &criteria);
        assert_eq!(titles(&results), vec!["Dogs"]);
    }

    #[test]
    fn test_search_lists_posts_once_and_in_input_order() {
        // Both criteria match both posts; each post still appears once.
        let criteria = SearchCriteria {
            title: Some("s".to_string()),
            content: Some("content".to_string()),
            ..SearchCriteria::default()
        };
        let results = search_posts(sample_posts(), &criteria);
        assert_eq!(titles(&results), vec!["Cats", "Dogs"]);
    }
}
