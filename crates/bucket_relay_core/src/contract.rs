use serde::{Deserialize, Serialize};

pub const INTERNAL_ERROR_PREFIX: &str = "Internal server error: ";
pub const SUMMARY_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectDescriptor {
    pub key: Option<String>,
}

/// Single page of a bucket listing.
///
/// `objects` is `None` when the provider returned no contents at all, which
/// is distinct from an explicitly empty page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectListing {
    pub objects: Option<Vec<ObjectDescriptor>>,
}

impl ObjectListing {
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            objects: Some(
                keys.into_iter()
                    .map(|key| ObjectDescriptor {
                        key: Some(key.into()),
                    })
                    .collect(),
            ),
        }
    }

    pub fn object_count(&self) -> usize {
        self.objects.as_ref().map_or(0, Vec::len)
    }

    pub fn has_contents(&self) -> bool {
        self.objects.is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.objects
            .iter()
            .flatten()
            .filter_map(|object| object.key.as_deref())
    }

    /// Comma-joined object keys, or `None` when the listing had no contents.
    /// Objects without a key contribute an empty entry.
    pub fn summary(&self) -> Option<String> {
        self.objects.as_ref().map(|objects| {
            objects
                .iter()
                .map(|object| object.key.as_deref().unwrap_or_default())
                .collect::<Vec<_>>()
                .join(SUMMARY_SEPARATOR)
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: Option<String>,
}

impl MessageBody {
    pub fn success(summary: Option<String>) -> Self {
        Self { message: summary }
    }

    pub fn internal_error(detail: &str) -> Self {
        Self {
            message: Some(format!("{INTERNAL_ERROR_PREFIX}{detail}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_joins_keys_in_listing_order() {
        let listing = ObjectListing::from_keys(["a.txt", "b.txt", "nested/c.txt"]);
        assert_eq!(
            listing.summary().as_deref(),
            Some("a.txt, b.txt, nested/c.txt")
        );
    }

    #[test]
    fn summary_is_absent_without_contents() {
        let listing = ObjectListing::default();
        assert_eq!(listing.summary(), None);
        assert!(!listing.has_contents());
        assert_eq!(listing.object_count(), 0);
    }

    #[test]
    fn summary_is_empty_for_empty_page() {
        let listing = ObjectListing::from_keys(Vec::<String>::new());
        assert_eq!(listing.summary().as_deref(), Some(""));
        assert!(listing.has_contents());
    }

    #[test]
    fn keyless_objects_leave_blank_summary_entries() {
        let listing = ObjectListing {
            objects: Some(vec![
                ObjectDescriptor {
                    key: Some("a.txt".to_string()),
                },
                ObjectDescriptor { key: None },
                ObjectDescriptor {
                    key: Some("b.txt".to_string()),
                },
            ]),
        };

        assert_eq!(listing.summary().as_deref(), Some("a.txt, , b.txt"));
        assert_eq!(listing.keys().collect::<Vec<_>>(), vec!["a.txt", "b.txt"]);
        assert_eq!(listing.object_count(), 3);
    }

    #[test]
    fn message_body_keeps_null_message_field() {
        let body = serde_json::to_string(&MessageBody::success(None)).expect("body serializes");
        assert_eq!(body, r#"{"message":null}"#);
    }

    #[test]
    fn internal_error_message_is_prefixed() {
        let body = MessageBody::internal_error("AccessDenied");
        assert_eq!(
            body.message.as_deref(),
            Some("Internal server error: AccessDenied")
        );
    }
}
