use crate::utils::time::{current_timestamp_millis, is_expired_millis};
use dashmap::DashMap;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Named text values with an expiry, used to remember the logged-in username
pub trait CookieStore: Send + Sync {
    fn set(&self, name: &str, value: &str, ttl_days: u32);
    fn get(&self, name: &str) -> Option<String>;
    fn delete(&self, name: &str);
}

#[derive(Clone, Debug)]
struct StoredCookie {
    value: String,
    /// Unix timestamp in milliseconds
    expires_at: i64,
}

/// In-memory cookie jar. Expired entries are dropped when read.
#[derive(Default)]
pub struct MemoryCookieStore {
    cookies: DashMap<String, StoredCookie>,
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn get_at(&self, name: &str, now: i64) -> Option<String> {
        {
            let entry = self.cookies.get(name)?;
            if !is_expired_millis(entry.expires_at, now) {
                return Some(entry.value.clone());
            }
        }

        self.cookies
            .remove_if(name, |_, cookie| is_expired_millis(cookie.expires_at, now));
        None
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl CookieStore for MemoryCookieStore {
    fn set(&self, name: &str, value: &str, ttl_days: u32) {
        let expires_at = current_timestamp_millis() + i64::from(ttl_days) * MILLIS_PER_DAY;
        self.cookies.insert(
            name.to_string(),
            StoredCookie {
                value: value.to_string(),
                expires_at,
            },
        );
    }

    fn get(&self, name: &str) -> Option<String> {
        self.get_at(name, current_timestamp_millis())
    }

    fn delete(&self, name: &str) {
        self.cookies.remove(name);
    }
}
