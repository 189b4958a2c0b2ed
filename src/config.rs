pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_COMMENTS_URL: &str = "https://jsonplaceholder.typicode.com/comments";
pub const DEFAULT_DB_PATH: &str = "data.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub posts_url: String,
    pub comments_url: String,
    pub db_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            posts_url: DEFAULT_POSTS_URL.to_string(),
            comments_url: DEFAULT_COMMENTS_URL.to_string(),
            db_path: DEFAULT_DB_PATH.to_string(),
        }
    }
}

impl Config {
    // Overrides from the command line; None keeps the default
    pub fn with_overrides(posts: Option<String>, comments: Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            posts_url: posts.unwrap_or(defaults.posts_url),
            comments_url: comments.unwrap_or(defaults.comments_url),
            db_path: defaults.db_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_used_without_overrides() {
        let config = Config::with_overrides(None, None);

        assert_eq!(config.posts_url, DEFAULT_POSTS_URL);
        assert_eq!(config.comments_url, DEFAULT_COMMENTS_URL);
        assert_eq!(config.db_path, DEFAULT_DB_PATH);
    }

    #[test]
    fn overrides_replace_only_given_urls() {
        let config = Config::with_overrides(Some("http://localhost/p".into()), None);

        assert_eq!(config.posts_url, "http://localhost/p");
        assert_eq!(config.comments_url, DEFAULT_COMMENTS_URL);
    }
}
