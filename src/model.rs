use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "postId")]
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn post_reads_camel_case_fields() {
        let post: Post =
            serde_json::from_value(json!({"id": 1, "userId": 5, "title": "T", "body": "B"}))
                .unwrap();

        assert_eq!(post.user_id, 5);
    }

    #[test]
    fn post_without_user_id_is_rejected() {
        let err = serde_json::from_value::<Post>(json!({"id": 2, "title": "X", "body": "Y"}))
            .unwrap_err();

        assert!(err.to_string().contains("userId"));
    }

    #[test]
    fn comment_ignores_unknown_fields() {
        let comment: Comment = serde_json::from_value(json!({
            "id": 10, "postId": 1, "name": "N", "email": "e@x.com", "body": "C", "extra": true
        }))
        .unwrap();

        assert_eq!(comment.post_id, 1);
    }
}
