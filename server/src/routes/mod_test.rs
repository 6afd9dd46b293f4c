use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn unmatched_path_is_not_found() {
    let uri: Uri = "/board/42".parse().unwrap();
    assert_eq!(not_found(uri).await, StatusCode::NOT_FOUND);
}
