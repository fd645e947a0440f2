use grebbit::client::{CreateClientError, PostRequest, RedditClient};
use grebbit::grpc::codec::PARSE_ERROR_TITLE;
use grebbit::grpc::descriptor::GET_POST_COMMENTS;
use grebbit::tonic::Code;
use mock_transport::{FailingTransport, MockReply, MockTransport};


#[test]
fn the_method_descriptor_describes_a_unary_call() {
    assert_eq!(GET_POST_COMMENTS.service, "reddit_implementation.RedditService");
    assert_eq!(GET_POST_COMMENTS.method, "GetPostComments");
    assert!(!GET_POST_COMMENTS.request_stream);
    assert!(!GET_POST_COMMENTS.response_stream);
    assert_eq!(
        GET_POST_COMMENTS.path().as_str(),
        "/reddit_implementation.RedditService/GetPostComments"
    );
}

#[test]
fn create_client_rejects_a_missing_host() {
    let result = RedditClient::new("");

    assert!(matches!(result, Err(CreateClientError::MissingHost)));
}

#[test]
fn create_client_rejects_an_unsupported_scheme() {
    let result = RedditClient::new("ftp://x");

    assert!(matches!(
        result,
        Err(CreateClientError::UnsupportedScheme(host)) if host == "ftp://x"
    ));
}

#[tokio::test]
async fn create_client_accepts_http_and_https_hosts() {
    assert!(RedditClient::new("http://x").is_ok());
    assert!(RedditClient::new("https://x").is_ok());
}

#[tokio::test]
async fn ok_status_with_a_message_resolves_with_the_response() {
    let transport = MockTransport::new(MockReply::Message(serde_json::json!({
        "postTitle": "T",
        "comments": [{ "body": "hi" }]
    })));
    let paths = transport.seen_paths();

    let mut client = RedditClient::from_service(transport);

    let response = client
        .get_post_comments(PostRequest::new("AskReddit", "test", 10))
        .await
        .unwrap();

    assert_eq!(response.post_title, "T");
    assert_eq!(response.comments.len(), 1);
    assert_eq!(response.comments[0].body, "hi");

    let paths = paths.lock().unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(
        paths[0],
        "/reddit_implementation.RedditService/GetPostComments"
    );
}

#[tokio::test]
async fn non_ok_status_fails_with_a_status_error() {
    let transport = MockTransport::new(MockReply::Status(Code::Unavailable, "backend down"));

    let mut client = RedditClient::from_service(transport);

    let err = client
        .get_post_comments(PostRequest::new("AskReddit", "test", 10))
        .await
        .unwrap_err();

    assert!(err.is_status());

    let status = err.status().unwrap();
    assert_eq!(status.code, Code::Unavailable);
    assert_eq!(status.message, "backend down");
}

#[tokio::test]
async fn empty_status_messages_get_a_generic_one() {
    let transport = MockTransport::new(MockReply::Status(Code::Internal, ""));

    let mut client = RedditClient::from_service(transport);

    let err = client
        .get_post_comments(PostRequest::new("AskReddit", "test", 10))
        .await
        .unwrap_err();

    let status = err.status().unwrap();
    assert_eq!(status.code, Code::Internal);
    assert_eq!(status.message, "Unknown gRPC error");
}

#[tokio::test]
async fn undecodable_payloads_resolve_with_the_fallback_response() {
    let transport = MockTransport::new(MockReply::Payload(b"not json".to_vec()));

    let mut client = RedditClient::from_service(transport);

    let response = client
        .get_post_comments(PostRequest::new("rust", "tonic", 5))
        .await
        .unwrap();

    assert_eq!(response.post_title, PARSE_ERROR_TITLE);
    assert_eq!(response.comments.len(), 1);
}

#[tokio::test]
async fn dispatch_failures_are_not_status_errors() {
    let mut client = RedditClient::from_service(FailingTransport);

    let err = client
        .get_post_comments(PostRequest::new("AskReddit", "test", 10))
        .await
        .unwrap_err();

    assert!(!err.is_status());
    assert!(err.status().is_none());
}
