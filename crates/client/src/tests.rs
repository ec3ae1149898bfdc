#[cfg(test)]
mod tests {
    use crate::{AsideClient, format_aside};
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn aside_json(id: i64, body: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "body": body,
            "created_at": "2009-01-01T00:00:00Z",
            "updated_at": "2009-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn save_posts_form_and_returns_confirmation() {
        let server = MockServer::start().await;
        let client = AsideClient::with_base_url(&server.uri()).unwrap();

        Mock::given(method("POST"))
            .and(path("/asides"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("body=hello+world"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_string("Created aside 1 with text \"hello world\"\n"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let text = client.save("hello world").await.unwrap();
        assert_eq!(text, "Created aside 1 with text \"hello world\"\n");
    }

    #[tokio::test]
    async fn save_duplicate_surfaces_412_body() {
        let server = MockServer::start().await;
        let client = AsideClient::with_base_url(&server.uri()).unwrap();

        Mock::given(method("POST"))
            .and(path("/asides"))
            .respond_with(ResponseTemplate::new(412).set_body_string("Error: Duplicate body\n"))
            .mount(&server)
            .await;

        let err = client.save("hello").await.unwrap_err();
        assert!(err.is_precondition_failed());
        assert_eq!(err.body(), Some("Error: Duplicate body\n"));
    }

    #[tokio::test]
    async fn list_decodes_array() {
        let server = MockServer::start().await;
        let client = AsideClient::with_base_url(&server.uri()).unwrap();

        Mock::given(method("GET"))
            .and(path("/asides"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([aside_json(2, "two"), aside_json(1, "one")])),
            )
            .mount(&server)
            .await;

        let asides = client.list().await.unwrap();
        let lines: Vec<String> = asides.iter().map(format_aside).collect();
        assert_eq!(lines, vec!["ID: 2 - two", "ID: 1 - one"]);
    }

    #[tokio::test]
    async fn fetch_requests_json_representation() {
        let server = MockServer::start().await;
        let client = AsideClient::with_base_url(&server.uri()).unwrap();

        Mock::given(method("GET"))
            .and(path("/asides/5.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(aside_json(5, "five")))
            .expect(1)
            .mount(&server)
            .await;

        let aside = client.fetch(5).await.unwrap();
        assert_eq!(format_aside(&aside), "ID: 5 - five");
    }

    #[tokio::test]
    async fn fetch_missing_is_not_found() {
        let server = MockServer::start().await;
        let client = AsideClient::with_base_url(&server.uri()).unwrap();

        Mock::given(method("GET"))
            .and(path("/asides/9.json"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Aside not found\n"))
            .mount(&server)
            .await;

        assert!(client.fetch(9).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn update_puts_form() {
        let server = MockServer::start().await;
        let client = AsideClient::with_base_url(&server.uri()).unwrap();

        Mock::given(method("PUT"))
            .and(path("/asides/3"))
            .and(body_string("body=revised"))
            .respond_with(ResponseTemplate::new(202).set_body_string("Aside updated"))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(client.update(3, "revised").await.unwrap(), "Aside updated");
    }

    #[tokio::test]
    async fn delete_sends_delete() {
        let server = MockServer::start().await;
        let client = AsideClient::with_base_url(&server.uri()).unwrap();

        Mock::given(method("DELETE"))
            .and(path("/asides/4"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Deleted\n"))
            .expect(1)
            .mount(&server)
            .await;

        client.delete(4).await.unwrap();
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = AsideClient::with_base_url("http://localhost:4567/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:4567");
        let client = AsideClient::new("example.com", 8080).unwrap();
        assert_eq!(client.base_url(), "http://example.com:8080");
    }
}
