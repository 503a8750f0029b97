use contribution_opportunities::client::{ClientError, OpportunitiesClient, OpportunityFeed};
use contribution_opportunities::config::BackendConfig;
use contribution_opportunities::opportunity::Opportunity;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> OpportunitiesClient {
    OpportunitiesClient::new(&BackendConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        user_agent: "tests".into(),
    })
    .unwrap()
}

#[tokio::test]
async fn fetches_skill_opportunities() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/opportunitiessummaryhandler/skill"))
        .and(query_param("cursor", ""))
        .and(query_param_is_missing("language_code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "opportunities": [{
                "id": "skill_1",
                "skill_description": "Add fractions",
                "topic_name": "Fractions",
                "question_count": 30
            }],
            "next_cursor": "next",
            "more": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server).fetch_skill_opportunities("").await.unwrap();

    assert_eq!(page.next_cursor.as_deref(), Some("next"));
    assert!(page.more);
    let [Opportunity::Skill(skill)] = page.opportunities.as_slice() else {
        panic!("expected a single skill opportunity, got {:?}", page.opportunities);
    };
    assert_eq!(skill.skill_description, "Add fractions");
    assert_eq!(skill.question_count, 30);
}

#[tokio::test]
async fn fetches_translation_and_voiceover_opportunities() {
    let server = MockServer::start().await;
    let body = json!({
        "opportunities": [{
            "id": "exp_1",
            "topic_name": "Fractions",
            "story_title": "Matthew Goes to the Bakery",
            "chapter_title": "What is a fraction?",
            "content_count": 20,
            "translation_counts": { "hi": 10 }
        }],
        "next_cursor": null,
        "more": false
    });

    for kind in ["translation", "voiceover"] {
        Mock::given(method("GET"))
            .and(path(format!("/opportunitiessummaryhandler/{kind}")))
            .and(query_param("language_code", "hi"))
            .and(query_param("cursor", "abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let pages = [
        client.fetch_translation_opportunities("hi", "abc").await.unwrap(),
        client.fetch_voiceover_opportunities("hi", "abc").await.unwrap(),
    ];

    for page in pages {
        assert_eq!(page.next_cursor, None);
        assert!(!page.more);
        let [Opportunity::Exploration(summary)] = page.opportunities.as_slice() else {
            panic!("expected a single exploration summary, got {:?}", page.opportunities);
        };
        assert_eq!(summary.heading(), "What is a fraction?");
        assert_eq!(summary.subheading(), "Fractions - Matthew Goes to the Bakery");
        assert_eq!(summary.translation_progress_percentage("hi"), 50.0);
    }
}

#[tokio::test]
async fn backend_error_status_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_skill_opportunities("").await.unwrap_err();

    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_skill_opportunities("").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn malformed_item_is_an_opportunity_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "opportunities": [{ "id": "exp_1", "topic_name": "Fractions" }],
            "more": false
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_translation_opportunities("hi", "")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Opportunity(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn feed_follows_cursors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/opportunitiessummaryhandler/voiceover"))
        .and(query_param("cursor", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "opportunities": [{
                "id": "exp_1",
                "topic_name": "T",
                "story_title": "S",
                "chapter_title": "C1",
                "content_count": 1
            }],
            "next_cursor": "page2",
            "more": true
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/opportunitiessummaryhandler/voiceover"))
        .and(query_param("cursor", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "opportunities": [{
                "id": "exp_2",
                "topic_name": "T",
                "story_title": "S",
                "chapter_title": "C2",
                "content_count": 1
            }],
            "next_cursor": "page3",
            "more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut feed = OpportunityFeed::voiceover("es");
    let mut ids = Vec::new();
    while let Some(page) = feed.next_page(&client).await.unwrap() {
        ids.extend(page.opportunities.iter().map(|o| o.id().to_string()));
    }

    assert_eq!(ids, ["exp_1", "exp_2"]);
    assert!(!feed.has_more());
}
