// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for `HypixelClient`
//!
//! These tests use wiremock to stand in for the Hypixel API and check URL
//! construction, identifier resolution, and the handling of the `success` flag.

use api_client::{ApiFailure, ResolveError};
use external_apis::{HypixelClient, HypixelConfig, HypixelError, MojangClient, MojangConfig};
use serde_json::json;
use shared_types::{Endpoint, GuildLookup, Target};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param, query_param_is_missing},
};

use fixtures::*;

/// Every endpoint returns the successful body verbatim
#[tokio::test]
async fn all_endpoints_return_successful_body() {
    let mock_server = MockServer::start().await;
    let (client, _) = create_test_client(&mock_server);

    for &endpoint in Endpoint::all() {
        mount_endpoint(&mock_server, endpoint, 200, success_response(endpoint)).await;
    }

    for &endpoint in Endpoint::all() {
        let response = call_endpoint(&client, endpoint)
            .await
            .unwrap_or_else(|e| panic!("{endpoint} should succeed, got: {e:?}"));

        assert_eq!(
            response.into_inner(),
            success_response(endpoint),
            "response body should be passed through for {endpoint}"
        );
    }
}

/// Every endpoint surfaces the `cause` of an unsuccessful response
#[tokio::test]
async fn all_endpoints_surface_cause() {
    let mock_server = MockServer::start().await;
    let (client, _) = create_test_client(&mock_server);

    for &endpoint in Endpoint::all() {
        mount_endpoint(&mock_server, endpoint, 403, cause_response("X")).await;
    }

    for &endpoint in Endpoint::all() {
        let result = call_endpoint(&client, endpoint).await;

        match result {
            Err(HypixelError::Api(ApiFailure::Cause(cause))) => assert_eq!(cause, "X"),
            other => panic!("Expected Api cause error for {endpoint}, got: {other:?}"),
        }
    }
}

/// A non-string `cause` is surfaced as given
#[tokio::test]
async fn numeric_cause_surfaced() {
    let mock_server = MockServer::start().await;
    let (client, _) = create_test_client(&mock_server);

    mount_endpoint(
        &mock_server,
        Endpoint::Key,
        200,
        json!({"success": false, "cause": 42}),
    )
    .await;

    match client.get_key().await {
        Err(HypixelError::Api(ApiFailure::Cause(cause))) => assert_eq!(cause, json!(42)),
        other => panic!("Expected Api cause error, got: {other:?}"),
    }
}

/// Every endpoint surfaces the whole body when no `cause` is given
#[tokio::test]
async fn all_endpoints_surface_body_without_cause() {
    let mock_server = MockServer::start().await;
    let (client, _) = create_test_client(&mock_server);

    for &endpoint in Endpoint::all() {
        mount_endpoint(&mock_server, endpoint, 200, bare_failure_response()).await;
    }

    for &endpoint in Endpoint::all() {
        let result = call_endpoint(&client, endpoint).await;

        match result {
            Err(HypixelError::Api(ApiFailure::Response(body))) => {
                assert_eq!(body, bare_failure_response());
            }
            other => panic!("Expected Api response error for {endpoint}, got: {other:?}"),
        }
    }
}

/// UUID targets are sent verbatim without a name lookup
#[tokio::test]
async fn player_endpoints_by_uuid_skip_resolution() {
    let mock_server = MockServer::start().await;
    let (client, resolver) = create_test_client(&mock_server);

    for endpoint in [Endpoint::Player, Endpoint::Session, Endpoint::Friends] {
        Mock::given(method("GET"))
            .and(path(format!("/{}", endpoint.path())))
            .and(query_param("uuid", PLAYER_X_UUID))
            .and(query_param("key", TEST_API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_response(endpoint)))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let target = Target::uuid(PLAYER_X_UUID);
    client.get_player(&target).await.unwrap();
    client.get_session(&target).await.unwrap();
    client.get_friends(&target).await.unwrap();

    assert!(resolver.calls().is_empty());
    assert_eq!(
        received_queries(&mock_server).await,
        vec![format!("uuid={PLAYER_X_UUID}&key={TEST_API_KEY}"); 3]
    );
}

/// Name targets are resolved exactly once and the UUID is sent
#[tokio::test]
async fn player_endpoints_by_name_resolve_once() {
    let mock_server = MockServer::start().await;

    for endpoint in [Endpoint::Player, Endpoint::Session, Endpoint::Friends] {
        Mock::given(method("GET"))
            .and(path(format!("/{}", endpoint.path())))
            .and(query_param("uuid", NOTCH_UUID))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_response(endpoint)))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let target = Target::name("Notch");

    let (client, resolver) = create_test_client(&mock_server);
    client.get_player(&target).await.unwrap();
    assert_eq!(resolver.calls(), vec!["Notch".to_string()]);

    let (client, resolver) = create_test_client(&mock_server);
    client.get_session(&target).await.unwrap();
    assert_eq!(resolver.calls(), vec!["Notch".to_string()]);

    let (client, resolver) = create_test_client(&mock_server);
    client.get_friends(&target).await.unwrap();
    assert_eq!(resolver.calls(), vec!["Notch".to_string()]);
}

/// A failed name lookup is returned and no endpoint request is sent
#[tokio::test]
async fn resolution_failure_propagates() {
    let mock_server = MockServer::start().await;
    let (client, resolver) = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/player"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_response(Endpoint::Player)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = client.get_player(&Target::name("nobody_here")).await;

    match result {
        Err(HypixelError::Resolution(ResolveError::NotFound { name })) => {
            assert_eq!(name, "nobody_here");
        }
        other => panic!("Expected Resolution error, got: {other:?}"),
    }
    assert_eq!(resolver.calls(), vec!["nobody_here".to_string()]);
}

/// Guild name lookups send `byName` verbatim
#[tokio::test]
async fn find_guild_by_name() {
    let mock_server = MockServer::start().await;
    let (client, resolver) = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/findGuild"))
        .and(query_param("byName", GUILD_NAME))
        .and(query_param_is_missing("byUuid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_response(Endpoint::FindGuild)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .find_guild(&GuildLookup::from_tag("name", GUILD_NAME))
        .await
        .unwrap();

    assert_eq!(response.get("guild"), Some(&json!(GUILD_ID)));
    assert!(resolver.calls().is_empty());
    assert_eq!(
        received_queries(&mock_server).await,
        vec![format!("byName={GUILD_NAME}&key={TEST_API_KEY}")]
    );
}

/// Member UUID lookups send `byUuid` verbatim
#[tokio::test]
async fn find_guild_by_member_uuid() {
    let mock_server = MockServer::start().await;
    let (client, resolver) = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/findGuild"))
        .and(query_param("byUuid", PLAYER_X_UUID))
        .and(query_param_is_missing("byName"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_response(Endpoint::FindGuild)))
        .expect(1)
        .mount(&mock_server)
        .await;

    client
        .find_guild(&GuildLookup::from_tag("member", PLAYER_X_UUID))
        .await
        .unwrap();

    assert!(resolver.calls().is_empty());
}

/// Member name lookups resolve the name and send the UUID as `byUuid`
#[tokio::test]
async fn find_guild_by_member_name() {
    let mock_server = MockServer::start().await;
    let (client, resolver) = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/findGuild"))
        .and(query_param("byUuid", PLAYER_X_UUID))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_response(Endpoint::FindGuild)))
        .expect(1)
        .mount(&mock_server)
        .await;

    client
        .find_guild(&GuildLookup::from_tag("memberName", "PlayerX"))
        .await
        .unwrap();

    assert_eq!(resolver.calls(), vec!["PlayerX".to_string()]);
}

/// Unrecognized tags fall back to searching by member UUID
#[tokio::test]
async fn find_guild_unknown_tag_searches_by_uuid() {
    let mock_server = MockServer::start().await;
    let (client, resolver) = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/findGuild"))
        .and(query_param("byUuid", "SomeValue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_response(Endpoint::FindGuild)))
        .expect(1)
        .mount(&mock_server)
        .await;

    client
        .find_guild(&GuildLookup::from_tag("guildMaster", "SomeValue"))
        .await
        .unwrap();

    assert!(resolver.calls().is_empty());
}

/// Guild ids are sent verbatim as `id`
#[tokio::test]
async fn get_guild_by_id() {
    let mock_server = MockServer::start().await;
    let (client, resolver) = create_test_client(&mock_server);

    mount_endpoint(&mock_server, Endpoint::Guild, 200, success_response(Endpoint::Guild)).await;

    client.get_guild(GUILD_ID).await.unwrap();

    assert!(resolver.calls().is_empty());
    assert_eq!(
        received_queries(&mock_server).await,
        vec![format!("id={GUILD_ID}&key={TEST_API_KEY}")]
    );
}

/// Endpoints without a target only send the key
#[tokio::test]
async fn targetless_endpoints_send_only_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&mock_server)
        .await;

    let config = fixtures::create_test_config(mock_server.uri());
    let config = external_apis::HypixelConfig {
        api_key: "K".to_string(),
        ..config
    };
    let client = HypixelClient::with_resolver(config, RecordingResolver::new()).unwrap();

    client.get_boosters().await.unwrap();
    client.get_watchdog_stats().await.unwrap();
    client.get_leaderboards().await.unwrap();
    client.get_key().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let paths: Vec<_> = requests.iter().map(|r| r.url.path().to_string()).collect();
    assert_eq!(paths, vec!["/boosters", "/watchdogstats", "/leaderboards", "/key"]);
    for request in &requests {
        assert_eq!(request.url.query(), Some("key=K"));
    }
}

/// A body that is not JSON is a decode error
#[tokio::test]
async fn non_json_body_is_decode_error() {
    let mock_server = MockServer::start().await;
    let (client, _) = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/key"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let result = client.get_key().await;

    match result {
        Err(HypixelError::Json(_)) => {}
        other => panic!("Expected Json error, got: {other:?}"),
    }
}

/// A request that cannot reach the server is a transport error
#[tokio::test]
async fn unreachable_server_is_http_error() {
    // Bind and release a port so nothing is listening on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client =
        HypixelClient::with_resolver(create_test_config(uri), RecordingResolver::new()).unwrap();

    let result = client.get_boosters().await;

    match result {
        Err(HypixelError::Http(_)) => {}
        other => panic!("Expected Http error, got: {other:?}"),
    }
}

/// Transport errors never carry the API key
#[tokio::test]
async fn http_error_hides_api_key() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let config = HypixelConfig {
        base_url: uri,
        api_key: "SECRET-KEY-123".to_string(),
        ..Default::default()
    };
    let client = HypixelClient::with_resolver(config, RecordingResolver::new()).unwrap();

    let err = client.get_boosters().await.unwrap_err();

    assert!(matches!(err, HypixelError::Http(_)));
    assert!(!err.to_string().contains("SECRET-KEY-123"));
    assert!(!format!("{err:?}").contains("SECRET-KEY-123"));
}

/// Concurrent calls on one client do not interfere
#[tokio::test]
async fn concurrent_calls_share_client() {
    let mock_server = MockServer::start().await;
    let (client, resolver) = create_test_client(&mock_server);

    for &endpoint in Endpoint::all() {
        mount_endpoint(&mock_server, endpoint, 200, success_response(endpoint)).await;
    }

    let notch = Target::name("Notch");
    let member = GuildLookup::ByMemberName("PlayerX".to_string());
    let (player, boosters, guild) = tokio::join!(
        client.get_player(&notch),
        client.get_boosters(),
        client.find_guild(&member),
    );

    assert_eq!(player.unwrap().into_inner(), success_response(Endpoint::Player));
    assert_eq!(boosters.unwrap().into_inner(), success_response(Endpoint::Boosters));
    assert_eq!(guild.unwrap().into_inner(), success_response(Endpoint::FindGuild));

    let mut calls = resolver.calls();
    calls.sort();
    assert_eq!(calls, vec!["Notch".to_string(), "PlayerX".to_string()]);
}

/// Names are resolved through the Mojang profile API end to end
#[tokio::test]
async fn player_by_name_through_mojang() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/profiles/minecraft/Notch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mojang_profile(NOTCH_UUID, "Notch")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/player"))
        .and(query_param("uuid", NOTCH_UUID))
        .and(query_param("key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_response(Endpoint::Player)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mojang = MojangClient::new(MojangConfig {
        base_url: mock_server.uri(),
        ..Default::default()
    })
    .unwrap();
    let client = HypixelClient::with_resolver(create_test_config(mock_server.uri()), mojang).unwrap();

    let response = client
        .get_player(&Target::from_tag(Some("name"), "Notch").unwrap())
        .await
        .unwrap();

    assert_eq!(response.get("player").unwrap()["displayname"], "Notch");
}

/// Unknown Mojang names surface as resolution errors
#[tokio::test]
async fn unknown_name_through_mojang() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/profiles/minecraft/nobody_here"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mojang = MojangClient::new(MojangConfig {
        base_url: mock_server.uri(),
        ..Default::default()
    })
    .unwrap();
    let client = HypixelClient::with_resolver(create_test_config(mock_server.uri()), mojang).unwrap();

    let result = client
        .find_guild(&GuildLookup::ByMemberName("nobody_here".to_string()))
        .await;

    match result {
        Err(HypixelError::Resolution(err)) => assert!(err.is_not_found()),
        other => panic!("Expected Resolution error, got: {other:?}"),
    }
}
