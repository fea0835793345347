//! Endpoints of the authenticated account.

use knightline_types::{Preferences, User};
use serde::Deserialize;

use crate::{LichessClient, RequestParams, Result};

#[derive(Deserialize)]
struct EmailResponse {
    email: String,
}

#[derive(Deserialize)]
struct PreferencesResponse {
    prefs: Preferences,
}

#[derive(Deserialize)]
struct KidModeResponse {
    kid: bool,
}

#[derive(Deserialize)]
struct OkResponse {
    ok: bool,
}

impl LichessClient {
    /// Returns the profile of the account owning the token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn my_profile(&self) -> Result<User> {
        self.fetch_json(RequestParams::get(&self.endpoints().account_profile))
            .await
    }

    /// Returns the email address of the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn my_email(&self) -> Result<String> {
        let response: EmailResponse = self
            .fetch_json(RequestParams::get(&self.endpoints().account_email))
            .await?;
        Ok(response.email)
    }

    /// Returns the UI preferences of the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn my_preferences(&self) -> Result<Preferences> {
        let response: PreferencesResponse = self
            .fetch_json(RequestParams::get(&self.endpoints().account_preferences))
            .await?;
        Ok(response.prefs)
    }

    /// Returns whether kid mode is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn my_kid_mode(&self) -> Result<bool> {
        let response: KidModeResponse = self
            .fetch_json(RequestParams::get(&self.endpoints().account_kid_mode))
            .await?;
        Ok(response.kid)
    }

    /// Enables or disables kid mode. Returns whether the server accepted it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn set_my_kid_mode(&self, enabled: bool) -> Result<bool> {
        let params = RequestParams::post(&self.endpoints().account_kid_mode)
            .query("v", enabled.to_string());
        let response: OkResponse = self.fetch_json(params).await?;
        Ok(response.ok)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::mock_client;

    async fn serve(server: &MockServer, verb: &str, route: &str, body: &str) {
        Mock::given(method(verb))
            .and(path(route))
            .and(header("authorization", "Bearer lip_me"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_my_profile() {
        let server = MockServer::start().await;
        serve(
            &server,
            "GET",
            "/api/account",
            r#"{"id": "georges", "username": "Georges", "online": true,
                "perfs": {"blitz": {"games": 2945, "rating": 1609, "rd": 60, "prog": -22, "prov": true}},
                "playTime": {"total": 3296897, "tv": 12134}}"#,
        )
        .await;

        let user = mock_client(&server.uri(), "lip_me").my_profile().await.unwrap();
        assert_eq!(user.id, "georges");
        assert!(user.online);
        assert_eq!(user.rating("blitz"), Some(1609));
        assert_eq!(user.play_time.total, 3_296_897);
    }

    #[tokio::test]
    async fn test_my_email() {
        let server = MockServer::start().await;
        serve(&server, "GET", "/api/account/email", r#"{"email": "abc@gmail.com"}"#).await;

        let email = mock_client(&server.uri(), "lip_me").my_email().await.unwrap();
        assert_eq!(email, "abc@gmail.com");
    }

    #[tokio::test]
    async fn test_my_preferences() {
        let server = MockServer::start().await;
        serve(
            &server,
            "GET",
            "/api/account/preferences",
            r#"{"prefs": {"dark": true, "theme": "blue", "pieceSet": "cburnett", "autoQueen": 2}}"#,
        )
        .await;

        let prefs = mock_client(&server.uri(), "lip_me")
            .my_preferences()
            .await
            .unwrap();
        assert!(prefs.dark);
        assert_eq!(prefs.theme, "blue");
        assert_eq!(prefs.piece_set, "cburnett");
        assert_eq!(prefs.auto_queen, 2);
    }

    #[tokio::test]
    async fn test_my_kid_mode() {
        let server = MockServer::start().await;
        serve(&server, "GET", "/api/account/kid", r#"{"kid": true}"#).await;

        assert!(mock_client(&server.uri(), "lip_me").my_kid_mode().await.unwrap());
    }

    #[tokio::test]
    async fn test_set_my_kid_mode() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/account/kid"))
            .and(query_param("v", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok": true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let accepted = mock_client(&server.uri(), "lip_me")
            .set_my_kid_mode(false)
            .await
            .unwrap();
        assert!(accepted);
    }
}
