use crate::domain::command_sink::CommandSink;
use crate::domain::commands::ControlCommand;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument, warn};

/// Posts control commands as a form to the root of the server.
#[derive(Debug)]
pub struct HttpCommandSink {
    client: Client,
    endpoint: String,
}

impl HttpCommandSink {
    pub fn new(client: Client, server_url: &str) -> Self {
        HttpCommandSink {
            client,
            endpoint: format!("{}/", server_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CommandSink for HttpCommandSink {
    #[instrument(skip_all)]
    async fn send(&self, command: ControlCommand) {
        let request_result = self.client.post(&self.endpoint).form(&command).send().await;

        match request_result {
            Err(e) => {
                warn!(control_id = command.id, "⚠️ Unable to send control update: {:?}", e);
            }
            Ok(response) if !response.status().is_success() => {
                let status = response.status();
                let body = response.text().await;
                warn!(control_id = command.id, status_code = %status, "⚠️ Unable to send control update, the server rejected it. Response: {:?}", body);
            }
            Ok(_) => {
                info!(control_id = command.id, "🟢 Sent control update");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::control::Control;
    use mockito::Matcher;
    use rstest::rstest;
    use serde_json::json;
    use std::sync::Arc;

    #[rstest]
    #[case("http://panel.local", "http://panel.local/")]
    #[case("http://panel.local/", "http://panel.local/")]
    #[case("http://panel.local:8080//", "http://panel.local:8080/")]
    fn endpoint_is_the_server_root(#[case] url: &str, #[case] expected: &str) {
        let sink = HttpCommandSink::new(Client::new(), url);

        assert_eq!(sink.endpoint(), expected);
    }

    #[test_log::test(tokio::test)]
    async fn send_posts_the_id_as_a_form() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body("id=c1")
            .with_status(200)
            .expect(1)
            .create_async()
            .await;

        let sink = HttpCommandSink::new(Client::new(), &server.url());
        sink.send(ControlCommand::new("c1")).await;

        mock.assert_async().await;
    }

    #[test_log::test(tokio::test)]
    async fn send_encodes_reserved_characters() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::UrlEncoded("id".to_string(), "lamp 1&2".to_string()))
            .with_status(200)
            .create_async()
            .await;

        let sink = HttpCommandSink::new(Client::new(), &server.url());
        sink.send(ControlCommand::new("lamp 1&2")).await;

        mock.assert_async().await;
    }

    #[test_log::test(tokio::test)]
    async fn send_ignores_server_errors() {
        let mut server = mockito::Server::new_async().await;

        let mock = server.mock("POST", "/").with_status(500).with_body("boom").create_async().await;

        let sink = HttpCommandSink::new(Client::new(), &server.url());
        sink.send(ControlCommand::new("c1")).await;

        mock.assert_async().await;
    }

    #[test_log::test(tokio::test)]
    async fn send_ignores_unreachable_servers() {
        let sink = HttpCommandSink::new(Client::new(), "http://127.0.0.1:9");

        sink.send(ControlCommand::new("c1")).await;
    }

    #[test_log::test(tokio::test)]
    async fn control_posts_only_its_id_regardless_of_other_fields() {
        let mut server = mockito::Server::new_async().await;

        let mock = server.mock("POST", "/").match_body("id=c1").with_status(200).expect(2).create_async().await;

        let sink: Arc<dyn CommandSink> = Arc::new(HttpCommandSink::new(Client::new(), &server.url()));
        let control = Control::new(
            serde_json::from_value(json!({ "id": "c1", "type": "dimmer", "value": 50 })).unwrap(),
            sink,
        );

        control.send_updated_value_to_server().unwrap().await.unwrap();
        control.set_field("value", json!(10)).unwrap();
        control.send_updated_value_to_server().unwrap().await.unwrap();

        mock.assert_async().await;
    }
}
