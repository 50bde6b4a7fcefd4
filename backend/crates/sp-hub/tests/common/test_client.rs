use axum_test::{TestServer, TestWebSocket, WsMessage};

/// WebSocket test client wrapper
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    /// Connect to the WebSocket endpoint
    pub async fn connect(server: &TestServer) -> Self {
        let ws = server.get_websocket("/ws").await.into_websocket().await;

        Self { ws }
    }

    /// Connect with a browser `Origin` header
    pub async fn connect_from(server: &TestServer, origin: &str) -> Self {
        let ws = server
            .get_websocket("/ws")
            .add_header("Origin", origin)
            .await
            .into_websocket()
            .await;

        Self { ws }
    }

    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    pub async fn receive_text(&mut self) -> String {
        self.ws.receive_text().await
    }

    pub async fn receive_message(&mut self) -> WsMessage {
        self.ws.receive_message().await
    }

    /// Close the WebSocket connection
    pub async fn close(self) {
        self.ws.close().await;
    }
}

/// Connect several clients (helper for broadcast tests)
pub async fn connect_clients(server: &TestServer, count: usize) -> Vec<WsTestClient> {
    let mut clients = Vec::with_capacity(count);
    for _ in 0..count {
        clients.push(WsTestClient::connect(server).await);
    }
    clients
}
