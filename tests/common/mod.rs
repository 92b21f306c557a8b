//! Shared helpers: a recording model provider and an in-process server

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use feelsync::comfort::ComfortGenerator;
use feelsync::llm::{
    FinishReason, GenerateRequest, GenerateResponse, GenerationConfig, LlmError, LlmProvider,
};
use feelsync::models::DEFAULT_MAX_MOOD_CHARS;
use feelsync::routes::{configure_routes, AppContext};

type Reply = Box<dyn Fn() -> Result<GenerateResponse, LlmError> + Send + Sync>;

/// Provider that records every prompt and answers from a fixed script
pub struct MockProvider {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn replying(text: &'static str) -> Arc<Self> {
        Self::with_reply(move || {
            Ok(GenerateResponse {
                text: text.to_string(),
                finish_reason: FinishReason::Stop,
                usage: None,
            })
        })
    }

    pub fn failing(make_err: impl Fn() -> LlmError + Send + Sync + 'static) -> Arc<Self> {
        Self::with_reply(move || Err(make_err()))
    }

    pub fn with_reply(
        reply: impl Fn() -> Result<GenerateResponse, LlmError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            reply: Box::new(reply),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
        let prompt = request
            .messages
            .iter()
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts.lock().unwrap().push(prompt);
        (self.reply)()
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

pub fn app_context(provider: Arc<MockProvider>) -> AppContext {
    AppContext {
        generator: ComfortGenerator::new(provider, GenerationConfig::default()),
        max_mood_chars: DEFAULT_MAX_MOOD_CHARS,
    }
}

/// Serve the routes on a free local port and wait until it accepts connections
pub async fn spawn_server(ctx: AppContext) -> SocketAddr {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        listener.local_addr().expect("local addr")
    };

    let routes = configure_routes(ctx);
    tokio::spawn(warp::serve(routes).run(addr));

    for _ in 0..50 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return addr;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server on {} did not start", addr);
}
