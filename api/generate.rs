use recipe_gen_api::{clients::gemini::GeminiClient, http::handler::handle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Local runs pick up a .env; on the platform the variables are already set.
    let _ = dotenvy::dotenv();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_gen_api=info,generate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    run(handler).await
}

pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    Ok(handle(req, GeminiClient::from_env).await?)
}
