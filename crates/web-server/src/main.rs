// This main function is the entry point when running `cargo run -p web-server`.
// It loads `config.toml`, installs logging and hands off to the library.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = configuration::load_config()?;
    let _guard = configuration::init_tracing(&config.logging)?;

    let addr = config.server.socket_addr()?;
    let state = web_server::AppState::from_config(&config)?;
    web_server::run_server(addr, state).await
}
