use axum::serve::ListenerExt;
use songbook::{build, config, init_tracing, migration, App};

#[tokio::main]
async fn main() {
    let config = config::Config::default();
    init_tracing(&config.log).expect("Could not initialize tracing");
    tracing::info!("{config:#?}");

    migration::run(&config.database.url).await;
    let app = App::new(&config).expect("Could not build song details provider");

    let listener = tokio::net::TcpListener::bind(config.server.to_socket_addr())
        .await
        .expect("Could not bind server address")
        .tap_io(|tcp| {
            if let Err(error) = tcp.set_nodelay(true) {
                tracing::warn!(%error, "could not set TCP_NODELAY");
            }
        });
    tracing::info!(address = %config.server.to_socket_addr(), "listening");
    axum::serve(listener, build(app)).await.expect("Could not serve");
}
