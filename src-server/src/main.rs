#[tokio::main]
async fn main() {
    if let Err(e) = kanban_board_lib::run().await {
        tracing::error!("Server stopped: {}", e);
        eprintln!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
