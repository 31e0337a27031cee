//! Triage gRPC server binary.

use triage_engine::{load_kb, KnowledgeBase, TriageEngine};
use triage_service::proto::triage_service_server::TriageServiceServer;
use triage_service::TriageServer;
use tonic::transport::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 50061;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Load the knowledge base: from TRIAGE_KB_DIR if set, built-in otherwise
    let kb = match std::env::var("TRIAGE_KB_DIR") {
        Ok(dir) => {
            tracing::info!("Loading knowledge base from: {}", dir);
            load_kb(&dir)?
        }
        Err(_) => {
            tracing::info!("TRIAGE_KB_DIR not set, using built-in knowledge base");
            KnowledgeBase::builtin()
        }
    };

    tracing::info!(
        "Knowledge base ready: {} symptoms, {} diseases, {} specialist mappings",
        kb.symptom_count(),
        kb.disease_count(),
        kb.specialist_mapping_count()
    );

    // Create server
    let server = TriageServer::new(TriageEngine::new(kb));

    // Get port from env or use default
    let port = std::env::var("TRIAGE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = format!("[::1]:{}", port).parse()?;
    tracing::info!("Starting triage gRPC server on {}", addr);

    Server::builder()
        .add_service(TriageServiceServer::new(server))
        .serve(addr)
        .await?;

    Ok(())
}
