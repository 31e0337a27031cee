//! # triage-service
//!
//! gRPC service for symptom triage analysis.
//!
//! This crate provides a gRPC server that exposes the triage pipeline
//! implemented by the triage-engine crate: full analysis, symptom
//! extraction, and disease ranking. The server holds an immutable
//! [`TriageEngine`](triage_engine::TriageEngine) shared across requests;
//! no request mutates any state, so no locking is needed.

#![warn(missing_docs)]

#[allow(missing_docs)]
pub mod proto {
    //! Generated protobuf types.
    tonic::include_proto!("triage");
}

mod server;

pub use server::TriageServer;
