//! DNPM Export - Exports locked DNPM clinical records to a remote MTB system.
//!
//! When a clinical history ("DNPM Klinik/Anamnese") or therapy plan
//! ("DNPM Therapieplan") form is locked, edit-locked or reorganised, the
//! exporter resolves the case number, loads the full clinical record of the
//! case, narrows it to the configured sections and POSTs it as JSON to the
//! configured endpoint.
//!
//! # Wiring
//!
//! ```ignore
//! let config = AppConfig::load()?;
//! telemetry::init(&config.logging)?;
//!
//! let transport = ReqwestTransport::new(config.export.timeout())?;
//! let analyzer = ExportAnalyzer::new(host, records, Arc::new(transport), config.export_settings());
//!
//! analyzer.analyze(&event).await;
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
