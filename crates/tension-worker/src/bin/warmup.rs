//! Eager preload check.
//!
//! Builds the full feature-resource registry from the configured data root
//! and exits. Exit code 0 means every resource loaded and the classifier is
//! ready for concurrent inference; any failure exits nonzero before a
//! consumer could have observed partial state.

use tension_core::Config;
use tension_worker::FeatureResourceRegistry;
use tracing_subscriber::EnvFilter;

fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(2);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match FeatureResourceRegistry::load(&config) {
        Ok(registry) => {
            let lexicons = registry.lexicons();
            tracing::info!(
                classes = registry.classifier().num_classes(),
                affect_ratings = lexicons.affect_ratings().len(),
                nrc_emotion = lexicons.nrc_emotion().len(),
                sentiment_polarity = lexicons.sentiment_polarity().len(),
                afinn = lexicons.afinn().len(),
                stopwords = lexicons.stopwords().len(),
                "warmup complete"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "preload failed");
            std::process::exit(1);
        }
    }
}
