// ==========================================
// Siparis Converter - engine layer
// ==========================================
// Responsibility: normalization, matching and aggregation rules
// ==========================================

pub mod aggregator;
pub mod brand_rules;
pub mod converter;
pub mod location;
pub mod matcher;
pub mod normalizer;
pub mod projector;

pub use aggregator::Aggregator;
pub use brand_rules::{BrandRule, CodeSource, LocationRule, QuantitySource, REGISTRY};
pub use converter::ConversionJob;
pub use matcher::Matcher;
pub use normalizer::{adjusted_code, normalize_code};
pub use projector::ColumnProjector;
